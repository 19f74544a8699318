//! Line commands accepted by `pomodoro run`.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Start,
    Pause,
    Stop,
    Work(u32),
    Break(u32),
    Long(u32),
    Persist(bool),
    Status,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ParseInputError(String);

pub const HELP: &str = "\
commands:
  start | s          start the next phase, or resume after pause
  pause | p          pause the running countdown
  stop  | x          stop and return to idle
  work <min>         set work duration
  break <min>        set short break duration
  long <min>         set long break duration
  persist on|off     keep settings after exit
  status             show current state
  help               show this help
  quit | q           exit";

fn minutes(arg: Option<&str>, cmd: &str) -> Result<u32, ParseInputError> {
    let arg = arg.ok_or_else(|| ParseInputError(format!("usage: {cmd} <minutes>")))?;
    arg.parse()
        .map_err(|_| ParseInputError(format!("'{arg}' is not a number of minutes")))
}

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words
            .next()
            .ok_or_else(|| ParseInputError("empty command".into()))?
            .to_ascii_lowercase();
        let arg = words.next();

        let input = match cmd.as_str() {
            "start" | "s" => Input::Start,
            "pause" | "p" => Input::Pause,
            "stop" | "x" => Input::Stop,
            "work" => Input::Work(minutes(arg, "work")?),
            "break" => Input::Break(minutes(arg, "break")?),
            "long" => Input::Long(minutes(arg, "long")?),
            "persist" => match arg {
                Some("on" | "true" | "yes") => Input::Persist(true),
                Some("off" | "false" | "no") => Input::Persist(false),
                _ => return Err(ParseInputError("usage: persist on|off".into())),
            },
            "status" => Input::Status,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            other => return Err(ParseInputError(format!("unknown command '{other}' (try 'help')"))),
        };
        Ok(input)
    }
}
