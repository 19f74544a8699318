use std::io::{self, Write};

use clap::Args;
use pomodoro_core::{Notifier, Phase, PomodoroSession, SettingsStore};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::clock::IntervalClock;
use super::input::{Input, HELP};
use super::render::Printer;

#[derive(Args)]
pub struct RunArgs {
    /// Emit one JSON object per event instead of text
    #[arg(long)]
    json: bool,
    /// Do not ring the terminal bell when a phase ends
    #[arg(long)]
    no_bell: bool,
}

/// Rings the terminal bell on stderr, keeping stdout free for events.
pub struct BellNotifier {
    enabled: bool,
}

impl Notifier for BellNotifier {
    fn alert(&mut self, _completed: Phase) {
        if self.enabled {
            let mut out = io::stderr();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

type Session = PomodoroSession<IntervalClock, BellNotifier>;

enum Step {
    Line(Option<String>),
    Tick,
}

pub fn run(store: SettingsStore, args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(session_loop(store, args));
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();
    result
}

async fn session_loop(
    store: SettingsStore,
    args: RunArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = store.load_or_default();
    let notifier = BellNotifier {
        enabled: !args.no_bell,
    };
    let mut session = PomodoroSession::new(config, IntervalClock::default(), notifier);
    let mut printer = Printer::new(io::stdout(), args.json);

    let driven = drive(&mut session, &mut printer).await;
    let finished = printer.finish();

    // Shutdown persistence runs however the loop ended.
    let config = session.into_config();
    match store.persist_on_shutdown(&config) {
        Ok(outcome) => {
            tracing::info!(?outcome, path = %store.path().display(), "settings persisted")
        }
        Err(e) => tracing::warn!("{e}"),
    }
    driven?;
    finished?;
    Ok(())
}

/// Feed stdin commands and clock ticks into the session until quit or EOF.
async fn drive<W: Write>(session: &mut Session, printer: &mut Printer<W>) -> io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).split(b'\n');

    printer.event(&session.snapshot())?;

    loop {
        let step = tokio::select! {
            line = lines.next_segment() => {
                Step::Line(line?.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
            }
            () = session.clock_mut().next_tick() => Step::Tick,
            _ = tokio::signal::ctrl_c() => Step::Line(None),
        };

        match step {
            Step::Tick => {
                for event in session.tick() {
                    printer.event(&event)?;
                }
            }
            Step::Line(None) => break,
            Step::Line(Some(line)) if line.trim().is_empty() => {}
            Step::Line(Some(line)) => match line.parse::<Input>() {
                Ok(Input::Quit) => break,
                Ok(input) => apply(session, input, printer)?,
                Err(e) => printer.notice(&e.to_string())?,
            },
        }
    }
    Ok(())
}

fn apply<W: Write>(session: &mut Session, input: Input, printer: &mut Printer<W>) -> io::Result<()> {
    let event = match input {
        Input::Start => session.start(),
        Input::Pause => session.pause(),
        Input::Stop => session.stop(),
        Input::Status => Some(session.snapshot()),
        Input::Work(minutes) => {
            return confirm(printer, "work", minutes, session.set_work_duration(minutes))
        }
        Input::Break(minutes) => {
            return confirm(printer, "break", minutes, session.set_break_duration(minutes))
        }
        Input::Long(minutes) => {
            return confirm(printer, "long break", minutes, session.set_long_duration(minutes))
        }
        Input::Persist(persist) => {
            session.set_persist(persist);
            let message = if persist {
                "settings will be saved on exit"
            } else {
                "settings will be removed on exit"
            };
            return printer.notice(message);
        }
        Input::Help => return printer.notice(HELP),
        Input::Quit => None,
    };

    match event {
        Some(event) => printer.event(&event),
        None => Ok(()),
    }
}

fn confirm<W: Write, E: std::fmt::Display>(
    printer: &mut Printer<W>,
    what: &str,
    minutes: u32,
    result: Result<(), E>,
) -> io::Result<()> {
    match result {
        Ok(()) => printer.notice(&format!("{what} set to {minutes} min (applies to the next phase)")),
        Err(e) => printer.notice(&e.to_string()),
    }
}
