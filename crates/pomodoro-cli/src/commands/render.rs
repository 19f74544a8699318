//! Text and JSON rendering of session events.

use std::io::{self, Write};

use pomodoro_core::{ClockFace, Event, Phase};

fn next_label(next: Phase) -> &'static str {
    match next {
        Phase::LongBreak => "(Long break next)",
        Phase::ShortBreak => "(Break next)",
        Phase::Working | Phase::Idle => "(Work next)",
    }
}

/// One line of text for an event. Ticks are handled by [`Printer`].
pub fn describe(event: &Event) -> String {
    match event {
        Event::PhaseChanged {
            phase,
            duration_secs,
            next_phase,
            ..
        } => format!(
            "{phase} {} {}",
            ClockFace::from(*duration_secs),
            next_label(*next_phase)
        ),
        Event::Tick { remaining_secs, .. } => ClockFace::from(*remaining_secs).to_string(),
        Event::PhaseCompleted {
            phase: Phase::Working,
            total_pomodoros,
            session_pomodoros,
            ..
        } => format!(
            "Pomodoro done. (total {total_pomodoros}, this session {session_pomodoros})"
        ),
        Event::PhaseCompleted { .. } => "Break done.".to_string(),
        Event::PhaseStopped { phase, .. } if phase.is_break() => "Break stopped.".to_string(),
        Event::PhaseStopped { .. } => "Work stopped.".to_string(),
        Event::Paused { remaining_secs, .. } => {
            format!("Paused at {}", ClockFace::from(*remaining_secs))
        }
        Event::Resumed { remaining_secs, .. } => {
            format!("Resumed at {}", ClockFace::from(*remaining_secs))
        }
        Event::StateSnapshot {
            phase,
            running,
            paused,
            remaining_secs,
            next_phase,
            total_pomodoros,
            session_pomodoros,
            ..
        } => {
            let status = if *running {
                "running"
            } else if *paused {
                "paused"
            } else {
                "stopped"
            };
            format!(
                "{phase} {} [{status}] {} pomodoros: total {total_pomodoros}, this session {session_pomodoros}",
                ClockFace::from(*remaining_secs),
                next_label(*next_phase),
            )
        }
    }
}

/// Writes events either as text (ticks redraw one line in place) or as one
/// JSON object per line.
pub struct Printer<W: Write> {
    out: W,
    json: bool,
    mid_line: bool,
    phase: Phase,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            mid_line: false,
            phase: Phase::Idle,
        }
    }

    pub fn event(&mut self, event: &Event) -> io::Result<()> {
        if let Event::PhaseChanged { phase, .. } = event {
            self.phase = *phase;
        }

        if self.json {
            let line = serde_json::to_string(event).map_err(io::Error::other)?;
            writeln!(self.out, "{line}")?;
        } else if let Event::Tick { .. } = event {
            write!(self.out, "\r{} {}  ", self.phase, describe(event))?;
            self.mid_line = true;
        } else {
            self.line(&describe(event))?;
        }
        self.out.flush()
    }

    /// Free-form message (help, confirmations, input errors).
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        if self.json {
            let line = serde_json::json!({ "type": "notice", "message": message });
            writeln!(self.out, "{line}")?;
        } else {
            self.line(message)?;
        }
        self.out.flush()
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if self.mid_line {
            writeln!(self.out)?;
            self.mid_line = false;
        }
        self.out.flush()
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        if self.mid_line {
            writeln!(self.out)?;
            self.mid_line = false;
        }
        writeln!(self.out, "{text}")
    }
}
