use std::fmt;

use serde::{Deserialize, Serialize};

use super::countdown::Countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Working,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_break(self) -> bool {
        matches!(self, Phase::ShortBreak | Phase::LongBreak)
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Idle => "Idle",
            Phase::Working => "Work",
            Phase::ShortBreak => "Break",
            Phase::LongBreak => "Long break",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exactly one phase is current. Active phases own their countdown; `Idle`
/// has neither duration nor remaining time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum SessionState {
    Idle,
    Working(Countdown),
    ShortBreak(Countdown),
    LongBreak(Countdown),
}

impl SessionState {
    pub(crate) fn enter(phase: Phase, duration_secs: u64) -> Self {
        let countdown = Countdown::new(duration_secs);
        match phase {
            Phase::Idle => SessionState::Idle,
            Phase::Working => SessionState::Working(countdown),
            Phase::ShortBreak => SessionState::ShortBreak(countdown),
            Phase::LongBreak => SessionState::LongBreak(countdown),
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            SessionState::Idle => Phase::Idle,
            SessionState::Working(_) => Phase::Working,
            SessionState::ShortBreak(_) => Phase::ShortBreak,
            SessionState::LongBreak(_) => Phase::LongBreak,
        }
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        match self {
            SessionState::Idle => None,
            SessionState::Working(c) | SessionState::ShortBreak(c) | SessionState::LongBreak(c) => {
                Some(c)
            }
        }
    }

    pub(crate) fn countdown_mut(&mut self) -> Option<&mut Countdown> {
        match self {
            SessionState::Idle => None,
            SessionState::Working(c) | SessionState::ShortBreak(c) | SessionState::LongBreak(c) => {
                Some(c)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_carries_full_countdown() {
        let state = SessionState::enter(Phase::LongBreak, 900);
        assert_eq!(state.phase(), Phase::LongBreak);
        let countdown = state.countdown().unwrap();
        assert_eq!(countdown.duration_secs(), 900);
        assert_eq!(countdown.remaining_secs(), 900);
    }

    #[test]
    fn idle_has_no_countdown() {
        assert!(SessionState::Idle.countdown().is_none());
        assert!(SessionState::enter(Phase::Idle, 60).countdown().is_none());
    }

    #[test]
    fn break_phases() {
        assert!(Phase::ShortBreak.is_break());
        assert!(Phase::LongBreak.is_break());
        assert!(!Phase::Working.is_break());
        assert!(!Phase::Idle.is_break());
    }
}
