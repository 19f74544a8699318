use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Phase;

/// Every state change in the session produces an Event.
/// The presentation layer renders them; nothing in the core consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A new phase was entered at full duration.
    PhaseChanged {
        phase: Phase,
        duration_secs: u64,
        /// What the following `start()` will enter.
        next_phase: Phase,
        at: DateTime<Utc>,
    },
    Tick {
        remaining_secs: u64,
        elapsed_secs: u64,
        at: DateTime<Utc>,
    },
    PhaseCompleted {
        phase: Phase,
        total_pomodoros: u64,
        session_pomodoros: u64,
        at: DateTime<Utc>,
    },
    PhaseStopped {
        phase: Phase,
        at: DateTime<Utc>,
    },
    Paused {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    Resumed {
        phase: Phase,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        phase: Phase,
        running: bool,
        paused: bool,
        duration_secs: u64,
        remaining_secs: u64,
        next_phase: Phase,
        total_pomodoros: u64,
        session_pomodoros: u64,
        at: DateTime<Utc>,
    },
}
