//! # Pomodoro Core Library
//!
//! This library provides the core logic for the Pomodoro work/break cycle.
//! The terminal front-end in `pomodoro-cli` is a thin presentation layer over
//! the same types.
//!
//! ## Architecture
//!
//! - **Session**: an explicitly owned state machine that decides the next
//!   phase, tracks pomodoro counters and reacts to countdown completion
//! - **Countdown**: pure remaining-seconds arithmetic and clock-face formatting
//! - **Clock**: the seam to the periodic tick source; the session arms and
//!   disarms it, the caller delivers `tick()` calls while it is armed
//! - **Storage**: the flat JSON settings record, loaded at startup and
//!   saved or cleared at shutdown
//!
//! ## Key Components
//!
//! - [`PomodoroSession`]: Core session state machine
//! - [`Countdown`]: Remaining time within one phase
//! - [`Configuration`]: Durations, cumulative counter and persist flag
//! - [`SettingsStore`]: Settings persistence

pub mod config;
pub mod error;
pub mod events;
pub mod notify;
pub mod storage;
pub mod timer;

pub use config::Configuration;
pub use error::{CoreError, SettingsError, ValidationError};
pub use events::Event;
pub use notify::{Notifier, SilentNotifier};
pub use storage::{PersistOutcome, SettingsStore};
pub use timer::{Clock, ClockFace, Countdown, ManualClock, Phase, PomodoroSession, SessionState};
