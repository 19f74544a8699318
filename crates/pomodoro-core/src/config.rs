//! In-memory session configuration.
//!
//! Holds the three phase durations (seconds), the cumulative pomodoro count
//! and the flag deciding whether all of it survives a restart. Durations are
//! edited in whole minutes; a change only affects the next phase entered.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

pub const DEFAULT_WORK_MIN: u32 = 25;
pub const DEFAULT_BREAK_MIN: u32 = 5;
pub const DEFAULT_LONG_BREAK_MIN: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Working phase length in seconds.
    pub work_secs: u64,
    /// Short break length in seconds.
    pub break_secs: u64,
    /// Long break length in seconds.
    pub long_break_secs: u64,
    /// Completed working phases across all runs.
    pub total_pomodoros: u64,
    /// Save on shutdown when true, remove the record when false.
    pub persist: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            work_secs: minutes_to_secs(DEFAULT_WORK_MIN),
            break_secs: minutes_to_secs(DEFAULT_BREAK_MIN),
            long_break_secs: minutes_to_secs(DEFAULT_LONG_BREAK_MIN),
            total_pomodoros: 0,
            persist: false,
        }
    }
}

impl Configuration {
    pub fn set_work_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.work_secs = validated("work", minutes)?;
        Ok(())
    }

    pub fn set_break_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.break_secs = validated("break", minutes)?;
        Ok(())
    }

    pub fn set_long_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.long_break_secs = validated("long", minutes)?;
        Ok(())
    }

    pub fn set_persist(&mut self, persist: bool) {
        self.persist = persist;
    }

    /// Replace zero durations with the defaults. A phase of zero seconds
    /// would never count down to completion.
    pub fn with_positive_durations(self) -> Self {
        let defaults = Self::default();
        Self {
            work_secs: positive_or("work", self.work_secs, defaults.work_secs),
            break_secs: positive_or("break", self.break_secs, defaults.break_secs),
            long_break_secs: positive_or("long", self.long_break_secs, defaults.long_break_secs),
            ..self
        }
    }
}

fn positive_or(field: &str, secs: u64, fallback: u64) -> u64 {
    if secs == 0 {
        tracing::warn!(field, fallback, "zero duration; using default");
        fallback
    } else {
        secs
    }
}

fn minutes_to_secs(minutes: u32) -> u64 {
    u64::from(minutes).saturating_mul(60)
}

fn validated(field: &'static str, minutes: u32) -> Result<u64, ValidationError> {
    if minutes == 0 {
        tracing::warn!(field, minutes, "rejecting non-positive duration");
        return Err(ValidationError::InvalidDuration { field, minutes });
    }
    Ok(minutes_to_secs(minutes))
}
