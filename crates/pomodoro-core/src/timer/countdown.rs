//! Countdown arithmetic for a single phase.
//!
//! Remaining time is one integer number of seconds. Minutes and seconds only
//! exist at the presentation edge via [`split_clock`] / [`ClockFace`], so no
//! borrow-and-wrap logic is needed when ticking.

use std::fmt;

use serde::Serialize;

/// Remaining seconds after one tick. Never underflows.
pub fn next_remaining(remaining_secs: u64) -> u64 {
    remaining_secs.saturating_sub(1)
}

/// Split remaining seconds into `(minutes, seconds)` for display.
pub fn split_clock(remaining_secs: u64) -> (u64, u64) {
    (remaining_secs / 60, remaining_secs % 60)
}

/// A `m:ss` clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockFace {
    pub minutes: u64,
    pub seconds: u64,
}

impl From<u64> for ClockFace {
    fn from(remaining_secs: u64) -> Self {
        let (minutes, seconds) = split_clock(remaining_secs);
        Self { minutes, seconds }
    }
}

impl fmt::Display for ClockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Countdown state of one phase instance.
///
/// `duration_secs` is fixed at construction; `remaining_secs` only moves
/// down, from `duration_secs` to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    duration_secs: u64,
    remaining_secs: u64,
}

impl Countdown {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            duration_secs,
            remaining_secs: duration_secs,
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Seconds already spent in this phase, for progress indicators.
    pub fn elapsed_secs(&self) -> u64 {
        self.duration_secs.saturating_sub(self.remaining_secs)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// 0.0 .. 1.0 progress within the phase.
    pub fn progress(&self) -> f64 {
        if self.duration_secs == 0 {
            return 1.0;
        }
        self.elapsed_secs() as f64 / self.duration_secs as f64
    }

    pub fn clock_face(&self) -> ClockFace {
        ClockFace::from(self.remaining_secs)
    }

    /// Advance one second. Returns true when this tick reached zero.
    pub fn tick(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.remaining_secs = next_remaining(self.remaining_secs);
        self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_clock_matches_minutes_and_seconds() {
        assert_eq!(split_clock(1500), (25, 0));
        assert_eq!(split_clock(1499), (24, 59));
        assert_eq!(split_clock(59), (0, 59));
        assert_eq!(split_clock(0), (0, 0));
    }

    #[test]
    fn clock_face_pads_seconds() {
        assert_eq!(ClockFace::from(1500).to_string(), "25:00");
        assert_eq!(ClockFace::from(65).to_string(), "1:05");
        assert_eq!(ClockFace::from(0).to_string(), "0:00");
    }

    #[test]
    fn next_remaining_saturates() {
        assert_eq!(next_remaining(10), 9);
        assert_eq!(next_remaining(0), 0);
    }

    #[test]
    fn tick_reports_completion_once() {
        let mut countdown = Countdown::new(2);
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_secs(), 1);
        assert!(countdown.tick());
        assert!(countdown.is_finished());
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn elapsed_stays_within_duration() {
        let mut countdown = Countdown::new(3);
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.elapsed_secs(), 3);
        assert_eq!(countdown.progress(), 1.0);
    }

    #[test]
    fn elapsed_and_progress() {
        let mut countdown = Countdown::new(300);
        for _ in 0..75 {
            countdown.tick();
        }
        assert_eq!(countdown.elapsed_secs(), 75);
        assert_eq!(countdown.remaining_secs(), 225);
        assert!((countdown.progress() - 0.25).abs() < f64::EPSILON);
        assert_eq!(countdown.clock_face().to_string(), "3:45");
    }
}
