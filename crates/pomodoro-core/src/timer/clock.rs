//! Clock source seam.
//!
//! The session never sleeps or spawns anything. It arms a [`Clock`] when a
//! phase starts or resumes and disarms it on pause, stop and completion. The
//! owner of the clock delivers one `PomodoroSession::tick()` per firing.

use std::time::Duration;

/// Interval between ticks while a countdown is running.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub trait Clock {
    /// Begin firing every `interval`. Re-arming restarts the interval.
    fn arm(&mut self, interval: Duration);

    /// Stop firing. No-op when already disarmed.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;
}

/// A clock that never fires on its own; the caller ticks the session by hand.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    interval: Option<Duration>,
    arm_count: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// How many times the clock has been armed.
    pub fn arm_count(&self) -> u64 {
        self.arm_count
    }
}

impl Clock for ManualClock {
    fn arm(&mut self, interval: Duration) {
        self.interval = Some(interval);
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}
