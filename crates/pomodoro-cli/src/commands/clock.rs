//! Real clock source backed by a tokio interval.

use std::time::Duration;

use pomodoro_core::Clock;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Must be armed from inside a tokio runtime.
#[derive(Debug, Default)]
pub struct IntervalClock {
    interval: Option<Interval>,
}

impl IntervalClock {
    /// Resolves at the next firing. Pending forever while disarmed.
    pub async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Clock for IntervalClock {
    fn arm(&mut self, period: Duration) {
        // First firing one full period from now, not immediately.
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}
