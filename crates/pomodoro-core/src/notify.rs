//! Notification sink seam.
//!
//! Alerts fire once per completed phase, right after the clock is disarmed.
//! The sink decides what an alert is (a terminal bell, a sound, nothing).

use crate::timer::Phase;

pub trait Notifier {
    fn alert(&mut self, completed: Phase);
}

/// Discards alerts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn alert(&mut self, _completed: Phase) {}
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn alert(&mut self, completed: Phase) {
        (**self).alert(completed);
    }
}
