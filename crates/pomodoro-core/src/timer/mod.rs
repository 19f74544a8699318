mod clock;
mod countdown;
mod phase;
mod session;

pub use clock::{Clock, ManualClock, TICK_INTERVAL};
pub use countdown::{next_remaining, split_clock, ClockFace, Countdown};
pub use phase::{Phase, SessionState};
pub use session::{PomodoroSession, LONG_BREAK_EVERY};
