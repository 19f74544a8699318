//! Pomodoro session state machine.
//!
//! One owned value per application session. It does not keep time itself:
//! it arms a [`Clock`] and expects `tick()` once per firing.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Working -> (ShortBreak | LongBreak) -> Working -> ...
//!   ^                       |
//!   +------- stop() --------+
//! ```
//!
//! A phase that counts down to zero stays current (clock disarmed) until the
//! next `start()` derives the following phase from it.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = PomodoroSession::new(config, clock, notifier);
//! session.start();
//! // Once per clock firing:
//! session.tick(); // Includes Event::PhaseCompleted when the phase ends
//! ```

use chrono::Utc;

use super::clock::{Clock, TICK_INTERVAL};
use super::countdown::Countdown;
use super::phase::{Phase, SessionState};
use crate::config::Configuration;
use crate::error::ValidationError;
use crate::events::Event;
use crate::notify::Notifier;

/// Every n-th completed pomodoro earns a long break.
pub const LONG_BREAK_EVERY: u64 = 4;

#[derive(Debug)]
pub struct PomodoroSession<C: Clock, N: Notifier> {
    config: Configuration,
    clock: C,
    notifier: N,
    state: SessionState,
    paused: bool,
    /// Completed working phases since this session was created. Never persisted.
    session_pomodoros: u64,
}

impl<C: Clock, N: Notifier> PomodoroSession<C, N> {
    /// Create an idle session. The clock is disarmed if it was left armed,
    /// and zero durations in `config` are replaced by the defaults.
    pub fn new(config: Configuration, mut clock: C, notifier: N) -> Self {
        clock.disarm();
        Self {
            config: config.with_positive_durations(),
            clock,
            notifier,
            state: SessionState::Idle,
            paused: false,
            session_pomodoros: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.state.countdown()
    }

    /// Remaining seconds in the current phase; 0 when idle.
    pub fn remaining_secs(&self) -> u64 {
        self.countdown().map(Countdown::remaining_secs).unwrap_or(0)
    }

    /// Elapsed seconds in the current phase; 0 when idle.
    pub fn elapsed_secs(&self) -> u64 {
        self.countdown().map(Countdown::elapsed_secs).unwrap_or(0)
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_armed()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn session_pomodoros(&self) -> u64 {
        self.session_pomodoros
    }

    pub fn total_pomodoros(&self) -> u64 {
        self.config.total_pomodoros
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access for drivers that await the clock's next firing.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// The phase that follows the current one. While a working phase is
    /// still counting down, its own completion is already taken into account.
    pub fn next_phase(&self) -> Phase {
        match self.state.phase() {
            Phase::Working => {
                let finished = self.countdown().map_or(true, Countdown::is_finished);
                if finished {
                    self.break_after_work(self.session_pomodoros)
                } else {
                    self.break_after_work(self.session_pomodoros + 1)
                }
            }
            _ => Phase::Working,
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            phase: self.phase(),
            running: self.is_running(),
            paused: self.paused,
            duration_secs: self.countdown().map(Countdown::duration_secs).unwrap_or(0),
            remaining_secs: self.remaining_secs(),
            next_phase: self.next_phase(),
            total_pomodoros: self.config.total_pomodoros,
            session_pomodoros: self.session_pomodoros,
            at: Utc::now(),
        }
    }

    /// Hand the final configuration back for shutdown persistence.
    pub fn into_config(mut self) -> Configuration {
        self.clock.disarm();
        self.config
    }

    // ── Configuration ────────────────────────────────────────────────

    pub fn set_work_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.config.set_work_duration(minutes)
    }

    pub fn set_break_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.config.set_break_duration(minutes)
    }

    pub fn set_long_duration(&mut self, minutes: u32) -> Result<(), ValidationError> {
        self.config.set_long_duration(minutes)
    }

    pub fn set_persist(&mut self, persist: bool) {
        self.config.set_persist(persist);
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        if self.clock.is_armed() {
            return None; // Already running.
        }

        if self.paused {
            self.paused = false;
            self.clock.arm(TICK_INTERVAL);
            tracing::debug!(phase = %self.phase(), remaining = self.remaining_secs(), "resumed");
            return Some(Event::Resumed {
                phase: self.phase(),
                remaining_secs: self.remaining_secs(),
                at: Utc::now(),
            });
        }

        let next = match self.state.phase() {
            Phase::Working if self.session_pomodoros == 0 => {
                // A finished working phase always bumps the session counter,
                // so this cannot be reached through the public API.
                tracing::warn!("start() in a finished working phase with no pomodoros; ignoring");
                return None;
            }
            Phase::Working => self.break_after_work(self.session_pomodoros),
            _ => Phase::Working,
        };
        Some(self.enter(next))
    }

    pub fn stop(&mut self) -> Option<Event> {
        self.clock.disarm();
        self.paused = false;
        let stopped = self.state.phase();
        self.state = SessionState::Idle;

        if stopped == Phase::Idle {
            return None;
        }
        tracing::debug!(phase = %stopped, "stopped");
        Some(Event::PhaseStopped {
            phase: stopped,
            at: Utc::now(),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        if !self.clock.is_armed() {
            return None; // Idle, paused, or the phase already ran out.
        }
        self.clock.disarm();
        self.paused = true;
        tracing::debug!(phase = %self.phase(), remaining = self.remaining_secs(), "paused");
        Some(Event::Paused {
            phase: self.phase(),
            remaining_secs: self.remaining_secs(),
            at: Utc::now(),
        })
    }

    /// Call once per clock firing. Ticks arriving while disarmed are ignored.
    pub fn tick(&mut self) -> Vec<Event> {
        if !self.clock.is_armed() {
            return Vec::new();
        }
        let Some(countdown) = self.state.countdown_mut() else {
            self.clock.disarm();
            return Vec::new();
        };

        let finished = countdown.tick();
        let mut events = vec![Event::Tick {
            remaining_secs: countdown.remaining_secs(),
            elapsed_secs: countdown.elapsed_secs(),
            at: Utc::now(),
        }];

        if finished {
            events.push(self.complete());
        }
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn break_after_work(&self, completed: u64) -> Phase {
        if completed > 0 && completed % LONG_BREAK_EVERY == 0 {
            Phase::LongBreak
        } else {
            Phase::ShortBreak
        }
    }

    fn enter(&mut self, phase: Phase) -> Event {
        let duration_secs = match phase {
            Phase::Working => self.config.work_secs,
            Phase::ShortBreak => self.config.break_secs,
            Phase::LongBreak => self.config.long_break_secs,
            Phase::Idle => 0,
        };
        self.state = SessionState::enter(phase, duration_secs);
        self.paused = false;
        self.clock.arm(TICK_INTERVAL);

        let next_phase = self.next_phase();
        tracing::debug!(%phase, duration_secs, %next_phase, "entered phase");
        Event::PhaseChanged {
            phase,
            duration_secs,
            next_phase,
            at: Utc::now(),
        }
    }

    fn complete(&mut self) -> Event {
        self.clock.disarm();
        let phase = self.state.phase();
        self.notifier.alert(phase);

        if phase == Phase::Working {
            self.config.total_pomodoros += 1;
            self.session_pomodoros += 1;
            tracing::info!(
                total = self.config.total_pomodoros,
                session = self.session_pomodoros,
                "pomodoro complete"
            );
        } else {
            tracing::info!(%phase, "break complete");
        }

        Event::PhaseCompleted {
            phase,
            total_pomodoros: self.config.total_pomodoros,
            session_pomodoros: self.session_pomodoros,
            at: Utc::now(),
        }
    }
}
