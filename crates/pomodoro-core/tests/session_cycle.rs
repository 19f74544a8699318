//! Integration tests for the session state machine.
//!
//! Drives a full work/break rotation through the public API with a manual
//! clock and checks counters, phase selection and alerts.

use pomodoro_core::timer::LONG_BREAK_EVERY;
use pomodoro_core::{Configuration, Event, ManualClock, Notifier, Phase, PomodoroSession};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

#[derive(Debug, Default)]
struct RecordingNotifier {
    alerts: Vec<Phase>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, completed: Phase) {
        self.alerts.push(completed);
    }
}

fn classic_config() -> Configuration {
    Configuration {
        work_secs: 1500,
        break_secs: 300,
        long_break_secs: 900,
        total_pomodoros: 0,
        persist: false,
    }
}

fn tick_n<N: Notifier>(session: &mut PomodoroSession<ManualClock, N>, n: u64) -> Vec<Event> {
    (0..n).flat_map(|_| session.tick()).collect()
}

fn completions(events: &[Event]) -> Vec<Phase> {
    events
        .iter()
        .filter_map(|e| match e {
            Event::PhaseCompleted { phase, .. } => Some(*phase),
            _ => None,
        })
        .collect()
}

fn entered(event: Option<Event>) -> (Phase, u64) {
    match event {
        Some(Event::PhaseChanged {
            phase,
            duration_secs,
            ..
        }) => (phase, duration_secs),
        other => panic!("Expected PhaseChanged, got {other:?}"),
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn first_pomodoro_then_short_break() {
    let mut notifier = RecordingNotifier::default();
    let mut session = PomodoroSession::new(classic_config(), ManualClock::new(), &mut notifier);

    assert_eq!(entered(session.start()), (Phase::Working, 1500));

    let events = tick_n(&mut session, 1500);
    assert_eq!(completions(&events), vec![Phase::Working]);
    assert_eq!(session.remaining_secs(), 0);
    assert_eq!(session.total_pomodoros(), 1);
    assert_eq!(session.session_pomodoros(), 1);

    assert_eq!(entered(session.start()), (Phase::ShortBreak, 300));
    drop(session);
    assert_eq!(notifier.alerts, vec![Phase::Working]);
}

#[test]
fn every_fourth_pomodoro_earns_long_break() {
    let mut session = PomodoroSession::new(
        classic_config(),
        ManualClock::new(),
        pomodoro_core::SilentNotifier,
    );

    let mut breaks = Vec::new();
    for _ in 0..8 {
        assert_eq!(entered(session.start()).0, Phase::Working);
        tick_n(&mut session, 1500);
        let (phase, duration) = entered(session.start());
        breaks.push((phase, duration));
        tick_n(&mut session, duration);
    }

    assert_eq!(
        breaks,
        vec![
            (Phase::ShortBreak, 300),
            (Phase::ShortBreak, 300),
            (Phase::ShortBreak, 300),
            (Phase::LongBreak, 900),
            (Phase::ShortBreak, 300),
            (Phase::ShortBreak, 300),
            (Phase::ShortBreak, 300),
            (Phase::LongBreak, 900),
        ]
    );
    assert_eq!(session.session_pomodoros(), 2 * LONG_BREAK_EVERY);
}

#[test]
fn long_break_hint_on_fourth_work_phase() {
    let mut session = PomodoroSession::new(
        classic_config(),
        ManualClock::new(),
        pomodoro_core::SilentNotifier,
    );

    let mut hints = Vec::new();
    for _ in 0..4 {
        match session.start() {
            Some(Event::PhaseChanged { next_phase, .. }) => hints.push(next_phase),
            other => panic!("Expected PhaseChanged, got {other:?}"),
        }
        tick_n(&mut session, 1500);
        let (_, duration) = entered(session.start());
        tick_n(&mut session, duration);
    }
    assert_eq!(
        hints,
        vec![
            Phase::ShortBreak,
            Phase::ShortBreak,
            Phase::ShortBreak,
            Phase::LongBreak
        ]
    );
}

#[test]
fn breaks_alert_but_do_not_count() {
    let mut notifier = RecordingNotifier::default();
    let mut session = PomodoroSession::new(classic_config(), ManualClock::new(), &mut notifier);

    session.start();
    tick_n(&mut session, 1500);
    session.start();
    let events = tick_n(&mut session, 300);
    assert_eq!(completions(&events), vec![Phase::ShortBreak]);
    assert_eq!(session.total_pomodoros(), 1);
    assert_eq!(session.phase(), Phase::ShortBreak);
    drop(session);
    assert_eq!(notifier.alerts, vec![Phase::Working, Phase::ShortBreak]);
}

#[test]
fn total_is_cumulative_and_session_starts_at_zero() {
    let config = Configuration {
        total_pomodoros: 41,
        ..classic_config()
    };
    let mut session =
        PomodoroSession::new(config, ManualClock::new(), pomodoro_core::SilentNotifier);
    assert_eq!(session.session_pomodoros(), 0);

    session.start();
    tick_n(&mut session, 1500);
    assert_eq!(session.total_pomodoros(), 42);
    assert_eq!(session.session_pomodoros(), 1);
    assert_eq!(session.into_config().total_pomodoros, 42);
}

#[test]
fn pause_then_stop_then_start_is_fresh() {
    let mut session = PomodoroSession::new(
        classic_config(),
        ManualClock::new(),
        pomodoro_core::SilentNotifier,
    );
    session.start();
    tick_n(&mut session, 100);
    session.pause();
    session.stop();

    assert_eq!(entered(session.start()), (Phase::Working, 1500));
    assert_eq!(session.remaining_secs(), 1500);
}

#[test]
fn stopping_a_break_restarts_with_work() {
    let mut session = PomodoroSession::new(
        classic_config(),
        ManualClock::new(),
        pomodoro_core::SilentNotifier,
    );
    session.start();
    tick_n(&mut session, 1500);
    session.start();
    tick_n(&mut session, 10);
    session.stop();

    assert_eq!(entered(session.start()), (Phase::Working, 1500));
}

/// A finished working phase with a zero session counter has no successor.
/// No sequence of public calls reaches it: every path into "working, clock
/// disarmed, not paused" goes through a completion, which bumps the counter.
#[test]
fn finished_work_without_pomodoros_is_unreachable() {
    let mut session = PomodoroSession::new(
        classic_config(),
        ManualClock::new(),
        pomodoro_core::SilentNotifier,
    );

    session.start();
    tick_n(&mut session, 10);
    session.pause();
    session.start();
    session.pause();
    session.pause();
    session.stop();
    session.stop();
    session.start();
    tick_n(&mut session, 1500);

    assert_eq!(session.phase(), Phase::Working);
    assert!(!session.is_running());
    assert_eq!(session.session_pomodoros(), 1);
    assert_eq!(entered(session.start()).0, Phase::ShortBreak);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn d_ticks_complete_exactly_once(minutes in 1u32..30) {
        let mut config = classic_config();
        config.set_work_duration(minutes).unwrap();
        let duration = u64::from(minutes) * 60;
        let mut session =
            PomodoroSession::new(config, ManualClock::new(), pomodoro_core::SilentNotifier);

        session.start();
        let events = tick_n(&mut session, duration);
        prop_assert_eq!(completions(&events), vec![Phase::Working]);
        prop_assert_eq!(session.remaining_secs(), 0);

        let extra = tick_n(&mut session, 5);
        prop_assert!(extra.is_empty());
    }

    #[test]
    fn total_increments_once_per_work_phase(cycles in 1usize..10, initial in 0u64..1000) {
        let config = Configuration {
            work_secs: 2,
            break_secs: 1,
            long_break_secs: 3,
            total_pomodoros: initial,
            persist: false,
        };
        let mut session =
            PomodoroSession::new(config, ManualClock::new(), pomodoro_core::SilentNotifier);

        let mut last = session.total_pomodoros();
        for _ in 0..cycles {
            session.start();
            tick_n(&mut session, 2);
            prop_assert_eq!(session.total_pomodoros(), last + 1);
            last = session.total_pomodoros();

            session.start();
            let duration = session.countdown().map(|c| c.duration_secs()).unwrap_or(0);
            tick_n(&mut session, duration);
            prop_assert_eq!(session.total_pomodoros(), last);
        }
    }

    #[test]
    fn pause_resume_preserves_remaining(before in 0u64..1499) {
        let mut session = PomodoroSession::new(
            classic_config(),
            ManualClock::new(),
            pomodoro_core::SilentNotifier,
        );
        session.start();
        tick_n(&mut session, before);
        session.pause();
        let remaining = session.remaining_secs();
        tick_n(&mut session, 50);
        session.start();
        prop_assert_eq!(session.remaining_secs(), remaining);
        prop_assert_eq!(remaining, 1500 - before);
    }
}
