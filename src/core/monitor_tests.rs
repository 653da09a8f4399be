// License: MIT

use crate::config::Config;
use crate::core::action::Action;
use crate::core::error::{Error, StateError};
use crate::core::events::{Event, PowerSignal};
use crate::core::monitor::Monitor;
use crate::core::state::{Lifecycle, State};

fn monitor(debounce_ms: u64) -> Monitor {
    let cfg = Config {
        debounce_ms,
        ..Config::default()
    };
    Monitor::new(cfg)
}

fn running_state() -> State {
    let mut state = State::new(100);
    state.begin_start().unwrap();
    state.mark_running().unwrap();
    state
}

fn signal(s: PowerSignal, now_ms: u64) -> Event {
    Event::Signal { signal: s, now_ms }
}

fn tick(now_ms: u64) -> Event {
    Event::Tick { now_ms }
}

fn settled(s: PowerSignal) -> Action {
    Action::ApplySettled { signal: s }
}

#[test]
fn signal_settles_after_quiet_window() {
    let mut mon = monitor(100);
    let mut state = running_state();

    let actions = mon
        .handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    assert!(actions.is_empty());

    let actions = mon.handle_event(&mut state, tick(99)).unwrap();
    assert!(actions.is_empty());

    let actions = mon.handle_event(&mut state, tick(100)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Disconnected)]);

    // Fired exactly once; later ticks see nothing pending.
    let actions = mon.handle_event(&mut state, tick(200)).unwrap();
    assert!(actions.is_empty());
    assert_eq!(state.pending_len(), 0);
}

#[test]
fn opposite_signal_cancels_pending_command() {
    // t=0 disconnected, t=50 connected: the disconnect (due 100) is
    // cancelled; only the connect fires, at t=150.
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    mon.handle_event(&mut state, signal(PowerSignal::Connected, 50))
        .unwrap();

    let actions = mon.handle_event(&mut state, tick(100)).unwrap();
    assert!(actions.is_empty());

    let actions = mon.handle_event(&mut state, tick(149)).unwrap();
    assert!(actions.is_empty());

    let actions = mon.handle_event(&mut state, tick(150)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Connected)]);
}

#[test]
fn rapid_toggles_collapse_to_last_signal() {
    // connected -> disconnected -> connected inside the window: the two
    // intermediate states never fire, and exactly one command matching the
    // final signal fires one window after the last arrival.
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Connected, 0))
        .unwrap();
    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 30))
        .unwrap();
    mon.handle_event(&mut state, signal(PowerSignal::Connected, 60))
        .unwrap();

    assert_eq!(state.pending_len(), 1);

    let actions = mon.handle_event(&mut state, tick(159)).unwrap();
    assert!(actions.is_empty());

    let actions = mon.handle_event(&mut state, tick(160)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Connected)]);
}

#[test]
fn same_kind_signals_inside_window_both_fire() {
    // Duplicate same-kind signals do not reset or coalesce the pending
    // command: both stay scheduled and both fire. The idempotent alarm
    // toggle absorbs the second one.
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 40))
        .unwrap();

    assert_eq!(state.pending_len(), 2);

    let actions = mon.handle_event(&mut state, tick(100)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Disconnected)]);

    let actions = mon.handle_event(&mut state, tick(140)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Disconnected)]);
}

#[test]
fn spaced_same_kind_signals_each_fire_independently() {
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    let actions = mon.handle_event(&mut state, tick(100)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Disconnected)]);

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 250))
        .unwrap();
    let actions = mon.handle_event(&mut state, tick(350)).unwrap();
    assert_eq!(actions, vec![settled(PowerSignal::Disconnected)]);
}

#[test]
fn simultaneous_dues_fire_in_scheduling_order() {
    let mut mon = monitor(100);
    let mut state = running_state();

    // Same-kind duplicates scheduled at different times, observed by one
    // late tick: both fire, oldest first.
    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 10))
        .unwrap();

    let actions = mon.handle_event(&mut state, tick(500)).unwrap();
    assert_eq!(
        actions,
        vec![
            settled(PowerSignal::Disconnected),
            settled(PowerSignal::Disconnected),
        ]
    );
}

#[test]
fn signals_rejected_outside_running() {
    let mut mon = monitor(100);
    let mut state = State::new(100);

    let err = mon
        .handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap_err();
    assert_eq!(err, Error::InvalidState(StateError::NotRunning));

    // Ticks outside Running are harmless no-ops.
    let actions = mon.handle_event(&mut state, tick(1000)).unwrap();
    assert!(actions.is_empty());
}

#[test]
fn stopping_discards_pending_commands() {
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();
    assert_eq!(state.pending_len(), 1);

    state.begin_stop().unwrap();
    assert_eq!(state.pending_len(), 0);
    assert_eq!(state.lifecycle(), Lifecycle::Stopping);

    // Nothing fires after shutdown began.
    let actions = mon.handle_event(&mut state, tick(1000)).unwrap();
    assert!(actions.is_empty());

    state.mark_stopped().unwrap();
    assert_eq!(state.lifecycle(), Lifecycle::Stopped);
}

#[test]
fn lifecycle_transitions_are_checked() {
    let mut state = State::new(100);

    assert_eq!(
        state.mark_running().unwrap_err(),
        Error::InvalidState(StateError::NotStarting)
    );
    assert_eq!(
        state.begin_stop().unwrap_err(),
        Error::InvalidState(StateError::NotRunning)
    );

    state.begin_start().unwrap();
    assert_eq!(
        state.begin_start().unwrap_err(),
        Error::InvalidState(StateError::NotStopped)
    );

    state.mark_running().unwrap();
    assert_eq!(
        state.mark_stopped().unwrap_err(),
        Error::InvalidState(StateError::NotStopping)
    );
}

#[test]
fn direct_settle_records_state_and_emits_action() {
    let mut mon = monitor(100);
    let mut state = running_state();

    let action = mon.settle_now(&mut state, PowerSignal::Disconnected).unwrap();
    assert_eq!(action, settled(PowerSignal::Disconnected));

    // The settle shows up in status immediately, with nothing pending.
    assert_eq!(state.last_signal(), Some(PowerSignal::Disconnected));
    assert_eq!(state.last_settled(), Some(PowerSignal::Disconnected));
    assert_eq!(state.pending_len(), 0);

    let snap = mon.snapshot(&state, true);
    assert_eq!(snap.power.as_deref(), Some("disconnected"));
    assert_eq!(snap.last_settled.as_deref(), Some("disconnected"));
    assert!(snap.alarm_visible);
}

#[test]
fn direct_settle_rejected_outside_running() {
    let mut mon = monitor(100);
    let mut state = State::new(100);

    let err = mon
        .settle_now(&mut state, PowerSignal::Connected)
        .unwrap_err();
    assert_eq!(err, Error::InvalidState(StateError::NotRunning));
}

#[test]
fn snapshot_reflects_monitor_state() {
    let mut mon = monitor(100);
    let mut state = running_state();

    mon.handle_event(&mut state, signal(PowerSignal::Disconnected, 0))
        .unwrap();

    let snap = mon.snapshot(&state, false);
    assert_eq!(snap.lifecycle, "running");
    assert_eq!(snap.power.as_deref(), Some("disconnected"));
    assert_eq!(snap.last_settled, None);
    assert!(!snap.alarm_visible);
    assert_eq!(snap.pending_commands, 1);
    assert_eq!(snap.debounce_ms, 100);

    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"pending_commands\":1"));
    assert!(!json.contains("pretty_text"));
}
