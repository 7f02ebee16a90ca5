use std::time::Duration;

use crate::core::walkthrough::{
    AutoplayTiming, Command, PlaybackPhase, StepCatalog, WalkthroughController, route_key,
};

const STEP: Duration = Duration::from_millis(8_000);
const FINAL: Duration = Duration::from_millis(10_000);

fn controller() -> WalkthroughController {
    WalkthroughController::new(StepCatalog::product_demo(), AutoplayTiming::default())
}

fn press(ctrl: &mut WalkthroughController, key: &str) {
    if let Some(command) = route_key(key) {
        ctrl.dispatch(command);
    }
}

#[test]
fn test_go_to_then_read_back() {
    let mut ctrl = controller();
    for index in 0..ctrl.total_steps() {
        ctrl.dispatch(Command::GoTo(index));
        assert_eq!(ctrl.state().current_index, index);
    }
}

#[test]
fn test_next_five_times_lands_on_final() {
    let mut ctrl = controller();
    for _ in 0..5 {
        assert!(ctrl.dispatch(Command::Next).changed);
    }
    assert_eq!(ctrl.state().current_index, 5);
    assert_eq!(ctrl.current_step().id, "final");

    let outcome = ctrl.dispatch(Command::Next);
    assert!(!outcome.changed);
    assert_eq!(ctrl.state().current_index, 5);
}

#[test]
fn test_prev_at_start_is_noop() {
    let mut ctrl = controller();
    let outcome = ctrl.dispatch(Command::Prev);

    assert!(!outcome.changed);
    assert_eq!(ctrl.state().current_index, 0);
}

#[test]
fn test_autoplay_advances_one_step_per_duration() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::ToggleAutoplay);

    assert_eq!(ctrl.advance_time(STEP - Duration::from_millis(1)), 0);
    assert_eq!(ctrl.state().current_index, 0);

    assert_eq!(ctrl.advance_time(Duration::from_millis(1)), 1);
    assert_eq!(ctrl.state().phase(), PlaybackPhase::AutoPlaying(1));
}

#[test]
fn test_manual_navigation_reschedules_autoplay() {
    let mut ctrl = controller();
    let first = ctrl.dispatch(Command::ToggleAutoplay).timer.scheduled.unwrap();

    ctrl.advance_time(Duration::from_millis(5_000));
    let outcome = ctrl.dispatch(Command::Next);

    assert_eq!(outcome.timer.cancelled, Some(first.token));
    let rescheduled = outcome.timer.scheduled.unwrap();
    assert_eq!(rescheduled.from_index, 1);
    assert_eq!(rescheduled.due_at, Duration::from_millis(5_000) + STEP);

    // The original deadline passes without a second advance
    assert_eq!(ctrl.advance_time(Duration::from_millis(3_000)), 0);
    assert_eq!(ctrl.state().current_index, 1);

    assert_eq!(ctrl.advance_time(Duration::from_millis(5_000)), 1);
    assert_eq!(ctrl.state().current_index, 2);
}

#[test]
fn test_autoplay_runs_to_final_and_stops() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::ToggleAutoplay);

    // Simulated timer fires, one per pending token
    for _ in 0..5 {
        let token = ctrl.pending_advance().map(|p| p.token).expect("timer pending while autoplaying");
        assert!(ctrl.dispatch(Command::TimerFired(token)).changed);
    }

    assert_eq!(ctrl.state().current_index, 5);
    assert!(!ctrl.state().is_auto_playing);
    assert_eq!(ctrl.pending_advance().map(|p| p.token), None);
}

#[test]
fn test_autoplay_total_time_uses_final_approach() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::ToggleAutoplay);

    let fired = ctrl.advance_time(STEP * 4 + FINAL - Duration::from_millis(1));
    assert_eq!(fired, 4);
    assert_eq!(ctrl.state().phase(), PlaybackPhase::AutoPlaying(4));

    assert_eq!(ctrl.advance_time(Duration::from_millis(1)), 1);
    assert_eq!(ctrl.state().phase(), PlaybackPhase::Idle(5));

    // Nothing left to fire
    assert_eq!(ctrl.advance_time(Duration::from_secs(60)), 0);
    assert_eq!(ctrl.state().current_index, 5);
}

#[test]
fn test_escape_always_stops() {
    let mut ctrl = controller();
    press(&mut ctrl, "Escape");
    assert!(!ctrl.state().is_auto_playing);

    press(&mut ctrl, "a");
    assert!(ctrl.state().is_auto_playing);
    press(&mut ctrl, "Escape");
    assert!(!ctrl.state().is_auto_playing);
    assert_eq!(ctrl.pending_advance().map(|p| p.token), None);
}

#[test]
fn test_keyboard_drives_navigation() {
    let mut ctrl = controller();
    press(&mut ctrl, "ArrowRight");
    press(&mut ctrl, " ");
    press(&mut ctrl, "ArrowLeft");
    press(&mut ctrl, "Enter");

    assert_eq!(ctrl.state().current_index, 1);
}

#[test]
fn test_stale_fire_after_stop_is_ignored() {
    let mut ctrl = controller();
    let token = ctrl.dispatch(Command::ToggleAutoplay).timer.scheduled.unwrap().token;
    ctrl.dispatch(Command::Stop);

    let outcome = ctrl.dispatch(Command::TimerFired(token));
    assert!(!outcome.changed);
    assert_eq!(ctrl.state().current_index, 0);
}

#[test]
fn test_stale_fire_after_reschedule_is_ignored() {
    let mut ctrl = controller();
    let old = ctrl.dispatch(Command::ToggleAutoplay).timer.scheduled.unwrap().token;
    ctrl.dispatch(Command::GoTo(2));

    assert!(!ctrl.dispatch(Command::TimerFired(old)).changed);
    assert_eq!(ctrl.state().current_index, 2);
    assert!(ctrl.pending_advance().map(|p| p.token).is_some());
}

#[test]
fn test_at_most_one_pending_timer() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::ToggleAutoplay);
    let mut seen = Vec::new();

    for command in [Command::Next, Command::GoTo(3), Command::Prev, Command::Next] {
        let outcome = ctrl.dispatch(command);
        if let Some(cancelled) = outcome.timer.cancelled {
            seen.push(cancelled);
        }
        assert!(outcome.timer.scheduled.is_some());
    }

    // Every resync cancelled exactly the previous timer
    assert_eq!(seen.len(), 4);
    seen.dedup();
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_toggle_off_cancels_timer() {
    let mut ctrl = controller();
    let token = ctrl.dispatch(Command::ToggleAutoplay).timer.scheduled.unwrap().token;
    let outcome = ctrl.dispatch(Command::ToggleAutoplay);

    assert_eq!(outcome.timer.cancelled, Some(token));
    assert!(outcome.timer.scheduled.is_none());
    assert_eq!(ctrl.advance_time(STEP * 2), 0);
}

#[test]
fn test_ignored_command_leaves_timer_alone() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::ToggleAutoplay);
    let pending = ctrl.pending_advance().map(|p| p.token);

    let outcome = ctrl.dispatch(Command::GoTo(42));
    assert!(!outcome.changed);
    assert!(outcome.timer.is_noop());
    assert_eq!(ctrl.pending_advance().map(|p| p.token), pending);
}

#[test]
fn test_teardown_cancels_pending() {
    let mut ctrl = controller();
    let token = ctrl.dispatch(Command::ToggleAutoplay).timer.scheduled.unwrap().token;

    assert_eq!(ctrl.teardown(), Some(token));
    assert_eq!(ctrl.teardown(), None);
    assert_eq!(ctrl.advance_time(STEP), 0);
}

#[test]
fn test_reset_returns_to_start() {
    let mut ctrl = controller();
    ctrl.dispatch(Command::GoTo(3));
    ctrl.dispatch(Command::ToggleAutoplay);
    let outcome = ctrl.dispatch(Command::Reset);

    assert!(outcome.changed);
    assert_eq!(ctrl.state().phase(), PlaybackPhase::Idle(0));
    assert!(outcome.timer.cancelled.is_some());
}
