//! Reactive host for the walkthrough controller
//!
//! The controller lives in a `StoredValue`; every input source (keyboard,
//! step controls, autoplay timeouts) calls [`WalkthroughHandle::dispatch`],
//! so no closure ever acts on a stale snapshot of the state. After each
//! dispatch the handle mirrors the new state into a signal and applies the
//! timer plan to the browser's timeouts.

use leptos::prelude::*;

use std::time::Duration;

use crate::core::walkthrough::{
    AutoplayTiming, Command, PendingAdvance, SequencerState, Step, StepCatalog, TimerPlan,
    WalkthroughController,
};

#[derive(Clone, Copy)]
pub struct WalkthroughHandle {
    controller: StoredValue<WalkthroughController>,
    state: RwSignal<SequencerState>,
    pending: RwSignal<Option<PendingAdvance>>,
    timeout: StoredValue<Option<TimeoutHandle>>,
    /// `Date.now()` at mount, the origin of the controller clock
    origin_ms: StoredValue<f64>,
}

impl WalkthroughHandle {
    pub fn new(catalog: StepCatalog, timing: AutoplayTiming) -> Self {
        let controller = WalkthroughController::new(catalog, timing);
        let state = controller.state();

        Self {
            controller: StoredValue::new(controller),
            state: RwSignal::new(state),
            pending: RwSignal::new(None),
            timeout: StoredValue::new(None),
            origin_ms: StoredValue::new(clock_ms()),
        }
    }

    pub fn state(&self) -> Signal<SequencerState> {
        self.state.into()
    }

    /// The advance currently armed, if autoplay is running
    pub fn pending(&self) -> Signal<Option<PendingAdvance>> {
        self.pending.into()
    }

    pub fn total_steps(&self) -> usize {
        self.controller.with_value(|c| c.total_steps())
    }

    pub fn steps(&self) -> Vec<Step> {
        self.controller
            .with_value(|c| c.catalog().iter().cloned().collect())
    }

    pub fn step(&self, index: usize) -> Step {
        self.controller
            .with_value(|c| c.catalog().step(index).clone())
    }

    /// Apply one command. Safe to call after unmount; it then does nothing.
    pub fn dispatch(self, command: Command) {
        let now = elapsed_since(self.origin_ms.get_value());
        let Some((outcome, armed)) = self.controller.try_update_value(|c| {
            c.set_now(now);
            let outcome = c.dispatch(command);
            (outcome, c.pending_advance())
        }) else {
            return;
        };

        if !outcome.changed {
            return;
        }
        self.state.set(outcome.state);
        self.apply(outcome.timer, armed);
    }

    /// Mirror the controller's armed advance and update the browser timeout.
    /// A fire that reached the last step leaves a plan with nothing to
    /// cancel, yet the advance it consumed must still disappear.
    fn apply(self, plan: TimerPlan, armed: Option<PendingAdvance>) {
        if plan.cancelled.is_some() || armed.is_none() {
            self.clear_timeout();
        }
        self.pending.set(armed);
        if let Some(advance) = plan.scheduled {
            self.arm(advance);
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn arm(self, advance: PendingAdvance) {
        let token = advance.token;
        match set_timeout_with_handle(
            move || self.dispatch(Command::TimerFired(token)),
            advance.delay,
        ) {
            Ok(handle) => {
                self.timeout.update_value(|t| *t = Some(handle));
            }
            Err(err) => leptos::logging::warn!("failed to schedule autoplay advance: {:?}", err),
        }
    }

    #[cfg(feature = "ssr")]
    fn arm(self, _advance: PendingAdvance) {}

    fn clear_timeout(self) {
        if let Some(handle) = self.timeout.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    /// Cancel the pending advance. Called when the walkthrough unmounts.
    pub fn teardown(self) {
        self.clear_timeout();
        self.controller.try_update_value(|c| c.teardown());
    }
}

#[cfg(not(feature = "ssr"))]
pub(super) fn clock_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(feature = "ssr")]
pub(super) fn clock_ms() -> f64 {
    0.0
}

/// Whole milliseconds since `origin_ms`, rounded, never negative
pub(super) fn elapsed_since(origin_ms: f64) -> Duration {
    millis_between(origin_ms, clock_ms())
}

fn millis_between(origin_ms: f64, now_ms: f64) -> Duration {
    Duration::from_millis((now_ms - origin_ms).max(0.0).round() as u64)
}

/// Build the handle, bind the keyboard and tie both to the current owner
pub fn use_walkthrough(catalog: StepCatalog, timing: AutoplayTiming) -> WalkthroughHandle {
    let handle = WalkthroughHandle::new(catalog, timing);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::walkthrough::route_key;
        use leptos::ev::keydown;

        let listener = window_event_listener(keydown, move |ev| {
            if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
                return;
            }
            if let Some(command) = route_key(&ev.key()) {
                ev.prevent_default();
                handle.dispatch(command);
            }
        });
        on_cleanup(move || listener.remove());
    }

    on_cleanup(move || handle.teardown());
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> WalkthroughHandle {
        WalkthroughHandle::new(StepCatalog::product_demo(), AutoplayTiming::default())
    }

    #[test]
    fn test_clock_offsets_round_and_never_go_negative() {
        assert_eq!(millis_between(1_000.0, 1_250.6), Duration::from_millis(251));
        assert_eq!(millis_between(1_000.0, 1_250.4), Duration::from_millis(250));
        assert_eq!(millis_between(2_000.0, 1_000.0), Duration::ZERO);
    }

    #[test]
    fn test_countdown_cleared_when_autoplay_reaches_last_step() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = handle();
            handle.dispatch(Command::GoTo(4));
            handle.dispatch(Command::ToggleAutoplay);

            let armed = handle.pending().get_untracked().expect("advance armed");
            handle.dispatch(Command::TimerFired(armed.token));

            let state = handle.state().get_untracked();
            assert_eq!(state.current_index, 5);
            assert!(!state.is_auto_playing);
            assert!(handle.pending().get_untracked().is_none());
        });
    }

    #[test]
    fn test_pending_follows_each_rescheduled_advance() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = handle();
            handle.dispatch(Command::ToggleAutoplay);
            let first = handle.pending().get_untracked().expect("advance armed");
            assert_eq!(first.from_index, 0);

            handle.dispatch(Command::Next);
            let second = handle.pending().get_untracked().expect("rescheduled");
            assert_eq!(second.from_index, 1);
            assert_ne!(second.token, first.token);

            handle.dispatch(Command::Stop);
            assert!(handle.pending().get_untracked().is_none());
        });
    }

    #[test]
    fn test_restart_returns_to_first_step_idle() {
        let owner = Owner::new();
        owner.with(|| {
            let handle = handle();
            handle.dispatch(Command::GoTo(5));
            handle.dispatch(Command::Reset);

            let state = handle.state().get_untracked();
            assert_eq!(state.current_index, 0);
            assert!(!state.is_auto_playing);
            assert!(handle.pending().get_untracked().is_none());
        });
    }
}
