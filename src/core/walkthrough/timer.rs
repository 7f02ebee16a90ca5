//! Auto-advance timer bookkeeping
//!
//! The driver never reads a clock. The host passes the current time (elapsed
//! since the walkthrough mounted) and turns the returned [`TimerPlan`] into real
//! timeouts; tests pass virtual time instead. Every scheduled advance carries a
//! [`TimerToken`], and a fire is only honoured if its token is still pending.

use std::time::Duration;

use super::SequencerState;

/// Default dwell time on a regular demo step (8s)
pub const DEFAULT_STEP_DURATION_MS: u64 = 8_000;

/// Default dwell time before the hop into the final call-to-action (10s)
pub const DEFAULT_FINAL_APPROACH_MS: u64 = 10_000;

/// Autoplay durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayTiming {
    /// Wait before advancing from a regular step
    pub step: Duration,
    /// Wait before advancing into the last step
    pub final_approach: Duration,
}

impl AutoplayTiming {
    pub fn new(step: Duration, final_approach: Duration) -> Self {
        Self {
            step,
            final_approach,
        }
    }

    /// Delay before leaving `index`
    pub fn delay_for(&self, index: usize, step_count: usize) -> Duration {
        if index + 2 == step_count {
            self.final_approach
        } else {
            self.step
        }
    }
}

impl Default for AutoplayTiming {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_STEP_DURATION_MS),
            Duration::from_millis(DEFAULT_FINAL_APPROACH_MS),
        )
    }
}

/// Identity of one scheduled advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// The one pending auto-advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub token: TimerToken,
    /// Step the advance leaves from
    pub from_index: usize,
    pub delay: Duration,
    pub due_at: Duration,
}

/// What the host has to do after a resync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerPlan {
    pub cancelled: Option<TimerToken>,
    pub scheduled: Option<PendingAdvance>,
}

impl TimerPlan {
    pub fn is_noop(&self) -> bool {
        self.cancelled.is_none() && self.scheduled.is_none()
    }
}

/// Keeps at most one auto-advance pending
#[derive(Debug, Clone, Default)]
pub struct TimerDriver {
    timing: AutoplayTiming,
    pending: Option<PendingAdvance>,
    generation: u64,
}

impl TimerDriver {
    pub fn new(timing: AutoplayTiming) -> Self {
        Self {
            timing,
            pending: None,
            generation: 0,
        }
    }

    pub fn timing(&self) -> AutoplayTiming {
        self.timing
    }

    pub fn pending(&self) -> Option<&PendingAdvance> {
        self.pending.as_ref()
    }

    /// Cancel whatever is pending, then schedule a fresh advance if the
    /// sequencer is autoplaying and not on its last step.
    pub fn sync(&mut self, state: SequencerState, step_count: usize, now: Duration) -> TimerPlan {
        let cancelled = self.cancel();

        let on_last = state.current_index + 1 >= step_count;
        let scheduled = if state.is_auto_playing && !on_last {
            self.generation += 1;
            let delay = self.timing.delay_for(state.current_index, step_count);
            let pending = PendingAdvance {
                token: TimerToken(self.generation),
                from_index: state.current_index,
                delay,
                due_at: now + delay,
            };
            tracing::debug!(
                token = pending.token.0,
                from_index = pending.from_index,
                delay_ms = delay.as_millis() as u64,
                "auto-advance scheduled"
            );
            self.pending = Some(pending);
            Some(pending)
        } else {
            None
        };

        TimerPlan {
            cancelled,
            scheduled,
        }
    }

    /// Drop the pending advance, returning its token
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|p| p.token)
    }

    /// Consume a fire. Returns `false` for stale tokens.
    pub fn accept_fire(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                true
            }
            _ => {
                tracing::debug!(token = token.0, "stale auto-advance ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(index: usize) -> SequencerState {
        SequencerState {
            current_index: index,
            is_auto_playing: true,
        }
    }

    #[test]
    fn test_default_timing_matches_demo_durations() {
        let timing = AutoplayTiming::default();
        assert_eq!(timing.delay_for(0, 6), Duration::from_millis(8_000));
        assert_eq!(timing.delay_for(3, 6), Duration::from_millis(8_000));
        assert_eq!(timing.delay_for(4, 6), Duration::from_millis(10_000));
    }

    #[test]
    fn test_idle_state_schedules_nothing() {
        let mut driver = TimerDriver::default();
        let plan = driver.sync(SequencerState::default(), 6, Duration::ZERO);

        assert!(plan.is_noop());
        assert!(driver.pending().is_none());
    }

    #[test]
    fn test_autoplay_schedules_one_advance() {
        let mut driver = TimerDriver::default();
        let plan = driver.sync(playing(1), 6, Duration::from_millis(500));

        let scheduled = plan.scheduled.expect("advance scheduled");
        assert_eq!(scheduled.from_index, 1);
        assert_eq!(scheduled.due_at, Duration::from_millis(8_500));
        assert!(plan.cancelled.is_none());
    }

    #[test]
    fn test_resync_cancels_previous() {
        let mut driver = TimerDriver::default();
        let first = driver.sync(playing(0), 6, Duration::ZERO).scheduled.unwrap();
        let plan = driver.sync(playing(1), 6, Duration::from_millis(100));

        assert_eq!(plan.cancelled, Some(first.token));
        assert_ne!(plan.scheduled.unwrap().token, first.token);
    }

    #[test]
    fn test_last_step_schedules_nothing() {
        let mut driver = TimerDriver::default();
        let plan = driver.sync(playing(5), 6, Duration::ZERO);
        assert!(plan.scheduled.is_none());
    }

    #[test]
    fn test_stale_token_rejected() {
        let mut driver = TimerDriver::default();
        let stale = driver.sync(playing(0), 6, Duration::ZERO).scheduled.unwrap().token;
        let fresh = driver.sync(playing(2), 6, Duration::ZERO).scheduled.unwrap().token;

        assert!(!driver.accept_fire(stale));
        assert!(driver.accept_fire(fresh));
        assert!(!driver.accept_fire(fresh));
    }

    #[test]
    fn test_tokens_increase_monotonically() {
        let mut driver = TimerDriver::default();
        let a = driver.sync(playing(0), 6, Duration::ZERO).scheduled.unwrap().token;
        driver.cancel();
        let b = driver.sync(playing(0), 6, Duration::ZERO).scheduled.unwrap().token;
        assert!(b > a);
    }
}
