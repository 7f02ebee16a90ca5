//! Walkthrough controller: the single dispatcher for every transition
//!
//! Keyboard input, step controls and timer fires all arrive as [`Command`]s.
//! The controller applies them to the sequencer and, when the state changed,
//! resyncs the timer driver. The returned [`Outcome`] tells the host which
//! timeout to clear and which to arm.

use std::time::Duration;

use super::{
    AutoplayTiming, PendingAdvance, SequencerState, Step, StepCatalog, StepSequencer, TimerDriver, TimerPlan,
    TimerToken,
};

/// Transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GoTo(usize),
    Next,
    Prev,
    ToggleAutoplay,
    Stop,
    Reset,
    TimerFired(TimerToken),
}

/// Result of one dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub state: SequencerState,
    pub timer: TimerPlan,
}

#[derive(Debug, Clone)]
pub struct WalkthroughController {
    catalog: StepCatalog,
    sequencer: StepSequencer,
    timer: TimerDriver,
    now: Duration,
}

impl WalkthroughController {
    pub fn new(catalog: StepCatalog, timing: AutoplayTiming) -> Self {
        let sequencer = StepSequencer::for_catalog(&catalog);

        Self {
            catalog,
            sequencer,
            timer: TimerDriver::new(timing),
            now: Duration::ZERO,
        }
    }

    pub fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn current_step(&self) -> &Step {
        self.catalog.step(self.sequencer.current_index())
    }

    pub fn total_steps(&self) -> usize {
        self.sequencer.step_count()
    }

    /// The advance still armed after the last dispatch
    pub fn pending_advance(&self) -> Option<PendingAdvance> {
        self.timer.pending().copied()
    }

    /// Host clock, elapsed since mount
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the host clock forward without firing anything
    pub fn set_now(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let before = self.sequencer.state();

        let changed = match command {
            Command::GoTo(index) => self.sequencer.go_to(index),
            Command::Next => self.sequencer.next(),
            Command::Prev => self.sequencer.prev(),
            Command::ToggleAutoplay => self.sequencer.toggle_autoplay(),
            Command::Stop => self.sequencer.stop(),
            Command::Reset => self.sequencer.reset(),
            Command::TimerFired(token) => {
                if self.timer.accept_fire(token) && self.sequencer.is_auto_playing() {
                    self.sequencer.next()
                } else {
                    false
                }
            }
        };

        let state = self.sequencer.state();
        let timer = if changed {
            self.timer.sync(state, self.sequencer.step_count(), self.now)
        } else {
            TimerPlan::default()
        };

        if changed {
            tracing::debug!(
                ?command,
                from = before.current_index,
                to = state.current_index,
                auto_playing = state.is_auto_playing,
                "walkthrough transition"
            );
        } else {
            tracing::debug!(?command, index = state.current_index, "walkthrough command ignored");
        }

        Outcome {
            changed,
            state,
            timer,
        }
    }

    /// Advance the host clock, firing every advance that falls due on the way.
    /// Returns the number of fires honoured.
    pub fn advance_time(&mut self, elapsed: Duration) -> usize {
        let target = self.now + elapsed;
        let mut fired = 0;

        while let Some(pending) = self.timer.pending().copied() {
            if pending.due_at > target {
                break;
            }
            self.now = pending.due_at;
            if self.dispatch(Command::TimerFired(pending.token)).changed {
                fired += 1;
            }
        }

        self.now = target;
        fired
    }

    /// Cancel everything on unmount
    pub fn teardown(&mut self) -> Option<TimerToken> {
        self.timer.cancel()
    }
}

impl Default for WalkthroughController {
    fn default() -> Self {
        Self::new(StepCatalog::product_demo(), AutoplayTiming::default())
    }
}
