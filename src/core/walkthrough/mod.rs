//! Guided product walkthrough
//!
//! UI-agnostic core of the `/demo` page:
//! - [`StepSequencer`] owns the current index and playback mode
//! - [`TimerDriver`] keeps at most one auto-advance pending
//! - [`route_key`] maps keyboard keys to [`Command`]s
//! - [`RevealSchedule`] orders the staggered entrance of a step's parts
//! - [`WalkthroughController`] dispatches every command through one reducer

mod controller;
mod error;
mod input;
mod reveal;
mod sequencer;
mod step;
mod timer;

#[cfg(test)]
mod tests;

pub use controller::{Command, Outcome, WalkthroughController};
pub use error::WalkthroughError;
pub use input::{KEY_BINDINGS, KeyBinding, route_key};
pub use reveal::{RevealSchedule, RevealStage};
pub use sequencer::{PlaybackPhase, SequencerState, StepSequencer};
pub use step::{Step, StepCatalog, StepKind};
pub use timer::{
    AutoplayTiming, DEFAULT_FINAL_APPROACH_MS, DEFAULT_STEP_DURATION_MS, PendingAdvance,
    TimerDriver, TimerPlan, TimerToken,
};
