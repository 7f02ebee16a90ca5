//! Step sequencer: which step is visible and whether playback is automatic
//!
//! All navigation clamps silently. Out-of-range `go_to` calls and `next`/`prev`
//! at the boundaries leave the state untouched and report `false`.

use serde::{Deserialize, Serialize};

use super::{StepCatalog, WalkthroughError};

/// Sequencer state snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SequencerState {
    pub current_index: usize,
    pub is_auto_playing: bool,
}

/// Playback mode as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle(usize),
    AutoPlaying(usize),
}

impl SequencerState {
    pub fn phase(&self) -> PlaybackPhase {
        if self.is_auto_playing {
            PlaybackPhase::AutoPlaying(self.current_index)
        } else {
            PlaybackPhase::Idle(self.current_index)
        }
    }
}

/// Owner of [`SequencerState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequencer {
    step_count: usize,
    state: SequencerState,
}

impl StepSequencer {
    /// Create a sequencer at `Idle(0)`
    pub fn new(step_count: usize) -> Result<Self, WalkthroughError> {
        if step_count == 0 {
            return Err(WalkthroughError::NoSteps);
        }

        Ok(Self {
            step_count,
            state: SequencerState::default(),
        })
    }

    /// Sequencer sized for a catalog, which is never empty
    pub fn for_catalog(catalog: &StepCatalog) -> Self {
        Self {
            step_count: catalog.len(),
            state: SequencerState::default(),
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn is_auto_playing(&self) -> bool {
        self.state.is_auto_playing
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn last_index(&self) -> usize {
        self.step_count - 1
    }

    pub fn is_first(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.current_index == self.last_index()
    }

    /// Jump to `index`; ignored when out of range
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.step_count {
            tracing::debug!(index, step_count = self.step_count, "go_to out of range, ignored");
            return false;
        }
        self.set_index(index)
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.go_to(self.state.current_index + 1)
    }

    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.go_to(self.state.current_index - 1)
    }

    /// Flip autoplay. Turning it on while on the last step is a no-op.
    pub fn toggle_autoplay(&mut self) -> bool {
        if !self.state.is_auto_playing && self.is_last() {
            return false;
        }
        self.state.is_auto_playing = !self.state.is_auto_playing;
        true
    }

    pub fn stop(&mut self) -> bool {
        let was_playing = self.state.is_auto_playing;
        self.state.is_auto_playing = false;
        was_playing
    }

    /// Return to `Idle(0)`
    pub fn reset(&mut self) -> bool {
        let before = self.state;
        self.state = SequencerState::default();
        before != self.state
    }

    fn set_index(&mut self, index: usize) -> bool {
        let before = self.state;
        self.state.current_index = index;

        // Autoplay never outlives the last step.
        if self.is_last() {
            self.state.is_auto_playing = false;
        }

        before != self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequencer() -> StepSequencer {
        StepSequencer::new(6).unwrap()
    }

    #[test]
    fn test_initial_state_is_idle_zero() {
        let seq = sequencer();
        assert_eq!(seq.state().phase(), PlaybackPhase::Idle(0));
        assert!(seq.is_first());
        assert!(!seq.is_last());
    }

    #[test]
    fn test_zero_steps_rejected() {
        assert_eq!(StepSequencer::new(0), Err(WalkthroughError::NoSteps));
    }

    #[test]
    fn test_go_to_every_valid_index() {
        let mut seq = sequencer();
        for index in (0..6).rev() {
            seq.go_to(index);
            assert_eq!(seq.current_index(), index);
        }
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut seq = sequencer();
        seq.go_to(2);

        assert!(!seq.go_to(6));
        assert!(!seq.go_to(usize::MAX));
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_go_to_same_index_reports_unchanged() {
        let mut seq = sequencer();
        seq.go_to(3);
        assert!(!seq.go_to(3));
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        let mut seq = sequencer();
        seq.go_to(5);

        assert!(!seq.next());
        assert_eq!(seq.current_index(), 5);
    }

    #[test]
    fn test_prev_at_first_step_is_noop() {
        let mut seq = sequencer();

        assert!(!seq.prev());
        assert_eq!(seq.current_index(), 0);
    }

    #[test]
    fn test_next_and_prev_move_one_step() {
        let mut seq = sequencer();
        assert!(seq.next());
        assert!(seq.next());
        assert!(seq.prev());
        assert_eq!(seq.current_index(), 1);
    }

    #[test]
    fn test_toggle_autoplay_flips() {
        let mut seq = sequencer();
        assert!(seq.toggle_autoplay());
        assert_eq!(seq.state().phase(), PlaybackPhase::AutoPlaying(0));
        assert!(seq.toggle_autoplay());
        assert_eq!(seq.state().phase(), PlaybackPhase::Idle(0));
    }

    #[test]
    fn test_toggle_autoplay_on_last_step_stays_idle() {
        let mut seq = sequencer();
        seq.go_to(5);

        assert!(!seq.toggle_autoplay());
        assert!(!seq.is_auto_playing());
    }

    #[test]
    fn test_stop_always_clears_autoplay() {
        let mut seq = sequencer();
        assert!(!seq.stop());
        assert!(!seq.is_auto_playing());

        seq.toggle_autoplay();
        assert!(seq.stop());
        assert!(!seq.is_auto_playing());
    }

    #[test]
    fn test_reaching_last_step_ends_autoplay() {
        let mut seq = sequencer();
        seq.go_to(4);
        seq.toggle_autoplay();

        seq.next();

        assert_eq!(seq.state().phase(), PlaybackPhase::Idle(5));
    }

    #[test]
    fn test_manual_navigation_keeps_autoplay_before_last() {
        let mut seq = sequencer();
        seq.toggle_autoplay();
        seq.go_to(3);

        assert_eq!(seq.state().phase(), PlaybackPhase::AutoPlaying(3));
    }

    #[test]
    fn test_single_step_sequencer() {
        let mut seq = StepSequencer::new(1).unwrap();
        assert!(seq.is_first());
        assert!(seq.is_last());
        assert!(!seq.next());
        assert!(!seq.prev());
        assert!(!seq.toggle_autoplay());
    }

    #[test]
    fn test_reset_returns_to_idle_zero() {
        let mut seq = sequencer();
        seq.go_to(2);
        seq.toggle_autoplay();

        assert!(seq.reset());
        assert_eq!(seq.state(), SequencerState::default());
        assert!(!seq.reset());
    }
}
