//! Staggered entrance reveals inside a step
//!
//! A step's entrance is an ordered list of `(delay, stage)` pairs, each delay
//! relative to the previous stage. One scheduler walks the list per mounted
//! step; unmounting cancels it.

use std::time::Duration;

use super::StepKind;

/// Sub-element that becomes visible during a step entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum RevealStage {
    #[display("title")]
    Title,
    #[display("subtitle")]
    Subtitle,
    #[display("body")]
    Body,
    #[display("call-to-action")]
    CallToAction,
}

/// Ordered reveal plan for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    stages: Vec<(Duration, RevealStage)>,
}

impl RevealSchedule {
    pub fn new(stages: Vec<(Duration, RevealStage)>) -> Self {
        Self { stages }
    }

    /// Plan used by each kind of step
    pub fn for_kind(kind: StepKind) -> Self {
        let ms = Duration::from_millis;
        match kind {
            StepKind::Hero => Self::new(vec![
                (ms(150), RevealStage::Title),
                (ms(450), RevealStage::Subtitle),
                (ms(600), RevealStage::CallToAction),
            ]),
            StepKind::Final => Self::new(vec![
                (ms(200), RevealStage::Title),
                (ms(500), RevealStage::Subtitle),
                (ms(500), RevealStage::Body),
                (ms(800), RevealStage::CallToAction),
            ]),
            _ => Self::new(vec![
                (ms(100), RevealStage::Title),
                (ms(300), RevealStage::Subtitle),
                (ms(400), RevealStage::Body),
            ]),
        }
    }

    /// Number of stages visible `elapsed` after mount
    pub fn revealed_after(&self, elapsed: Duration) -> usize {
        let mut at = Duration::ZERO;
        self.stages
            .iter()
            .take_while(|(delay, _)| {
                at += *delay;
                at <= elapsed
            })
            .count()
    }

    /// Wait from `elapsed` until the next stage shows; `None` once all have
    pub fn next_reveal_in(&self, elapsed: Duration) -> Option<Duration> {
        let mut at = Duration::ZERO;
        self.stages
            .iter()
            .map(|(delay, _)| {
                at += *delay;
                at
            })
            .find(|at| *at > elapsed)
            .map(|at| at - elapsed)
    }

    fn position_of(&self, stage: RevealStage) -> Option<usize> {
        self.stages.iter().position(|(_, s)| *s == stage)
    }

    /// Whether `stage` is visible once `revealed` stages have fired.
    /// Stages not in the plan are always visible.
    pub fn is_visible(&self, stage: RevealStage, revealed: usize) -> bool {
        self.position_of(stage)
            .is_none_or(|position| position < revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> RevealSchedule {
        RevealSchedule::new(vec![
            (Duration::from_millis(100), RevealStage::Title),
            (Duration::from_millis(200), RevealStage::Subtitle),
            (Duration::from_millis(300), RevealStage::CallToAction),
        ])
    }

    #[test]
    fn test_revealed_after_uses_cumulative_delays() {
        let plan = plan();
        assert_eq!(plan.revealed_after(Duration::ZERO), 0);
        assert_eq!(plan.revealed_after(Duration::from_millis(100)), 1);
        assert_eq!(plan.revealed_after(Duration::from_millis(299)), 1);
        assert_eq!(plan.revealed_after(Duration::from_millis(300)), 2);
        assert_eq!(plan.revealed_after(Duration::from_secs(5)), 3);
    }

    #[test]
    fn test_next_reveal_counts_from_elapsed() {
        let plan = plan();
        assert_eq!(plan.next_reveal_in(Duration::ZERO), Some(Duration::from_millis(100)));
        assert_eq!(plan.next_reveal_in(Duration::from_millis(100)), Some(Duration::from_millis(200)));
        assert_eq!(plan.next_reveal_in(Duration::from_millis(250)), Some(Duration::from_millis(50)));
        assert_eq!(plan.next_reveal_in(Duration::from_millis(600)), None);
    }

    #[test]
    fn test_late_wakeup_catches_up() {
        // A timer delayed past two deadlines shows both stages at once
        let plan = plan();
        let elapsed = Duration::from_millis(320);
        assert_eq!(plan.revealed_after(elapsed), 2);
        assert_eq!(plan.next_reveal_in(elapsed), Some(Duration::from_millis(280)));
    }

    #[test]
    fn test_visibility_by_revealed_count() {
        let plan = plan();
        assert!(!plan.is_visible(RevealStage::Title, 0));
        assert!(plan.is_visible(RevealStage::Title, 1));
        assert!(!plan.is_visible(RevealStage::CallToAction, 2));
        // Body is not part of this plan
        assert!(plan.is_visible(RevealStage::Body, 0));
    }

    #[test]
    fn test_every_kind_starts_with_title() {
        for kind in [
            StepKind::Hero,
            StepKind::Onboarding,
            StepKind::Plans,
            StepKind::Dashboard,
            StepKind::Roles,
            StepKind::Final,
        ] {
            let plan = RevealSchedule::for_kind(kind);
            assert!(!plan.is_visible(RevealStage::Title, 0), "{kind}");
            assert!(plan.is_visible(RevealStage::Title, 1), "{kind}");
            assert!(plan.next_reveal_in(Duration::ZERO).is_some(), "{kind}");
        }
    }

    #[test]
    fn test_empty_plan_has_nothing_pending() {
        let plan = RevealSchedule::new(Vec::new());
        assert_eq!(plan.next_reveal_in(Duration::ZERO), None);
        assert_eq!(plan.revealed_after(Duration::from_secs(1)), 0);
    }
}
