//! Step definitions for the guided product walkthrough

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::WalkthroughError;

/// Which view the renderer mounts for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum StepKind {
    #[display("hero")]
    Hero,
    #[display("onboarding")]
    Onboarding,
    #[display("plans")]
    Plans,
    #[display("dashboard")]
    Dashboard,
    #[display("roles")]
    Roles,
    #[display("final")]
    Final,
}

/// One screen of the walkthrough
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub kind: StepKind,
}

impl Step {
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: StepKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
        }
    }
}

/// Ordered, validated list of steps
///
/// Fixed at construction time. Always holds at least one step and every id is
/// unique, so `len() - 1` is a valid last index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCatalog {
    steps: Vec<Step>,
}

impl StepCatalog {
    /// Validate and wrap a list of steps
    pub fn new(steps: Vec<Step>) -> Result<Self, WalkthroughError> {
        if steps.is_empty() {
            return Err(WalkthroughError::NoSteps);
        }

        let mut seen = HashSet::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            if step.id.trim().is_empty() {
                return Err(WalkthroughError::EmptyStepId(position));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(WalkthroughError::DuplicateStepId(step.id.clone()));
            }
        }

        Ok(Self { steps })
    }

    /// The six-step product demo shown on `/demo`
    pub fn product_demo() -> Self {
        Self {
            steps: vec![
                Step::new("hero", "Welcome to Campusly", StepKind::Hero),
                Step::new("onboarding", "Onboard your school", StepKind::Onboarding),
                Step::new("plans", "Pick a plan", StepKind::Plans),
                Step::new("dashboard", "Your dashboard", StepKind::Dashboard),
                Step::new("roles", "Everyone has a place", StepKind::Roles),
                Step::new("final", "Ready when you are", StepKind::Final),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Step at `index`, clamped to the last step
    pub fn step(&self, index: usize) -> &Step {
        &self.steps[index.min(self.last_index())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }
}

impl Default for StepCatalog {
    fn default() -> Self {
        Self::product_demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_demo_has_six_steps_in_order() {
        let catalog = StepCatalog::product_demo();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["hero", "onboarding", "plans", "dashboard", "roles", "final"]
        );
        assert_eq!(catalog.last_index(), 5);
        assert_eq!(catalog.get(5).map(|s| s.kind), Some(StepKind::Final));
    }

    #[test]
    fn test_product_demo_passes_validation() {
        let steps: Vec<Step> = StepCatalog::product_demo().iter().cloned().collect();
        assert!(StepCatalog::new(steps).is_ok());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(StepCatalog::new(Vec::new()), Err(WalkthroughError::NoSteps));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = StepCatalog::new(vec![
            Step::new("intro", "Intro", StepKind::Hero),
            Step::new("intro", "Again", StepKind::Final),
        ]);

        assert_eq!(
            result,
            Err(WalkthroughError::DuplicateStepId("intro".to_string()))
        );
    }

    #[test]
    fn test_blank_id_rejected() {
        let result = StepCatalog::new(vec![
            Step::new("intro", "Intro", StepKind::Hero),
            Step::new("  ", "Blank", StepKind::Final),
        ]);

        assert_eq!(result, Err(WalkthroughError::EmptyStepId(1)));
    }

    #[test]
    fn test_step_kind_display() {
        assert_eq!(StepKind::Dashboard.to_string(), "dashboard");
        assert_eq!(StepKind::Final.to_string(), "final");
    }
}
