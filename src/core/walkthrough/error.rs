//! Errors raised while building a walkthrough

/// Configuration errors for a step list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkthroughError {
    #[error("A walkthrough needs at least one step")]
    NoSteps,

    #[error("Duplicate step id: {0}")]
    DuplicateStepId(String),

    #[error("Step id must not be empty (position {0})")]
    EmptyStepId(usize),
}
