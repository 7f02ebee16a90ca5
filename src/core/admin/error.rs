//! Errors returned by simulated admin mutations

/// Admin store error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdminError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("A plan named '{0}' already exists")]
    DuplicatePlan(String),

    #[error("Plan '{name}' is used by {tenants} tenant(s)")]
    PlanInUse { name: String, tenants: usize },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    #[error("Domain already registered: {0}")]
    DuplicateDomain(String),

    #[error("Cannot {action} {kind} {id} while it is {status}")]
    InvalidTransition {
        kind: &'static str,
        id: String,
        action: &'static str,
        status: String,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl AdminError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn transition(
        kind: &'static str,
        id: &str,
        action: &'static str,
        status: impl ToString,
    ) -> Self {
        Self::InvalidTransition {
            kind,
            id: id.to_string(),
            action,
            status: status.to_string(),
        }
    }
}
