//! View errors

/// A component could not be activated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    #[error("No component registered as {0}")]
    NotRegistered(String),

    #[error("Component {iid} failed to start: {reason}")]
    Failed { iid: String, reason: String },
}

/// Loading a view frame failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot load view {iid}: {source}")]
pub struct LoadFailure {
    pub iid: String,
    #[source]
    pub source: ActivationError,
}

/// A foreign control refused a location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ControlError(pub String);
