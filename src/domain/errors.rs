//! Domain errors for the Linear context client.

use thiserror::Error;

/// Errors returned by every issue-tracker operation.
///
/// Each variant is a distinct failure cause so callers can render a
/// specific message instead of a generic "something went wrong".
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Linear client is not initialized; run `connect` with an API key first")]
    NotInitialized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No context issue is set")]
    NoContextIssue,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Linear API failure: {0}")]
    Api(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

impl TrackerError {
    /// True for failures reported by the network or the remote API.
    pub const fn is_transport_or_api(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Api(_))
    }

    /// Short machine-readable tag, used in JSON output and log fields.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotInitialized => "not_initialized",
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::NoContextIssue => "no_context_issue",
            Self::Transport(_) => "transport",
            Self::Api(_) => "api",
            Self::Store(_) => "store",
        }
    }
}

/// Errors raised by secret and state store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
