//! Repository error types.
//!
//! Defined here so callers can match on the failure class instead of string
//! matching. Storage failures from the gateway propagate outward unchanged;
//! the repository makes no recovery attempt.

use thiserror::Error;
use uuid::Uuid;

/// Errors raised by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The referenced quiz id does not exist.
    #[error("quiz not found: {0}")]
    QuizNotFound(Uuid),

    /// The persistence gateway failed to load or save a collection.
    #[error("storage gateway failure: {0}")]
    Storage(#[from] anyhow::Error),

    /// A persisted collection could not be decoded.
    #[error("corrupt payload in slot '{slot}': {source}")]
    Corrupt {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RepositoryError {
    /// Returns `true` if the failure is a missing-quiz rejection rather than
    /// a storage problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::QuizNotFound(_))
    }
}
