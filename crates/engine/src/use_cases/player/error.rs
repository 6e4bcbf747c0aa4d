//! Player operation errors.

use guildhall_domain::{DomainError, PlayerError, PlayerId};

/// Errors that can occur during player operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlayerOpsError {
    #[error("Player rejected: {0}")]
    Invalid(#[from] PlayerError),
    #[error("Player not found: {0}")]
    NotFound(PlayerId),
}

impl From<PlayerOpsError> for DomainError {
    fn from(err: PlayerOpsError) -> Self {
        match err {
            PlayerOpsError::Invalid(e) => e.into(),
            PlayerOpsError::NotFound(id) => DomainError::not_found("Player", id.to_string()),
        }
    }
}
