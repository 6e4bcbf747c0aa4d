//! Guild operation errors.

use guildhall_domain::{DomainError, GuildError, GuildId, PlayerId};

/// Errors that can occur during guild operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuildOpsError {
    #[error("Guild rejected: {0}")]
    Rejected(#[from] GuildError),
    #[error("Requested capacity {requested} exceeds the limit of {limit}")]
    CapacityTooLarge { requested: i32, limit: usize },
    #[error("Guild not found: {0}")]
    GuildNotFound(GuildId),
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),
}

impl From<GuildOpsError> for DomainError {
    fn from(err: GuildOpsError) -> Self {
        match err {
            GuildOpsError::Rejected(e) => e.into(),
            GuildOpsError::CapacityTooLarge { .. } => DomainError::validation(err.to_string()),
            GuildOpsError::GuildNotFound(id) => DomainError::not_found("Guild", id.to_string()),
            GuildOpsError::PlayerNotFound(id) => DomainError::not_found("Player", id.to_string()),
        }
    }
}
