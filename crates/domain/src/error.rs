//! Unified error types for the domain layer
//!
//! Every type carries its own fine-grained error enum (one variant per rule).
//! They all convert into [`DomainError`] so callers that don't care which rule
//! failed can still use `?` across types.

use thiserror::Error;

use crate::aggregates::guild::GuildError;
use crate::entities::enemy::EnemyError;
use crate::entities::pet::PetError;
use crate::entities::player::PlayerError;
use crate::value_objects::PositionError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Container is at capacity
    #[error("Container full: {current}/{max} items")]
    ContainerFull { current: u32, max: u32 },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a field value is outside its allowed range or format.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Player name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for PlayerRace {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         Self::from_name(s).ok_or_else(|| DomainError::parse(format!("Unknown race: {}", s)))
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a container full error
    pub fn container_full(current: u32, max: u32) -> Self {
        Self::ContainerFull { current, max }
    }
}

impl From<PositionError> for DomainError {
    fn from(err: PositionError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PetError> for DomainError {
    fn from(err: PetError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PlayerError> for DomainError {
    fn from(err: PlayerError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<EnemyError> for DomainError {
    fn from(err: EnemyError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<GuildError> for DomainError {
    fn from(err: GuildError) -> Self {
        match err {
            GuildError::GuildFull { max_members } => {
                let max = u32::try_from(max_members).unwrap_or(u32::MAX);
                Self::ContainerFull { current: max, max }
            }
            GuildError::MemberNotFound => Self::not_found("GuildMember", err.to_string()),
            GuildError::MemberAlreadyExists | GuildError::MemberNoPet => {
                Self::Constraint(err.to_string())
            }
            other => Self::Validation(other.to_string()),
        }
    }
}
