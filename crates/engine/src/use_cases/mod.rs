//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases pull "today" and random rolls from the ports and log what they do;
//! the rules themselves live in the domain.

pub mod encounter;
pub mod guild;
pub mod player;

// Re-export main types
pub use encounter::Encounter;
pub use guild::{GuildOpsError, GuildUseCases};
pub use player::{PlayerOpsError, PlayerUseCases};
