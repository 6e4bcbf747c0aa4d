//! Domain Events
//!
//! Return types from entity and aggregate mutations, communicating what
//! happened when state was modified.

pub mod combat_events;
pub mod roster_events;

pub use combat_events::*;
pub use roster_events::*;
