//! In-memory state storage modules.
//!
//! - `PlayerStore` - registered players, shared with guild rosters
//! - `GuildStore` - founded guilds, mutated in place under the entry guard

pub mod guilds;
pub mod players;

// Re-export store types
pub use guilds::GuildStore;
pub use players::PlayerStore;
