//! Recruit use case.
//!
//! Seats a registered player in a guild's roster.

use std::sync::Arc;

use guildhall_domain::{GuildId, PlayerId, RosterChange};

use crate::stores::{GuildStore, PlayerStore};

use super::error::GuildOpsError;

/// Recruit use case.
pub struct Recruit {
    players: Arc<PlayerStore>,
    guilds: Arc<GuildStore>,
}

impl Recruit {
    pub fn new(players: Arc<PlayerStore>, guilds: Arc<GuildStore>) -> Self {
        Self { players, guilds }
    }

    /// Execute the recruit use case.
    ///
    /// # Returns
    /// * `Ok(RosterChange::Joined)` - The slot the player took
    /// * `Err(GuildOpsError::Rejected)` - No pet, guild full, or already a member
    pub fn execute(&self, guild_id: GuildId, player_id: PlayerId) -> Result<RosterChange, GuildOpsError> {
        let player = self
            .players
            .get(player_id)
            .ok_or(GuildOpsError::PlayerNotFound(player_id))?;

        let outcome = self
            .guilds
            .update(guild_id, |guild| guild.add_member(player))
            .ok_or(GuildOpsError::GuildNotFound(guild_id))?;

        match outcome {
            Ok(change) => {
                tracing::info!(
                    guild_id = %guild_id,
                    player_id = %player_id,
                    slot = change.slot(),
                    num_members = change.num_members(),
                    "Player joined guild"
                );
                Ok(change)
            }
            Err(e) => {
                tracing::warn!(
                    guild_id = %guild_id,
                    player_id = %player_id,
                    error = %e,
                    "Recruitment rejected"
                );
                Err(e.into())
            }
        }
    }
}
