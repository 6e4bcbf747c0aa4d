//! Dismiss use case.
//!
//! Frees a member's roster slot. The roster is searched by id, so players
//! already dropped from the registry can still be dismissed.

use std::sync::Arc;

use guildhall_domain::{GuildId, PlayerId, RosterChange};

use crate::stores::GuildStore;

use super::error::GuildOpsError;

/// Dismiss use case.
pub struct Dismiss {
    guilds: Arc<GuildStore>,
}

impl Dismiss {
    pub fn new(guilds: Arc<GuildStore>) -> Self {
        Self { guilds }
    }

    pub fn execute(&self, guild_id: GuildId, player_id: PlayerId) -> Result<RosterChange, GuildOpsError> {
        let outcome = self
            .guilds
            .update(guild_id, |guild| guild.remove_member_by_id(player_id))
            .ok_or(GuildOpsError::GuildNotFound(guild_id))?;

        match outcome {
            Ok(change) => {
                tracing::info!(
                    guild_id = %guild_id,
                    player_id = %player_id,
                    slot = change.slot(),
                    num_members = change.num_members(),
                    "Player left guild"
                );
                Ok(change)
            }
            Err(e) => {
                tracing::warn!(
                    guild_id = %guild_id,
                    player_id = %player_id,
                    error = %e,
                    "Dismissal rejected"
                );
                Err(e.into())
            }
        }
    }
}
