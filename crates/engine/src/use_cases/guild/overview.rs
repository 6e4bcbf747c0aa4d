//! Guild overview use case.
//!
//! Read-only roster statistics.

use std::sync::Arc;

use guildhall_domain::{Guild, GuildId, PlayerId};
use serde::Serialize;

use crate::infrastructure::ports::ClockPort;
use crate::stores::GuildStore;

use super::error::GuildOpsError;

/// One occupied roster slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    pub slot: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub level: i32,
}

/// Snapshot of a guild and its roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSummary {
    pub id: GuildId,
    pub name: String,
    pub level: i32,
    pub description: String,
    pub recruiting: bool,
    pub num_members: usize,
    pub max_members: usize,
    pub average_level: f64,
    pub days_of_life: i64,
    pub members: Vec<MemberSummary>,
}

impl GuildSummary {
    fn of(guild: &Guild, today: chrono::NaiveDate) -> Self {
        let members = guild
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(slot, member)| {
                member.as_ref().map(|player| MemberSummary {
                    slot,
                    player_id: player.id(),
                    name: player.name().to_string(),
                    level: player.level(),
                })
            })
            .collect();

        Self {
            id: guild.id(),
            name: guild.name().to_string(),
            level: guild.level(),
            description: guild.description().to_string(),
            recruiting: guild.is_recruiting(),
            num_members: guild.num_members(),
            max_members: guild.max_members(),
            average_level: guild.average_level(),
            days_of_life: guild.days_of_life(today),
            members,
        }
    }
}

/// Guild overview use case.
pub struct GuildOverview {
    guilds: Arc<GuildStore>,
    clock: Arc<dyn ClockPort>,
}

impl GuildOverview {
    pub fn new(guilds: Arc<GuildStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { guilds, clock }
    }

    pub fn execute(&self, guild_id: GuildId) -> Result<GuildSummary, GuildOpsError> {
        let today = self.clock.now().date_naive();
        let summary = self
            .guilds
            .read(guild_id, |guild| GuildSummary::of(guild, today))
            .ok_or(GuildOpsError::GuildNotFound(guild_id))?;

        tracing::debug!(
            guild_id = %guild_id,
            num_members = summary.num_members,
            average_level = summary.average_level,
            "Guild overview"
        );
        Ok(summary)
    }

    /// Summaries of every guild, by ascending id.
    pub fn list(&self) -> Vec<GuildSummary> {
        let today = self.clock.now().date_naive();
        self.guilds
            .ids()
            .into_iter()
            .filter_map(|id| self.guilds.read(id, |guild| GuildSummary::of(guild, today)))
            .collect()
    }
}
