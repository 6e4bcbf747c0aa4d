//! Found guild use case.
//!
//! Creates a guild dated against the clock and stores it.

use std::sync::Arc;

use guildhall_domain::{Guild, GuildId, NewGuild};

use crate::infrastructure::ports::ClockPort;
use crate::stores::GuildStore;

use super::error::GuildOpsError;

/// Found guild use case.
///
/// Rosters are allocated up front, so the requested capacity is capped by
/// `max_guild_capacity` before the domain sees it.
pub struct FoundGuild {
    guilds: Arc<GuildStore>,
    clock: Arc<dyn ClockPort>,
    max_guild_capacity: usize,
}

impl FoundGuild {
    pub fn new(guilds: Arc<GuildStore>, clock: Arc<dyn ClockPort>, max_guild_capacity: usize) -> Self {
        Self {
            guilds,
            clock,
            max_guild_capacity,
        }
    }

    /// Execute the found guild use case.
    ///
    /// # Returns
    /// * `Ok(GuildId)` - The new guild's id
    /// * `Err(GuildOpsError::CapacityTooLarge)` - Roster larger than the configured limit
    /// * `Err(GuildOpsError::Rejected)` - A guild rule failed
    pub fn execute(&self, input: NewGuild) -> Result<GuildId, GuildOpsError> {
        let exceeds_limit = usize::try_from(input.max_members)
            .map(|requested| requested > self.max_guild_capacity)
            .unwrap_or(false);
        if exceeds_limit {
            tracing::warn!(
                requested = input.max_members,
                limit = self.max_guild_capacity,
                "Guild capacity above configured limit"
            );
            return Err(GuildOpsError::CapacityTooLarge {
                requested: input.max_members,
                limit: self.max_guild_capacity,
            });
        }

        let today = self.clock.now().date_naive();
        let name = input.name.clone();
        let guild = Guild::new(input, today).map_err(|e| {
            tracing::warn!(name = %name, error = %e, "Guild founding rejected");
            GuildOpsError::from(e)
        })?;

        tracing::info!(
            guild_id = %guild.id(),
            name = %guild.name(),
            max_members = guild.max_members(),
            "Guild founded"
        );
        Ok(self.guilds.insert(guild))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{clock, new_guild};
    use guildhall_domain::GuildError;

    fn use_case(guilds: Arc<GuildStore>, limit: usize) -> FoundGuild {
        FoundGuild::new(guilds, clock(), limit)
    }

    #[test]
    fn founds_and_stores_guild() {
        let guilds = Arc::new(GuildStore::new());
        let id = use_case(guilds.clone(), 100)
            .execute(new_guild("Knights of the Ebon Blade", 10))
            .unwrap();

        assert!(guilds.contains(id));
        assert_eq!(guilds.read(id, |g| g.max_members()), Some(10));
    }

    #[test]
    fn capacity_above_limit_rejected_before_construction() {
        let guilds = Arc::new(GuildStore::new());
        let result = use_case(guilds.clone(), 20).execute(new_guild("Knights of the Ebon Blade", 21));

        assert_eq!(
            result.unwrap_err(),
            GuildOpsError::CapacityTooLarge {
                requested: 21,
                limit: 20
            }
        );
        assert!(guilds.is_empty());
    }

    #[test]
    fn capacity_at_limit_accepted() {
        let guilds = Arc::new(GuildStore::new());
        assert!(use_case(guilds, 20).execute(new_guild("Knights of the Ebon Blade", 20)).is_ok());
    }

    #[test]
    fn non_positive_capacity_left_to_domain() {
        let guilds = Arc::new(GuildStore::new());
        let result = use_case(guilds.clone(), 20).execute(new_guild("Knights of the Ebon Blade", 0));

        assert_eq!(result.unwrap_err(), GuildOpsError::Rejected(GuildError::InvalidMaxMembers));
        assert!(guilds.is_empty());
    }

    #[test]
    fn domain_rule_surfaces_exact_error() {
        let mut input = new_guild("Knights of the Ebon Blade", 5);
        input.level = 25;

        let result = use_case(Arc::new(GuildStore::new()), 100).execute(input);
        assert_eq!(result.unwrap_err(), GuildOpsError::Rejected(GuildError::InvalidLevel));
    }
}
