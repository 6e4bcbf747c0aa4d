//! Guild use cases.
//!
//! Founding guilds and moving registered players in and out of rosters.

mod dismiss;
mod error;
mod found_guild;
mod overview;
mod recruit;

use std::sync::Arc;

pub use dismiss::Dismiss;
pub use error::GuildOpsError;
pub use found_guild::FoundGuild;
pub use overview::{GuildOverview, GuildSummary, MemberSummary};
pub use recruit::Recruit;

/// Container for guild use cases.
pub struct GuildUseCases {
    pub found: Arc<FoundGuild>,
    pub recruit: Arc<Recruit>,
    pub dismiss: Arc<Dismiss>,
    pub overview: Arc<GuildOverview>,
}

impl GuildUseCases {
    pub fn new(
        found: Arc<FoundGuild>,
        recruit: Arc<Recruit>,
        dismiss: Arc<Dismiss>,
        overview: Arc<GuildOverview>,
    ) -> Self {
        Self {
            found,
            recruit,
            dismiss,
            overview,
        }
    }
}
