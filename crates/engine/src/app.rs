//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort},
    settings::EngineSettings,
};
use crate::stores::{GuildStore, PlayerStore};
use crate::use_cases;

/// Main application state.
///
/// Holds the stores and every use case wired against them.
pub struct App {
    pub stores: Stores,
    pub use_cases: UseCases,
}

/// Container for all in-memory stores.
pub struct Stores {
    pub players: Arc<PlayerStore>,
    pub guilds: Arc<GuildStore>,
}

/// Container for all use cases.
pub struct UseCases {
    pub player: use_cases::PlayerUseCases,
    pub guild: use_cases::GuildUseCases,
    pub encounter: Arc<use_cases::Encounter>,
}

impl App {
    /// Wire the app against the real clock and random sources.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            settings,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::from_seed(settings.rng_seed)),
        )
    }

    pub fn new(
        settings: &EngineSettings,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let players = Arc::new(PlayerStore::new());
        let guilds = Arc::new(GuildStore::new());

        let player = use_cases::PlayerUseCases::new(
            Arc::new(use_cases::player::RegisterPlayer::new(
                players.clone(),
                clock.clone(),
            )),
            players.clone(),
        );

        let guild = use_cases::GuildUseCases::new(
            Arc::new(use_cases::guild::FoundGuild::new(
                guilds.clone(),
                clock.clone(),
                settings.max_guild_capacity,
            )),
            Arc::new(use_cases::guild::Recruit::new(players.clone(), guilds.clone())),
            Arc::new(use_cases::guild::Dismiss::new(guilds.clone())),
            Arc::new(use_cases::guild::GuildOverview::new(guilds.clone(), clock)),
        );

        let encounter = Arc::new(use_cases::Encounter::new(random));

        Self {
            stores: Stores { players, guilds },
            use_cases: UseCases {
                player,
                guild,
                encounter,
            },
        }
    }
}
