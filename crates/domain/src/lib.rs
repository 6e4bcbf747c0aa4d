//! Guildhall domain: players, pets, enemies, races and guilds.
//!
//! Callers pass in "today"; the crate never reads the wall clock and never
//! logs. `Enemy::attack_with` takes the damage roll from the caller, while
//! `Enemy::attack` rolls with the thread RNG.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Guild, GuildError, NewGuild, MAX_GUILD_LEVEL};
pub use entities::{
    Enemy, EnemyError, NewPet, NewPlayer, Pet, PetError, Player, PlayerError, MAX_PET_LEVEL,
    MAX_PLAYER_LEVEL, MAX_STEP_DISTANCE,
};
pub use error::DomainError;
pub use events::{DamageOutcome, RosterChange};
pub use ids::{GuildId, PlayerId};
pub use value_objects::{
    EnemyName, GuildDescription, GuildName, HonorTitle, PetName, PlayerName, PlayerRace,
    Position, PositionError, RaceStats, MAX_X, MAX_Y,
};
