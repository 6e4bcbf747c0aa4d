//! Value objects - immutable, validated-by-construction domain values

mod names;
mod player_race;
mod position;

pub use names::{EnemyName, GuildDescription, GuildName, HonorTitle, PetName, PlayerName};
pub use player_race::{PlayerRace, RaceStats};
pub use position::{Position, PositionError, MAX_X, MAX_Y};
