//! Entities - domain objects with identity or mutable, validated state

pub mod enemy;
pub mod pet;
pub mod player;

pub use enemy::{Enemy, EnemyError, MAX_STEP_DISTANCE};
pub use pet::{NewPet, Pet, PetError, MAX_PET_LEVEL};
pub use player::{NewPlayer, Player, PlayerError, MAX_PLAYER_LEVEL};
