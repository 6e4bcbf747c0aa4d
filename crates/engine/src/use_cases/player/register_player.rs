//! Register player use case.
//!
//! Validates a new player (and optional pet) against today's date and stores it.

use std::sync::Arc;

use guildhall_domain::{NewPet, NewPlayer, Player};

use crate::infrastructure::ports::ClockPort;
use crate::stores::PlayerStore;

use super::error::PlayerOpsError;

/// Input for registering a player.
#[derive(Debug, Clone)]
pub struct RegisterPlayerInput {
    pub player: NewPlayer,
    /// Players without a pet can register but cannot join a guild.
    pub pet: Option<NewPet>,
}

/// Register player use case.
pub struct RegisterPlayer {
    players: Arc<PlayerStore>,
    clock: Arc<dyn ClockPort>,
}

impl RegisterPlayer {
    pub fn new(players: Arc<PlayerStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { players, clock }
    }

    /// Execute the register player use case.
    ///
    /// # Returns
    /// * `Ok(Arc<Player>)` - The stored player handle
    /// * `Err(PlayerOpsError::Invalid)` - A player or pet rule failed
    pub fn execute(&self, input: RegisterPlayerInput) -> Result<Arc<Player>, PlayerOpsError> {
        let today = self.clock.now().date_naive();
        let name = input.player.name.clone();

        let built = match input.pet {
            Some(pet) => Player::with_pet(input.player, pet, today),
            None => Player::new(input.player, today),
        };

        let player = built.map_err(|e| {
            tracing::warn!(name = %name, error = %e, "Player registration rejected");
            PlayerOpsError::from(e)
        })?;

        let player = self.players.insert(player);
        tracing::info!(
            player_id = %player.id(),
            name = %player.name(),
            level = player.level(),
            has_pet = player.has_pet(),
            "Player registered"
        );
        Ok(player)
    }
}
