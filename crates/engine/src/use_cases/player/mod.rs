//! Player use cases.

mod error;
mod register_player;

use std::sync::Arc;

use guildhall_domain::{Player, PlayerId};

use crate::stores::PlayerStore;

pub use error::PlayerOpsError;
pub use register_player::{RegisterPlayer, RegisterPlayerInput};

/// Container for player use cases.
pub struct PlayerUseCases {
    pub register: Arc<RegisterPlayer>,
    players: Arc<PlayerStore>,
}

impl PlayerUseCases {
    pub fn new(register: Arc<RegisterPlayer>, players: Arc<PlayerStore>) -> Self {
        Self { register, players }
    }

    pub fn get(&self, id: PlayerId) -> Result<Arc<Player>, PlayerOpsError> {
        tracing::debug!(player_id = %id, "Looking up player");
        self.players.get(id).ok_or(PlayerOpsError::NotFound(id))
    }
}
