//! Registered players.

use std::sync::Arc;

use dashmap::DashMap;
use guildhall_domain::{Player, PlayerId};

/// Concurrent map of registered players.
///
/// Players are stored behind `Arc` so guild rosters can hold the same handle.
pub struct PlayerStore {
    inner: DashMap<PlayerId, Arc<Player>>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Insert a player, returning the shared handle.
    pub fn insert(&self, player: Player) -> Arc<Player> {
        let player = Arc::new(player);
        self.inner.insert(player.id(), Arc::clone(&player));
        player
    }

    pub fn get(&self, id: PlayerId) -> Option<Arc<Player>> {
        self.inner.get(&id).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove a player from the registry. Rosters keep their own handles.
    pub fn remove(&self, id: PlayerId) -> Option<Arc<Player>> {
        self.inner.remove(&id).map(|(_, player)| player)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}
