//! Guild roster events
//!
//! Returned by roster mutations so callers can see which slot changed.

use crate::ids::PlayerId;

/// A change to a guild's member roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    /// The player took the given slot
    Joined {
        player_id: PlayerId,
        slot: usize,
        num_members: usize,
    },
    /// The player vacated the given slot
    Left {
        player_id: PlayerId,
        slot: usize,
        num_members: usize,
    },
}

impl RosterChange {
    pub fn player_id(&self) -> PlayerId {
        match self {
            RosterChange::Joined { player_id, .. } | RosterChange::Left { player_id, .. } => {
                *player_id
            }
        }
    }

    pub fn slot(&self) -> usize {
        match self {
            RosterChange::Joined { slot, .. } | RosterChange::Left { slot, .. } => *slot,
        }
    }

    /// Roster size after the change.
    pub fn num_members(&self) -> usize {
        match self {
            RosterChange::Joined { num_members, .. } | RosterChange::Left { num_members, .. } => {
                *num_members
            }
        }
    }
}
