//! Combat-related domain events
//!
//! These enums communicate what happened when an enemy was hit, allowing
//! callers to react appropriately.

/// Outcome of applying damage to an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Enemy was already dead, no effect
    AlreadyDead,
    /// Enemy took damage but survived
    Wounded { damage_dealt: i32, remaining_health: i32 },
    /// Enemy was killed by this damage
    Killed { damage_dealt: i32 },
}

impl DamageOutcome {
    /// Health actually removed by the hit.
    pub fn damage_dealt(&self) -> i32 {
        match self {
            DamageOutcome::AlreadyDead => 0,
            DamageOutcome::Wounded { damage_dealt, .. } | DamageOutcome::Killed { damage_dealt } => {
                *damage_dealt
            }
        }
    }
}
