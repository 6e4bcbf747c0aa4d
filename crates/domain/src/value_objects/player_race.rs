//! Playable races and their fixed stat presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Base stats granted by a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceStats {
    pub max_hp: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub strength: u32,
    pub agility: u32,
}

/// A playable race.
///
/// Races pair up as best partners: Warrior with Shaman, Ninja with Dark Mage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRace {
    Warrior,
    Ninja,
    Shaman,
    DarkMage,
}

impl PlayerRace {
    /// Every race, in declaration order.
    pub const ALL: [PlayerRace; 4] = [
        PlayerRace::Warrior,
        PlayerRace::Ninja,
        PlayerRace::Shaman,
        PlayerRace::DarkMage,
    ];

    /// Human-readable name ("Dark Mage").
    pub fn name(&self) -> &'static str {
        match self {
            PlayerRace::Warrior => "Warrior",
            PlayerRace::Ninja => "Ninja",
            PlayerRace::Shaman => "Shaman",
            PlayerRace::DarkMage => "Dark Mage",
        }
    }

    pub fn stats(&self) -> RaceStats {
        let (max_hp, vitality, intelligence, strength, agility) = match self {
            PlayerRace::Warrior => (150, 18, 6, 20, 10),
            PlayerRace::Ninja => (120, 12, 14, 15, 18),
            PlayerRace::Shaman => (110, 10, 20, 10, 12),
            PlayerRace::DarkMage => (130, 15, 15, 18, 10),
        };
        RaceStats {
            max_hp,
            vitality,
            intelligence,
            strength,
            agility,
        }
    }

    pub fn max_hp(&self) -> u32 {
        self.stats().max_hp
    }

    pub fn vitality(&self) -> u32 {
        self.stats().vitality
    }

    pub fn intelligence(&self) -> u32 {
        self.stats().intelligence
    }

    pub fn strength(&self) -> u32 {
        self.stats().strength
    }

    pub fn agility(&self) -> u32 {
        self.stats().agility
    }

    /// The race this one fights best alongside, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::value_objects::PlayerRace;
    ///
    /// assert_eq!(PlayerRace::Warrior.best_partner(), Some(PlayerRace::Shaman));
    /// assert_eq!(PlayerRace::DarkMage.best_partner(), Some(PlayerRace::Ninja));
    /// ```
    pub fn best_partner(&self) -> Option<PlayerRace> {
        match self {
            PlayerRace::Warrior => Some(PlayerRace::Shaman),
            PlayerRace::Shaman => Some(PlayerRace::Warrior),
            PlayerRace::Ninja => Some(PlayerRace::DarkMage),
            PlayerRace::DarkMage => Some(PlayerRace::Ninja),
        }
    }

    /// Case-insensitive lookup by display name.
    ///
    /// # Example
    ///
    /// ```
    /// use guildhall_domain::value_objects::PlayerRace;
    ///
    /// assert_eq!(PlayerRace::from_name("dark MAGE"), Some(PlayerRace::DarkMage));
    /// assert_eq!(PlayerRace::from_name("Paladin"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<PlayerRace> {
        Self::ALL
            .into_iter()
            .find(|race| race.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for PlayerRace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlayerRace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| DomainError::parse(format!("Unknown player race: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partners_are_symmetric() {
        for race in PlayerRace::ALL {
            let partner = race.best_partner().unwrap();
            assert_ne!(partner, race);
            assert_eq!(partner.best_partner(), Some(race));
        }
    }

    #[test]
    fn fixed_pairings() {
        assert_eq!(PlayerRace::Warrior.best_partner(), Some(PlayerRace::Shaman));
        assert_eq!(PlayerRace::Shaman.best_partner(), Some(PlayerRace::Warrior));
        assert_eq!(PlayerRace::Ninja.best_partner(), Some(PlayerRace::DarkMage));
        assert_eq!(PlayerRace::DarkMage.best_partner(), Some(PlayerRace::Ninja));
    }

    #[test]
    fn preset_stats() {
        assert_eq!(
            PlayerRace::Warrior.stats(),
            RaceStats {
                max_hp: 150,
                vitality: 18,
                intelligence: 6,
                strength: 20,
                agility: 10,
            }
        );
        assert_eq!(PlayerRace::Ninja.agility(), 18);
        assert_eq!(PlayerRace::Shaman.intelligence(), 20);
        assert_eq!(PlayerRace::DarkMage.max_hp(), 130);
        assert_eq!(PlayerRace::DarkMage.strength(), 18);
        assert_eq!(PlayerRace::Warrior.vitality(), 18);
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(PlayerRace::from_name("warrior"), Some(PlayerRace::Warrior));
        assert_eq!(PlayerRace::from_name("NINJA"), Some(PlayerRace::Ninja));
        assert_eq!(PlayerRace::from_name("Dark Mage"), Some(PlayerRace::DarkMage));
    }

    #[test]
    fn lookup_misses() {
        assert_eq!(PlayerRace::from_name(""), None);
        assert_eq!(PlayerRace::from_name("DarkMage"), None);
        assert_eq!(PlayerRace::from_name("Elf"), None);
    }

    #[test]
    fn from_str_reports_parse_error() {
        assert_eq!("shaman".parse::<PlayerRace>(), Ok(PlayerRace::Shaman));
        let err = "Orc".parse::<PlayerRace>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(PlayerRace::DarkMage.to_string(), "Dark Mage");
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PlayerRace::DarkMage).unwrap(),
            "\"DARK_MAGE\""
        );
    }
}
