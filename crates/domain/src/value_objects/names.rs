//! Validated text newtypes for domain entities
//!
//! These newtypes are valid by construction. Each one reports failures through
//! the error type of the entity that owns it, so a bad pet name surfaces as
//! [`PetError::InvalidName`] and a bad guild name as [`GuildError::InvalidName`].
//!
//! Lengths are counted in characters (see [`char_len`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregates::guild::GuildError;
use crate::common::{char_len, is_blank, is_letters_and_spaces, StringExt};
use crate::entities::enemy::EnemyError;
use crate::entities::pet::PetError;
use crate::entities::player::PlayerError;

const PLAYER_NAME_MIN: usize = 5;
const PLAYER_NAME_MAX: usize = 50;
const PET_NAME_MIN: usize = 3;
const PET_NAME_MAX: usize = 20;
const ENEMY_NAME_MAX: usize = 50;
const GUILD_NAME_MIN: usize = 5;
const GUILD_NAME_MAX: usize = 25;
const GUILD_DESCRIPTION_MAX: usize = 100;
const HONOR_TITLE_MAX: usize = 30;

/// Generates the accessor and conversion impls shared by every name newtype.
macro_rules! impl_name_conversions {
    ($name:ident, $err:ty) => {
        impl $name {
            /// Returns the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $err;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// ============================================================================
// PlayerName
// ============================================================================

/// A validated player name (5-50 chars after trimming, stored trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::InvalidName` if the trimmed name is shorter than
    /// 5 or longer than 50 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.char_len_within(PLAYER_NAME_MIN, PLAYER_NAME_MAX) {
            return Err(PlayerError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl_name_conversions!(PlayerName, PlayerError);

// ============================================================================
// HonorTitle
// ============================================================================

/// A validated honor title (1-30 chars after trimming, English letters and spaces)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HonorTitle(String);

impl HonorTitle {
    /// Create a new validated honor title.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::InvalidHonorTitle` if the trimmed title is empty,
    /// longer than 30 characters, or contains anything besides ASCII letters
    /// and spaces.
    pub fn new(title: impl Into<String>) -> Result<Self, PlayerError> {
        let title = title.into();
        let trimmed = title.trim();
        if char_len(trimmed) > HONOR_TITLE_MAX || !is_letters_and_spaces(trimmed) {
            return Err(PlayerError::InvalidHonorTitle);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl_name_conversions!(HonorTitle, PlayerError);

// ============================================================================
// PetName
// ============================================================================

/// A validated pet name (3-20 chars after trimming, stored trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PetName(String);

impl PetName {
    /// Create a new validated pet name.
    ///
    /// # Errors
    ///
    /// Returns `PetError::InvalidName` if the name is blank or its trimmed
    /// length is outside 3-20 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, PetError> {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.char_len_within(PET_NAME_MIN, PET_NAME_MAX) {
            return Err(PetError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl_name_conversions!(PetName, PetError);

// ============================================================================
// EnemyName
// ============================================================================

/// A validated enemy name (1-50 chars after trimming, stored trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnemyName(String);

impl EnemyName {
    /// Create a new validated enemy name.
    ///
    /// # Errors
    ///
    /// Returns `EnemyError::InvalidName` if the name is blank or longer than
    /// 50 characters after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, EnemyError> {
        let name = name.into();
        let trimmed = name.trim();
        if !trimmed.char_len_within(1, ENEMY_NAME_MAX) {
            return Err(EnemyError::InvalidName);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl_name_conversions!(EnemyName, EnemyError);

// ============================================================================
// GuildName
// ============================================================================

/// A validated guild name (5-25 chars, not blank)
///
/// Unlike player and pet names, guild names are kept exactly as given; the
/// length bound applies to the untrimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GuildName(String);

impl GuildName {
    /// Create a new validated guild name.
    ///
    /// # Errors
    ///
    /// Returns `GuildError::InvalidName` if the name is blank or its length
    /// is outside 5-25 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, GuildError> {
        let name = name.into();
        if is_blank(&name) || !name.char_len_within(GUILD_NAME_MIN, GUILD_NAME_MAX) {
            return Err(GuildError::InvalidName);
        }
        Ok(Self(name))
    }
}

impl_name_conversions!(GuildName, GuildError);

// ============================================================================
// GuildDescription
// ============================================================================

/// A validated guild description (<=100 chars, empty is valid)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GuildDescription(String);

impl GuildDescription {
    /// Create a new validated description.
    ///
    /// # Errors
    ///
    /// Returns `GuildError::InvalidDescription` if the text exceeds 100 characters.
    pub fn new(text: impl Into<String>) -> Result<Self, GuildError> {
        let text = text.into();
        if char_len(&text) > GUILD_DESCRIPTION_MAX {
            return Err(GuildError::InvalidDescription);
        }
        Ok(Self(text))
    }

    /// Returns true if the description is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl_name_conversions!(GuildDescription, GuildError);

#[cfg(test)]
mod tests {
    use super::*;

    mod player_name {
        use super::*;

        #[test]
        fn trimmed_before_length_check() {
            let name = PlayerName::new("   Arthas   ").unwrap();
            assert_eq!(name.as_str(), "Arthas");
        }

        #[test]
        fn length_bounds() {
            assert!(PlayerName::new("Abcde").is_ok());
            assert!(PlayerName::new("a".repeat(50)).is_ok());
            assert_eq!(PlayerName::new("Abcd"), Err(PlayerError::InvalidName));
            assert_eq!(PlayerName::new("  Abcd  "), Err(PlayerError::InvalidName));
            assert_eq!(PlayerName::new("a".repeat(51)), Err(PlayerError::InvalidName));
        }

        #[test]
        fn blank_rejected() {
            assert_eq!(PlayerName::new("       "), Err(PlayerError::InvalidName));
        }

        #[test]
        fn deserialization_validates() {
            assert!(serde_json::from_str::<PlayerName>("\"Abc\"").is_err());
            let name: PlayerName = serde_json::from_str("\"Jaina Proudmoore\"").unwrap();
            assert_eq!(name.to_string(), "Jaina Proudmoore");
        }
    }

    mod honor_title {
        use super::*;

        #[test]
        fn letters_and_spaces_accepted() {
            let title = HonorTitle::new("  Slayer of Dragons ").unwrap();
            assert_eq!(title.as_str(), "Slayer of Dragons");
        }

        #[test]
        fn digits_and_punctuation_rejected() {
            assert_eq!(HonorTitle::new("Slayer 2"), Err(PlayerError::InvalidHonorTitle));
            assert_eq!(HonorTitle::new("Sir-Lancelot"), Err(PlayerError::InvalidHonorTitle));
        }

        #[test]
        fn empty_and_too_long_rejected() {
            assert_eq!(HonorTitle::new("   "), Err(PlayerError::InvalidHonorTitle));
            assert_eq!(HonorTitle::new("a".repeat(31)), Err(PlayerError::InvalidHonorTitle));
            assert!(HonorTitle::new("a".repeat(30)).is_ok());
        }
    }

    mod pet_name {
        use super::*;

        #[test]
        fn bounds() {
            assert!(PetName::new("Rex").is_ok());
            assert!(PetName::new("a".repeat(20)).is_ok());
            assert_eq!(PetName::new("Io"), Err(PetError::InvalidName));
            assert_eq!(PetName::new("a".repeat(21)), Err(PetError::InvalidName));
            assert_eq!(PetName::new(""), Err(PetError::InvalidName));
        }

        #[test]
        fn stored_trimmed() {
            assert_eq!(PetName::new("  Misha ").unwrap().as_str(), "Misha");
        }
    }

    mod enemy_name {
        use super::*;

        #[test]
        fn bounds() {
            assert!(EnemyName::new("G").is_ok());
            assert!(EnemyName::new("A".repeat(50)).is_ok());
            assert_eq!(EnemyName::new(""), Err(EnemyError::InvalidName));
            assert_eq!(EnemyName::new("  "), Err(EnemyError::InvalidName));
            assert_eq!(EnemyName::new("A".repeat(51)), Err(EnemyError::InvalidName));
        }
    }

    mod guild_name {
        use super::*;

        #[test]
        fn kept_as_given() {
            let name = GuildName::new(" Horde ").unwrap();
            assert_eq!(name.as_str(), " Horde ");
        }

        #[test]
        fn bounds() {
            assert!(GuildName::new("Horde").is_ok());
            assert!(GuildName::new("a".repeat(25)).is_ok());
            assert_eq!(GuildName::new("Abcd"), Err(GuildError::InvalidName));
            assert_eq!(GuildName::new("a".repeat(26)), Err(GuildError::InvalidName));
            assert_eq!(GuildName::new("        "), Err(GuildError::InvalidName));
        }
    }

    mod guild_description {
        use super::*;

        #[test]
        fn empty_is_valid() {
            let desc = GuildDescription::new("").unwrap();
            assert!(desc.is_empty());
        }

        #[test]
        fn max_length() {
            assert!(GuildDescription::new("d".repeat(100)).is_ok());
            assert_eq!(
                GuildDescription::new("d".repeat(101)),
                Err(GuildError::InvalidDescription)
            );
        }
    }
}
