//! Player entity
//!
//! A player is identified by a [`PlayerId`] assigned at construction. Two
//! handles to the same player compare equal even if their attributes have
//! since diverged; that identity is what guild rosters key on.

use chrono::NaiveDate;
use thiserror::Error;

use crate::common::is_in_future;
use crate::entities::pet::{NewPet, Pet, PetError};
use crate::ids::PlayerId;
use crate::value_objects::{HonorTitle, PlayerName};

/// Highest level a player can reach.
pub const MAX_PLAYER_LEVEL: i32 = 99;

/// Upper bound for critical and dodge chances.
const MAX_PERCENTAGE: f64 = 100.0;

/// Error when a player attribute breaks its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("The player name must be between 5 and 50 characters after trimming.")]
    InvalidName,
    #[error("The player level must be between 1 and 99.")]
    InvalidLevel,
    #[error("The player creation date cannot be in the future.")]
    InvalidCreationDate,
    #[error("The experience must be greater than or equal to 0.")]
    InvalidExperience,
    #[error("The gold must be greater than or equal to 0.")]
    InvalidGold,
    #[error("The health regeneration per second must be greater than or equal to 0.")]
    InvalidHealthRegenPerSec,
    #[error("The critical percentage must be between 0.0 and 100.0.")]
    InvalidCriticalPct,
    #[error("The dodge percentage must be between 0.0 and 100.0.")]
    InvalidDodgePct,
    #[error(
        "The honor title must be 1 to 30 characters long and contain only English letters and spaces."
    )]
    InvalidHonorTitle,
    #[error("Invalid pet: {0}")]
    Pet(#[from] PetError),
}

/// Raw, unvalidated player attributes.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub level: i32,
    pub creation_date: NaiveDate,
    pub experience: i32,
    pub gold: i32,
    pub health_regen_per_sec: f64,
    pub critical_pct: f64,
    pub dodge_pct: f64,
    pub honor_title: String,
}

/// A player account's character.
///
/// # Invariants
///
/// - `name` is 5-50 characters after trimming (enforced by `PlayerName`)
/// - `level` is in `1..=99`
/// - `experience` and `gold` are never negative
/// - `health_regen_per_sec` is finite and non-negative
/// - `critical_pct` and `dodge_pct` are in `0.0..=100.0`
/// - `honor_title` is letters and spaces only (enforced by `HonorTitle`)
/// - `pet` is fixed at construction
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
    level: i32,
    creation_date: NaiveDate,
    experience: i32,
    gold: i32,
    health_regen_per_sec: f64,
    critical_pct: f64,
    dodge_pct: f64,
    honor_title: HonorTitle,
    pet: Option<Pet>,
}

impl Player {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a player without a pet.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use guildhall_domain::entities::{NewPlayer, Player};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let player = Player::new(
    ///     NewPlayer {
    ///         name: "Valeera".into(),
    ///         level: 42,
    ///         creation_date: NaiveDate::from_ymd_opt(2022, 1, 9).unwrap(),
    ///         experience: 1200,
    ///         gold: 350,
    ///         health_regen_per_sec: 1.5,
    ///         critical_pct: 12.5,
    ///         dodge_pct: 30.0,
    ///         honor_title: "Shadow of the Night".into(),
    ///     },
    ///     today,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(player.name().as_str(), "Valeera");
    /// assert!(player.pet().is_none());
    /// ```
    pub fn new(draft: NewPlayer, today: NaiveDate) -> Result<Self, PlayerError> {
        Ok(Self {
            id: PlayerId::new(),
            name: PlayerName::new(draft.name)?,
            level: validate_level(draft.level)?,
            creation_date: validate_creation_date(draft.creation_date, today)?,
            experience: validate_non_negative(draft.experience, PlayerError::InvalidExperience)?,
            gold: validate_non_negative(draft.gold, PlayerError::InvalidGold)?,
            health_regen_per_sec: validate_regen(draft.health_regen_per_sec)?,
            critical_pct: validate_percentage(draft.critical_pct, PlayerError::InvalidCriticalPct)?,
            dodge_pct: validate_percentage(draft.dodge_pct, PlayerError::InvalidDodgePct)?,
            honor_title: HonorTitle::new(draft.honor_title)?,
            pet: None,
        })
    }

    /// Create a player together with the pet they own.
    ///
    /// Player attributes are validated first, then the pet's.
    pub fn with_pet(draft: NewPlayer, pet: NewPet, today: NaiveDate) -> Result<Self, PlayerError> {
        let mut player = Self::new(draft, today)?;
        player.pet = Some(Pet::new(pet, today)?);
        Ok(player)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    #[inline]
    pub fn experience(&self) -> i32 {
        self.experience
    }

    #[inline]
    pub fn gold(&self) -> i32 {
        self.gold
    }

    #[inline]
    pub fn health_regen_per_sec(&self) -> f64 {
        self.health_regen_per_sec
    }

    #[inline]
    pub fn critical_pct(&self) -> f64 {
        self.critical_pct
    }

    #[inline]
    pub fn dodge_pct(&self) -> f64 {
        self.dodge_pct
    }

    #[inline]
    pub fn honor_title(&self) -> &HonorTitle {
        &self.honor_title
    }

    #[inline]
    pub fn pet(&self) -> Option<&Pet> {
        self.pet.as_ref()
    }

    #[inline]
    pub fn has_pet(&self) -> bool {
        self.pet.is_some()
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PlayerError> {
        self.name = PlayerName::new(name)?;
        Ok(())
    }

    pub fn set_level(&mut self, level: i32) -> Result<(), PlayerError> {
        self.level = validate_level(level)?;
        Ok(())
    }

    pub fn set_creation_date(
        &mut self,
        creation_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PlayerError> {
        self.creation_date = validate_creation_date(creation_date, today)?;
        Ok(())
    }

    pub fn set_experience(&mut self, experience: i32) -> Result<(), PlayerError> {
        self.experience = validate_non_negative(experience, PlayerError::InvalidExperience)?;
        Ok(())
    }

    pub fn set_gold(&mut self, gold: i32) -> Result<(), PlayerError> {
        self.gold = validate_non_negative(gold, PlayerError::InvalidGold)?;
        Ok(())
    }

    pub fn set_health_regen_per_sec(&mut self, rate: f64) -> Result<(), PlayerError> {
        self.health_regen_per_sec = validate_regen(rate)?;
        Ok(())
    }

    pub fn set_critical_pct(&mut self, pct: f64) -> Result<(), PlayerError> {
        self.critical_pct = validate_percentage(pct, PlayerError::InvalidCriticalPct)?;
        Ok(())
    }

    pub fn set_dodge_pct(&mut self, pct: f64) -> Result<(), PlayerError> {
        self.dodge_pct = validate_percentage(pct, PlayerError::InvalidDodgePct)?;
        Ok(())
    }

    pub fn set_honor_title(&mut self, title: impl Into<String>) -> Result<(), PlayerError> {
        self.honor_title = HonorTitle::new(title)?;
        Ok(())
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

fn validate_level(level: i32) -> Result<i32, PlayerError> {
    if (1..=MAX_PLAYER_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(PlayerError::InvalidLevel)
    }
}

fn validate_creation_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, PlayerError> {
    if is_in_future(date, today) {
        Err(PlayerError::InvalidCreationDate)
    } else {
        Ok(date)
    }
}

fn validate_non_negative(value: i32, err: PlayerError) -> Result<i32, PlayerError> {
    if value >= 0 {
        Ok(value)
    } else {
        Err(err)
    }
}

fn validate_regen(rate: f64) -> Result<f64, PlayerError> {
    // NaN fails the comparison
    if rate >= 0.0 && rate.is_finite() {
        Ok(rate)
    } else {
        Err(PlayerError::InvalidHealthRegenPerSec)
    }
}

fn validate_percentage(pct: f64, err: PlayerError) -> Result<f64, PlayerError> {
    if (0.0..=MAX_PERCENTAGE).contains(&pct) {
        Ok(pct)
    } else {
        Err(err)
    }
}
