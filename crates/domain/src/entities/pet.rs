//! Pet entity - a companion owned by exactly one player

use chrono::NaiveDate;
use thiserror::Error;

use crate::common::is_in_future;
use crate::value_objects::PetName;

/// Highest level a pet can reach.
pub const MAX_PET_LEVEL: i32 = 60;

/// Loyalty and stamina both live on a 0-100 scale.
const MAX_GAUGE: i32 = 100;

/// Error when a pet attribute breaks its rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PetError {
    #[error("The pet name cannot be blank and must be between 3 and 20 characters.")]
    InvalidName,
    #[error("The pet level must be between 1 and 60.")]
    InvalidLevel,
    #[error("The pet birthdate cannot be in the future.")]
    InvalidBirthdate,
    #[error("Pet loyalty must be between 0 and 100.")]
    InvalidLoyalty,
    #[error("Pet stamina must be between 0 and 100.")]
    InvalidStamina,
}

/// Raw, unvalidated pet attributes.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub level: i32,
    pub birthdate: NaiveDate,
    pub loyalty: i32,
    pub stamina: i32,
    pub aggressive: bool,
}

/// A player's companion.
///
/// # Invariants
///
/// - `name` is 3-20 characters after trimming (enforced by `PetName`)
/// - `level` is in `1..=60`
/// - `birthdate` was not after the `today` it was validated against
/// - `loyalty` and `stamina` are in `0..=100`
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    name: PetName,
    level: i32,
    birthdate: NaiveDate,
    loyalty: i32,
    stamina: i32,
    aggressive: bool,
}

impl Pet {
    /// Validate every attribute and build the pet.
    ///
    /// Fields are checked in declaration order; the first failing rule is
    /// reported.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use guildhall_domain::entities::{NewPet, Pet};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    /// let pet = Pet::new(
    ///     NewPet {
    ///         name: "Shadowfang".into(),
    ///         level: 12,
    ///         birthdate: NaiveDate::from_ymd_opt(2023, 8, 14).unwrap(),
    ///         loyalty: 80,
    ///         stamina: 65,
    ///         aggressive: true,
    ///     },
    ///     today,
    /// )
    /// .unwrap();
    /// assert_eq!(pet.name().as_str(), "Shadowfang");
    /// ```
    pub fn new(draft: NewPet, today: NaiveDate) -> Result<Self, PetError> {
        Ok(Self {
            name: PetName::new(draft.name)?,
            level: validate_level(draft.level)?,
            birthdate: validate_birthdate(draft.birthdate, today)?,
            loyalty: validate_gauge(draft.loyalty, PetError::InvalidLoyalty)?,
            stamina: validate_gauge(draft.stamina, PetError::InvalidStamina)?,
            aggressive: draft.aggressive,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &PetName {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    #[inline]
    pub fn loyalty(&self) -> i32 {
        self.loyalty
    }

    #[inline]
    pub fn stamina(&self) -> i32 {
        self.stamina
    }

    #[inline]
    pub fn is_aggressive(&self) -> bool {
        self.aggressive
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), PetError> {
        self.name = PetName::new(name)?;
        Ok(())
    }

    pub fn set_level(&mut self, level: i32) -> Result<(), PetError> {
        self.level = validate_level(level)?;
        Ok(())
    }

    pub fn set_birthdate(&mut self, birthdate: NaiveDate, today: NaiveDate) -> Result<(), PetError> {
        self.birthdate = validate_birthdate(birthdate, today)?;
        Ok(())
    }

    pub fn set_loyalty(&mut self, loyalty: i32) -> Result<(), PetError> {
        self.loyalty = validate_gauge(loyalty, PetError::InvalidLoyalty)?;
        Ok(())
    }

    pub fn set_stamina(&mut self, stamina: i32) -> Result<(), PetError> {
        self.stamina = validate_gauge(stamina, PetError::InvalidStamina)?;
        Ok(())
    }

    pub fn set_aggressive(&mut self, aggressive: bool) {
        self.aggressive = aggressive;
    }
}

fn validate_level(level: i32) -> Result<i32, PetError> {
    if (1..=MAX_PET_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(PetError::InvalidLevel)
    }
}

fn validate_birthdate(birthdate: NaiveDate, today: NaiveDate) -> Result<NaiveDate, PetError> {
    if is_in_future(birthdate, today) {
        Err(PetError::InvalidBirthdate)
    } else {
        Ok(birthdate)
    }
}

fn validate_gauge(value: i32, err: PetError) -> Result<i32, PetError> {
    if (0..=MAX_GAUGE).contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}
