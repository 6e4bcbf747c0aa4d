//! Guild aggregate - a fixed-capacity roster of players
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the roster is only reachable through methods
//! - **Newtypes**: `GuildName` and `GuildDescription` are valid by construction
//! - **Fixed capacity**: slots are allocated once and never resized
//! - **Shared members**: slots hold `Arc<Player>`; leaving the guild drops the
//!   guild's handle, never the player
//! - **Events**: roster mutations return a `RosterChange`

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use crate::common::{is_in_future, whole_days_between};
use crate::entities::Player;
use crate::events::RosterChange;
use crate::ids::{GuildId, PlayerId};
use crate::value_objects::{GuildDescription, GuildName};

/// Highest level a guild can reach.
pub const MAX_GUILD_LEVEL: i32 = 20;

/// Error when a guild rule is violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuildError {
    #[error("The guild name cannot be blank and must be between 5 and 25 characters.")]
    InvalidName,
    #[error("The guild level must be between 1 and 20.")]
    InvalidLevel,
    #[error("The guild description cannot exceed 100 characters.")]
    InvalidDescription,
    #[error("The guild creation date cannot be in the future.")]
    InvalidCreationDate,
    #[error("The maximum number of members must be greater than 0.")]
    InvalidMaxMembers,
    #[error("The guild is full ({max_members} members).")]
    GuildFull { max_members: usize },
    #[error("The member already exists in the guild.")]
    MemberAlreadyExists,
    #[error("The member does not exist in the guild.")]
    MemberNotFound,
    #[error("The member does not have a pet.")]
    MemberNoPet,
}

/// Raw, unvalidated guild attributes.
#[derive(Debug, Clone)]
pub struct NewGuild {
    pub name: String,
    pub level: i32,
    pub description: String,
    pub creation_date: NaiveDate,
    pub recruiting: bool,
    pub max_members: i32,
}

/// A guild and its member roster.
///
/// # Invariants
///
/// - the roster has exactly `max_members` slots for the guild's whole life
/// - every occupied slot holds a distinct player, and every member has a pet
/// - `sum_levels` equals the sum of the levels of the occupied slots
/// - the member counter always equals the number of occupied slots
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use guildhall_domain::aggregates::{Guild, NewGuild};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let guild = Guild::new(
///     NewGuild {
///         name: "Silver Hand".into(),
///         level: 3,
///         description: "Paladins of Lordaeron".into(),
///         creation_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///         recruiting: true,
///         max_members: 10,
///     },
///     today,
/// )
/// .unwrap();
///
/// assert_eq!(guild.num_members(), 0);
/// assert_eq!(guild.average_level(), 0.0);
/// assert_eq!(guild.days_of_life(today), 30);
/// ```
#[derive(Debug)]
pub struct Guild {
    id: GuildId,
    name: GuildName,
    level: i32,
    description: GuildDescription,
    creation_date: NaiveDate,
    recruiting: bool,
    slots: Box<[Option<Arc<Player>>]>,
    num_members: usize,
    sum_levels: i64,
}

impl Guild {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Validate the attributes, allocate the roster and claim the next id.
    ///
    /// The id is only claimed once every check has passed, so a rejected
    /// guild never burns an id.
    pub fn new(draft: NewGuild, today: NaiveDate) -> Result<Self, GuildError> {
        let name = GuildName::new(draft.name)?;
        let level = validate_level(draft.level)?;
        let description = GuildDescription::new(draft.description)?;
        if is_in_future(draft.creation_date, today) {
            return Err(GuildError::InvalidCreationDate);
        }
        let capacity = usize::try_from(draft.max_members)
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or(GuildError::InvalidMaxMembers)?;

        Ok(Self {
            id: GuildId::next(),
            name,
            level,
            description,
            creation_date: draft.creation_date,
            recruiting: draft.recruiting,
            slots: vec![None; capacity].into_boxed_slice(),
            num_members: 0,
            sum_levels: 0,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GuildId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &GuildName {
        &self.name
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn description(&self) -> &GuildDescription {
        &self.description
    }

    #[inline]
    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    #[inline]
    pub fn is_recruiting(&self) -> bool {
        self.recruiting
    }

    /// Roster capacity, fixed at construction.
    #[inline]
    pub fn max_members(&self) -> usize {
        self.slots.len()
    }

    /// The raw roster, one entry per slot.
    #[inline]
    pub fn slots(&self) -> &[Option<Arc<Player>>] {
        &self.slots
    }

    /// Current members, in slot order.
    pub fn members(&self) -> impl Iterator<Item = &Arc<Player>> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of occupied slots, counted by scanning the roster.
    pub fn num_members(&self) -> usize {
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        debug_assert_eq!(occupied, self.num_members, "member counter drifted");
        occupied
    }

    pub fn is_full(&self) -> bool {
        self.num_members() >= self.max_members()
    }

    /// Mean member level, or exactly 0.0 for an empty roster.
    pub fn average_level(&self) -> f64 {
        if self.num_members == 0 {
            return 0.0;
        }
        self.sum_levels as f64 / self.num_members as f64
    }

    /// Whole days since the guild was founded.
    pub fn days_of_life(&self, today: NaiveDate) -> i64 {
        whole_days_between(self.creation_date, today)
    }

    // =========================================================================
    // Roster
    // =========================================================================

    /// Whether `member` currently holds a slot.
    ///
    /// # Errors
    ///
    /// `MemberNoPet` if the player has no pet; such a player can never be a
    /// member, so the question is rejected rather than answered.
    pub fn contains_member(&self, member: &Player) -> Result<bool, GuildError> {
        if !member.has_pet() {
            return Err(GuildError::MemberNoPet);
        }
        Ok(self.find_slot(member).is_some())
    }

    /// Seat `member` in the first free slot.
    ///
    /// Checks run in order: pet, capacity, duplicate. Nothing changes unless
    /// all of them pass.
    pub fn add_member(&mut self, member: Arc<Player>) -> Result<RosterChange, GuildError> {
        if !member.has_pet() {
            return Err(GuildError::MemberNoPet);
        }
        if self.num_members >= self.max_members() {
            return Err(GuildError::GuildFull {
                max_members: self.max_members(),
            });
        }
        if self.find_slot(&member).is_some() {
            return Err(GuildError::MemberAlreadyExists);
        }

        let slot = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(GuildError::GuildFull {
                max_members: self.max_members(),
            })?;

        let player_id = member.id();
        self.sum_levels += i64::from(member.level());
        self.slots[slot] = Some(member);
        self.num_members += 1;

        Ok(RosterChange::Joined {
            player_id,
            slot,
            num_members: self.num_members,
        })
    }

    /// Free the slot held by `member`.
    pub fn remove_member(&mut self, member: &Player) -> Result<RosterChange, GuildError> {
        self.remove_member_by_id(member.id())
    }

    /// Free the slot held by the player with `player_id`.
    ///
    /// The roster keeps its own handle, so this works even when the caller
    /// no longer has the `Player`.
    pub fn remove_member_by_id(&mut self, player_id: PlayerId) -> Result<RosterChange, GuildError> {
        let slot = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|p| p.id() == player_id))
            .ok_or(GuildError::MemberNotFound)?;
        let removed = self.slots[slot]
            .take()
            .ok_or(GuildError::MemberNotFound)?;

        self.sum_levels -= i64::from(removed.level());
        self.num_members -= 1;

        Ok(RosterChange::Left {
            player_id,
            slot,
            num_members: self.num_members,
        })
    }

    fn find_slot(&self, member: &Player) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_deref() == Some(member))
    }
}

fn validate_level(level: i32) -> Result<i32, GuildError> {
    if (1..=MAX_GUILD_LEVEL).contains(&level) {
        Ok(level)
    } else {
        Err(GuildError::InvalidLevel)
    }
}

// ============================================================================
// Tests
// ============================================================================
