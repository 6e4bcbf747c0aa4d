//! Common test helpers for engine use cases.
//!
//! Every fixture is pinned to [`TODAY`] so date rules never depend on the
//! wall clock.

use std::sync::Arc;

use chrono::NaiveDate;
use guildhall_domain::{NewGuild, NewPet, NewPlayer};

use crate::infrastructure::clock::{FixedClock, FixedRandom};
use crate::infrastructure::settings::EngineSettings;
use crate::stores::{GuildStore, PlayerStore};

// =============================================================================
// Dates
// =============================================================================

pub const TODAY: (i32, u32, u32) = (2024, 5, 1);

pub fn today() -> NaiveDate {
    let (y, m, d) = TODAY;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn clock() -> Arc<FixedClock> {
    let (y, m, d) = TODAY;
    Arc::new(FixedClock::on(y, m, d))
}

pub fn random(value: i32) -> Arc<FixedRandom> {
    Arc::new(FixedRandom(value))
}

// =============================================================================
// Drafts
// =============================================================================

pub fn new_player(name: &str, level: i32) -> NewPlayer {
    NewPlayer {
        name: name.into(),
        level,
        creation_date: NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
        experience: 1200,
        gold: 75,
        health_regen_per_sec: 1.5,
        critical_pct: 12.0,
        dodge_pct: 8.0,
        honor_title: "Guardian".into(),
    }
}

pub fn new_pet() -> NewPet {
    NewPet {
        name: "Whiskers".into(),
        level: 5,
        birthdate: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
        loyalty: 70,
        stamina: 40,
        aggressive: false,
    }
}

pub fn new_guild(name: &str, max_members: i32) -> NewGuild {
    NewGuild {
        name: name.into(),
        level: 2,
        description: "Keepers of the old ways".into(),
        creation_date: NaiveDate::from_ymd_opt(2024, 4, 21).unwrap(),
        recruiting: true,
        max_members,
    }
}

// =============================================================================
// Stores
// =============================================================================

pub fn stores() -> (Arc<PlayerStore>, Arc<GuildStore>) {
    (Arc::new(PlayerStore::new()), Arc::new(GuildStore::new()))
}

pub fn settings_with_capacity(max_guild_capacity: usize) -> EngineSettings {
    EngineSettings {
        max_guild_capacity,
        ..EngineSettings::default()
    }
}
