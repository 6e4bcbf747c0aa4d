//! Guildhall Engine - Main entry point.
//!
//! Runs a short scripted session against the in-memory stores so the wiring,
//! settings and logs can be checked end to end.

use chrono::NaiveDate;
use guildhall_domain::{Enemy, NewGuild, NewPet, NewPlayer};
use guildhall_engine::infrastructure::{settings::EngineSettings, telemetry};
use guildhall_engine::use_cases::player::RegisterPlayerInput;
use guildhall_engine::use_cases::GuildOpsError;
use guildhall_engine::App;

fn main() -> anyhow::Result<()> {
    let settings = EngineSettings::from_env()?;
    telemetry::init_tracing(&settings.log_filter);

    tracing::info!(
        max_guild_capacity = settings.max_guild_capacity,
        seeded = settings.rng_seed.is_some(),
        "Starting Guildhall Engine"
    );

    let app = App::from_settings(&settings);
    let founded = date(2024, 1, 15)?;

    let guild_id = app.use_cases.guild.found.execute(NewGuild {
        name: "Wardens of the Vale".into(),
        level: 4,
        description: "Sworn to keep the vale roads safe".into(),
        creation_date: founded,
        recruiting: true,
        max_members: 3,
    })?;

    for (name, level, pet) in [
        ("Elowen Brightleaf", 34, Some("Ember")),
        ("Garrick Stone", 41, Some("Boulder")),
        ("Maren Ashdown", 27, None),
    ] {
        let player = app.use_cases.player.register.execute(RegisterPlayerInput {
            player: NewPlayer {
                name: name.into(),
                level,
                creation_date: founded,
                experience: level * 150,
                gold: 20,
                health_regen_per_sec: 2.0,
                critical_pct: 10.0,
                dodge_pct: 5.0,
                honor_title: "Warden".into(),
            },
            pet: pet.map(|pet_name| NewPet {
                name: pet_name.into(),
                level: 3,
                birthdate: founded,
                loyalty: 90,
                stamina: 60,
                aggressive: false,
            }),
        })?;

        // Petless players are turned away; the rejection is already logged.
        match app.use_cases.guild.recruit.execute(guild_id, player.id()) {
            Ok(_) | Err(GuildOpsError::Rejected(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }

    let summary = app.use_cases.guild.overview.execute(guild_id)?;
    tracing::info!(summary = %serde_json::to_string(&summary)?, "Guild roster");

    let mut wolf = Enemy::new("Vale Wolf", 25, 3, 8, 100, 100)?;
    let damage = app.use_cases.encounter.strike(&wolf);
    app.use_cases.encounter.hit(&mut wolf, damage);
    app.use_cases.encounter.advance(&mut wolf, 3, 4);

    tracing::info!("Guildhall Engine finished");
    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("invalid date {year}-{month}-{day}"))
}
