//! Engine settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `GUILDHALL_LOG` | `guildhall_engine=info` |
//! | `GUILDHALL_MAX_GUILD_CAPACITY` | `100` |
//! | `GUILDHALL_RNG_SEED` | unset |

use std::path::Path;
use std::str::FromStr;

pub const LOG_FILTER_VAR: &str = "GUILDHALL_LOG";
pub const MAX_GUILD_CAPACITY_VAR: &str = "GUILDHALL_MAX_GUILD_CAPACITY";
pub const RNG_SEED_VAR: &str = "GUILDHALL_RNG_SEED";

pub const DEFAULT_LOG_FILTER: &str = "guildhall_engine=info";
pub const DEFAULT_MAX_GUILD_CAPACITY: usize = 100;

/// Errors raised while reading settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Largest roster `FoundGuild` will allocate.
    pub max_guild_capacity: usize,
    /// Seed for reproducible attack rolls.
    pub rng_seed: Option<u64>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_guild_capacity: DEFAULT_MAX_GUILD_CAPACITY,
            rng_seed: None,
        }
    }
}

impl EngineSettings {
    /// Load `.env` files from the repo root, then read the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        load_dotenv_from_repo_root();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();
        Ok(Self {
            log_filter: read(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
            max_guild_capacity: match read(MAX_GUILD_CAPACITY_VAR) {
                Some(raw) => parse_capacity(&raw)?,
                None => defaults.max_guild_capacity,
            },
            rng_seed: read(RNG_SEED_VAR)
                .map(|raw| parse_value(RNG_SEED_VAR, &raw))
                .transpose()?,
        })
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.parse().map_err(|_| SettingsError::Invalid {
        key,
        value: raw.to_string(),
    })
}

fn parse_capacity(raw: &str) -> Result<usize, SettingsError> {
    let capacity: usize = parse_value(MAX_GUILD_CAPACITY_VAR, raw)?;
    if capacity == 0 {
        return Err(SettingsError::Invalid {
            key: MAX_GUILD_CAPACITY_VAR,
            value: raw.to_string(),
        });
    }
    Ok(capacity)
}

fn load_dotenv_from_repo_root() {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
