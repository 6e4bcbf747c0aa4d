//! Guildhall Engine library.
//!
//! Application layer around the guildhall domain.
//!
//! ## Structure
//!
//! - `use_cases/` - User story orchestration over the domain
//! - `stores/` - In-memory player and guild state
//! - `infrastructure/` - Ports, adapters, settings and tracing setup
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

/// Shared helpers for unit tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
