//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Clock (the domain takes "today" as an argument)
//! - Random (enemy attack rolls)

mod testing;

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};
