//! Infrastructure implementations.
//!
//! Contains port trait implementations and process-level setup.

pub mod clock;
pub mod ports;
pub mod settings;
pub mod telemetry;
