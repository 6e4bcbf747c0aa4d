//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::settings::DEFAULT_LOG_FILTER;

/// Install the global subscriber: `EnvFilter` from `directive` plus the fmt layer.
///
/// An unparsable directive falls back to the default filter. Calling this
/// again after a subscriber is installed does nothing.
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive, "Tracing initialised");
    }
}
