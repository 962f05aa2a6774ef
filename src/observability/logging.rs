//! # Logging
//!
//! Tracing subscriber setup. The filter is read from `RUST_LOG` and falls back
//! to [`DEFAULT_LOG_FILTER`](crate::constants::DEFAULT_LOG_FILTER).

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Install the global `fmt` subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
    {
        warn!("Tracing subscriber already initialized: {}", e);
    }
}
