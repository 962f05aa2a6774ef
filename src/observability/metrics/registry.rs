//! # Metrics Registry
//!
//! Prometheus metrics registry setup, registration and text rendering.

use anyhow::{Context, Result};
use prometheus::{Encoder, Registry, TextEncoder};
use std::sync::LazyLock;

/// Global Prometheus metrics registry
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Register all metrics with the Prometheus registry
///
/// Prometheus Registry::register() takes ownership (Box<dyn Collector>),
/// so we clone the metrics. Since Prometheus metrics internally use Arc,
/// cloning is cheap (just increments a reference count).
///
/// # Errors
///
/// Fails when a metric is already registered (called more than once).
pub fn register_metrics() -> Result<()> {
    // Register secret lifecycle metrics
    super::secret_metrics::register_secret_metrics()?;

    // Register HTTP request metrics
    super::http_metrics::register_http_metrics()?;

    Ok(())
}

/// Render all registered metrics in the Prometheus text exposition format
///
/// # Errors
///
/// Fails when the registry cannot be encoded.
pub fn render_metrics() -> Result<String> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder
        .encode(&REGISTRY.gather(), &mut buffer)
        .context("Failed to encode metrics")?;
    String::from_utf8(buffer).context("Metrics output was not valid UTF-8")
}
