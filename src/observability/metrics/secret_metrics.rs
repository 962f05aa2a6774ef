//! # Secret Metrics
//!
//! Counters for the secret lifecycle: stored, retrieved, not found, rejected.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use prometheus::IntCounter;
use std::sync::LazyLock;

static SECRETS_STORED_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secret_app_secrets_stored_total",
        "Total number of secrets stored",
    )
    .expect("Failed to create SECRETS_STORED_TOTAL metric - this should never happen")
});

static SECRETS_RETRIEVED_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secret_app_secrets_retrieved_total",
        "Total number of secrets retrieved (and burned)",
    )
    .expect("Failed to create SECRETS_RETRIEVED_TOTAL metric - this should never happen")
});

static SECRETS_NOT_FOUND_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secret_app_secrets_not_found_total",
        "Total number of reads for unknown, consumed or malformed ids",
    )
    .expect("Failed to create SECRETS_NOT_FOUND_TOTAL metric - this should never happen")
});

static VALIDATION_FAILURES_TOTAL: LazyLock<IntCounter> = LazyLock::new(|| {
    IntCounter::new(
        "secret_app_validation_failures_total",
        "Total number of rejected store requests",
    )
    .expect("Failed to create VALIDATION_FAILURES_TOTAL metric - this should never happen")
});

/// Register secret metrics with the registry
pub(crate) fn register_secret_metrics() -> Result<()> {
    REGISTRY.register(Box::new(SECRETS_STORED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(SECRETS_RETRIEVED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(SECRETS_NOT_FOUND_TOTAL.clone()))?;
    REGISTRY.register(Box::new(VALIDATION_FAILURES_TOTAL.clone()))?;
    Ok(())
}

pub fn increment_secrets_stored() {
    SECRETS_STORED_TOTAL.inc();
}

pub fn increment_secrets_retrieved() {
    SECRETS_RETRIEVED_TOTAL.inc();
}

pub fn increment_secrets_not_found() {
    SECRETS_NOT_FOUND_TOTAL.inc();
}

pub fn increment_validation_failures() {
    VALIDATION_FAILURES_TOTAL.inc();
}
