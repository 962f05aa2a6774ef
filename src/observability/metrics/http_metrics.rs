//! # HTTP Metrics
//!
//! Request counts and latency, recorded by the request logging middleware.

use crate::observability::metrics::registry::REGISTRY;
use anyhow::Result;
use axum::http::Method;
use prometheus::{Histogram, IntCounterVec};
use std::sync::LazyLock;

static REQUESTS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "secret_app_requests_total",
            "Total number of HTTP requests handled",
        ),
        &["method", "status"],
    )
    .expect("Failed to create REQUESTS_TOTAL metric - this should never happen")
});

static REQUEST_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "secret_app_request_duration_seconds",
            "Duration of HTTP request handling in seconds",
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
    )
    .expect("Failed to create REQUEST_DURATION metric - this should never happen")
});

/// Register HTTP metrics with the registry
pub(crate) fn register_http_metrics() -> Result<()> {
    REGISTRY.register(Box::new(REQUESTS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(REQUEST_DURATION.clone()))?;
    Ok(())
}

/// Label value for a request method
///
/// Extension methods collapse to `other` so clients cannot mint new series.
pub fn method_label(method: &Method) -> &'static str {
    match method.as_str() {
        "GET" => "GET",
        "POST" => "POST",
        "HEAD" => "HEAD",
        "PUT" => "PUT",
        "DELETE" => "DELETE",
        "PATCH" => "PATCH",
        "OPTIONS" => "OPTIONS",
        _ => "other",
    }
}

pub fn observe_request(method: &Method, status: u16, duration: f64) {
    let status = status.to_string();
    REQUESTS_TOTAL
        .with_label_values(&[method_label(method), status.as_str()])
        .inc();
    REQUEST_DURATION.observe(duration);
}
