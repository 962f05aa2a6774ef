//! # Metrics Module
//!
//! Prometheus metrics for monitoring the service, organized by responsibility.
//!
//! ## Sub-modules
//!
//! - `registry` - Metrics registry setup, registration and rendering
//! - `secret_metrics` - Secret lifecycle metrics (stored, retrieved, not found, rejected)
//! - `http_metrics` - HTTP request metrics (counts by method/status, latency)

pub mod http_metrics;
pub mod registry;
pub mod secret_metrics;

pub use http_metrics::*;
pub use registry::*;
pub use secret_metrics::*;
