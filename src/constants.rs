//! # Constants
//!
//! Default values and fixed response bodies shared across the service.

/// Default listening port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address (all interfaces)
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Default time allowed for in-flight requests to drain after a shutdown signal (seconds)
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "secret_app=info,tower_http=info";

/// Body returned by the health check route
pub const HEALTH_CHECK_RESPONSE: &str = "ok";

/// Body returned for unsupported methods on the secret routes
pub const METHOD_NOT_ALLOWED_RESPONSE: &str = "Method Not Allowed.";
