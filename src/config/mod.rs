//! # Configuration
//!
//! Service configuration loaded from environment variables.
//!
//! All configuration has sensible defaults and can be overridden via environment variables
//! or, for the listener, via command-line flags.

mod server;

pub use server::ServerConfig;

/// Load configuration from environment variables with defaults
pub fn load_config() -> ServerConfig {
    ServerConfig::from_env()
}
