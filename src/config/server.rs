//! # Server Configuration
//!
//! HTTP server settings loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};

/// HTTP server configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to
    pub bind_address: String,
    /// HTTP server port for the secret API, metrics and health probe
    pub port: u16,
    /// Graceful shutdown window (seconds)
    /// How long in-flight requests may take to finish after a shutdown signal
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        use crate::constants::*;
        Self {
            bind_address: std::env::var("BIND_ADDRESS")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port: env_var_or_default("PORT", DEFAULT_PORT),
            shutdown_grace_secs: env_var_or_default(
                "SHUTDOWN_GRACE_SECS",
                DEFAULT_SHUTDOWN_GRACE_SECS,
            ),
        }
    }

    /// Resolve the socket address the server listens on
    ///
    /// # Errors
    ///
    /// Fails when `bind_address` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.shutdown_grace_secs, 10);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            port: 9000,
            shutdown_grace_secs: 1,
        };
        let addr = config.socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_socket_addr_ipv6() {
        let config = ServerConfig {
            bind_address: "::1".to_string(),
            ..ServerConfig::default()
        };
        let addr = config.socket_addr().expect("valid address");
        assert_eq!(addr.to_string(), "[::1]:8080");
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = ServerConfig {
            bind_address: "not an address".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_env_var_or_default_missing() {
        let value: u16 = env_var_or_default("SECRET_APP_TEST_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
    }
}
