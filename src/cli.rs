//! # Command Line
//!
//! Flags for the `secret-app` binary. Flags take precedence over the
//! environment variables read by [`ServerConfig::from_env`].
//!
//! ## Usage
//!
//! ```bash
//! # Listen on the default 0.0.0.0:8080
//! secret-app
//!
//! # Listen on localhost only
//! secret-app --bind 127.0.0.1 --port 9000
//! ```

use clap::Parser;

use crate::config::ServerConfig;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "secret-app",
    version,
    about = "Store a secret and hand it back exactly once"
)]
pub struct Cli {
    /// Address to bind (overrides BIND_ADDRESS)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Seconds to let in-flight requests finish after a shutdown signal (overrides SHUTDOWN_GRACE_SECS)
    #[arg(long)]
    pub shutdown_grace_secs: Option<u64>,
}

impl Cli {
    /// Apply flag overrides on top of a loaded configuration
    #[must_use]
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind) = &self.bind {
            config.bind_address.clone_from(bind);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(secs) = self.shutdown_grace_secs {
            config.shutdown_grace_secs = secs;
        }
        config
    }
}
