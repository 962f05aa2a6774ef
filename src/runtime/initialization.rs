//! # Initialization
//!
//! Service initialization: tracing, metrics registration, configuration,
//! and construction of the store, service and router.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::cli::Cli;
use crate::config::{load_config, ServerConfig};
use crate::observability;
use crate::server::build_router;
use crate::service::SecretService;
use crate::store::SecretStore;

/// Initialization result containing all components needed to serve
#[derive(Debug)]
pub struct InitializationResult {
    /// Effective server configuration (environment plus CLI overrides)
    pub config: ServerConfig,
    /// Router with all routes and middleware attached
    pub router: Router,
}

/// Initialize the service runtime
///
/// This function handles:
/// - Tracing subscriber setup
/// - Metrics registration
/// - Configuration loading
/// - Store, service and router construction
///
/// # Errors
///
/// Fails when metrics were already registered in this process.
pub fn initialize(cli: &Cli) -> Result<InitializationResult> {
    observability::logging::init_tracing();

    info!("Starting secret-app v{}", env!("CARGO_PKG_VERSION"));

    observability::metrics::register_metrics().context("Failed to register metrics")?;

    let config = cli.apply(load_config());
    info!(
        bind_address = %config.bind_address,
        port = config.port,
        shutdown_grace_secs = config.shutdown_grace_secs,
        "Loaded configuration"
    );

    let service = SecretService::new(Arc::new(SecretStore::new()));
    let router = build_router(service);

    Ok(InitializationResult { config, router })
}
