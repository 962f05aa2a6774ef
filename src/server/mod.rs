//! # HTTP Server
//!
//! Axum router for the secret API, health probe and metrics, plus the
//! serve loop with graceful shutdown.

mod handlers;
mod middleware;
mod responses;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use responses::{SecretDataResponse, StoreRequest, StoreResponse};

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::service::SecretService;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: SecretService,
}

/// Build the application router around an explicitly constructed service
pub fn build_router(service: SecretService) -> Router {
    Router::new()
        // Health check and metrics
        .route("/healthcheck", get(health_check))
        .route("/metrics", get(metrics_handler))
        // Secret API
        // HEAD must not reach the GET handlers: a read burns the secret
        .route(
            "/",
            get(retrieve_without_id)
                .post(store_secret)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/{*id}",
            get(retrieve_secret)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(logging_middleware)),
        )
        .with_state(AppState { service })
}

/// Bind `addr` and serve `router` until `shutdown` resolves
///
/// # Errors
///
/// Fails when the address cannot be bound or the server stops with an I/O error.
pub async fn serve<F>(addr: SocketAddr, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("Failed to read local address")?;
    info!("Listening on http://{}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}
