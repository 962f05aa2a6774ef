//! # Serve Loop
//!
//! Runs the HTTP server until a shutdown signal, then gives in-flight requests
//! up to the configured grace period to finish.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::oneshot;
use tracing::{info, warn};

use super::initialization::InitializationResult;
use super::shutdown::shutdown_signal;
use crate::server::serve;

/// Serve until a shutdown signal and the drain window have passed
///
/// # Errors
///
/// Fails when the configured bind address is invalid or the server errors.
pub async fn run_server(init: InitializationResult) -> Result<()> {
    let InitializationResult { config, router } = init;
    let addr = config.socket_addr()?;
    let grace = Duration::from_secs(config.shutdown_grace_secs);

    let (signalled_tx, signalled_rx) = oneshot::channel::<()>();
    let shutdown = async move {
        shutdown_signal().await;
        // Receiver is gone only if the server already stopped
        let _ = signalled_tx.send(());
    };

    let server = serve(addr, router, shutdown);
    tokio::pin!(server);

    let drain_deadline = async move {
        if signalled_rx.await.is_ok() {
            tokio::time::sleep(grace).await;
        } else {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = &mut server => result?,
        () = drain_deadline => {
            warn!("In-flight requests did not finish within {:?}, exiting", grace);
        }
    }

    info!("Shut down, unread secrets discarded");
    Ok(())
}
