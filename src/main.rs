//! # Secret App
//!
//! An HTTP service that stores a plaintext secret and returns it exactly once.
//!
//! ## Overview
//!
//! 1. **Store** - `POST /` with `{"plain_text": "..."}` returns `{"id": "<md5 hex>"}`
//! 2. **Retrieve** - `GET /<id>` returns `{"data": "..."}` and deletes the secret
//! 3. **Burn** - any later `GET /<id>` returns `404 {"data": ""}`
//!
//! ## Features
//!
//! - **Content-addressed ids**: the id is the MD5 hex digest of the plaintext
//! - **At-most-one reader**: concurrent reads of one id yield the value once
//! - **Prometheus metrics**: exposed on `/metrics`
//! - **Health probe**: `/healthcheck`
//!
//! ## Configuration
//!
//! `BIND_ADDRESS`, `PORT`, `SHUTDOWN_GRACE_SECS` and `RUST_LOG`, or the matching
//! command-line flags (`secret-app --help`).

use anyhow::Result;
use clap::Parser;

use secret_app::cli::Cli;
use secret_app::runtime::{initialize, run_server};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging, metrics, store and router
    let init_result = initialize(&cli)?;

    // Serve until shutdown
    run_server(init_result).await
}
