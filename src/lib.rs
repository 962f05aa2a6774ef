//! Secret App Library
//!
//! Burn-after-read secret storage behind a small HTTP API. A secret is stored
//! under the MD5 hex digest of its plaintext and can be read back exactly once.
//! Tests are included in the module files and under `tests/`.

pub mod cli;
pub mod config;
pub mod constants;
pub mod observability;
pub mod runtime;
pub mod server;
pub mod service;
pub mod store;

pub use service::{SecretError, SecretService};
pub use store::SecretStore;
