//! # Secret Service
//!
//! Bridges write and read requests to the [`SecretStore`]:
//!
//! - `store` validates the plaintext, derives its content-addressed id and stores it
//! - `retrieve` sanitizes the id and takes the value out of the store
//!
//! Storing the same plaintext twice before it is read leaves a single entry under
//! the shared id. Retrieval failures never reveal whether an id existed: unknown,
//! already-read and malformed ids all produce [`SecretError::NotFound`].

mod error;
mod key;

pub use error::SecretError;
pub use key::{derive_key, sanitize_key};

use std::sync::Arc;

use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::observability::metrics;
use crate::store::SecretStore;

#[derive(Debug, Clone)]
pub struct SecretService {
    store: Arc<SecretStore>,
}

impl SecretService {
    pub fn new(store: Arc<SecretStore>) -> Self {
        Self { store }
    }

    /// Store a plaintext and return its id
    ///
    /// # Errors
    ///
    /// [`SecretError::Validation`] when the plaintext is empty.
    pub fn store(&self, plaintext: Zeroizing<String>) -> Result<String, SecretError> {
        if plaintext.is_empty() {
            warn!("Rejected store request with empty plaintext");
            metrics::increment_validation_failures();
            return Err(SecretError::Validation);
        }

        // Hash outside the store lock
        let key = derive_key(&plaintext);
        self.store.put(key.clone(), plaintext);

        info!(secret_id = %key, "Stored secret");
        metrics::increment_secrets_stored();
        Ok(key)
    }

    /// Take the plaintext stored under `raw_key`, removing it from the store
    ///
    /// # Errors
    ///
    /// [`SecretError::NotFound`] when the id was never stored, has already been
    /// read, or is not a valid id.
    pub fn retrieve(&self, raw_key: &str) -> Result<Zeroizing<String>, SecretError> {
        let key = sanitize_key(raw_key);
        let taken = if key.is_empty() {
            None
        } else {
            self.store.take_and_remove(&key)
        };

        if let Some(value) = taken {
            info!(secret_id = %key, "Retrieved secret");
            metrics::increment_secrets_retrieved();
            Ok(value)
        } else {
            info!(secret_id = %key, "No secret for id");
            metrics::increment_secrets_not_found();
            Err(SecretError::NotFound)
        }
    }
}
