//! # Secret Store
//!
//! In-memory, burn-after-read storage for secrets.
//!
//! Every access to the map goes through a single mutex. Reading an entry and
//! removing it happen in the same critical section, so among any number of
//! concurrent readers of one key exactly one sees the value.
//!
//! Values are held in [`Zeroizing`] buffers: once a value has been handed out
//! and dropped, or overwritten by a later `put`, its memory is wiped.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use zeroize::Zeroizing;

/// Mutex-guarded mapping from secret id to plaintext
#[derive(Default)]
pub struct SecretStore {
    entries: Mutex<HashMap<String, Zeroizing<String>>>,
}

impl SecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the value for `key`
    ///
    /// Last writer wins; a previous unread value under the same key is dropped
    /// (and wiped) without notice.
    pub fn put(&self, key: impl Into<String>, value: Zeroizing<String>) {
        let key = key.into();
        self.lock().insert(key, value);
    }

    /// Atomically read and delete the value for `key`
    ///
    /// Returns `None` when the key was never stored or has already been taken.
    pub fn take_and_remove(&self, key: &str) -> Option<Zeroizing<String>> {
        self.lock().remove(key)
    }

    // A panic while holding the guard cannot leave a HashMap insert/remove half applied,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Zeroizing<String>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretStore").finish_non_exhaustive()
    }
}
