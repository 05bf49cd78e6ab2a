//! Device-local key-value persistence port.

use std::collections::HashMap;
use std::sync::Mutex;

/// Storage key holding the last-applied saved profile as serialized JSON.
pub const APPLIED_PROFILE_KEY: &str = "whitemark.profile.applied";
/// Storage key holding the resolved user identifier. Read, never written,
/// by the saved-profiles manager.
pub const USER_ID_KEY: &str = "whitemark.user_id";

/// Device-local key-value storage.
///
/// Implementations absorb their own write failures (log, don't propagate),
/// matching browser local-storage semantics.
pub trait ProfileStorage: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-memory storage backend for tests and embedders without device
/// storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Construct an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .expect("storage mutex poisoned")
            .remove(key);
    }
}
