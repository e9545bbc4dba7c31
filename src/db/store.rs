//! Key-value snapshot storage contract.

use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::db::StoreError;

/// Durable key-value storage for serialized snapshots.
///
/// The session treats every error as "nothing stored" and carries on.
pub trait SnapshotStore {
    /// Stores `payload` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError>;

    /// Returns the payload stored under `key`, if any.
    fn load(&mut self, key: &str) -> Result<Option<String>, StoreError>;

    /// Deletes `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &mut S {
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        (**self).save(key, payload)
    }

    fn load(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-memory store for tests and embedding hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    #[instrument(skip(self, payload))]
    fn save(&mut self, key: &str, payload: &str) -> Result<(), StoreError> {
        debug!(bytes = payload.len(), "Saving snapshot");
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }

    #[instrument(skip(self))]
    fn load(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    #[instrument(skip(self))]
    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_previous_value() {
        let mut store = MemoryStore::new();
        store.save("k", "one").unwrap();
        store.save("k", "two").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let mut store = MemoryStore::new();
        assert!(store.remove("absent").is_ok());
        assert!(store.load("absent").unwrap().is_none());
    }

    #[test]
    fn test_mutable_reference_is_a_store() {
        fn save_through<S: SnapshotStore>(mut store: S) {
            store.save("k", "v").unwrap();
        }
        let mut store = MemoryStore::new();
        save_through(&mut store);
        assert_eq!(store.get("k"), Some("v"));
    }
}
