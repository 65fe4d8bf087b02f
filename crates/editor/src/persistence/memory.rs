//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::storage::{KeyValueStore, StorageError};

/// An in-memory implementation of [`KeyValueStore`].
///
/// Data is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one slot already filled.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Backend(format!("lock poisoned: {e}"))
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing() {
        let store = MemoryStorage::new();
        assert!(store.get("nope").unwrap().is_none());
    }

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStorage::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn test_with_slot() {
        let store = MemoryStorage::with_slot("savedScenes", "[]");
        assert_eq!(store.get("savedScenes").unwrap().as_deref(), Some("[]"));
    }
}
