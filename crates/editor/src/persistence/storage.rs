//! The [`KeyValueStore`] trait: named durable slots holding strings.
//!
//! The saved-scene list and the navigation hint each live in one slot.
//! Any backend (memory, files, a browser-like local store) implements this
//! trait; the persistence store never touches a backend directly.

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O failure in a file-based backend.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other backend failure.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable key-value slots.
///
/// `set` replaces the whole value of a slot; a reader never observes a
/// partially written value.
pub trait KeyValueStore {
    /// Read a slot. Returns `Ok(None)` if the slot does not exist.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Create or overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
