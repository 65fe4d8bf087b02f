//! One-shot "open this saved scene" hint passed from the library listing to
//! the editor.

use shared::LOAD_SCENE_INDEX_KEY;

use super::storage::KeyValueStore;
use crate::error::Result;

/// Accessors for the navigation hint slot.
pub struct NavigationHint;

impl NavigationHint {
    /// Ask the next editor session to open the saved scene at `index`.
    pub fn request_open<S: KeyValueStore>(storage: &S, index: usize) -> Result<()> {
        storage.set(LOAD_SCENE_INDEX_KEY, &index.to_string())?;
        Ok(())
    }

    /// Consume the hint. The slot is cleared whether or not it held a usable index.
    pub fn take<S: KeyValueStore>(storage: &S) -> Option<usize> {
        let raw = match storage.get(LOAD_SCENE_INDEX_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Cannot read navigation hint: {e}");
                return None;
            }
        };

        if let Err(e) = storage.remove(LOAD_SCENE_INDEX_KEY) {
            tracing::warn!("Cannot clear navigation hint: {e}");
        }

        match raw.trim().parse() {
            Ok(index) => Some(index),
            Err(_) => {
                tracing::warn!("Ignoring malformed navigation hint {raw:?}");
                None
            }
        }
    }
}
