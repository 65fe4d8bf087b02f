//! Saved-scene persistence.
//!
//! [`PersistenceStore`] keeps the most-recent-first list of named snapshots,
//! capped at [`MAX_SAVED_SCENES`]. It is loaded once from a
//! [`KeyValueStore`] slot and every save rewrites the whole list.
//!
//! - [`storage`]: the [`KeyValueStore`] trait and [`StorageError`]
//! - [`memory`]: in-memory [`MemoryStorage`]
//! - [`file`]: file-backed [`FileStorage`]
//! - [`hint`]: the one-shot [`NavigationHint`] slot

pub mod file;
pub mod hint;
pub mod memory;
pub mod storage;

pub use file::FileStorage;
pub use hint::NavigationHint;
pub use memory::MemoryStorage;
pub use storage::{KeyValueStore, StorageError};

use chrono::{DateTime, TimeZone, Utc};
use shared::{SavedScene, Snapshot, MAX_SAVED_SCENES, SAVED_SCENES_KEY};

use crate::error::{EditorError, Result};

/// Bounded, most-recent-first list of saved scenes over a durable slot.
#[derive(Debug)]
pub struct PersistenceStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<SavedScene>,
}

impl<S: KeyValueStore> PersistenceStore<S> {
    /// Open the store and load the saved list from `storage`.
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            entries: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-read the saved list from durable storage.
    ///
    /// Missing or unreadable data yields an empty list; it is never an error.
    pub fn load(&mut self) -> &[SavedScene] {
        self.entries = match read_entries(&self.storage) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Discarding saved scenes: {e}");
                Vec::new()
            }
        };
        &self.entries
    }

    /// Save `snapshot` under `name` with the current time.
    pub fn save(&mut self, name: &str, snapshot: Snapshot) -> Result<&SavedScene> {
        self.save_at(name, snapshot, Utc::now())
    }

    /// Save `snapshot` under `name` with an explicit timestamp.
    ///
    /// The new entry goes first and the list is cut to the cap. The list is
    /// only replaced in memory once the durable write succeeded.
    pub fn save_at(
        &mut self,
        name: &str,
        snapshot: Snapshot,
        saved_at: DateTime<Utc>,
    ) -> Result<&SavedScene> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EditorError::InvalidName);
        }

        // Durable form only keeps milliseconds
        let saved_at = Utc
            .timestamp_millis_opt(saved_at.timestamp_millis())
            .single()
            .unwrap_or(saved_at);

        let mut entries = Vec::with_capacity(MAX_SAVED_SCENES);
        entries.push(SavedScene {
            name: name.to_string(),
            saved_at,
            data: snapshot,
        });
        entries.extend(self.entries.iter().take(MAX_SAVED_SCENES - 1).cloned());

        write_entries(&self.storage, &entries)?;
        tracing::info!(
            "Saved scene {name:?} ({} objects, {} saved scenes)",
            entries[0].data.len(),
            entries.len()
        );

        self.entries = entries;
        Ok(&self.entries[0])
    }

    /// Most recent saved scene.
    pub fn load_latest(&self) -> Result<&SavedScene> {
        self.load_at(0)
    }

    /// Saved scene at `index` (0 is the most recent).
    pub fn load_at(&self, index: usize) -> Result<&SavedScene> {
        self.entries.get(index).ok_or(EditorError::NotFound)
    }

    /// Saved scene at `index`, if any
    pub fn get(&self, index: usize) -> Option<&SavedScene> {
        self.entries.get(index)
    }

    /// All saved scenes, most recent first.
    pub fn list(&self) -> &[SavedScene] {
        &self.entries
    }

    /// Number of saved scenes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been saved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Underlying durable storage
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// Parse the saved list. A slot that is not a JSON array is corrupt; a
/// single unreadable entry is skipped so the others survive.
fn read_entries<S: KeyValueStore>(storage: &S) -> Result<Vec<SavedScene>> {
    let Some(json) = storage.get(SAVED_SCENES_KEY)? else {
        return Ok(Vec::new());
    };
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&json).map_err(|e| EditorError::CorruptStorage(e.to_string()))?;

    let entries = raw
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable saved scene #{i}: {e}");
                None
            }
        })
        .collect();
    Ok(entries)
}

fn write_entries<S: KeyValueStore>(storage: &S, entries: &[SavedScene]) -> Result<()> {
    let json = serde_json::to_string(entries)
        .map_err(|e| EditorError::Storage(StorageError::Backend(e.to_string())))?;
    storage.set(SAVED_SCENES_KEY, &json)?;
    Ok(())
}
