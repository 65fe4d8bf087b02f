//! Library listing of saved scenes.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use shared::SavedScene;

use crate::persistence::{KeyValueStore, PersistenceStore};

/// Message shown when nothing has been saved
pub const EMPTY_LIBRARY_MESSAGE: &str = "No saved designs yet";

/// One saved scene as listed in the library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryEntry {
    /// Position in the store (0 = most recent); pass to `load_at`/`open_saved`
    pub index: usize,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    /// `saved_at` in local time
    pub saved_at_display: String,
    pub object_count: usize,
}

/// Library page contents
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LibraryView {
    Empty { message: String },
    Entries { entries: Vec<LibraryEntry> },
}

impl LibraryView {
    /// Listed entries (empty slice for [`LibraryView::Empty`])
    pub fn entries(&self) -> &[LibraryEntry] {
        match self {
            LibraryView::Empty { .. } => &[],
            LibraryView::Entries { entries } => entries,
        }
    }
}

/// Build the listing from saved scenes, keeping their order
pub fn library_view(scenes: &[SavedScene]) -> LibraryView {
    if scenes.is_empty() {
        return LibraryView::Empty {
            message: EMPTY_LIBRARY_MESSAGE.to_string(),
        };
    }

    let entries = scenes
        .iter()
        .enumerate()
        .map(|(index, scene)| LibraryEntry {
            index,
            name: scene.name.clone(),
            saved_at: scene.saved_at,
            saved_at_display: scene
                .saved_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            object_count: scene.data.len(),
        })
        .collect();

    LibraryView::Entries { entries }
}

/// Listing of everything in `store`
pub fn store_library_view<S: KeyValueStore>(store: &PersistenceStore<S>) -> LibraryView {
    library_view(store.list())
}
