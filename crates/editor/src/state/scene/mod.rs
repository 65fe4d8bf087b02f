//! Scene document
//!
//! This module provides the ordered object list with its single selection
//! cursor. All editing operations land here.

mod display;
mod object;
mod object_ops;
mod transform_ops;

pub use display::object_display_name;
pub use object::{ObjectId, SceneObject};

use crate::state::settings::SpawnSettings;

/// Ordered objects plus a selection cursor
///
/// Invariant: `selected` is `None` or a valid index into `objects`, and it
/// is `None` whenever `objects` is empty.
#[derive(Debug, Clone, Default)]
pub struct SceneDocument {
    /// Objects in insertion (display) order
    pub(crate) objects: Vec<SceneObject>,
    /// Selection cursor
    pub(crate) selected: Option<usize>,
    /// Placement of new objects
    pub(crate) spawn: SpawnSettings,
    /// Monotonically increasing version counter for cache invalidation
    pub(crate) version: u64,
}

impl SceneDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `spawn` for objects added from now on
    pub fn with_spawn(mut self, spawn: SpawnSettings) -> Self {
        self.spawn = spawn;
        self
    }

    /// Build a document from already constructed objects, selecting the last one
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        let selected = objects.len().checked_sub(1);
        Self {
            objects,
            selected,
            spawn: SpawnSettings::default(),
            version: 0,
        }
    }

    /// Current document version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Objects in display order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the document has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by index
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    /// Selected index, `None` when nothing is selected
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected index in the `-1`-means-none form used by the UI and wire formats
    pub fn selected_index_or_minus_one(&self) -> i64 {
        self.selected.map_or(-1, |i| i as i64)
    }

    /// Currently selected object
    pub fn selected(&self) -> Option<&SceneObject> {
        self.selected.and_then(|i| self.objects.get(i))
    }

    /// Mutable access to the selected object
    pub(crate) fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.selected.and_then(|i| self.objects.get_mut(i))
    }
}
