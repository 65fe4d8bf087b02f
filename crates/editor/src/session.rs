//! Headless editor session.
//!
//! Owns the scene document, the saved-scene store and the derived views
//! (inspector, renderer primitives). Every operation refreshes the derived
//! views and records an advisory notice for the UI layer to show.

use shared::{SavedScene, ShapeKind, Snapshot};

use crate::codec;
use crate::color::HexColor;
use crate::error::{EditorError, Result};
use crate::inspector::{self, InspectorView};
use crate::library::{self, LibraryView};
use crate::persistence::{KeyValueStore, NavigationHint, PersistenceStore};
use crate::render::{self, RenderPrimitive};
use crate::state::scene::{object_display_name, SceneDocument};
use crate::state::settings::EditorSettings;

/// Editor session over durable storage `S`
pub struct EditorSession<S: KeyValueStore> {
    document: SceneDocument,
    store: PersistenceStore<S>,
    settings: EditorSettings,
    inspector: InspectorView,
    primitives: Vec<RenderPrimitive>,
    /// Document version the inspector and primitives were built from
    views_version: Option<u64>,
    last_notice: Option<String>,
}

impl<S: KeyValueStore> EditorSession<S> {
    /// Start a session with default settings.
    pub fn new(storage: S) -> Self {
        Self::with_settings(storage, EditorSettings::default())
    }

    /// Start a session: load the saved list, then apply a pending
    /// navigation hint (or add the starter object when configured).
    pub fn with_settings(storage: S, settings: EditorSettings) -> Self {
        let store = PersistenceStore::open(storage);
        let mut session = Self {
            document: SceneDocument::new().with_spawn(settings.spawn),
            store,
            settings,
            inspector: InspectorView::Disabled,
            primitives: Vec::new(),
            views_version: None,
            last_notice: None,
        };

        let opened = match NavigationHint::take(session.store.storage()) {
            Some(index) => session.load_saved(index).is_ok(),
            None => false,
        };
        if !opened && session.settings.starter_object {
            let color = session.default_color();
            session.document.add_object(ShapeKind::Cube, color);
        }

        session.refresh();
        session
    }

    // ── Scene editing ─────────────────────────────────────────

    /// Add an object and select it; `color` defaults to the settings color
    pub fn add_object(&mut self, shape: ShapeKind, color: Option<&str>) -> Result<usize> {
        let color = match color {
            Some(raw) => HexColor::parse(raw),
            None => Ok(self.default_color()),
        };
        let result = color.map(|color| self.document.add_object(shape, color));
        self.finish(result, |_| format!("Added {}", shape.canonical_name()))
    }

    /// Remove the object at `index`
    pub fn remove_object(&mut self, index: usize) -> Result<()> {
        let result = self.document.remove_object(index).map(|_| ());
        self.finish(result, |_| "Deleted object".to_string())
    }

    /// Remove the selected object; returns false when nothing is selected
    pub fn remove_selected(&mut self) -> Result<bool> {
        match self.document.selected_index() {
            Some(index) => self.remove_object(index).map(|_| true),
            None => {
                self.last_notice = Some("No object selected".to_string());
                Ok(false)
            }
        }
    }

    /// Select the object at `index`
    pub fn select(&mut self, index: usize) -> Result<()> {
        let result = self.document.select_object(index);
        self.finish(result, |_| format!("Selected {}", object_display_name(index)))
    }

    /// Move the selected object
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) -> Result<bool> {
        let result = self.document.set_position(x, y, z);
        self.finish_quiet(result)
    }

    /// Scale the selected object
    pub fn set_scale(&mut self, scale: f64) -> Result<bool> {
        let result = self.document.set_scale(scale);
        self.finish_quiet(result)
    }

    /// Recolor the selected object
    pub fn set_color(&mut self, color: &str) -> Result<bool> {
        let result = self.document.set_color(color);
        self.finish_quiet(result)
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.document.clear();
        self.refresh();
        self.last_notice = None;
    }

    // ── Import / export ───────────────────────────────────────

    /// Records for the current document
    pub fn export_records(&self) -> Snapshot {
        codec::serialize(&self.document)
    }

    /// Replace the document with `records`
    pub fn import_records(&mut self, records: &[shared::SceneRecord]) {
        self.document.replace_with(codec::deserialize(records));
        self.refresh();
        self.last_notice = Some("Loaded scene".to_string());
    }

    // ── Saved scenes ──────────────────────────────────────────

    /// Save the current document under `name`
    pub fn save(&mut self, name: &str) -> Result<&SavedScene> {
        let snapshot = codec::serialize(&self.document);
        match self.store.save(name, snapshot) {
            Ok(saved) => {
                self.last_notice = Some("Saved".to_string());
                Ok(saved)
            }
            Err(e) => {
                self.last_notice = Some(notice_for(&e));
                Err(e)
            }
        }
    }

    /// Replace the document with the most recent saved scene
    pub fn load_latest(&mut self) -> Result<()> {
        self.load_saved(0)
    }

    /// Replace the document with the saved scene at `index`
    pub fn load_saved(&mut self, index: usize) -> Result<()> {
        let result = self.store.load_at(index).map(|saved| {
            tracing::info!("Loading saved scene {:?} ({} objects)", saved.name, saved.data.len());
            codec::deserialize(&saved.data)
        });
        let result = result.map(|loaded| self.document.replace_with(loaded));
        self.finish(result, |_| "Loaded scene".to_string())
    }

    /// Library listing of saved scenes
    pub fn library(&self) -> LibraryView {
        library::store_library_view(&self.store)
    }

    /// Ask the next session to open the saved scene at `index`
    pub fn open_saved(&mut self, index: usize) -> Result<()> {
        let result = self
            .store
            .load_at(index)
            .map(|_| ())
            .and_then(|_| NavigationHint::request_open(self.store.storage(), index));
        match result {
            Ok(()) => {
                self.last_notice = Some("Opening in editor".to_string());
                Ok(())
            }
            Err(e) => {
                self.last_notice = Some(notice_for(&e));
                Err(e)
            }
        }
    }

    // ── Inspection ────────────────────────────────────────────

    /// The scene document
    pub fn document(&self) -> &SceneDocument {
        &self.document
    }

    /// Saved-scene store
    pub fn store(&self) -> &PersistenceStore<S> {
        &self.store
    }

    /// Session settings
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Inspector view for the current selection
    pub fn inspector(&self) -> &InspectorView {
        &self.inspector
    }

    /// Primitives for the renderer
    pub fn primitives(&self) -> &[RenderPrimitive] {
        &self.primitives
    }

    /// Notice produced by the last operation
    pub fn last_notice(&self) -> Option<&str> {
        self.last_notice.as_deref()
    }

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.document.len()
    }

    // ── Internals ─────────────────────────────────────────────

    fn default_color(&self) -> HexColor {
        HexColor::parse(&self.settings.default_color).unwrap_or_default()
    }

    /// Recompute the inspector and primitive list if the document changed
    fn refresh(&mut self) {
        let version = self.document.version();
        if self.views_version == Some(version) {
            return;
        }
        self.inspector = inspector::project_with(&self.document, &self.settings.display);
        self.primitives = render::build_primitives(&self.document);
        self.views_version = Some(version);
    }

    fn finish<T>(&mut self, result: Result<T>, notice: impl FnOnce(&T) -> String) -> Result<T> {
        self.refresh();
        self.last_notice = Some(match &result {
            Ok(value) => notice(value),
            Err(e) => notice_for(e),
        });
        result
    }

    fn finish_quiet<T>(&mut self, result: Result<T>) -> Result<T> {
        self.refresh();
        self.last_notice = result.as_ref().err().map(notice_for);
        result
    }
}

/// Advisory message for a failed operation
pub fn notice_for(error: &EditorError) -> String {
    match error {
        EditorError::InvalidIndex { .. } => "Invalid index".to_string(),
        EditorError::InvalidName => "Name your design first".to_string(),
        EditorError::NotFound => "No saved designs yet".to_string(),
        EditorError::MalformedColor(_) => "Invalid color".to_string(),
        EditorError::InvalidPosition { .. } => "Position must be a number".to_string(),
        EditorError::InvalidScale(_) => "Scale must be positive".to_string(),
        EditorError::CorruptStorage(_) | EditorError::Storage(_) => {
            format!("Storage problem: {error}")
        }
    }
}
