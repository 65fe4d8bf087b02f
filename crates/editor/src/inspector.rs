//! Inspector view-model derived from the document and its selection.
//!
//! The inspector holds no state of its own: callers recompute it after every
//! document mutation. Stored values keep full precision; only the formatted
//! strings here are rounded.

use serde::Serialize;
use shared::ShapeKind;

use crate::state::scene::{object_display_name, SceneDocument};
use crate::state::settings::DisplaySettings;

/// What the inspector panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum InspectorView {
    /// Nothing selected: all fields disabled
    Disabled,
    /// Fields of the selected object, formatted for display
    Active {
        index: usize,
        label: String,
        shape: ShapeKind,
        position: [String; 3],
        scale: String,
        color: String,
    },
}

impl InspectorView {
    /// True when the inspector fields should be disabled
    pub fn is_disabled(&self) -> bool {
        matches!(self, InspectorView::Disabled)
    }
}

/// Project with the default display precision
pub fn project(document: &SceneDocument) -> InspectorView {
    project_with(document, &DisplaySettings::default())
}

/// Project with `display` formatting
pub fn project_with(document: &SceneDocument, display: &DisplaySettings) -> InspectorView {
    let (Some(index), Some(object)) = (document.selected_index(), document.selected()) else {
        return InspectorView::Disabled;
    };

    let fmt = |v: f64| format!("{:.*}", display.precision, v);

    InspectorView::Active {
        index,
        label: object_display_name(index),
        shape: object.shape,
        position: [
            fmt(object.position.x),
            fmt(object.position.y),
            fmt(object.position.z),
        ],
        scale: fmt(object.scale),
        color: object.color.to_string(),
    }
}
