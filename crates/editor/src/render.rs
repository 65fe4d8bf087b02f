//! Primitive list handed to the external renderer.

use serde::Serialize;
use shared::ShapeKind;

use crate::state::scene::{ObjectId, SceneDocument};

/// One drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPrimitive {
    pub id: ObjectId,
    pub shape: ShapeKind,
    pub position: [f64; 3],
    /// Uniform scale
    pub scale: f64,
    pub color: String,
    /// Highlight flag for the selection cursor
    pub selected: bool,
}

/// Build primitives for every object, in document order
pub fn build_primitives(document: &SceneDocument) -> Vec<RenderPrimitive> {
    let selected = document.selected_index();

    document
        .objects()
        .iter()
        .enumerate()
        .map(|(i, object)| RenderPrimitive {
            id: object.id.clone(),
            shape: object.shape,
            position: object.position.to_array(),
            scale: object.scale,
            color: object.color.to_string(),
            selected: selected == Some(i),
        })
        .collect()
}
