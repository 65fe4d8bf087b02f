//! Object add/remove/select operations

use rand::Rng;
use shared::ShapeKind;

use crate::color::HexColor;
use crate::error::{EditorError, Result};

use super::{SceneDocument, SceneObject};

impl SceneDocument {
    /// Add a new object and select it; returns its index
    pub fn add_object(&mut self, shape: ShapeKind, color: HexColor) -> usize {
        self.add_object_with_rng(shape, color, &mut rand::thread_rng())
    }

    /// Add a new object placed with `rng`
    pub fn add_object_with_rng<R: Rng>(
        &mut self,
        shape: ShapeKind,
        color: HexColor,
        rng: &mut R,
    ) -> usize {
        let object = SceneObject::create_default(shape, color, &self.spawn, rng);
        tracing::debug!(
            "Added {} at ({:.2}, {:.2}, {:.2})",
            shape.canonical_name(),
            object.position.x,
            object.position.y,
            object.position.z
        );

        self.objects.push(object);
        let index = self.objects.len() - 1;
        self.selected = Some(index);
        self.version += 1;
        index
    }

    /// Remove the object at `index` and clamp the cursor into range
    pub fn remove_object(&mut self, index: usize) -> Result<SceneObject> {
        self.check_index(index)?;

        let removed = self.objects.remove(index);
        self.selected = match self.objects.len() {
            0 => None,
            len => Some(self.selected.unwrap_or(0).min(len - 1)),
        };

        tracing::debug!("Removed object {index} ({})", removed.shape.canonical_name());
        self.version += 1;
        Ok(removed)
    }

    /// Move the cursor to `index`
    pub fn select_object(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;

        if self.selected != Some(index) {
            self.selected = Some(index);
            self.version += 1;
        }
        Ok(())
    }

    /// Remove every object and clear the selection
    pub fn clear(&mut self) {
        self.objects.clear();
        self.selected = None;
        self.version += 1;
    }

    /// Replace contents with those of `other`, keeping spawn settings and version history
    pub fn replace_with(&mut self, other: SceneDocument) {
        self.objects = other.objects;
        self.selected = other.selected;
        self.version += 1;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.objects.len() {
            Ok(())
        } else {
            Err(EditorError::InvalidIndex {
                index,
                len: self.objects.len(),
            })
        }
    }
}
