//! Edits of the selected object

use glam::DVec3;

use crate::color::HexColor;
use crate::error::{EditorError, Result};

use super::SceneDocument;

impl SceneDocument {
    /// Move the selected object; returns false when nothing is selected
    ///
    /// Non-finite coordinates are rejected and the old position kept.
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) -> Result<bool> {
        let position = DVec3::new(x, y, z);
        if !position.is_finite() {
            return Err(EditorError::InvalidPosition { x, y, z });
        }
        let Some(object) = self.selected_mut() else {
            return Ok(false);
        };
        object.position = position;
        self.version += 1;
        Ok(true)
    }

    /// Set the uniform scale of the selected object
    ///
    /// Non-positive and non-finite values are rejected and the old scale kept.
    pub fn set_scale(&mut self, scale: f64) -> Result<bool> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(EditorError::InvalidScale(scale));
        }
        let Some(object) = self.selected_mut() else {
            return Ok(false);
        };
        object.scale = scale;
        self.version += 1;
        Ok(true)
    }

    /// Recolor the selected object; malformed input keeps the old color
    pub fn set_color(&mut self, color: &str) -> Result<bool> {
        if self.selected.is_none() {
            return Ok(false);
        }
        let color = HexColor::parse(color)?;
        if let Some(object) = self.selected_mut() {
            object.color = color;
        }
        self.version += 1;
        Ok(true)
    }
}
