//! Scene document validation utilities.
//!
//! `SceneValidator` checks document integrity: the selection cursor is in
//! range, scales are positive, colors are normalized and ids are unique.

use std::collections::HashSet;

use crate::color::HexColor;
use crate::state::scene::SceneDocument;

/// Validator for `SceneDocument` integrity checks.
pub struct SceneValidator<'a> {
    document: &'a SceneDocument,
}

impl<'a> SceneValidator<'a> {
    /// Create a new validator for the given document.
    pub fn new(document: &'a SceneDocument) -> Self {
        Self { document }
    }

    /// Selection is `None` or a valid index, and `None` for an empty document.
    pub fn is_selection_valid(&self) -> bool {
        match self.document.selected_index() {
            Some(i) => i < self.document.len(),
            None => true,
        }
    }

    /// A non-empty document always has something selected.
    pub fn is_selection_present_when_non_empty(&self) -> bool {
        self.document.is_empty() || self.document.selected_index().is_some()
    }

    /// All scales are finite and positive.
    pub fn are_scales_positive(&self) -> bool {
        self.document
            .objects()
            .iter()
            .all(|o| o.scale.is_finite() && o.scale > 0.0)
    }

    /// All positions are finite.
    pub fn are_positions_finite(&self) -> bool {
        self.document.objects().iter().all(|o| o.position.is_finite())
    }

    /// Every color re-parses to itself.
    pub fn are_colors_normalized(&self) -> bool {
        self.document
            .objects()
            .iter()
            .all(|o| matches!(HexColor::parse(o.color.as_str()), Ok(c) if c == o.color))
    }

    /// No two objects share an id.
    pub fn are_ids_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.document.objects().iter().all(|o| seen.insert(o.id.as_str()))
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the document is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_selection_valid() {
            errors.push(format!(
                "Selection {:?} out of range (object_count={})",
                self.document.selected_index(),
                self.document.len()
            ));
        }

        if !self.is_selection_present_when_non_empty() {
            errors.push("Non-empty document has no selection".to_string());
        }

        if !self.are_scales_positive() {
            errors.push("Some scales are zero, negative or not finite".to_string());
        }

        if !self.are_positions_finite() {
            errors.push("Some positions are not finite".to_string());
        }

        if !self.are_colors_normalized() {
            errors.push("Some colors are not in #rrggbb form".to_string());
        }

        if !self.are_ids_unique() {
            errors.push("Duplicate object ids".to_string());
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scene::SceneObject;
    use glam::DVec3;
    use shared::ShapeKind;

    fn object(id: &str, scale: f64) -> SceneObject {
        SceneObject {
            id: id.to_string(),
            shape: ShapeKind::Cube,
            position: DVec3::ZERO,
            scale,
            color: HexColor::default(),
        }
    }

    #[test]
    fn test_empty_document_valid() {
        let doc = SceneDocument::new();
        assert!(SceneValidator::new(&doc).validate_all().is_empty());
    }

    #[test]
    fn test_edited_document_valid() {
        let mut doc = SceneDocument::new();
        doc.add_object(ShapeKind::Cube, HexColor::default());
        doc.add_object(ShapeKind::Sphere, HexColor::default());
        doc.set_scale(3.0).unwrap();
        doc.remove_object(0).unwrap();
        let errors = SceneValidator::new(&doc).validate_all();
        assert!(errors.is_empty(), "Validation errors: {:?}", errors);
    }

    #[test]
    fn test_catches_bad_scale() {
        let doc = SceneDocument::from_objects(vec![object("a", 0.0)]);
        let v = SceneValidator::new(&doc);
        assert!(!v.are_scales_positive());
        assert_eq!(v.validate_all().len(), 1);
    }

    #[test]
    fn test_catches_duplicate_ids() {
        let doc = SceneDocument::from_objects(vec![object("a", 1.0), object("a", 1.0)]);
        assert!(!SceneValidator::new(&doc).are_ids_unique());
    }

    #[test]
    fn test_catches_out_of_range_selection() {
        let mut doc = SceneDocument::from_objects(vec![object("a", 1.0)]);
        doc.selected = Some(4);
        let v = SceneValidator::new(&doc);
        assert!(!v.is_selection_valid());
        assert!(!v.validate_all().is_empty());
    }
}
