//! Scene document <-> portable record conversion.
//!
//! Records carry the canonical shape names (`cube`, `sphere`, `cylinder`).
//! Decoding also understands the geometry-class names written by older
//! saves and falls back to a cube for anything it does not recognize.

use shared::{SceneRecord, ShapeKind, Snapshot};

use crate::state::scene::{SceneDocument, SceneObject};

/// Geometry-class names found in older saves.
const LEGACY_SHAPE_NAMES: &[(&str, ShapeKind)] = &[
    ("BoxGeometry", ShapeKind::Cube),
    ("SphereGeometry", ShapeKind::Sphere),
    ("CylinderGeometry", ShapeKind::Cylinder),
];

/// Resolve a record's shape name. Unknown names decode as [`ShapeKind::Cube`].
pub fn shape_kind_from_name(name: &str) -> ShapeKind {
    let trimmed = name.trim();

    if let Some(kind) = ShapeKind::ALL
        .into_iter()
        .find(|kind| kind.canonical_name().eq_ignore_ascii_case(trimmed))
    {
        return kind;
    }

    if let Some((_, kind)) = LEGACY_SHAPE_NAMES.iter().find(|(legacy, _)| *legacy == trimmed) {
        return *kind;
    }

    tracing::debug!("Unknown shape name {name:?}, decoding as cube");
    ShapeKind::Cube
}

/// One record per object, in document order.
pub fn serialize(document: &SceneDocument) -> Snapshot {
    document.objects().iter().map(SceneObject::to_record).collect()
}

/// Fresh document holding one object per record, last object selected.
pub fn deserialize(records: &[SceneRecord]) -> SceneDocument {
    SceneDocument::from_objects(records.iter().map(SceneObject::from_record).collect())
}

/// Serialize to a JSON array string.
pub fn to_json(document: &SceneDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serialize(document))
}

/// Parse a JSON array of records into a fresh document.
pub fn from_json(json: &str) -> Result<SceneDocument, serde_json::Error> {
    let records: Snapshot = serde_json::from_str(json)?;
    Ok(deserialize(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;
    use shared::PositionRecord;

    fn record(shape_type: &str) -> SceneRecord {
        SceneRecord {
            shape_type: shape_type.to_string(),
            position: PositionRecord { x: 0.5, y: 0.6, z: -0.5 },
            scale: 1.0,
            color: "#4da3ff".to_string(),
        }
    }

    #[test]
    fn test_canonical_names() {
        assert_eq!(shape_kind_from_name("cube"), ShapeKind::Cube);
        assert_eq!(shape_kind_from_name("sphere"), ShapeKind::Sphere);
        assert_eq!(shape_kind_from_name("Cylinder"), ShapeKind::Cylinder);
    }

    #[test]
    fn test_legacy_names() {
        assert_eq!(shape_kind_from_name("BoxGeometry"), ShapeKind::Cube);
        assert_eq!(shape_kind_from_name("SphereGeometry"), ShapeKind::Sphere);
        assert_eq!(shape_kind_from_name("CylinderGeometry"), ShapeKind::Cylinder);
    }

    #[test]
    fn test_unknown_names_fall_back_to_cube() {
        assert_eq!(shape_kind_from_name("ConeGeometry"), ShapeKind::Cube);
        assert_eq!(shape_kind_from_name(""), ShapeKind::Cube);
    }

    #[test]
    fn test_serialize_is_value_copy() {
        let mut doc = SceneDocument::new();
        doc.add_object(ShapeKind::Sphere, HexColor::default());
        let records = serialize(&doc);

        doc.set_position(9.0, 9.0, 9.0).unwrap();
        doc.set_color("#000000").unwrap();

        assert_ne!(records[0].position.x, 9.0);
        assert_eq!(records[0].color, "#4da3ff");
    }

    #[test]
    fn test_deserialize_preserves_order_and_selects_last() {
        let records = vec![record("sphere"), record("SphereGeometry"), record("mystery"), record("cylinder")];
        let doc = deserialize(&records);

        let shapes: Vec<_> = doc.objects().iter().map(|o| o.shape).collect();
        assert_eq!(
            shapes,
            vec![ShapeKind::Sphere, ShapeKind::Sphere, ShapeKind::Cube, ShapeKind::Cylinder]
        );
        assert_eq!(doc.selected_index(), Some(3));
    }

    #[test]
    fn test_deserialize_empty() {
        let doc = deserialize(&[]);
        assert!(doc.is_empty());
        assert_eq!(doc.selected_index(), None);
    }

    #[test]
    fn test_round_trip_exact() {
        let mut doc = SceneDocument::new();
        doc.add_object(ShapeKind::Cube, HexColor::parse("#4da3ff").unwrap());
        doc.set_position(0.1 + 0.2, -1e-9, 123456.789).unwrap();
        doc.set_scale(0.3333333333333333).unwrap();
        doc.add_object(ShapeKind::Cylinder, HexColor::parse("#F0F").unwrap());

        let restored = deserialize(&serialize(&doc));
        assert_eq!(restored.len(), doc.len());
        for (a, b) in doc.objects().iter().zip(restored.objects()) {
            assert!(a.same_content(b), "{a:?} != {b:?}");
        }
    }

    #[test]
    fn test_json_round_trip() {
        let mut doc = SceneDocument::new();
        doc.add_object(ShapeKind::Sphere, HexColor::parse("#ff0000").unwrap());
        let json = to_json(&doc).unwrap();
        assert!(json.contains("\"type\": \"sphere\""));

        let restored = from_json(&json).unwrap();
        assert!(restored.objects()[0].same_content(&doc.objects()[0]));
    }
}
