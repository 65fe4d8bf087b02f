//! Integration tests for EditorSession.
//!
//! Tests the headless editing flow: add/select/remove, edits, save/load.

use shapelab_lib::inspector::InspectorView;
use shapelab_lib::persistence::MemoryStorage;
use shapelab_lib::session::EditorSession;
use shapelab_lib::validation::SceneValidator;
use shapelab_lib::EditorError;
use shared::ShapeKind;

#[test]
fn test_session_add_add_remove_first() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.add_object(ShapeKind::Cube, Some("#4da3ff")).unwrap();
    s.add_object(ShapeKind::Sphere, Some("#ff0000")).unwrap();
    s.remove_object(0).unwrap();

    assert_eq!(s.object_count(), 1);
    assert_eq!(s.document().objects()[0].shape, ShapeKind::Sphere);
    assert_eq!(s.document().objects()[0].color.as_str(), "#ff0000");
    assert_eq!(s.document().selected_index(), Some(0));
    assert_eq!(s.last_notice(), Some("Deleted object"));
}

#[test]
fn test_session_remove_selected_until_empty() {
    let mut s = EditorSession::new(MemoryStorage::new());
    for shape in ShapeKind::ALL {
        s.add_object(shape, None).unwrap();
    }

    while s.remove_selected().unwrap() {
        let errors = SceneValidator::new(s.document()).validate_all();
        assert!(errors.is_empty(), "Validation errors: {:?}", errors);
    }

    assert_eq!(s.object_count(), 0);
    assert_eq!(s.document().selected_index(), None);
    assert!(s.inspector().is_disabled());
    assert!(s.primitives().is_empty());
}

#[test]
fn test_session_inspector_tracks_edits() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.add_object(ShapeKind::Cube, None).unwrap();
    s.set_position(1.005, 2.0, -3.14159).unwrap();
    s.set_scale(0.5).unwrap();
    s.set_color("#ABC").unwrap();

    match s.inspector() {
        InspectorView::Active {
            position,
            scale,
            color,
            ..
        } => {
            assert_eq!(position[2], "-3.14");
            assert_eq!(scale, "0.50");
            assert_eq!(color, "#aabbcc");
        }
        InspectorView::Disabled => panic!("Expected active inspector"),
    }

    let prim = &s.primitives()[0];
    assert_eq!(prim.scale, 0.5);
    assert_eq!(prim.position, [1.005, 2.0, -3.14159]);
    assert_eq!(prim.color, "#aabbcc");
}

#[test]
fn test_session_failed_edits_keep_state() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.add_object(ShapeKind::Cylinder, Some("#010203")).unwrap();
    let before = s.document().objects()[0].clone();

    assert!(matches!(s.set_scale(0.0), Err(EditorError::InvalidScale(_))));
    assert!(matches!(s.set_color("#12"), Err(EditorError::MalformedColor(_))));
    assert!(matches!(s.select(1), Err(EditorError::InvalidIndex { .. })));
    assert!(matches!(s.remove_object(7), Err(EditorError::InvalidIndex { .. })));

    assert_eq!(s.document().objects()[0], before);
    assert_eq!(s.object_count(), 1);
}

#[test]
fn test_session_select_changes_highlight() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.add_object(ShapeKind::Cube, None).unwrap();
    s.add_object(ShapeKind::Sphere, None).unwrap();
    s.select(0).unwrap();

    assert_eq!(s.last_notice(), Some("Selected Object 1"));
    let flags: Vec<bool> = s.primitives().iter().map(|p| p.selected).collect();
    assert_eq!(flags, vec![true, false]);
}

#[test]
fn test_session_save_demo_empty_then_load_latest() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.save("Demo").unwrap();

    let latest = s.store().load_latest().unwrap();
    assert_eq!(latest.name, "Demo");
    assert!(latest.data.is_empty());

    s.add_object(ShapeKind::Cube, None).unwrap();
    s.load_latest().unwrap();
    assert_eq!(s.object_count(), 0);
    assert_eq!(s.document().selected_index(), None);
}

#[test]
fn test_session_save_load_round_trip() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.add_object(ShapeKind::Cube, Some("#4da3ff")).unwrap();
    s.set_position(0.1, 0.2, 0.3).unwrap();
    s.add_object(ShapeKind::Sphere, Some("#ff0000")).unwrap();
    s.set_scale(1.75).unwrap();
    s.add_object(ShapeKind::Cylinder, Some("#00FF00")).unwrap();
    let original = s.document().objects().to_vec();

    s.save("Trio").unwrap();
    s.clear();
    s.load_latest().unwrap();

    let restored = s.document().objects();
    assert_eq!(restored.len(), original.len());
    for (a, b) in original.iter().zip(restored) {
        assert!(a.same_content(b), "{a:?} != {b:?}");
    }
    assert_eq!(s.document().selected_index(), Some(2));
}

#[test]
fn test_session_import_legacy_records() {
    let mut s = EditorSession::new(MemoryStorage::new());
    s.import_records(&shapelab_lib::fixtures::legacy_snapshot());

    let shapes: Vec<ShapeKind> = s.document().objects().iter().map(|o| o.shape).collect();
    assert_eq!(shapes, vec![ShapeKind::Cube, ShapeKind::Sphere, ShapeKind::Cylinder]);

    let exported = s.export_records();
    let names: Vec<&str> = exported.iter().map(|r| r.shape_type.as_str()).collect();
    assert_eq!(names, vec!["cube", "sphere", "cylinder"]);
}
