//! Factory functions for creating test data.
//!
//! Provides convenient helpers to construct `SceneRecord`, `SavedScene`,
//! snapshots and pre-filled storage used in tests and by command scripts.

use chrono::{DateTime, TimeZone, Utc};
use shared::*;

use crate::persistence::MemoryStorage;

// ── Record factories ────────────────────────────────────────────

/// Create a record with explicit values.
pub fn record(shape_type: &str, pos: [f64; 3], scale: f64, color: &str) -> SceneRecord {
    SceneRecord {
        shape_type: shape_type.to_string(),
        position: PositionRecord {
            x: pos[0],
            y: pos[1],
            z: pos[2],
        },
        scale,
        color: color.to_string(),
    }
}

/// Create a unit cube record at `pos`.
pub fn cube_record(pos: [f64; 3]) -> SceneRecord {
    record("cube", pos, 1.0, DEFAULT_COLOR)
}

/// Create a sphere record.
pub fn sphere_record(pos: [f64; 3], scale: f64, color: &str) -> SceneRecord {
    record("sphere", pos, scale, color)
}

/// Create a cylinder record.
pub fn cylinder_record(pos: [f64; 3], scale: f64, color: &str) -> SceneRecord {
    record("cylinder", pos, scale, color)
}

/// Record using an old geometry-class name (e.g. `SphereGeometry`).
pub fn legacy_record(geometry: &str, pos: [f64; 3]) -> SceneRecord {
    record(geometry, pos, 1.0, DEFAULT_COLOR)
}

// ── Snapshot factories ──────────────────────────────────────────

/// Cube, sphere and cylinder with distinct transforms and colors.
pub fn mixed_snapshot() -> Snapshot {
    vec![
        cube_record([0.0, 0.6, 0.0]),
        sphere_record([1.5, 0.6, -0.25], 0.5, "#ff0000"),
        cylinder_record([-1.0, 2.0, 0.75], 2.0, "#00ff88"),
    ]
}

/// Snapshot as written by older saves (geometry-class names).
pub fn legacy_snapshot() -> Snapshot {
    vec![
        legacy_record("BoxGeometry", [0.0, 0.6, 0.0]),
        legacy_record("SphereGeometry", [1.0, 0.6, 1.0]),
        legacy_record("CylinderGeometry", [-1.0, 0.6, -1.0]),
    ]
}

// ── Saved scene factories ───────────────────────────────────────

/// UTC timestamp from milliseconds since the epoch.
pub fn timestamp(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}

/// Create a saved scene.
pub fn saved_scene(name: &str, saved_at_ms: i64, data: Snapshot) -> SavedScene {
    SavedScene {
        name: name.to_string(),
        saved_at: timestamp(saved_at_ms),
        data,
    }
}

/// In-memory storage whose saved-scene slot already holds `scenes`.
pub fn storage_with_scenes(scenes: &[SavedScene]) -> MemoryStorage {
    let json = serde_json::to_string(scenes).unwrap_or_else(|_| "[]".to_string());
    MemoryStorage::with_slot(SAVED_SCENES_KEY, &json)
}
