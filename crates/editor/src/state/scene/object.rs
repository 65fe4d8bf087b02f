//! A single placed primitive

use glam::DVec3;
use rand::Rng;
use shared::{PositionRecord, SceneRecord, ShapeKind};

use crate::codec::shape_kind_from_name;
use crate::color::HexColor;
use crate::state::settings::SpawnSettings;

/// Session-local object identifier (never serialized)
pub type ObjectId = String;

/// One placed primitive with a uniform scale
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Key for renderer caches
    pub id: ObjectId,
    pub shape: ShapeKind,
    pub position: DVec3,
    /// Applied to all three axes
    pub scale: f64,
    pub color: HexColor,
}

impl SceneObject {
    /// New object at a random spot on the spawn plane, scale 1
    pub fn create_default<R: Rng>(
        shape: ShapeKind,
        color: HexColor,
        spawn: &SpawnSettings,
        rng: &mut R,
    ) -> Self {
        let x = (rng.gen::<f64>() - 0.5) * spawn.spread;
        let z = (rng.gen::<f64>() - 0.5) * spawn.spread;

        Self {
            id: new_object_id(),
            shape,
            position: DVec3::new(x, spawn.height, z),
            scale: 1.0,
            color,
        }
    }

    /// Object carrying exactly the values of `record`
    ///
    /// Unknown shape names decode as cubes. A malformed color falls back to
    /// the default color, an unusable scale to 1 and a non-finite coordinate to 0.
    pub fn from_record(record: &SceneRecord) -> Self {
        let color = HexColor::parse(&record.color).unwrap_or_else(|_| {
            tracing::warn!("Record color {:?} is malformed, using default", record.color);
            HexColor::default()
        });

        let scale = if record.scale.is_finite() && record.scale > 0.0 {
            record.scale
        } else {
            tracing::warn!("Record scale {} is unusable, using 1.0", record.scale);
            1.0
        };

        let PositionRecord { x, y, z } = record.position;
        let position = DVec3::new(x, y, z);
        let position = if position.is_finite() {
            position
        } else {
            tracing::warn!("Record position ({x}, {y}, {z}) is not finite, zeroing bad axes");
            DVec3::new(finite_or(x, 0.0), finite_or(y, 0.0), finite_or(z, 0.0))
        };

        Self {
            id: new_object_id(),
            shape: shape_kind_from_name(&record.shape_type),
            position,
            scale,
            color,
        }
    }

    /// Portable record for this object
    ///
    /// Numbers are always finite; JSON would write NaN as `null`.
    pub fn to_record(&self) -> SceneRecord {
        SceneRecord {
            shape_type: self.shape.canonical_name().to_string(),
            position: PositionRecord {
                x: finite_or(self.position.x, 0.0),
                y: finite_or(self.position.y, 0.0),
                z: finite_or(self.position.z, 0.0),
            },
            scale: if self.scale.is_finite() && self.scale > 0.0 {
                self.scale
            } else {
                1.0
            },
            color: self.color.as_str().to_string(),
        }
    }

    /// True when shape, position, scale and color match (ids are ignored)
    pub fn same_content(&self, other: &SceneObject) -> bool {
        self.shape == other.shape
            && self.position == other.position
            && self.scale == other.scale
            && self.color == other.color
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

fn new_object_id() -> ObjectId {
    uuid::Uuid::new_v4().to_string()
}
