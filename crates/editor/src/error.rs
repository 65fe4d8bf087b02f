//! Error types for editor operations.
//!
//! Every variant is recoverable: the operation that produced it leaves the
//! document, the in-memory store and the durable slot unchanged.

use thiserror::Error;

use crate::persistence::StorageError;

/// Errors that can occur while editing or persisting a scene.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Select/remove with an index outside the object list.
    #[error("invalid index {index} (scene has {len} objects)")]
    InvalidIndex { index: usize, len: usize },

    /// Save with an empty or blank name.
    #[error("scene name must not be empty")]
    InvalidName,

    /// No saved scene at the requested position.
    #[error("no saved designs yet")]
    NotFound,

    /// Color string that is not `#rgb` or `#rrggbb`.
    #[error("malformed color: {0:?}")]
    MalformedColor(String),

    /// NaN or infinite coordinate.
    #[error("position must be finite, got ({x}, {y}, {z})")]
    InvalidPosition { x: f64, y: f64, z: f64 },

    /// Zero, negative or non-finite scale.
    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f64),

    /// Durable slot content could not be parsed.
    #[error("corrupt storage: {0}")]
    CorruptStorage(String),

    /// Durable slot could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
