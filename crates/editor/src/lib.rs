// Library crate: the scene document, codec, persistence and projections.
// The `shapelab` binary is a thin CLI over `session` and `command`.

pub mod codec;
pub mod color;
pub mod command;
pub mod error;
pub mod fixtures;
pub mod inspector;
pub mod library;
pub mod persistence;
pub mod render;
pub mod session;
pub mod state;
pub mod validation;

pub use error::{EditorError, Result};
