pub mod scene;
pub mod settings;

pub use scene::{object_display_name, ObjectId, SceneDocument, SceneObject};
pub use settings::{DisplaySettings, EditorSettings, SpawnSettings};
