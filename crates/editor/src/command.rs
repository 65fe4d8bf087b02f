//! JSON command protocol for scripting an editor session.
//!
//! Each command maps onto one UI action of the editor or library page.

use serde::{Deserialize, Serialize};
use shared::{SceneRecord, ShapeKind};

use crate::error::EditorError;
use crate::persistence::KeyValueStore;
use crate::session::EditorSession;

/// A command against an editor session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Add a primitive and select it
    AddObject {
        shape: ShapeKind,
        #[serde(default)]
        color: Option<String>,
    },
    /// Remove the object at an index
    RemoveObject { index: usize },
    /// Remove the selected object
    RemoveSelected,
    /// Move the selection cursor
    Select { index: usize },
    /// Move the selected object
    SetPosition { x: f64, y: f64, z: f64 },
    /// Uniform scale of the selected object
    SetScale { scale: f64 },
    /// Color of the selected object
    SetColor { color: String },
    /// Remove every object
    Clear,
    /// Inspector view and selection
    Inspect,
    /// Renderer primitive list
    Primitives,
    /// Serialize the scene to records
    ExportScene,
    /// Replace the scene with records
    ImportScene { records: Vec<SceneRecord> },
    /// Save the scene under a name
    Save { name: String },
    /// Load the most recent saved scene
    LoadLatest,
    /// Load the saved scene at an index (0 = most recent)
    LoadSaved { index: usize },
    /// Library listing
    ListSaved,
    /// Ask the next session to open a saved scene
    OpenSaved { index: usize },
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            notice: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    fn err(error: &EditorError) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            notice: None,
            data: None,
        }
    }

    fn with_notice(mut self, notice: Option<&str>) -> Self {
        self.notice = notice.map(str::to_string);
        self
    }
}

fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

/// Execute a single command on the session.
pub fn execute_command<S: KeyValueStore>(
    session: &mut EditorSession<S>,
    cmd: EditorCommand,
) -> CommandResponse {
    let response = match cmd {
        EditorCommand::AddObject { shape, color } => {
            match session.add_object(shape, color.as_deref()) {
                Ok(index) => CommandResponse::ok_with_data(serde_json::json!({ "index": index })),
                Err(e) => CommandResponse::err(&e),
            }
        }

        EditorCommand::RemoveObject { index } => match session.remove_object(index) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::RemoveSelected => match session.remove_selected() {
            Ok(removed) => CommandResponse::ok_with_data(serde_json::json!({ "removed": removed })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::Select { index } => match session.select(index) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::SetPosition { x, y, z } => match session.set_position(x, y, z) {
            Ok(changed) => CommandResponse::ok_with_data(serde_json::json!({ "changed": changed })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::SetScale { scale } => match session.set_scale(scale) {
            Ok(changed) => CommandResponse::ok_with_data(serde_json::json!({ "changed": changed })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::SetColor { color } => match session.set_color(&color) {
            Ok(changed) => CommandResponse::ok_with_data(serde_json::json!({ "changed": changed })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::Clear => {
            session.clear();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => {
            let document = session.document();
            CommandResponse::ok_with_data(serde_json::json!({
                "object_count": document.len(),
                "selected_index": document.selected_index_or_minus_one(),
                "inspector": to_value(session.inspector()),
            }))
        }

        EditorCommand::Primitives => {
            CommandResponse::ok_with_data(serde_json::json!({
                "primitives": to_value(&session.primitives()),
            }))
        }

        EditorCommand::ExportScene => {
            CommandResponse::ok_with_data(serde_json::json!({
                "records": to_value(&session.export_records()),
            }))
        }

        EditorCommand::ImportScene { records } => {
            session.import_records(&records);
            CommandResponse::ok_with_data(serde_json::json!({ "object_count": session.object_count() }))
        }

        EditorCommand::Save { name } => match session.save(&name) {
            Ok(saved) => CommandResponse::ok_with_data(serde_json::json!({
                "name": saved.name,
                "saved_at": saved.saved_at.timestamp_millis(),
                "object_count": saved.data.len(),
            })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::LoadLatest => match session.load_latest() {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({ "object_count": session.object_count() })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::LoadSaved { index } => match session.load_saved(index) {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({ "object_count": session.object_count() })),
            Err(e) => CommandResponse::err(&e),
        },

        EditorCommand::ListSaved => CommandResponse::ok_with_data(to_value(&session.library())),

        EditorCommand::OpenSaved { index } => match session.open_saved(index) {
            Ok(()) => CommandResponse::ok(),
            Err(e) => CommandResponse::err(&e),
        },
    };

    response.with_notice(session.last_notice())
}

/// Parse and execute a single JSON command string.
pub fn execute_json<S: KeyValueStore>(
    session: &mut EditorSession<S>,
    json: &str,
) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(session, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch<S: KeyValueStore>(
    session: &mut EditorSession<S>,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(session, cmd))
        .collect())
}
