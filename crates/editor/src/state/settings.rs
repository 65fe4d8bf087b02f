//! Editor settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shared::DEFAULT_COLOR;

/// Where freshly added objects appear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSettings {
    /// Width of the square (centered on the origin) that x/z are drawn from
    pub spread: f64,
    /// Fixed y of new objects
    pub height: f64,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            spread: 1.5,
            height: 0.6,
        }
    }
}

/// Inspector display settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Number of decimal places for position and scale
    pub precision: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// All editor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Color used by `add_object` when none is given
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Spawn placement
    #[serde(default)]
    pub spawn: SpawnSettings,
    /// Inspector formatting
    #[serde(default)]
    pub display: DisplaySettings,
    /// Add a cube when a session starts with nothing to load
    #[serde(default)]
    pub starter_object: bool,
    /// Override for the directory holding the saved-scene slots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            spawn: SpawnSettings::default(),
            display: DisplaySettings::default(),
            starter_object: false,
            data_dir: None,
        }
    }
}

impl EditorSettings {
    /// Default settings file location
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shapelab", "shapelab")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, or return default if not found
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load settings from `path`; missing or unparsable files yield defaults
    pub fn load_from(path: &Path) -> Self {
        let Ok(json) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring unparsable settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to the default file
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Cannot create settings directory {}: {e}", parent.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    tracing::warn!("Cannot write settings to {}: {e}", path.display());
                }
            }
            Err(e) => tracing::warn!("Cannot serialize settings: {e}"),
        }
    }
}
