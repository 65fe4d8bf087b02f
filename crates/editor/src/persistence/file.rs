//! File-backed key-value store: one `<key>.json` file per slot.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::storage::{KeyValueStore, StorageError};

/// Stores each slot as a file inside a data directory.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the slot file, so a slot is either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Store slots under `dir` (created on first write).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory for saved scenes
    pub fn default_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shapelab", "shapelab")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Store in the default data directory
    pub fn open_default() -> Option<Self> {
        Self::default_dir().map(Self::new)
    }

    /// Directory holding the slot files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Backend(format!("invalid slot key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;

        tracing::debug!("Wrote slot {key} to {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
