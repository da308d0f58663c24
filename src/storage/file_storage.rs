use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::notes::NoteStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt note file {}: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Load/save of the whole note store as one JSON document.
///
/// The file holds a single JSON object: keys are entry names, values
/// are `{"description": ..., "tags": [...]}`. Saves are deterministic
/// (BTreeMap key order, sorted tags), so saving an unchanged store
/// rewrites the file byte-identically.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the default note file path under the platform data directory
    pub fn default_data_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("notule").join("notes.json"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store from disk.
    ///
    /// A missing file is not an error: it means first run, and an
    /// empty store is returned. A file that exists but does not parse
    /// is reported as [`StorageError::CorruptData`] so callers can
    /// distinguish it from "nothing saved yet".
    pub fn load(&self) -> Result<NoteStore> {
        if !self.path.exists() {
            log::debug!("note file {} not found, starting empty", self.path.display());
            return Ok(NoteStore::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let store: NoteStore =
            serde_json::from_str(&content).map_err(|source| StorageError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        log::debug!("loaded {} entries from {}", store.len(), self.path.display());
        Ok(store)
    }

    /// Save the store to disk, creating the parent directory on demand.
    pub fn save(&self, store: &NoteStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, content)?;

        log::debug!("saved {} entries to {}", store.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("notes.json"));
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_file_loads_empty_store() {
        let (storage, _temp) = create_test_storage();

        let store = storage.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let (storage, _temp) = create_test_storage();

        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["flights", "hotel"])
            .unwrap();
        store.add_entry("recipes", "dinner ideas", ["food"]).unwrap();

        storage.save(&store).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(store, loaded);
    }

    #[test]
    fn test_repeated_saves_are_byte_identical() {
        let (storage, _temp) = create_test_storage();

        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["hotel", "flights"])
            .unwrap();

        storage.save(&store).unwrap();
        let first = fs::read(storage.path()).unwrap();
        storage.save(&store).unwrap();
        let second = fs::read(storage.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_file_is_reported_distinctly() {
        let (storage, _temp) = create_test_storage();

        fs::write(storage.path(), "{not json").unwrap();

        let err = storage.load();
        assert!(matches!(err, Err(StorageError::CorruptData { .. })));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join("nested").join("notes.json"));

        storage.save(&NoteStore::new()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_persisted_format() {
        let (storage, _temp) = create_test_storage();

        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["Hotel", "flights"])
            .unwrap();
        storage.save(&store).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(storage.path()).unwrap()).unwrap();
        let entry = &raw["trip"];
        assert_eq!(entry["description"], "travel plans");
        assert_eq!(entry["tags"], serde_json::json!(["flights", "hotel"]));
    }
}
