use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use notule::notes::NoteStore;
use notule::storage::FileStorage;

/// Shared application state for CLI commands
pub struct App {
    storage: FileStorage,
    pub store: NoteStore,
}

impl App {
    /// Load the note file, from an explicit path or the default data
    /// directory. A missing file means first run and an empty store.
    pub fn open(file: Option<&str>) -> Result<Self> {
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => FileStorage::default_data_path()
                .context("Failed to resolve data directory")?,
        };

        let storage = FileStorage::new(path);
        let store = storage.load().with_context(|| {
            format!("Failed to load note file {}", storage.path().display())
        })?;

        Ok(Self { storage, store })
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Persist the store. Mutating commands call this explicitly; the
    /// store itself never auto-saves.
    pub fn save(&self) -> Result<()> {
        self.storage.save(&self.store).with_context(|| {
            format!("Failed to save note file {}", self.storage.path().display())
        })
    }

    /// Get all tags with usage counts, across all entries
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for (_, entry) in self.store.list_entries() {
            for tag in &entry.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }

    /// Split a comma-separated --tags value into raw tag strings
    pub fn split_tags(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}
