//! Note store data model

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Entry already exists: {0}")]
    DuplicateEntry(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Tag '{tag}' not found on entry '{entry}'")]
    TagNotFound { entry: String, tag: String },

    #[error("Entry name must not be empty")]
    InvalidName,
}

pub type Result<T> = std::result::Result<T, NoteError>;

/// A single note: a description plus a set of tags.
///
/// Tags are kept in a `BTreeSet` so they are deduplicated and always
/// serialize in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Free-form description of the note
    pub description: String,
    /// Lowercase, deduplicated labels
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Entry {
    pub fn new(description: String) -> Self {
        Self {
            description,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
        self
    }
}

/// The complete collection of entries, keyed by entry name.
///
/// Entry names are normalized to lowercase on every operation, so
/// `"Trip"` and `"trip"` refer to the same entry. The `BTreeMap`
/// backing gives alphabetical iteration order and stable key ordering
/// when the store is serialized.
///
/// All mutating operations either apply their full effect or leave the
/// store untouched; none of them does partial work on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    entries: BTreeMap<String, Entry>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry. Fails if the name is already taken; existing
    /// entries are never overwritten.
    pub fn add_entry<I, S>(&mut self, name: &str, description: &str, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = normalize_name(name)?;
        if self.entries.contains_key(&name) {
            return Err(NoteError::DuplicateEntry(name));
        }

        let entry = Entry::new(description.to_string()).with_tags(tags);
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Replace an entry's description, leaving its tags untouched.
    pub fn edit_description(&mut self, name: &str, new_description: &str) -> Result<()> {
        let entry = self.entry_mut(name)?;
        entry.description = new_description.to_string();
        Ok(())
    }

    /// Add a tag to an entry. Returns `false` when the tag was already
    /// present (or normalizes to nothing); that is not an error.
    pub fn add_tag(&mut self, name: &str, tag: &str) -> Result<bool> {
        let entry = self.entry_mut(name)?;
        match normalize_tag(tag) {
            Some(tag) => Ok(entry.tags.insert(tag)),
            None => Ok(false),
        }
    }

    /// Remove a tag from an entry. Unlike [`add_tag`](Self::add_tag),
    /// naming an absent tag is an error.
    pub fn remove_tag(&mut self, name: &str, tag: &str) -> Result<()> {
        let entry_name = normalize_name(name)?;
        let entry = self
            .entries
            .get_mut(&entry_name)
            .ok_or(NoteError::EntryNotFound(entry_name.clone()))?;

        let tag = normalize_tag(tag).ok_or_else(|| NoteError::TagNotFound {
            entry: entry_name.clone(),
            tag: tag.to_string(),
        })?;

        if !entry.tags.remove(&tag) {
            return Err(NoteError::TagNotFound {
                entry: entry_name,
                tag,
            });
        }
        Ok(())
    }

    /// Replace an entry's whole tag set. An empty input clears it.
    pub fn replace_tags<I, S>(&mut self, name: &str, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.entry_mut(name)?;
        entry.tags = normalize_tags(tags);
        Ok(())
    }

    /// Delete a single entry.
    pub fn delete_entry(&mut self, name: &str) -> Result<()> {
        let name = normalize_name(name)?;
        self.entries
            .remove(&name)
            .map(|_| ())
            .ok_or(NoteError::EntryNotFound(name))
    }

    /// Delete a batch of entries atomically: if any name is missing,
    /// nothing is deleted.
    pub fn delete_entries<I, S>(&mut self, names: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut to_delete = BTreeSet::new();
        for name in names {
            let name = normalize_name(name.as_ref())?;
            if !self.entries.contains_key(&name) {
                return Err(NoteError::EntryNotFound(name));
            }
            to_delete.insert(name);
        }

        // Every name verified above; duplicates in the batch collapse.
        for name in &to_delete {
            self.entries.remove(name);
        }
        Ok(to_delete.len())
    }

    /// Remove every entry. Asking the user for confirmation is the
    /// caller's job, not the store's.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        let name = normalize_name(name).ok()?;
        self.entries.get(&name)
    }

    /// Iterate over all entries in alphabetical name order. The
    /// iterator is lazy and can be restarted by calling again.
    pub fn list_entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut Entry> {
        let name = normalize_name(name)?;
        self.entries
            .get_mut(&name)
            .ok_or(NoteError::EntryNotFound(name))
    }
}

/// Entry names are case-insensitive: trimmed and lowercased before any
/// lookup or insert. An empty name is never a valid key.
fn normalize_name(name: &str) -> Result<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(NoteError::InvalidName);
    }
    Ok(name)
}

/// Tags get the same treatment, but an empty tag is dropped rather
/// than rejected.
fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|t| normalize_tag(t.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_trip() -> NoteStore {
        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["flights", "hotel"])
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_edit_description() {
        let mut store = store_with_trip();

        assert_eq!(store.get("trip").unwrap().description, "travel plans");

        store.edit_description("trip", "summer travel plans").unwrap();
        assert_eq!(store.get("trip").unwrap().description, "summer travel plans");
        // Tags untouched by the edit
        assert_eq!(store.get("trip").unwrap().tags.len(), 2);
    }

    #[test]
    fn test_add_duplicate_entry_fails() {
        let mut store = store_with_trip();

        let err = store.add_entry("trip", "other", Vec::<String>::new());
        assert!(matches!(err, Err(NoteError::DuplicateEntry(_))));
        // Original untouched
        assert_eq!(store.get("trip").unwrap().description, "travel plans");
    }

    #[test]
    fn test_entry_names_are_case_insensitive() {
        let mut store = store_with_trip();

        let err = store.add_entry("TRIP", "shouting", Vec::<String>::new());
        assert!(matches!(err, Err(NoteError::DuplicateEntry(_))));
        assert!(store.get("Trip").is_some());
    }

    #[test]
    fn test_empty_entry_name_rejected() {
        let mut store = NoteStore::new();

        let err = store.add_entry("   ", "blank", Vec::<String>::new());
        assert!(matches!(err, Err(NoteError::InvalidName)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_tag_normalization_is_idempotent() {
        let mut store = NoteStore::new();
        store.add_entry("trip", "travel plans", Vec::<String>::new()).unwrap();

        assert!(store.add_tag("trip", "Foo").unwrap());
        assert!(!store.add_tag("trip", "foo").unwrap());

        let tags = &store.get("trip").unwrap().tags;
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("foo"));
    }

    #[test]
    fn test_add_tags_deduplicated_on_entry_creation() {
        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["Flights", "flights", "hotel", " "])
            .unwrap();

        let tags = &store.get("trip").unwrap().tags;
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("flights"));
        assert!(tags.contains("hotel"));
    }

    #[test]
    fn test_remove_missing_tag_fails_and_leaves_tags_alone() {
        let mut store = store_with_trip();

        let err = store.remove_tag("trip", "car");
        assert!(matches!(err, Err(NoteError::TagNotFound { .. })));
        assert_eq!(store.get("trip").unwrap().tags.len(), 2);
    }

    #[test]
    fn test_remove_tag() {
        let mut store = store_with_trip();

        store.remove_tag("trip", "Hotel").unwrap();
        let tags = &store.get("trip").unwrap().tags;
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("flights"));
    }

    #[test]
    fn test_remove_tag_from_missing_entry() {
        let mut store = NoteStore::new();
        let err = store.remove_tag("nope", "tag");
        assert!(matches!(err, Err(NoteError::EntryNotFound(_))));
    }

    #[test]
    fn test_replace_tags() {
        let mut store = store_with_trip();

        store.replace_tags("trip", ["Car", "car", "train"]).unwrap();
        let tags = &store.get("trip").unwrap().tags;
        assert_eq!(tags.len(), 2);
        assert!(tags.contains("car"));
        assert!(tags.contains("train"));

        store.replace_tags("trip", Vec::<String>::new()).unwrap();
        assert!(store.get("trip").unwrap().tags.is_empty());
    }

    #[test]
    fn test_delete_entry() {
        let mut store = store_with_trip();

        store.delete_entry("trip").unwrap();
        assert!(store.is_empty());

        let err = store.delete_entry("trip");
        assert!(matches!(err, Err(NoteError::EntryNotFound(_))));
    }

    #[test]
    fn test_batch_delete_is_atomic() {
        let mut store = store_with_trip();

        let err = store.delete_entries(["trip", "missing"]);
        assert!(matches!(err, Err(NoteError::EntryNotFound(_))));
        assert!(store.get("trip").is_some());

        store.add_entry("packing", "what to bring", Vec::<String>::new()).unwrap();
        let deleted = store.delete_entries(["trip", "packing"]).unwrap();
        assert_eq!(deleted, 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_all() {
        let mut store = store_with_trip();
        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_entries_alphabetical_and_restartable() {
        let mut store = NoteStore::new();
        store.add_entry("zebra", "z", Vec::<String>::new()).unwrap();
        store.add_entry("apple", "a", Vec::<String>::new()).unwrap();
        store.add_entry("mango", "m", Vec::<String>::new()).unwrap();

        let names: Vec<&str> = store.list_entries().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["apple", "mango", "zebra"]);

        // Second pass over a fresh iterator sees the same sequence
        let again: Vec<&str> = store.list_entries().map(|(n, _)| n).collect();
        assert_eq!(names, again);
    }

    #[test]
    fn test_trip_scenario() {
        let mut store = NoteStore::new();
        store
            .add_entry("trip", "travel plans", ["flights", "hotel"])
            .unwrap();
        store.add_tag("trip", "Flights").unwrap();

        let entries: Vec<(&str, &Entry)> = store.list_entries().collect();
        assert_eq!(entries.len(), 1);
        let (name, entry) = entries[0];
        assert_eq!(name, "trip");
        assert_eq!(entry.tags.len(), 2);
        assert!(entry.tags.contains("flights"));
        assert!(entry.tags.contains("hotel"));
    }
}
