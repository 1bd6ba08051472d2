// src/core/store.rs

use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs, io,
    marker::PhantomData,
    path::{Path, PathBuf},
};
use log::{debug, info, warn};
use thiserror::Error;

/// Anything kept in a record store. IDs are unique within one store.
pub trait Record {
    fn id(&self) -> u32;
}

/// Result of reading a store document.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<R> {
    /// No document has been written yet.
    Absent,
    Present(Vec<R>),
}

impl<R> Snapshot<R> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Snapshot::Absent)
    }

    pub fn into_records(self) -> Vec<R> {
        match self {
            Snapshot::Absent => Vec::new(),
            Snapshot::Present(records) => records,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    #[error("{} does not contain a valid record list: {}", .path.display(), .source)]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("ID space exhausted, the highest ID in use is {0}")]
    IdsExhausted(u32),
}

pub trait RecordStore<R> {
    fn load(&self) -> Result<Snapshot<R>, StoreError>;

    /// Replaces the whole document with `records`.
    fn save(&mut self, records: &[R]) -> Result<(), StoreError>;

    fn records(&self) -> Result<Vec<R>, StoreError> {
        Ok(self.load()?.into_records())
    }
}

/// `1` for an empty store, otherwise one past the highest ID in use.
pub fn next_id<R: Record>(records: &[R]) -> Result<u32, StoreError> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
    }
}

fn decode<R: DeserializeOwned>(path: &Path, document: &str) -> Result<Vec<R>, StoreError> {
    if document.trim().is_empty() {
        warn!("{} is empty, treating it as an empty record list", path.display());
        return Ok(Vec::new());
    }
    serde_json::from_str(document).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

fn encode<R: Serialize>(records: &[R]) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Record store backed by a single pretty-printed JSON array on disk.
pub struct JsonFileStore<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonFileStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut temp = self.path.clone().into_os_string();
        temp.push(".temp");
        PathBuf::from(temp)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<R: Serialize + DeserializeOwned> RecordStore<R> for JsonFileStore<R> {
    fn load(&self) -> Result<Snapshot<R>, StoreError> {
        let document = match fs::read_to_string(&self.path) {
            Ok(document) => document,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(Snapshot::Absent);
            }
            Err(e) => return Err(self.io_error(e)),
        };
        let records = decode(&self.path, &document)?;
        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(Snapshot::Present(records))
    }

    fn save(&mut self, records: &[R]) -> Result<(), StoreError> {
        let json = encode(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp_file = self.temp_path();
        fs::write(&temp_file, &json).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp_file, &self.path) {
            let _ = fs::remove_file(&temp_file);
            return Err(self.io_error(e));
        }

        info!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// In-memory stand-in for `JsonFileStore`. Holds the serialized document so
/// the same encode/decode path runs as on disk.
pub struct MemoryStore<R> {
    document: Option<String>,
    _record: PhantomData<fn() -> R>,
}

impl<R> MemoryStore<R> {
    const PATH: &'static str = "<memory>";

    pub fn new() -> Self {
        Self {
            document: None,
            _record: PhantomData,
        }
    }

    /// Seeds the store with a raw document, valid or not.
    pub fn with_document(document: &str) -> Self {
        Self {
            document: Some(document.to_string()),
            _record: PhantomData,
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Serialize + DeserializeOwned> MemoryStore<R> {
    pub fn with_records(records: &[R]) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.save(records)?;
        Ok(store)
    }
}

impl<R: Serialize + DeserializeOwned> RecordStore<R> for MemoryStore<R> {
    fn load(&self) -> Result<Snapshot<R>, StoreError> {
        match &self.document {
            None => Ok(Snapshot::Absent),
            Some(document) => Ok(Snapshot::Present(decode(Path::new(Self::PATH), document)?)),
        }
    }

    fn save(&mut self, records: &[R]) -> Result<(), StoreError> {
        self.document = Some(encode(records)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note { id, text: text.to_string() }
    }

    fn setup_test_environment() -> (TempDir, JsonFileStore<Note>) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("notes.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id::<Note>(&[]).unwrap(), 1);
        assert_eq!(next_id(&[note(1, "a"), note(2, "b"), note(3, "c")]).unwrap(), 4);
        assert_eq!(next_id(&[note(1, "a"), note(3, "c")]).unwrap(), 4);
        assert_eq!(next_id(&[note(5, "a"), note(2, "b")]).unwrap(), 6);
    }

    #[test]
    fn test_next_id_at_top_of_id_space() {
        assert_eq!(next_id(&[note(u32::MAX - 1, "a")]).unwrap(), u32::MAX);

        let err = next_id(&[note(3, "a"), note(u32::MAX, "b")]).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted(u32::MAX)));
        assert!(err.to_string().contains("ID space exhausted"));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let (_guard, store) = setup_test_environment();
        let snapshot = store.load().unwrap();
        assert!(snapshot.is_absent());
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (_guard, mut store) = setup_test_environment();
        let notes = vec![note(1, "first"), note(2, "second")];

        store.save(&notes).unwrap();

        assert_eq!(store.load().unwrap(), Snapshot::Present(notes));
    }

    #[test]
    fn test_save_empty_set_is_present() {
        let (_guard, mut store) = setup_test_environment();
        store.save(&[]).unwrap();
        assert_eq!(store.load().unwrap(), Snapshot::Present(Vec::new()));
    }

    #[test]
    fn test_save_writes_two_space_indent_and_no_temp_file() {
        let (guard, mut store) = setup_test_environment();
        store.save(&[note(1, "first")]).unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert!(written.starts_with("[\n  {\n    \"id\": 1"));
        assert!(!guard.path().join("notes.json.temp").exists());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let (guard, mut store) = setup_test_environment();
        // a non-empty directory where the document should go makes the rename fail
        fs::create_dir(store.path()).unwrap();
        fs::write(store.path().join("keep"), "x").unwrap();

        let result = store.save(&[note(1, "a")]);

        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(!guard.path().join("notes.json.temp").exists());
        assert!(store.path().join("keep").exists());
    }

    #[test]
    fn test_save_overwrites_whole_document() {
        let (_guard, mut store) = setup_test_environment();
        store.save(&[note(1, "a"), note(2, "b")]).unwrap();
        store.save(&[note(2, "b")]).unwrap();
        assert_eq!(store.records().unwrap(), vec![note(2, "b")]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(temp_dir.path().join("nested/dir/notes.json"));
        store.save(&[note(1, "a")]).unwrap();
        assert_eq!(store.records().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (_guard, store) = setup_test_environment();
        fs::write(store.path(), "{ not json").unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
        // the bad document must be left in place
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let (_guard, store) = setup_test_environment();
        fs::write(store.path(), r#"{"id": 1, "text": "not a list"}"#).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_blank_file_is_empty() {
        let (_guard, store) = setup_test_environment();
        fs::write(store.path(), "\n").unwrap();
        assert_eq!(store.load().unwrap(), Snapshot::Present(Vec::new()));
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let (_guard, store) = setup_test_environment();
        fs::create_dir(store.path()).unwrap();
        assert!(matches!(store.load(), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_memory_store_behaves_like_file_store() {
        let mut store: MemoryStore<Note> = MemoryStore::new();
        assert!(store.load().unwrap().is_absent());

        store.save(&[note(1, "a")]).unwrap();
        assert_eq!(store.records().unwrap(), vec![note(1, "a")]);
        assert!(store.document().unwrap().contains("\"text\": \"a\""));
    }

    #[test]
    fn test_memory_store_seeded_with_records() {
        let mut store = MemoryStore::with_records(&[note(1, "a"), note(3, "c")]).unwrap();
        let mut notes = store.records().unwrap();
        assert_eq!(next_id(&notes).unwrap(), 4);

        notes.retain(|n| n.id != 3);
        store.save(&notes).unwrap();
        assert_eq!(store.records().unwrap(), vec![note(1, "a")]);
    }

    #[test]
    fn test_memory_store_corrupt_document() {
        let store: MemoryStore<Note> = MemoryStore::with_document("[{\"id\": }]");
        let err = store.records().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("<memory>"));
    }
}
