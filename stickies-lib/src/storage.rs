//! Key-value persistence slots.
//!
//! A [`Storage`] maps a slot name to a single text value. The note store keeps its whole
//! collection in one slot and rewrites it after every mutation.

use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Storage quota exceeded: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded { needed: usize, quota: usize },
}

/// A persistent key-value facility.
pub trait Storage: Debug + Send + Sync {
    /// Read the value held in `key`, or `None` if the slot has never been written.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value held in `key`. Either the whole value is written or nothing is.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Arc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Stores every slot as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);

        fs::create_dir_all(&self.dir)?;

        // Write beside the target and rename over it so readers never see a partial slot
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(value.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&path).map_err(|err| err.error)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}

/// Keeps slots in memory only, optionally limited to `quota` bytes across all slots.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            slots: RwLock::default(),
            quota: Some(quota),
        }
    }

    /// Seed a slot directly, bypassing the quota.
    pub fn insert(&self, key: &str, value: &str) {
        self.slots.write().insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.read().get(key).cloned()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.write();

        if let Some(quota) = self.quota {
            let others: usize = slots
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others.saturating_add(value.len());

            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }

        slots.insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_file_missing_slot() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.read("notes").unwrap().is_none());
    }

    #[test]
    fn test_file_write_read() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested"));

        storage.write("notes", "[1,2,3]").unwrap();
        storage.write("notes", "[]").unwrap();

        assert_eq!(storage.read("notes").unwrap().as_deref(), Some("[]"));
        assert!(storage.slot_path("notes").exists());
        // Only the slot itself should remain, no temporary files
        assert_eq!(fs::read_dir(storage.dir()).unwrap().count(), 1);
    }

    #[test]
    fn test_file_slots_are_independent() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.write("work", "a").unwrap();
        storage.write("home", "b").unwrap();

        assert_eq!(storage.read("work").unwrap().as_deref(), Some("a"));
        assert_eq!(storage.read("home").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_memory_quota() {
        let storage = MemoryStorage::with_quota(8);

        storage.write("a", "1234").unwrap();
        // Overwriting a slot does not count its previous value
        storage.write("a", "12345").unwrap();

        let err = storage.write("b", "1234").unwrap_err();
        assert!(
            matches!(err, StorageError::QuotaExceeded { needed: 9, quota: 8 }),
            "wrong error: {err:?}"
        );
        assert_eq!(storage.get("a").as_deref(), Some("12345"));
        assert!(storage.get("b").is_none());
    }

    #[test]
    fn test_shared_storage() {
        let storage = Arc::new(MemoryStorage::new());
        let shared: Arc<MemoryStorage> = storage.clone();

        shared.write("notes", "[]").unwrap();

        assert_eq!(storage.get("notes").as_deref(), Some("[]"));
    }
}
