//! Flat key/value storage backends.

use super::error::StoreError;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A flat string key/value store.
///
/// Each key is read and written independently; backends make no promise
/// of atomicity across keys.
pub trait KeyValueBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile in-memory backend.
///
/// A read-only backend serves its entries but refuses every write, e.g. to
/// open someone else's data without touching it.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    read_only: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a backend with raw entries, e.g. data written by another client.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            read_only: false,
        }
    }

    /// Freeze the backend: later writes fail with `StoreError::ReadOnly`.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries.remove(key);
        Ok(())
    }
}

/// Backend persisting all keys as one JSON object of strings.
///
/// Every write rewrites the file through a temp file and rename, so a
/// crash never leaves a half-written document behind.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileBackend {
    /// Open (or lazily create) a backend at `path`.
    ///
    /// A missing file starts empty. An unreadable or malformed file also
    /// starts empty; its contents are replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "Ignoring malformed store file");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "Failed to read store file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueBackend for JsonFileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips_values() {
        let mut backend = MemoryBackend::new();
        assert!(backend.is_empty());

        backend.set("a", "1").unwrap();
        assert_eq!(backend.get("a").unwrap(), Some("1".to_string()));

        backend.remove("a").unwrap();
        assert_eq!(backend.get("a").unwrap(), None);
    }

    #[test]
    fn read_only_memory_backend_refuses_writes() {
        let mut backend = MemoryBackend::with_entries([("userLevel", "2")]).read_only();

        assert_eq!(backend.set("userLevel", "3"), Err(StoreError::ReadOnly));
        assert_eq!(backend.remove("userLevel"), Err(StoreError::ReadOnly));
        assert_eq!(backend.get("userLevel").unwrap(), Some("2".to_string()));
    }

    #[test]
    fn file_backend_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut backend = JsonFileBackend::open(&path);
        backend.set("userLevel", "3").unwrap();
        backend.set("lastUpdateTime", "1700000000000").unwrap();
        backend.remove("lastUpdateTime").unwrap();

        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.get("userLevel").unwrap(), Some("3".to_string()));
        assert_eq!(reopened.get("lastUpdateTime").unwrap(), None);
    }

    #[test]
    fn file_backend_tolerates_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{not json").unwrap();

        let mut backend = JsonFileBackend::open(&path);
        assert_eq!(backend.get("userLevel").unwrap(), None);

        backend.set("userLevel", "2").unwrap();
        let reopened = JsonFileBackend::open(&path);
        assert_eq!(reopened.get("userLevel").unwrap(), Some("2".to_string()));
    }
}
