//! Key-value persistence for small pieces of UI state
//!
//! Components that remember something across runs (a dismissed notice, a
//! chosen display mode) talk to a [`KvStore`] instead of reaching for files
//! themselves. [`FileStore`] is the production implementation: a flat TOML
//! map under the data directory, written through on every change.
//! [`MemoryStore`] backs tests and ephemeral sessions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// String key-value persistence
pub trait KvStore {
    /// Read a value, `None` if the key was never set
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value; durable before this returns
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// TOML-file-backed store
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path, loading any existing entries
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                Error::Store(format!("failed to read state file {:?}: {}", path, e))
            })?;
            toml::from_str(&content)
                .map_err(|e| Error::Store(format!("failed to parse state file: {}", e)))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Where this store persists its entries
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.entries)
            .map_err(|e| Error::Store(format!("failed to serialize state: {}", e)))?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::Store(format!("failed to write state file {:?}: {}", self.path, e)))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("dismissed/welcome").unwrap(), None);

        store.set("dismissed/welcome", "true").unwrap();

        // A fresh store on the same path sees the write
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("dismissed/welcome").unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.toml");

        let mut store = FileStore::open(&path).unwrap();
        store.set("key", "value").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.toml");

        let mut store = FileStore::open(&path).unwrap();
        store.set("mode", "relative").unwrap();
        store.set("mode", "absolute").unwrap();
        assert_eq!(store.get("mode").unwrap().as_deref(), Some("absolute"));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
