//! String key-value persistence.
//!
//! [`FileStore`] keeps every key in one JSON object on disk, so a design
//! file can be inspected or copied by hand. [`MemoryStore`] backs tests and
//! throwaway sessions.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get/set/clear by string key.
pub trait KeyValueStore {
    /// Reads a value. Missing keys are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Deletes a key. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Deletes every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn clear(&mut self) -> Result<()>;
}

/// Store persisted as a single JSON object file.
///
/// The file is re-read on every access and rewritten with a temp file +
/// rename, so it is never left half-written.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Opens a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .with_context(|| format!("Store file is not a JSON object of strings: {}", self.path.display()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory: {}", parent.display())
                })?;
            }
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize store")?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp store file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp store file to: {}",
            self.path.display()
        ))?;

        debug!(path = %self.path.display(), keys = entries.len(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.write_entries(&BTreeMap::new())
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects every write, as a full or locked disk would.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            entries: BTreeMap::new(),
            read_only: true,
        }
    }

    /// Creates a store pre-filled with entries.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            read_only: false,
        }
    }

    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            anyhow::bail!("Store is read-only");
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_writable()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.ensure_writable()?;
        self.entries.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.ensure_writable()?;
        self.entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("storage.json"));
        assert!(!store.exists());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_get_remove() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("storage.json");
        let mut store = FileStore::new(&path);

        store.set("a", "1")?;
        store.set("b", "[\"x\"]")?;
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());

        // A second handle sees the same data
        let other = FileStore::new(&path);
        assert_eq!(other.get("a")?, Some("1".to_string()));
        assert_eq!(other.get("b")?, Some("[\"x\"]".to_string()));

        store.remove("a")?;
        assert_eq!(store.get("a")?, None);
        store.remove("a")?;

        store.clear()?;
        assert_eq!(store.get("b")?, None);
        Ok(())
    }

    #[test]
    fn test_file_store_corrupt_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(store.get("a").is_err());
        assert!(store.set("a", "1").is_err());
        // Corrupt content is left for the user to inspect
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::with_entries([("k", "v")]);
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("w".to_string()));
        store.clear().unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_read_only_memory_store_rejects_writes() {
        let mut store = MemoryStore::read_only();
        assert!(store.set("k", "v").is_err());
        assert!(store.remove("k").is_err());
        assert_eq!(store.get("k").unwrap(), None);
    }
}
