//! Key-value persistence backends
//!
//! The dashboard persists a handful of string values under fixed keys, in
//! the manner of browser local storage. [`FileStore`] keeps them as a JSON
//! object in `<data_dir>/storage.json`; [`MemoryStore`] keeps them for the
//! lifetime of the process only.

use std::collections::{BTreeMap, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use opnpage_core::prelude::*;

const STORAGE_FILENAME: &str = "storage.json";
const LOCK_FILENAME: &str = ".storage.lock";
const TEMP_FILENAME: &str = ".storage.json.tmp";

/// String key-value store used for all persisted dashboard state
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// FileStore
// ─────────────────────────────────────────────────────────────────────────────

/// JSON-file backed store
///
/// Values are cached in memory; every write rewrites the whole file through
/// a temp file and rename while holding an exclusive lock on a sidecar file.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store in `dir`
    ///
    /// A corrupt storage file is logged and treated as empty; it is replaced
    /// on the next write.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|_| Error::data_dir(&dir))?;

        let path = dir.join(STORAGE_FILENAME);
        let entries = if path.exists() {
            match read_entries(&path) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable storage file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        debug!("Opened storage at {:?} ({} keys)", path, entries.len());
        Ok(Self { dir, entries })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STORAGE_FILENAME)
    }

    fn persist(&self) -> Result<()> {
        let lock_path = self.dir.join(LOCK_FILENAME);
        let lock = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::storage(format!("Failed to open lock file: {}", e)))?;

        lock.try_lock_exclusive()
            .map_err(|_| Error::storage_locked(&lock_path))?;

        let content = serde_json::to_string_pretty(&self.entries)?;
        write_atomic(&self.dir.join(TEMP_FILENAME), &self.path(), content.as_bytes())?;

        // Lock is released when `lock` is dropped
        trace!("Persisted {} keys to {:?}", self.entries.len(), self.path());
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn write_atomic(temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = std::fs::File::create(temp_path)
        .map_err(|e| Error::storage(format!("Failed to create temp file: {}", e)))?;
    file.write_all(bytes)
        .map_err(|e| Error::storage(format!("Failed to write temp file: {}", e)))?;
    file.flush()
        .map_err(|e| Error::storage(format!("Failed to flush temp file: {}", e)))?;

    std::fs::rename(temp_path, path)
        .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ─────────────────────────────────────────────────────────────────────────────

/// Process-lifetime store for `--ephemeral` runs and tests
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("darkMode").unwrap(), None);

        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));

        store.remove("darkMode").unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_reopen() {
        let temp = tempdir().unwrap();
        {
            let mut store = FileStore::open(temp.path()).unwrap();
            store.set("opnpage.layout.v2", "[]").unwrap();
            store.set("darkMode", "false").unwrap();
        }

        let store = FileStore::open(temp.path()).unwrap();
        assert_eq!(store.get("opnpage.layout.v2").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
        assert!(!temp.path().join(TEMP_FILENAME).exists());
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("nested").join("opnpage");

        let mut store = FileStore::open(&dir).unwrap();
        store.set("k", "v").unwrap();

        assert!(dir.join(STORAGE_FILENAME).exists());
    }

    #[test]
    fn test_file_store_ignores_corrupt_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(STORAGE_FILENAME), "{ not json").unwrap();

        let mut store = FileStore::open(temp.path()).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);

        store.set("darkMode", "true").unwrap();
        let reopened = FileStore::open(temp.path()).unwrap();
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_ignores_non_utf8_file() {
        let temp = tempdir().unwrap();
        std::fs::write(temp.path().join(STORAGE_FILENAME), [0xff, 0xfe, b'{', b'}']).unwrap();

        let mut store = FileStore::open(temp.path()).unwrap();
        assert_eq!(store.get("opnpage.layout.v2").unwrap(), None);

        store.set("darkMode", "true").unwrap();
        let reopened = FileStore::open(temp.path()).unwrap();
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_ignores_unreadable_file() {
        let temp = tempdir().unwrap();
        // A directory in place of the storage file cannot be read
        std::fs::create_dir(temp.path().join(STORAGE_FILENAME)).unwrap();

        let store = FileStore::open(temp.path()).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_file_store_remove() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::open(temp.path()).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("never-set").unwrap();

        let reopened = FileStore::open(temp.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_reports_held_lock() {
        let temp = tempdir().unwrap();
        let mut store = FileStore::open(temp.path()).unwrap();

        let holder = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(temp.path().join(LOCK_FILENAME))
            .unwrap();
        holder.lock_exclusive().unwrap();

        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, Error::StorageLocked { .. }));
        assert!(err.is_recoverable());
    }
}
