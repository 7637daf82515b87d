use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use log::warn;

use crate::models::Task;

/// Well-known key the whole task collection is stored under.
pub const STORAGE_KEY: &str = "TODO_APP";

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "io error: {err}"),
            StorageError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        StorageError::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        StorageError::Json(value)
    }
}

/// Host-provided key-value store holding opaque string values.
///
/// All access happens from the single UI thread, so each call is as atomic
/// as the backing store makes it; there is no cross-call transactionality.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed store: one `<key>.json` file per key under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn ensure_dirs(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let mut file = File::open(path)?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(Some(buf))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(temp_path, path)?;
        Ok(())
    }
}

/// In-memory store for tests and embedding hosts without a filesystem.
/// Clones share the same map, so a test can keep a handle for inspection.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.inner.lock().expect("store poisoned");
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.inner.lock().expect("store poisoned");
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Persistence adapter for the task collection.
///
/// This is the error-swallowing boundary: read/parse problems yield an empty
/// collection and write problems are logged, so the caller always stays
/// interactive even with a corrupted or inaccessible backing store.
pub struct TaskStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Reads the stored blob. Absent, unreadable, or anything other than a
    /// top-level JSON array of tasks comes back as an empty collection.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("cannot read {STORAGE_KEY}: {err}");
                return Vec::new();
            }
        };
        let value: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("cannot parse {STORAGE_KEY}: {err}");
                return Vec::new();
            }
        };
        if !value.is_array() {
            warn!("cannot parse {STORAGE_KEY}: top-level value is not an array");
            return Vec::new();
        }
        match serde_json::from_value(value) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!("cannot parse {STORAGE_KEY}: {err}");
                Vec::new()
            }
        }
    }

    /// Serializes the full collection and overwrites the stored blob.
    /// Failures (quota, io) are logged and never propagated; the in-memory
    /// collection stays authoritative until the next successful save.
    pub fn save(&self, tasks: &[Task]) {
        let json = match serde_json::to_string(tasks) {
            Ok(json) => json,
            Err(err) => {
                warn!("cannot save {STORAGE_KEY}: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(STORAGE_KEY, &json) {
            warn!("cannot save {STORAGE_KEY}: {err}");
        }
    }
}
