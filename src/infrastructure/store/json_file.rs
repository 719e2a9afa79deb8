//! JSON file store
//!
//! Persists every collection in one document, `farmbook.json`, in the data
//! directory (`~/.local/share/farmbook` on Linux).

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde_json::Value;

use super::document::{self, Snapshot};
use crate::domain::ports::{KeyValueStore, StoreError};

pub const STORE_FILE_NAME: &str = "farmbook.json";

/// What `farmbook store info` reports.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StoreInfo {
    pub path: PathBuf,
    pub exists: bool,
    pub schema_version: u32,
    pub updated_at: Option<DateTime<Utc>>,
    /// Key and number of items (1 for plain objects)
    pub keys: Vec<(String, usize)>,
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new() -> Self {
        Self::in_dir(&default_data_dir())
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE_NAME),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Snapshot, StoreError> {
        if !self.path.exists() {
            return Ok(Snapshot::empty());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        document::decode(&self.path, &content)
    }

    fn save_to_disk(&self, entries: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(access)?;

        let content = document::encode(entries, Utc::now())?;

        // Write next to the target so the rename never crosses filesystems.
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(access)?;
        tmp.write_all(content.as_bytes()).map_err(access)?;
        tmp.as_file().sync_all().map_err(access)?;
        tmp.persist(&self.path).map_err(|e| access(e.error))?;

        Ok(())
    }

    /// Run `f` on the entries under an exclusive lock and write them back
    /// when `f` reports a change.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut BTreeMap<String, Value>) -> (T, bool),
    ) -> Result<T, StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = self.load_from_disk().and_then(|mut snapshot| {
            let (value, changed) = f(&mut snapshot.entries);
            if changed || snapshot.needs_upgrade() {
                self.save_to_disk(&snapshot.entries)?;
            }
            Ok(value)
        });

        let _ = lock_file.unlock();
        result
    }

    pub fn info(&self) -> Result<StoreInfo, StoreError> {
        let snapshot = self.load_from_disk()?;
        let keys = snapshot
            .entries
            .iter()
            .map(|(key, value)| {
                let len = match value {
                    Value::Array(items) => items.len(),
                    Value::Null => 0,
                    _ => 1,
                };
                (key.clone(), len)
            })
            .collect();
        Ok(StoreInfo {
            path: self.path.clone(),
            exists: self.path.exists(),
            schema_version: snapshot.schema_version,
            updated_at: snapshot.updated_at,
            keys,
        })
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut snapshot = self.load_from_disk()?;
        Ok(snapshot.entries.remove(key))
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        log::debug!("writing '{}' to {}", key, self.path.display());
        self.mutate(|entries| {
            entries.insert(key.to_string(), value);
            ((), true)
        })
    }

    fn remove(&self, key: &str) -> Result<bool, StoreError> {
        self.mutate(|entries| {
            let existed = entries.remove(key).is_some();
            (existed, existed)
        })
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let snapshot = self.load_from_disk()?;
        Ok(snapshot.entries.into_keys().collect())
    }
}

fn access(e: std::io::Error) -> StoreError {
    StoreError::AccessError {
        message: e.to_string(),
    }
}

/// `FARMBOOK_DATA_DIR`, or the platform data directory.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FARMBOOK_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .map(|d| d.join("farmbook"))
        .unwrap_or_else(|| PathBuf::from(".farmbook"))
}
