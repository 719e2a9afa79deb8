//! KeyValueStore port
//!
//! Named JSON blobs, one per collection or settings object.

use std::path::PathBuf;

use serde_json::Value;

pub trait KeyValueStore: Send + Sync {
    /// Value under `key`, or `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    fn put(&self, key: &str, value: Value) -> Result<(), StoreError>;

    /// Remove `key`; returns whether it existed.
    fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// All keys currently held, sorted.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize store: {message}")]
    SerializationError { message: String },

    #[error(
        "store file corrupted: {path}\n  → Fix: Restore a backup or move the file aside\n  → Run: mv {path} {path}.bak\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("store schema version {found} is newer than supported version {supported}\n  → Fix: Upgrade farmbook")]
    UnsupportedVersion { found: u32, supported: u32 },
}
