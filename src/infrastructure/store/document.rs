//! On-disk document format and schema migration
//!
//! Version 2:
//!
//! ```json
//! { "schema_version": 2, "updated_at": "...", "entries": { "fields": [...] } }
//! ```
//!
//! Version 1 is a raw browser local-storage dump (string values under the
//! legacy key names). It has no `schema_version` key, or `schema_version: 1`.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::ports::StoreError;
use crate::domain::services::migrate_legacy;

pub const SCHEMA_VERSION: u32 = 2;

const LEGACY_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreDocument {
    schema_version: u32,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

/// Decoded document, always in the current schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub entries: BTreeMap<String, Value>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Version the document had on disk
    pub schema_version: u32,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ..Self::default()
        }
    }

    pub fn needs_upgrade(&self) -> bool {
        self.schema_version < SCHEMA_VERSION
    }
}

pub fn decode(path: &Path, content: &str) -> Result<Snapshot, StoreError> {
    if content.trim().is_empty() {
        return Ok(Snapshot::empty());
    }

    let corrupted = |message: String| StoreError::Corrupted {
        path: path.to_path_buf(),
        message,
    };

    let value: Value = serde_json::from_str(content).map_err(|e| corrupted(e.to_string()))?;
    let Value::Object(mut object) = value else {
        return Err(corrupted("expected a JSON object".to_string()));
    };

    let version = match object.get("schema_version") {
        None => LEGACY_SCHEMA_VERSION,
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| corrupted(format!("schema_version is not a number: {}", v)))?,
    };

    if version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: version,
            supported: SCHEMA_VERSION,
        });
    }

    if version == LEGACY_SCHEMA_VERSION {
        object.remove("schema_version");
        return Ok(upgrade_legacy(&object));
    }

    let doc: StoreDocument =
        serde_json::from_value(Value::Object(object)).map_err(|e| corrupted(e.to_string()))?;
    Ok(Snapshot {
        entries: doc.entries,
        updated_at: doc.updated_at,
        schema_version: doc.schema_version,
    })
}

pub fn encode(entries: &BTreeMap<String, Value>, now: DateTime<Utc>) -> Result<String, StoreError> {
    let doc = StoreDocument {
        schema_version: SCHEMA_VERSION,
        updated_at: Some(now),
        entries: entries.clone(),
    };
    serde_json::to_string_pretty(&doc).map_err(|e| StoreError::SerializationError {
        message: e.to_string(),
    })
}

fn upgrade_legacy(raw: &Map<String, Value>) -> Snapshot {
    let import = migrate_legacy(raw, Utc::now());
    for skipped in &import.skipped {
        log::warn!("dropping legacy key '{}': {}", skipped.key, skipped.reason);
    }
    log::info!(
        "migrated legacy store (schema v{}) with {} keys",
        LEGACY_SCHEMA_VERSION,
        import.entries.len()
    );
    Snapshot {
        entries: import.entries,
        updated_at: None,
        schema_version: LEGACY_SCHEMA_VERSION,
    }
}
