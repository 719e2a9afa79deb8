//! Import of a legacy local-storage dump into the current store.
//!
//! Existing keys are kept unless the caller asks to overwrite them, so an
//! import never silently replaces records made with farmbook.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::domain::ports::KeyValueStore;
use crate::domain::services::legacy_import::{migrate_legacy, SkippedKey};
use crate::error::{FarmError, FarmResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Keys written to the store
    pub imported: Vec<String>,
    /// Keys already present and left alone
    pub kept: Vec<String>,
    /// Dump keys that could not be mapped, with the reason
    pub skipped: Vec<(String, String)>,
}

pub fn import_legacy_dump<S: KeyValueStore + ?Sized>(
    store: &S,
    content: &str,
    overwrite: bool,
    now: DateTime<Utc>,
) -> FarmResult<ImportReport> {
    let raw: Value = serde_json::from_str(content)
        .map_err(|e| FarmError::validation("dump", format!("not valid JSON: {}", e)))?;
    let Value::Object(raw) = raw else {
        return Err(FarmError::validation(
            "dump",
            "expected a JSON object of key/value pairs",
        ));
    };

    let import = migrate_legacy(&raw, now);
    let mut report = ImportReport {
        skipped: import
            .skipped
            .into_iter()
            .map(|SkippedKey { key, reason }| (key, reason))
            .collect(),
        ..ImportReport::default()
    };

    let existing = store.keys()?;
    for (key, value) in import.entries {
        if !overwrite && existing.contains(&key) {
            log::info!("keeping existing '{}'", key);
            report.kept.push(key);
            continue;
        }
        store.put(&key, value)?;
        report.imported.push(key);
    }

    Ok(report)
}
