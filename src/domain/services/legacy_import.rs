//! Mapping of the legacy browser local-storage layout onto store keys.
//!
//! A legacy dump is a flat JSON object whose values are JSON-encoded strings,
//! exactly as the browser held them, under the web apps' key names.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{
    Animal, CalendarEvent, DiaryEntry, Field, Greenhouse, Record, Session, Settings, SESSION_KEY,
    SETTINGS_KEY,
};

/// Legacy key and the store key it becomes. Canonical names come first so
/// they win over aliases holding the same collection.
const KEY_MAP: &[(&str, &str)] = &[
    (Field::KEY, Field::KEY),
    (Animal::KEY, Animal::KEY),
    (Greenhouse::KEY, Greenhouse::KEY),
    (DiaryEntry::KEY, DiaryEntry::KEY),
    (CalendarEvent::KEY, CalendarEvent::KEY),
    (SETTINGS_KEY, SETTINGS_KEY),
    ("agri_fields", Field::KEY),
    ("agri_diary", DiaryEntry::KEY),
    ("agri_settings", SETTINGS_KEY),
];

const LEGACY_USER_KEY: &str = "agri_user";
const LEGACY_TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedKey {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyImport {
    pub entries: BTreeMap<String, Value>,
    pub skipped: Vec<SkippedKey>,
}

pub fn migrate_legacy(raw: &Map<String, Value>, now: DateTime<Utc>) -> LegacyImport {
    let mut import = LegacyImport::default();

    for (legacy, target) in KEY_MAP {
        let Some(value) = raw.get(*legacy) else {
            continue;
        };
        if import.entries.contains_key(*target) {
            import.skip(legacy, format!("superseded by '{}'", target));
            continue;
        }
        match decode(value).and_then(|decoded| normalize(target, decoded)) {
            Ok(normalized) => {
                import.entries.insert(target.to_string(), normalized);
            }
            Err(reason) => import.skip(legacy, reason),
        }
    }

    if let Some(user) = raw.get(LEGACY_USER_KEY) {
        let session = decode(user).and_then(|user| {
            // The React app kept the token inside the user object.
            let token = raw
                .get(LEGACY_TOKEN_KEY)
                .and_then(Value::as_str)
                .or_else(|| user.get("token").and_then(Value::as_str))
                .unwrap_or_default()
                .to_string();
            let mut session = Map::new();
            session.insert("user".to_string(), user);
            session.insert("token".to_string(), Value::String(token));
            session.insert("signedInAt".to_string(), Value::String(now.to_rfc3339()));
            normalize(SESSION_KEY, Value::Object(session))
        });
        match session {
            Ok(session) => {
                import.entries.insert(SESSION_KEY.to_string(), session);
            }
            Err(reason) => import.skip(LEGACY_USER_KEY, reason),
        }
    }

    let known = |k: &str| {
        KEY_MAP.iter().any(|(legacy, _)| *legacy == k)
            || k == LEGACY_USER_KEY
            || k == LEGACY_TOKEN_KEY
    };
    for key in raw.keys().filter(|k| !known(k)) {
        import.skip(key, "unknown key".to_string());
    }

    import
}

impl LegacyImport {
    fn skip(&mut self, key: &str, reason: String) {
        self.skipped.push(SkippedKey {
            key: key.to_string(),
            reason,
        });
    }
}

/// Local storage holds strings; decode the JSON inside. Values that are
/// already structured are taken as-is.
fn decode(value: &Value) -> Result<Value, String> {
    match value {
        Value::String(s) => serde_json::from_str(s).map_err(|e| format!("not valid JSON: {}", e)),
        Value::Null => Err("empty value".to_string()),
        other => Ok(other.clone()),
    }
}

/// Read a decoded value as the type stored under `key` and write it back in
/// the current layout. Values farmbook could not load are refused here so
/// they never reach the store.
fn normalize(key: &str, value: Value) -> Result<Value, String> {
    match key {
        Field::KEY => reshape::<Vec<Field>>(value, "field records"),
        Animal::KEY => reshape::<Vec<Animal>>(value, "animal records"),
        Greenhouse::KEY => reshape::<Vec<Greenhouse>>(value, "greenhouse records"),
        DiaryEntry::KEY => reshape::<Vec<DiaryEntry>>(value, "diary entries"),
        CalendarEvent::KEY => reshape::<Vec<CalendarEvent>>(value, "calendar events"),
        SETTINGS_KEY => reshape::<Settings>(value, "settings"),
        SESSION_KEY => reshape::<Session>(value, "a signed-in user"),
        _ => Ok(value),
    }
}

fn reshape<T: Serialize + DeserializeOwned>(value: Value, what: &str) -> Result<Value, String> {
    let typed: T = serde_json::from_value(value)
        .map_err(|e| format!("not readable as {}: {}", what, e))?;
    serde_json::to_value(typed).map_err(|e| format!("cannot re-encode {}: {}", what, e))
}
