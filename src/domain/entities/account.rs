//! Settings and signed-in session
//!
//! Both are single JSON objects rather than collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store key of the settings object
pub const SETTINGS_KEY: &str = "settings";
/// Store key of the session object
pub const SESSION_KEY: &str = "session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_true")]
    pub notifications: bool,
}

fn default_language() -> String {
    "ru".to_string()
}

fn default_currency() -> String {
    "RUB".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: default_language(),
            currency: default_currency(),
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "crate::domain::value_objects::string_or_number")]
    pub id: String,
    pub email: String,
    pub name: String,
    pub farm_name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

fn default_role() -> String {
    "farmer".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: User,
    pub token: String,
    pub signed_in_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.language, "ru");
        assert_eq!(settings.currency, "RUB");
        assert!(settings.notifications);
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency":"KGS"}"#).unwrap();
        assert_eq!(settings.currency, "KGS");
        assert_eq!(settings.language, "ru");
    }

    #[test]
    fn browser_user_with_numeric_id_and_token() {
        let json = r#"{
            "id": 1,
            "email": "ivanov@farm.ru",
            "name": "Фермер Иванов",
            "farmName": "Урожай",
            "role": "farmer",
            "avatar": "https://api.dicebear.com/7.x/avataaars/svg?seed=Farmers",
            "token": "mock-jwt-token-1709000000000"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(user.farm_name, "Урожай");
    }
}
