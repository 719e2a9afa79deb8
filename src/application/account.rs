//! Settings and session state, each a single object in the store.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::entities::{Session, Settings, SESSION_KEY, SETTINGS_KEY};
use crate::domain::ports::{AccountService, KeyValueStore, Registration, StoreError};
use crate::domain::services::validation;
use crate::error::{FarmError, FarmResult};

/// Keys accepted by `farmbook settings set`
pub const SETTINGS_KEYS: [&str; 3] = ["language", "currency", "notifications"];

pub struct SettingsManager<S: KeyValueStore> {
    store: Arc<S>,
    settings: Settings,
}

impl<S: KeyValueStore> SettingsManager<S> {
    pub fn load(store: Arc<S>) -> FarmResult<Self> {
        let settings = read_object::<Settings>(store.get(SETTINGS_KEY)?, SETTINGS_KEY)
            .unwrap_or_default();
        Ok(Self { store, settings })
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Set one setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> FarmResult<&Settings> {
        let mut next = self.settings.clone();
        match key {
            "language" => {
                validation::require_text("language", value)?;
                next.language = value.trim().to_lowercase();
            }
            "currency" => {
                let code = value.trim().to_uppercase();
                if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(FarmError::validation(
                        "currency",
                        "expected a three-letter code such as RUB",
                    ));
                }
                next.currency = code;
            }
            "notifications" => {
                next.notifications = parse_switch(value)
                    .ok_or_else(|| FarmError::validation("notifications", "expected on or off"))?;
            }
            other => {
                return Err(FarmError::validation(
                    "setting",
                    format!("unknown key '{}' (known: {})", other, SETTINGS_KEYS.join(", ")),
                ));
            }
        }

        self.store.put(SETTINGS_KEY, to_value(&next)?)?;
        self.settings = next;
        Ok(&self.settings)
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

pub struct SessionManager<S: KeyValueStore> {
    store: Arc<S>,
    session: Option<Session>,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub fn load(store: Arc<S>) -> FarmResult<Self> {
        let session = read_object::<Session>(store.get(SESSION_KEY)?, SESSION_KEY);
        Ok(Self { store, session })
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn require(&self) -> FarmResult<&Session> {
        self.session.as_ref().ok_or(FarmError::NotSignedIn)
    }

    pub fn login(
        &mut self,
        service: &dyn AccountService,
        email: &str,
        password: &str,
    ) -> FarmResult<&Session> {
        validation::validate_email(email)?;
        validation::require_text("password", password)?;
        let session = service.login(email.trim(), password)?;
        self.store_session(session)
    }

    pub fn register(
        &mut self,
        service: &dyn AccountService,
        registration: &Registration,
    ) -> FarmResult<&Session> {
        validation::require_text("name", &registration.name)?;
        validation::validate_email(&registration.email)?;
        validation::validate_password(&registration.password)?;
        let session = service.register(registration)?;
        self.store_session(session)
    }

    /// Forget the session. Returns whether one existed.
    pub fn logout(&mut self, service: &dyn AccountService) -> FarmResult<bool> {
        service.logout()?;
        self.session = None;
        Ok(self.store.remove(SESSION_KEY)?)
    }

    fn store_session(&mut self, session: Session) -> FarmResult<&Session> {
        self.store.put(SESSION_KEY, to_value(&session)?)?;
        log::info!("signed in as {}", session.user.email);
        Ok(&*self.session.insert(session))
    }
}

fn read_object<T: DeserializeOwned>(value: Option<serde_json::Value>, key: &str) -> Option<T> {
    let value = value?;
    match serde_json::from_value(value) {
        Ok(object) => Some(object),
        Err(e) => {
            log::warn!("ignoring unreadable '{}': {}", key, e);
            None
        }
    }
}

fn to_value<T: Serialize>(object: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(object).map_err(|e| StoreError::SerializationError {
        message: e.to_string(),
    })
}
