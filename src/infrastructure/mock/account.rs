use std::sync::Arc;

use crate::domain::entities::{Session, User};
use crate::domain::ports::{AccountService, Clock, Registration, ServiceError};

const DEFAULT_FARM_NAME: &str = "New farm";

/// Accepts any credentials and hands out a fake bearer token.
pub struct MockAccountService {
    latency: super::Latency,
    clock: Arc<dyn Clock>,
}

impl MockAccountService {
    pub fn new(latency: super::Latency, clock: Arc<dyn Clock>) -> Self {
        Self { latency, clock }
    }

    fn session(&self, user: User) -> Session {
        let now = self.clock.now();
        Session {
            user,
            token: format!("mock-jwt-token-{}", now.timestamp_millis()),
            signed_in_at: now,
        }
    }
}

impl AccountService for MockAccountService {
    fn login(&self, email: &str, _password: &str) -> Result<Session, ServiceError> {
        self.latency.wait(500);
        Ok(self.session(User {
            id: "1".to_string(),
            email: email.to_string(),
            name: "Farmer Ivanov".to_string(),
            farm_name: "Harvest Agro".to_string(),
            role: "farmer".to_string(),
            avatar: None,
        }))
    }

    fn register(&self, registration: &Registration) -> Result<Session, ServiceError> {
        self.latency.wait(500);
        let farm_name = registration
            .farm_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_FARM_NAME);
        Ok(self.session(User {
            id: self.clock.now().timestamp_millis().to_string(),
            email: registration.email.clone(),
            name: registration.name.clone(),
            farm_name: farm_name.to_string(),
            role: "farmer".to_string(),
            avatar: None,
        }))
    }

    fn logout(&self) -> Result<(), ServiceError> {
        Ok(())
    }
}
