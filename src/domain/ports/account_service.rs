//! AccountService port

use super::weather_provider::ServiceError;
use crate::domain::entities::Session;

/// Sign-up form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
    pub farm_name: Option<String>,
}

pub trait AccountService {
    fn login(&self, email: &str, password: &str) -> Result<Session, ServiceError>;
    fn register(&self, registration: &Registration) -> Result<Session, ServiceError>;
    fn logout(&self) -> Result<(), ServiceError>;
}
