//! WeatherProvider port

use chrono::NaiveDate;

use crate::domain::value_objects::{CurrentWeather, ForecastDay, HistoryDay};

pub trait WeatherProvider {
    fn current(&self, location: &str) -> Result<CurrentWeather, ServiceError>;

    /// `days` consecutive days starting today.
    fn forecast(&self, location: &str, days: u32) -> Result<Vec<ForecastDay>, ServiceError>;

    fn history(&self, location: &str, date: NaiveDate) -> Result<HistoryDay, ServiceError>;
}

/// Failure of a remote (or mocked remote) call.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{service} is unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },

    #[error("{service} rejected the request: {message}")]
    Rejected {
        service: &'static str,
        message: String,
    },
}
