//! Farm State Factory
//!
//! Wires the store, clock, observer and mocked services from configuration.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::application::FarmState;
use crate::config::Config;
use crate::domain::ports::{AccountService, Advisor, ChangeObserver, Clock, WeatherProvider};
use crate::error::FarmResult;
use crate::infrastructure::{
    FixedClock, JsonFileStore, Latency, LogObserver, MockAccountService, MockAdvisor,
    MockWeather, SystemClock,
};

/// Type alias for the FarmState used by the CLI
pub type ConcreteFarmState = FarmState<JsonFileStore>;

/// Store document in the configured data directory
pub fn create_store(config: &Config) -> Arc<JsonFileStore> {
    Arc::new(JsonFileStore::in_dir(&config.data_dir()))
}

/// System clock, or a clock pinned to `FARMBOOK_TODAY` (YYYY-MM-DD)
pub fn create_clock() -> Arc<dyn Clock> {
    clock_from(std::env::var("FARMBOOK_TODAY").ok().as_deref())
}

fn clock_from(today: Option<&str>) -> Arc<dyn Clock> {
    let Some(value) = today else {
        return Arc::new(SystemClock);
    };
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => {
            log::debug!("pinning today to {}", date);
            Arc::new(FixedClock::new(date))
        }
        Err(_) => {
            log::warn!("ignoring FARMBOOK_TODAY='{}' (expected YYYY-MM-DD)", value);
            Arc::new(SystemClock)
        }
    }
}

/// Load every collection from the configured store.
pub fn create_farm_state(config: &Config, clock: Arc<dyn Clock>) -> FarmResult<ConcreteFarmState> {
    let observer: Arc<dyn ChangeObserver> = Arc::new(LogObserver);
    FarmState::load(create_store(config), clock, Some(observer))
}

pub fn create_weather_provider(config: &Config, clock: Arc<dyn Clock>) -> Box<dyn WeatherProvider> {
    Box::new(MockWeather::new(latency(config), clock))
}

/// `None` when `services.advisor` is off.
pub fn create_advisor(config: &Config) -> Option<Box<dyn Advisor>> {
    if !config.services.advisor {
        return None;
    }
    Some(Box::new(MockAdvisor::new(latency(config))))
}

pub fn create_account_service(config: &Config, clock: Arc<dyn Clock>) -> Box<dyn AccountService> {
    Box::new(MockAccountService::new(latency(config), clock))
}

fn latency(config: &Config) -> Latency {
    Latency::from_config(config.services.latency_ms)
}
