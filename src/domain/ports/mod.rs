//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod account_service;
pub mod advisor;
pub mod change_observer;
pub mod clock;
pub mod key_value_store;
pub mod weather_provider;

pub use account_service::{AccountService, Registration};
pub use advisor::{
    Advisor, InsightKind, Recommendation, RecommendationSet, WeatherInsight, YieldFactor,
    YieldPrediction,
};
pub use change_observer::ChangeObserver;
pub use clock::Clock;
pub use key_value_store::{KeyValueStore, StoreError};
pub use weather_provider::{ServiceError, WeatherProvider};
