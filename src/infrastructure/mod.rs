//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `store/` - Key-value stores (JSON file, in-memory) and the document schema
//! - `mock/` - Mocked weather, advisor and account services
//! - `clock` - System and fixed clocks
//! - `observer` - Change observers wired in by the factory

pub mod clock;
pub mod mock;
pub mod observer;
pub mod store;

pub use clock::{FixedClock, SystemClock};
pub use mock::{Latency, MockAccountService, MockAdvisor, MockWeather};
pub use observer::LogObserver;
pub use store::{JsonFileStore, MemoryStore, StoreInfo};
