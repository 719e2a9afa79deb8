//! farmbook - local-first farm record keeper
//!
//! farmbook keeps fields, livestock, greenhouses, a work diary and planned
//! events in one versioned JSON document, renders a month calendar in the
//! terminal, and reaches weather, advisory and account services through
//! ports (mocked in this release).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Dashboard, FarmState, RecordManager};
pub use config::Config;
pub use domain::entities::{Animal, CalendarEvent, DiaryEntry, Field, Greenhouse, Record};
pub use domain::value_objects::{RecordId, WeekStart, YearMonth};
pub use error::{FarmError, FarmResult};
