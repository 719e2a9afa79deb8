//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Managers
//!
//! - `RecordManager` - Load, create, update and delete one record collection
//! - `SettingsManager` / `SessionManager` - Single-object state
//! - `FarmState` - Every manager over one store and clock
//!
//! ## Use Cases
//!
//! - `Dashboard` - Farm-wide totals, activity feed and upcoming events
//! - `import_legacy_dump` - Bring a browser local-storage dump into the store

pub mod account;
pub mod dashboard;
pub mod ledger;
pub mod record_manager;
pub mod state;
mod store_import;

pub use account::{SessionManager, SettingsManager, SETTINGS_KEYS};
pub use dashboard::{Dashboard, RECENT_ACTIVITY_LIMIT};
pub use ledger::{ExpenseForm, HarvestForm, IncomeForm};
pub use record_manager::RecordManager;
pub use state::FarmState;
pub use store_import::{import_legacy_dump, ImportReport};
