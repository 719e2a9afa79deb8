//! Domain Entities
//!
//! Records that have identity and lifecycle.
//! - `Field`, `Animal`, `Greenhouse` - Farm assets with expense/income ledgers
//! - `DiaryEntry` - A dated log line of work done or observed
//! - `CalendarEvent` - Planned work shown on the month calendar
//! - `Settings`, `Session` - Single-object state

mod account;
mod animal;
mod diary;
mod event;
mod field;
mod greenhouse;
mod record;

pub use account::{Session, Settings, User, SESSION_KEY, SETTINGS_KEY};
pub use animal::Animal;
pub use diary::DiaryEntry;
pub use event::CalendarEvent;
pub use field::Field;
pub use greenhouse::Greenhouse;
pub use record::{Expense, ExpenseKind, Harvest, Harvested, Income, Ledger, Note, Record};
