//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod categories;
mod record_id;
mod weather;
mod week_start;
mod year_month;

pub use categories::{
    AnimalKind, Crop, DiaryCategory, EventKind, GreenhouseCrop, GreenhouseKind, HarvestUnit,
    Priority, Tint,
};
pub use record_id::{string_or_number, RecordId};
pub use weather::{ConditionCode, CurrentWeather, ForecastDay, HistoryDay};
pub use week_start::WeekStart;
pub use year_month::YearMonth;
