//! Domain Services
//!
//! Pure business logic that operates on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod agronomy;
pub mod calendar;
pub mod diary_stats;
pub mod finance;
pub mod legacy_import;
pub mod validation;
pub mod weather_analysis;

pub use calendar::{
    days_in_month, events_for_day, leading_blanks, truncate_with_overflow, upcoming, Dated,
    DayCell, MonthCursor, MonthGrid,
};
pub use diary_stats::{diary_stats, filter_entries, DiaryFilter, DiaryStats};
pub use finance::{farm_totals, format_currency, recent_activity, seed_plan, MoneySummary, SeedPlan};
pub use legacy_import::{migrate_legacy, LegacyImport, SkippedKey};
pub use weather_analysis::{analyze, WeatherAnalysis};
