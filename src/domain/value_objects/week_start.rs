//! Week start convention for month grids

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// First column of a rendered week. Defaults to Monday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Zero-based column of `weekday` in a week starting on `self`.
    pub fn column(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Monday => weekday.num_days_from_monday(),
            WeekStart::Sunday => weekday.num_days_from_sunday(),
        }
    }

    /// Two-letter weekday headers in column order.
    pub fn headers(&self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "monday" | "mon" | "mo" => Some(WeekStart::Monday),
            "sunday" | "sun" | "su" => Some(WeekStart::Sunday),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_monday() {
        assert_eq!(WeekStart::default(), WeekStart::Monday);
    }

    #[test]
    fn columns_for_both_conventions() {
        assert_eq!(WeekStart::Monday.column(Weekday::Mon), 0);
        assert_eq!(WeekStart::Monday.column(Weekday::Sun), 6);
        assert_eq!(WeekStart::Sunday.column(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.column(Weekday::Sat), 6);
    }

    #[test]
    fn headers_start_with_configured_day() {
        assert_eq!(WeekStart::Monday.headers()[0], "Mo");
        assert_eq!(WeekStart::Sunday.headers()[0], "Su");
    }

    #[test]
    fn parse_accepts_short_forms() {
        assert_eq!(WeekStart::parse("Sun"), Some(WeekStart::Sunday));
        assert_eq!(WeekStart::parse("monday"), Some(WeekStart::Monday));
        assert_eq!(WeekStart::parse("friday"), None);
    }
}
