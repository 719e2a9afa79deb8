pub mod account;
pub mod advise;
pub mod calendar;
pub mod dashboard;
pub mod diary;
pub mod events;
pub mod records;
pub mod store;
pub mod weather;

use chrono::{DateTime, Utc};

use farmbook::domain::services::finance::format_currency;

use crate::ui::primitives::text::ColoredText;

/// Bold section title followed by indented lines.
pub(crate) fn section(title: &str, lines: &[String], supports_color: bool) -> String {
    let mut out = format!("\n{}\n", ColoredText::info(title).bold().render(supports_color));
    for line in lines {
        out.push_str(&format!("  {}\n", line));
    }
    out
}

/// Dim one-line hint, e.g. for empty listings.
pub(crate) fn hint(text: &str, supports_color: bool) -> String {
    format!("{}\n", ColoredText::dim(text).render(supports_color))
}

/// Money colored by sign.
pub(crate) fn signed_money(amount: f64, currency: &str, supports_color: bool) -> String {
    ColoredText::signed(format_currency(amount, currency), amount).render(supports_color)
}

pub(crate) fn day(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
