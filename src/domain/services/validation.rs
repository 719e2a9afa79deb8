//! Form validation
//!
//! Every check returns `FarmError::Validation` naming the offending field, so
//! the CLI can print it as a notification and abort before anything is saved.

use crate::error::{FarmError, FarmResult};

/// Smallest and largest field area accepted, in hectares.
pub const FIELD_AREA_RANGE: (f64, f64) = (0.1, 10_000.0);

pub fn require_text(field: &str, value: &str) -> FarmResult<()> {
    if value.trim().is_empty() {
        return Err(FarmError::validation(field, "is required"));
    }
    Ok(())
}

pub fn require_positive(field: &str, value: f64) -> FarmResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FarmError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

pub fn number_in_range(field: &str, value: f64, min: f64, max: f64) -> FarmResult<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(FarmError::validation(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

pub fn validate_email(value: &str) -> FarmResult<()> {
    let invalid = || FarmError::validation("email", "is not a valid address");
    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let last = domain.len().saturating_sub(1);
    let dotted = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last);
    if !dotted {
        return Err(invalid());
    }
    Ok(())
}

/// At least 8 characters with at least one letter and one digit.
pub fn validate_password(value: &str) -> FarmResult<()> {
    if value.chars().count() < 8 {
        return Err(FarmError::validation(
            "password",
            "must be at least 8 characters",
        ));
    }
    let has_letter = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(FarmError::validation(
            "password",
            "must contain letters and digits",
        ));
    }
    Ok(())
}

/// 10 to 15 digits, optionally with a leading `+` and spaces, dashes or parentheses.
pub fn validate_phone(value: &str) -> FarmResult<()> {
    let trimmed = value.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let mut digits = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '(' | ')' => {}
            _ => return Err(FarmError::validation("phone", "contains invalid characters")),
        }
    }
    if !(10..=15).contains(&digits) {
        return Err(FarmError::validation("phone", "must have 10 to 15 digits"));
    }
    Ok(())
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> FarmResult<()> {
    number_in_range("latitude", latitude, -90.0, 90.0)?;
    number_in_range("longitude", longitude, -180.0, 180.0)
}
