//! Work diary entry

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use super::record::Record;
use crate::domain::services::calendar::Dated;
use crate::domain::services::validation;
use crate::domain::value_objects::{DiaryCategory, RecordId};
use crate::error::{FarmError, FarmResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    pub id: RecordId,
    #[serde(deserialize_with = "date_or_timestamp")]
    pub date: NaiveDate,
    pub category: DiaryCategory,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Soft reference; the field may have been deleted since.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub workers: u32,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DiaryEntry {
    pub fn new(
        id: RecordId,
        date: NaiveDate,
        category: DiaryCategory,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date,
            category,
            title: title.into(),
            description: String::new(),
            field_id: None,
            field_name: None,
            hours: 0.0,
            workers: 0,
            cost: 0.0,
            tags: Vec::new(),
        }
    }

    /// Split a comma-separated tag list, dropping blanks.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// `2024-03-01`, or an RFC 3339 timestamp reduced to its calendar date.
fn date_or_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid diary date '{}'", raw)))
}

impl Record for DiaryEntry {
    const KEY: &'static str = "diary";
    const KIND: &'static str = "diary entry";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.date, self.title)
    }

    fn validate(&self) -> FarmResult<()> {
        validation::require_text("title", &self.title)?;
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(FarmError::validation("hours", "cannot be negative"));
        }
        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(FarmError::validation("cost", "cannot be negative"));
        }
        Ok(())
    }
}

impl Dated for DiaryEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tags_trims_and_drops_empty() {
        assert_eq!(
            DiaryEntry::parse_tags(" sowing, wheat ,, north "),
            vec!["sowing", "wheat", "north"]
        );
        assert!(DiaryEntry::parse_tags("").is_empty());
    }

    #[test]
    fn browser_entry_with_numeric_ids_and_timestamp() {
        let json = r#"{
            "id": 1709000000000,
            "date": "2024-03-01T08:00:00.000Z",
            "category": "work",
            "title": "Вспашка поля №3",
            "fieldId": 1,
            "fieldName": "Северное поле",
            "cropType": "Пшеница",
            "hours": 4,
            "workers": 2,
            "cost": 15000,
            "attachments": [],
            "tags": ["вспашка"]
        }"#;
        let entry: DiaryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, RecordId::from("1709000000000"));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(entry.field_id, Some(RecordId::from("1")));
        assert_eq!(entry.cost, 15000.0);

        let stored = serde_json::to_value(&entry).unwrap();
        assert_eq!(stored["date"], "2024-03-01");
    }

    #[test]
    fn garbage_date_is_rejected() {
        let json = r#"{"id": "d1", "date": "yesterday", "category": "work", "title": "x"}"#;
        let err = serde_json::from_str::<DiaryEntry>(json).unwrap_err();
        assert!(err.to_string().contains("invalid diary date 'yesterday'"));
    }

    #[test]
    fn negative_hours_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();
        let mut entry = DiaryEntry::new(RecordId::from("d1"), date, DiaryCategory::Work, "Plough");
        assert!(entry.validate().is_ok());
        entry.hours = -1.0;
        assert!(entry.validate().is_err());
    }
}
