//! Planned calendar event

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::domain::services::calendar::Dated;
use crate::domain::services::validation;
use crate::domain::value_objects::{EventKind, Priority, RecordId};
use crate::error::FarmResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: RecordId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    /// Free-text location, usually a field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Planned duration in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl CalendarEvent {
    pub fn new(id: RecordId, date: NaiveDate, kind: EventKind, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            kind,
            field: None,
            duration: None,
            priority: None,
        }
    }
}

impl Record for CalendarEvent {
    const KEY: &'static str = "events";
    const KIND: &'static str = "event";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} {}", self.date, self.title)
    }

    fn validate(&self) -> FarmResult<()> {
        validation::require_text("title", &self.title)?;
        if let Some(hours) = self.duration {
            validation::require_positive("duration", hours)?;
        }
        Ok(())
    }
}

impl Dated for CalendarEvent {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
