//! Greenhouse entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Expense, Harvest, Harvested, Ledger, Note, Record};
use crate::domain::services::validation;
use crate::domain::value_objects::{GreenhouseCrop, GreenhouseKind, RecordId};
use crate::error::FarmResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Greenhouse {
    pub id: RecordId,
    pub name: String,
    /// Square meters
    pub area: f64,
    #[serde(rename = "type")]
    pub kind: GreenhouseKind,
    pub crop: GreenhouseCrop,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub harvest: Vec<Harvest>,
    #[serde(default)]
    pub notes_list: Vec<Note>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Greenhouse {
    pub fn new(
        name: impl Into<String>,
        area: f64,
        kind: GreenhouseKind,
        crop: GreenhouseCrop,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: RecordId::generate(now),
            name: name.into(),
            area,
            kind,
            crop,
            notes: String::new(),
            expenses: Vec::new(),
            harvest: Vec::new(),
            notes_list: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

impl Record for Greenhouse {
    const KEY: &'static str = "greenhouses";
    const KIND: &'static str = "greenhouse";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!(
            "{} ({} m², {}, {})",
            self.name,
            self.area,
            self.kind.label(),
            self.crop.label()
        )
    }

    fn validate(&self) -> FarmResult<()> {
        validation::require_text("name", &self.name)?;
        validation::require_positive("area", self.area)
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Ledger for Greenhouse {
    fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    fn expenses_mut(&mut self) -> &mut Vec<Expense> {
        &mut self.expenses
    }

    fn notes(&self) -> &[Note] {
        &self.notes_list
    }

    fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes_list
    }

    fn total_income(&self) -> f64 {
        self.harvest.iter().map(|h| h.income).sum()
    }
}

impl Harvested for Greenhouse {
    fn harvests(&self) -> &[Harvest] {
        &self.harvest
    }

    fn harvests_mut(&mut self) -> &mut Vec<Harvest> {
        &mut self.harvest
    }
}
