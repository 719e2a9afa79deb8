//! Field entity
//!
//! An open-ground plot measured in hectares, with its expense, harvest and
//! note ledgers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Expense, Harvest, Harvested, Ledger, Note, Record};
use crate::domain::services::validation::{self, FIELD_AREA_RANGE};
use crate::domain::value_objects::{Crop, RecordId};
use crate::error::FarmResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: RecordId,
    pub name: String,
    /// Hectares
    pub area: f64,
    pub crop: Crop,
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

impl Field {
    pub fn new(name: impl Into<String>, area: f64, crop: Crop, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(now),
            name: name.into(),
            area,
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

impl Record for Field {
    const KEY: &'static str = "fields";
    const KIND: &'static str = "field";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} ({} ha, {})", self.name, self.area, self.crop.label())
    }

    fn validate(&self) -> FarmResult<()> {
        validation::require_text("name", &self.name)?;
        let (min, max) = FIELD_AREA_RANGE;
        validation::number_in_range("area", self.area, min, max)
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Ledger for Field {
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

impl Harvested for Field {
    fn harvests(&self) -> &[Harvest] {
        &self.harvest
    }

    fn harvests_mut(&mut self) -> &mut Vec<Harvest> {
        &mut self.harvest
    }
}
