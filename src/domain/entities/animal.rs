//! Animal entity
//!
//! A group of livestock of one kind (a herd, a flock) kept as a single record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::{Expense, Income, Ledger, Note, Record};
use crate::domain::services::validation;
use crate::domain::value_objects::{AnimalKind, RecordId};
use crate::error::{FarmError, FarmResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AnimalKind,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub notes_list: Vec<Note>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_count() -> u32 {
    1
}

impl Animal {
    pub fn new(name: impl Into<String>, kind: AnimalKind, count: u32, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(now),
            name: name.into(),
            kind,
            count,
            notes: String::new(),
            expenses: Vec::new(),
            income: Vec::new(),
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

impl Record for Animal {
    const KEY: &'static str = "animals";
    const KIND: &'static str = "animal group";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn title(&self) -> String {
        format!("{} ({} × {})", self.name, self.count, self.kind.label())
    }

    fn validate(&self) -> FarmResult<()> {
        validation::require_text("name", &self.name)?;
        if self.count == 0 {
            return Err(FarmError::validation("count", "must be at least 1"));
        }
        Ok(())
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = at;
    }
}

impl Ledger for Animal {
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
        self.income.iter().map(|i| i.amount).sum()
    }
}
