//! Record trait and the ledger rows shared by fields, animals and greenhouses.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{HarvestUnit, RecordId};
use crate::error::FarmResult;

/// A record kept in a named collection of the key-value store.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Store key holding the whole collection
    const KEY: &'static str;
    /// Singular noun used in messages ("field", "animal group")
    const KIND: &'static str;

    fn id(&self) -> &RecordId;

    /// Short human label used in listings and pickers.
    fn title(&self) -> String;

    /// Check the form-level invariants of this record.
    fn validate(&self) -> FarmResult<()>;

    /// Record a modification time; records without timestamps ignore it.
    fn touch(&mut self, _at: DateTime<Utc>) {}
}

/// Records that carry an expense ledger and free-form notes.
pub trait Ledger: Record {
    fn expenses(&self) -> &[Expense];
    fn expenses_mut(&mut self) -> &mut Vec<Expense>;
    fn notes(&self) -> &[Note];
    fn notes_mut(&mut self) -> &mut Vec<Note>;

    /// Money earned from this record (harvest sales or animal products).
    fn total_income(&self) -> f64;

    fn total_expenses(&self) -> f64 {
        self.expenses().iter().map(|e| e.amount).sum()
    }
}

/// Records whose income comes from harvests.
pub trait Harvested: Ledger {
    fn harvests(&self) -> &[Harvest];
    fn harvests_mut(&mut self) -> &mut Vec<Harvest>;
}

/// How an expense entered the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    #[default]
    Manual,
    /// Added by the seed calculator
    Seed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: RecordId,
    #[serde(rename = "type", default)]
    pub kind: ExpenseKind,
    pub description: String,
    pub amount: f64,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

fn default_quantity() -> f64 {
    1.0
}

fn default_unit() -> String {
    "pcs".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Harvest {
    pub id: RecordId,
    pub quantity: f64,
    #[serde(default)]
    pub unit: HarvestUnit,
    pub income: f64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

/// Income from livestock products or sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: RecordId,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: RecordId,
    pub content: String,
    pub date: DateTime<Utc>,
}
