//! Ledger operations: expenses, harvests, income and notes attached to a
//! field, animal group or greenhouse.

use chrono::{DateTime, Utc};

use super::record_manager::RecordManager;
use crate::domain::entities::{
    Animal, Expense, ExpenseKind, Field, Harvest, Harvested, Income, Ledger, Note,
};
use crate::domain::ports::KeyValueStore;
use crate::domain::services::finance::{seed_plan, SeedPlan};
use crate::domain::services::validation::{require_positive, require_text};
use crate::domain::value_objects::{HarvestUnit, RecordId};
use crate::error::FarmResult;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: f64,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    /// Defaults to now
    pub date: Option<DateTime<Utc>>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HarvestForm {
    pub quantity: f64,
    pub unit: HarvestUnit,
    pub income: f64,
    pub date: Option<DateTime<Utc>>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeForm {
    pub description: String,
    pub amount: f64,
    pub date: Option<DateTime<Utc>>,
    pub notes: String,
}

impl<R: Ledger, S: KeyValueStore> RecordManager<R, S> {
    pub fn add_expense(&mut self, id: &RecordId, form: ExpenseForm) -> FarmResult<Expense> {
        require_text("description", &form.description)?;
        require_positive("amount", form.amount)?;
        if let Some(quantity) = form.quantity {
            require_positive("quantity", quantity)?;
        }

        let now = self.now();
        let expense = Expense {
            id: RecordId::generate(now),
            kind: ExpenseKind::Manual,
            description: form.description.trim().to_string(),
            amount: form.amount,
            quantity: form.quantity.unwrap_or(1.0),
            unit: form.unit.unwrap_or_else(|| "pcs".to_string()),
            date: form.date.unwrap_or(now),
            notes: form.notes,
        };
        self.push_expense(id, expense)
    }

    pub fn add_note(&mut self, id: &RecordId, content: &str) -> FarmResult<Note> {
        require_text("content", content)?;
        let now = self.now();
        let note = Note {
            id: RecordId::generate(now),
            content: content.trim().to_string(),
            date: now,
        };
        let added = note.clone();
        self.update(id, |record| record.notes_mut().push(note))?;
        Ok(added)
    }

    fn push_expense(&mut self, id: &RecordId, expense: Expense) -> FarmResult<Expense> {
        let added = expense.clone();
        self.update(id, |record| record.expenses_mut().push(expense))?;
        Ok(added)
    }
}

impl<R: Harvested, S: KeyValueStore> RecordManager<R, S> {
    pub fn add_harvest(&mut self, id: &RecordId, form: HarvestForm) -> FarmResult<Harvest> {
        require_positive("quantity", form.quantity)?;
        require_positive("income", form.income)?;

        let now = self.now();
        let harvest = Harvest {
            id: RecordId::generate(now),
            quantity: form.quantity,
            unit: form.unit,
            income: form.income,
            date: form.date.unwrap_or(now),
            notes: form.notes,
        };
        let added = harvest.clone();
        self.update(id, |record| record.harvests_mut().push(harvest))?;
        Ok(added)
    }
}

impl<S: KeyValueStore> RecordManager<Animal, S> {
    pub fn add_income(&mut self, id: &RecordId, form: IncomeForm) -> FarmResult<Income> {
        require_text("description", &form.description)?;
        require_positive("amount", form.amount)?;

        let now = self.now();
        let income = Income {
            id: RecordId::generate(now),
            description: form.description.trim().to_string(),
            amount: form.amount,
            date: form.date.unwrap_or(now),
            notes: form.notes,
        };
        let added = income.clone();
        self.update(id, |animal| animal.income.push(income))?;
        Ok(added)
    }
}

impl<S: KeyValueStore> RecordManager<Field, S> {
    /// Compute the seed need for the field and book it as a `seed` expense.
    pub fn add_seed_cost(
        &mut self,
        id: &RecordId,
        rate_kg_per_ha: f64,
        price_per_kg: f64,
    ) -> FarmResult<(SeedPlan, Expense)> {
        let field = self.require(id)?;
        let plan = seed_plan(field.area, rate_kg_per_ha, price_per_kg)?;

        let now = self.now();
        let expense = Expense {
            id: RecordId::generate(now),
            kind: ExpenseKind::Seed,
            description: format!("Seeds: {}", field.crop.label()),
            amount: plan.cost,
            quantity: plan.amount_kg,
            unit: "kg".to_string(),
            date: now,
            notes: format!(
                "{} kg/ha × {} ha at {} per kg",
                rate_kg_per_ha, field.area, price_per_kg
            ),
        };
        let expense = self.push_expense(id, expense)?;
        Ok((plan, expense))
    }
}
