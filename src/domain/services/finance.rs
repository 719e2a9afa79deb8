//! Farm money arithmetic: seed costs, per-record profit, farm totals and the
//! recent-activity feed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Animal, Field, Greenhouse, Ledger};
use crate::domain::services::validation;
use crate::error::FarmResult;

pub const DEFAULT_SEED_RATE_KG_PER_HA: f64 = 200.0;
pub const DEFAULT_SEED_PRICE_PER_KG: f64 = 50.0;

/// Seed requirement for sowing a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeedPlan {
    pub area_ha: f64,
    pub rate_kg_per_ha: f64,
    pub price_per_kg: f64,
    pub amount_kg: f64,
    pub cost: f64,
}

pub fn seed_plan(area_ha: f64, rate_kg_per_ha: f64, price_per_kg: f64) -> FarmResult<SeedPlan> {
    validation::require_positive("area", area_ha)?;
    validation::require_positive("seeding rate", rate_kg_per_ha)?;
    validation::require_positive("seed price", price_per_kg)?;

    let amount_kg = rate_kg_per_ha * area_ha;
    Ok(SeedPlan {
        area_ha,
        rate_kg_per_ha,
        price_per_kg,
        amount_kg,
        cost: amount_kg * price_per_kg,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MoneySummary {
    pub expenses: f64,
    pub income: f64,
}

impl MoneySummary {
    pub fn of<L: Ledger>(record: &L) -> Self {
        Self {
            expenses: record.total_expenses(),
            income: record.total_income(),
        }
    }

    pub fn profit(&self) -> f64 {
        self.income - self.expenses
    }

    fn add(mut self, other: MoneySummary) -> Self {
        self.expenses += other.expenses;
        self.income += other.income;
        self
    }
}

/// Income minus expenses across every field, animal group and greenhouse.
pub fn farm_totals(fields: &[Field], animals: &[Animal], greenhouses: &[Greenhouse]) -> MoneySummary {
    let fields = fields.iter().map(MoneySummary::of);
    let animals = animals.iter().map(MoneySummary::of);
    let greenhouses = greenhouses.iter().map(MoneySummary::of);
    fields
        .chain(animals)
        .chain(greenhouses)
        .fold(MoneySummary::default(), MoneySummary::add)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Expense,
    Harvest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub field: String,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// The latest expense and latest harvest of each field, newest first.
pub fn recent_activity(fields: &[Field], limit: usize) -> Vec<Activity> {
    let mut feed = Vec::new();
    for field in fields {
        if let Some(expense) = field.expenses.last() {
            feed.push(Activity {
                kind: ActivityKind::Expense,
                field: field.name.clone(),
                description: expense.description.clone(),
                amount: expense.amount,
                date: expense.date,
            });
        }
        if let Some(harvest) = field.harvest.last() {
            feed.push(Activity {
                kind: ActivityKind::Harvest,
                field: field.name.clone(),
                description: format!("{} {}", harvest.quantity, harvest.unit.symbol()),
                amount: harvest.income,
                date: harvest.date,
            });
        }
    }
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(limit);
    feed
}

/// Whole currency units with space-grouped thousands, e.g. `-12 500 RUB`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{} {}", sign, grouped, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Expense, ExpenseKind, Harvest, Income};
    use crate::domain::value_objects::{AnimalKind, Crop, HarvestUnit, RecordId};
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).unwrap()
    }

    fn expense(description: &str, amount: f64, day: u32) -> Expense {
        Expense {
            id: RecordId::from(format!("x{day}")),
            kind: ExpenseKind::Manual,
            description: description.to_string(),
            amount,
            quantity: 1.0,
            unit: "pcs".to_string(),
            date: at(day),
            notes: String::new(),
        }
    }

    fn harvest(quantity: f64, income: f64, day: u32) -> Harvest {
        Harvest {
            id: RecordId::from(format!("h{day}")),
            quantity,
            unit: HarvestUnit::Centner,
            income,
            date: at(day),
            notes: String::new(),
        }
    }

    #[test]
    fn seed_plan_uses_rate_times_area() {
        let plan = seed_plan(10.0, DEFAULT_SEED_RATE_KG_PER_HA, DEFAULT_SEED_PRICE_PER_KG).unwrap();
        assert_eq!(plan.amount_kg, 2000.0);
        assert_eq!(plan.cost, 100_000.0);
    }

    #[test]
    fn seed_plan_rejects_non_positive_inputs() {
        assert!(seed_plan(0.0, 200.0, 50.0).is_err());
        assert!(seed_plan(5.0, -1.0, 50.0).is_err());
    }

    #[test]
    fn farm_totals_sum_all_record_kinds() {
        let mut field = Field::new("North", 10.0, Crop::Wheat, at(1));
        field.expenses.push(expense("Seeds", 1000.0, 2));
        field.harvest.push(harvest(30.0, 5000.0, 20));

        let mut herd = Animal::new("Herd", AnimalKind::Cow, 4, at(1));
        herd.expenses.push(expense("Feed", 700.0, 3));
        herd.income.push(Income {
            id: RecordId::from("i1"),
            description: "Milk".to_string(),
            amount: 1200.0,
            date: at(4),
            notes: String::new(),
        });

        let totals = farm_totals(&[field], &[herd], &[]);
        assert_eq!(totals.expenses, 1700.0);
        assert_eq!(totals.income, 6200.0);
        assert_eq!(totals.profit(), 4500.0);
    }

    #[test]
    fn recent_activity_takes_latest_per_field_newest_first() {
        let mut north = Field::new("North", 10.0, Crop::Wheat, at(1));
        north.expenses.push(expense("Old", 10.0, 2));
        north.expenses.push(expense("Fuel", 20.0, 6));
        north.harvest.push(harvest(12.0, 900.0, 9));

        let mut south = Field::new("South", 5.0, Crop::Corn, at(1));
        south.expenses.push(expense("Herbicide", 30.0, 7));

        let feed = recent_activity(&[north, south], 5);
        let descriptions: Vec<&str> = feed.iter().map(|a| a.description.as_str()).collect();
        assert_eq!(descriptions, vec!["12 c", "Herbicide", "Fuel"]);
        assert_eq!(recent_activity(&[], 5).len(), 0);
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(0.0, "RUB"), "0 RUB");
        assert_eq!(format_currency(999.4, "RUB"), "999 RUB");
        assert_eq!(format_currency(1234.5, "RUB"), "1 235 RUB");
        assert_eq!(format_currency(-1_250_000.0, "KGS"), "-1 250 000 KGS");
    }
}
