//! Dashboard aggregation
//!
//! Farm-wide totals, the recent money activity and the next planned events,
//! computed in one pass over the loaded state.

use chrono::NaiveDate;
use serde::Serialize;

use super::state::FarmState;
use crate::domain::entities::CalendarEvent;
use crate::domain::ports::KeyValueStore;
use crate::domain::services::calendar::upcoming;
use crate::domain::services::finance::{farm_totals, recent_activity, Activity, MoneySummary};
use crate::domain::value_objects::YearMonth;

/// Number of entries in the recent-activity feed
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub today: NaiveDate,
    pub fields: usize,
    /// Hectares across all fields
    pub field_area: f64,
    /// Head count across all animal groups
    pub animals: u64,
    pub greenhouses: usize,
    pub money: MoneySummary,
    pub profit: f64,
    pub recent: Vec<Activity>,
    pub upcoming: Vec<CalendarEvent>,
    pub diary_entries_this_month: usize,
    pub diary_hours_this_month: f64,
}

impl Dashboard {
    pub fn build<S: KeyValueStore>(state: &FarmState<S>, upcoming_limit: usize) -> Self {
        let today = state.today();
        let this_month = YearMonth::of(today);
        let fields = state.fields.all();
        let money = farm_totals(fields, state.animals.all(), state.greenhouses.all());

        let (diary_entries_this_month, diary_hours_this_month) = state
            .diary
            .all()
            .iter()
            .filter(|e| this_month.contains(e.date))
            .fold((0, 0.0), |(n, hours), e| (n + 1, hours + e.hours));

        Self {
            today,
            fields: fields.len(),
            field_area: fields.iter().map(|f| f.area).sum(),
            animals: state.animals.all().iter().map(|a| u64::from(a.count)).sum(),
            greenhouses: state.greenhouses.len(),
            money,
            profit: money.profit(),
            recent: recent_activity(fields, RECENT_ACTIVITY_LIMIT),
            upcoming: upcoming(state.events.all(), today, upcoming_limit)
                .into_iter()
                .cloned()
                .collect(),
            diary_entries_this_month,
            diary_hours_this_month,
        }
    }

    /// Whether anything at all has been recorded.
    pub fn is_empty(&self) -> bool {
        self.fields == 0
            && self.animals == 0
            && self.greenhouses == 0
            && self.upcoming.is_empty()
            && self.diary_entries_this_month == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ledger::{ExpenseForm, HarvestForm};
    use crate::domain::entities::{Animal, Field};
    use crate::domain::value_objects::{AnimalKind, Crop, EventKind, RecordId};
    use crate::infrastructure::{FixedClock, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn aggregates_state() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::new(today));
        let mut state = FarmState::load(store, clock, None).unwrap();
        let now = state.now();

        let field_id = state
            .fields
            .create(Field::new("North", 12.0, Crop::Corn, now))
            .unwrap()
            .id
            .clone();
        state
            .fields
            .add_expense(
                &field_id,
                ExpenseForm {
                    description: "Diesel".to_string(),
                    amount: 4_000.0,
                    ..ExpenseForm::default()
                },
            )
            .unwrap();
        state
            .fields
            .add_harvest(
                &field_id,
                HarvestForm {
                    quantity: 10.0,
                    income: 10_000.0,
                    ..HarvestForm::default()
                },
            )
            .unwrap();
        state
            .animals
            .create(Animal::new("Flock", AnimalKind::Chicken, 40, now))
            .unwrap();

        for (id, day) in [("e1", 9), ("e2", 12), ("e3", 20)] {
            state
                .events
                .create(CalendarEvent::new(
                    RecordId::from(id),
                    NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                    EventKind::Work,
                    format!("event {id}"),
                ))
                .unwrap();
        }

        let dashboard = Dashboard::build(&state, 5);
        assert_eq!(dashboard.fields, 1);
        assert_eq!(dashboard.field_area, 12.0);
        assert_eq!(dashboard.animals, 40);
        assert_eq!(dashboard.profit, 6_000.0);
        assert_eq!(dashboard.recent.len(), 2);
        let upcoming: Vec<&str> = dashboard.upcoming.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming, vec!["e2", "e3"]);
        assert!(!dashboard.is_empty());
    }
}
