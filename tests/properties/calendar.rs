//! Property tests for the month grid.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use farmbook::domain::services::calendar::{
    days_in_month, events_for_day, leading_blanks, upcoming, MonthCursor, MonthGrid,
};
use farmbook::domain::value_objects::EventKind;
use farmbook::{CalendarEvent, RecordId, WeekStart, YearMonth};

fn year_month() -> impl Strategy<Value = YearMonth> {
    (1900i32..2200, 1u32..=12).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn week_start() -> impl Strategy<Value = WeekStart> {
    prop_oneof![Just(WeekStart::Monday), Just(WeekStart::Sunday)]
}

/// Events spread over the month before, the month itself and the month after.
fn events_around(month: YearMonth) -> impl Strategy<Value = Vec<CalendarEvent>> {
    let start = month.advance(-1).unwrap().first_day();
    proptest::collection::vec(0u64..93, 0..40).prop_map(move |offsets| {
        offsets
            .into_iter()
            .enumerate()
            .map(|(i, offset)| {
                CalendarEvent::new(
                    RecordId::from(format!("e{}", i)),
                    start + Days::new(offset),
                    EventKind::Work,
                    format!("Task {}", i),
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the grid holds the leading blanks plus one cell per day.
    #[test]
    fn property_cell_count_is_blanks_plus_days(month in year_month(), start in week_start()) {
        let events: Vec<CalendarEvent> = Vec::new();
        let grid = MonthGrid::build(month, start, &events);
        let blanks = leading_blanks(month, start);

        prop_assert!(blanks <= 6);
        prop_assert!((28..=31).contains(&days_in_month(month)));
        prop_assert_eq!(grid.cell_count(), (blanks + days_in_month(month)) as usize);
        for week in grid.weeks() {
            prop_assert_eq!(week.len(), 7);
        }
    }

    /// PROPERTY: every in-month event lands in exactly one day cell.
    #[test]
    fn property_events_partition_into_days(
        (month, events) in year_month().prop_flat_map(|m| (Just(m), events_around(m))),
        start in week_start(),
    ) {
        let grid = MonthGrid::build(month, start, &events);
        let in_month = events.iter().filter(|e| month.contains(e.date)).count();
        prop_assert_eq!(grid.item_count(), in_month);

        let mut counted = 0;
        for day in 1..=days_in_month(month) {
            let on_day = events_for_day(&events, month, day);
            prop_assert!(on_day.iter().all(|e| month.contains(e.date)));
            prop_assert_eq!(grid.day(day).map(|c| c.items.len()), Some(on_day.len()));
            counted += on_day.len();
        }
        prop_assert_eq!(counted, in_month);
    }

    /// PROPERTY: moving forward then back returns to the starting month.
    #[test]
    fn property_advance_round_trips(month in year_month(), delta in -600i32..600) {
        let mut cursor = MonthCursor::new(month);
        let moved = cursor.advance(delta).unwrap();
        prop_assert!((1..=12).contains(&moved.month()));
        prop_assert_eq!(cursor.advance(-delta), Some(month));
    }

    /// PROPERTY: upcoming never returns past items, is sorted and honours the limit.
    #[test]
    fn property_upcoming_is_sorted_and_bounded(
        (month, events) in year_month().prop_flat_map(|m| (Just(m), events_around(m))),
        today_offset in 0u64..93,
        limit in 0usize..8,
    ) {
        let today: NaiveDate = month.advance(-1).unwrap().first_day() + Days::new(today_offset);
        let soon = upcoming(&events, today, limit);

        prop_assert!(soon.len() <= limit);
        prop_assert!(soon.iter().all(|e| e.date >= today));
        prop_assert!(soon.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}
