//! Calendar grid math
//!
//! Computes the month layout shown by `farmbook calendar`: how many blank
//! cells precede day 1, how many days follow, and which dated items fall on
//! each day. Everything here is pure; navigation state lives in `MonthCursor`
//! and is never persisted.

use chrono::{Datelike, NaiveDate};

use crate::domain::value_objects::{WeekStart, YearMonth};

/// Anything that can be placed on a calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// Number of days in `month`, leap years included.
pub fn days_in_month(month: YearMonth) -> u32 {
    match month.advance(1) {
        Some(next) => next
            .first_day()
            .signed_duration_since(month.first_day())
            .num_days() as u32,
        // Only December of chrono's last year has no following month.
        None => 31,
    }
}

/// Blank cells before day 1 so it lands under its weekday column. Always 0..=6.
pub fn leading_blanks(month: YearMonth, week_start: WeekStart) -> u32 {
    week_start.column(month.first_day().weekday())
}

/// Items dated exactly on `day` of `month`, in input order.
pub fn events_for_day<T: Dated>(items: &[T], month: YearMonth, day: u32) -> Vec<&T> {
    let Some(date) = NaiveDate::from_ymd_opt(month.year(), month.month(), day) else {
        return Vec::new();
    };
    items.iter().filter(|item| item.date() == date).collect()
}

/// Items dated today or later, earliest first, at most `limit`.
pub fn upcoming<T: Dated>(items: &[T], today: NaiveDate, limit: usize) -> Vec<&T> {
    let mut future: Vec<&T> = items.iter().filter(|item| item.date() >= today).collect();
    future.sort_by_key(|item| item.date());
    future.truncate(limit);
    future
}

/// Split `items` into the part shown in a cell and the count hidden behind "+N more".
pub fn truncate_with_overflow<T>(items: &[T], max_visible: usize) -> (&[T], usize) {
    if items.len() <= max_visible {
        return (items, 0);
    }
    (&items[..max_visible], items.len() - max_visible)
}

/// One calendar day and the items scheduled on it.
#[derive(Debug)]
pub struct DayCell<'a, T> {
    pub date: NaiveDate,
    pub items: Vec<&'a T>,
}

impl<T> DayCell<'_, T> {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Month layout: leading blanks followed by one cell per day.
#[derive(Debug)]
pub struct MonthGrid<'a, T> {
    month: YearMonth,
    week_start: WeekStart,
    leading_blanks: u32,
    days: Vec<DayCell<'a, T>>,
}

impl<'a, T: Dated> MonthGrid<'a, T> {
    /// Bucket `items` into the days of `month` in a single pass. Items dated
    /// outside the month are ignored.
    pub fn build(month: YearMonth, week_start: WeekStart, items: &'a [T]) -> Self {
        let first = month.first_day();
        let mut days: Vec<DayCell<'a, T>> = first
            .iter_days()
            .take(days_in_month(month) as usize)
            .map(|date| DayCell {
                date,
                items: Vec::new(),
            })
            .collect();

        for item in items {
            let date = item.date();
            if month.contains(date) {
                days[(date.day() - 1) as usize].items.push(item);
            }
        }

        Self {
            month,
            week_start,
            leading_blanks: leading_blanks(month, week_start),
            days,
        }
    }
}

impl<'a, T> MonthGrid<'a, T> {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn leading_blanks(&self) -> u32 {
        self.leading_blanks
    }

    pub fn days(&self) -> &[DayCell<'a, T>] {
        &self.days
    }

    pub fn day(&self, day: u32) -> Option<&DayCell<'a, T>> {
        day.checked_sub(1).and_then(|i| self.days.get(i as usize))
    }

    /// Blank cells plus day cells.
    pub fn cell_count(&self) -> usize {
        self.leading_blanks as usize + self.days.len()
    }

    pub fn item_count(&self) -> usize {
        self.days.iter().map(|d| d.items.len()).sum()
    }

    /// Rows of seven columns; `None` marks a blank before day 1 or after the last day.
    pub fn weeks(&self) -> Vec<[Option<&DayCell<'a, T>>; 7]> {
        let mut cells: Vec<Option<&DayCell<'a, T>>> =
            Vec::with_capacity(self.cell_count().div_ceil(7) * 7);
        cells.extend((0..self.leading_blanks).map(|_| None));
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// The month currently displayed, moved by navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    current: YearMonth,
}

impl MonthCursor {
    pub fn new(month: YearMonth) -> Self {
        Self { current: month }
    }

    pub fn at(today: NaiveDate) -> Self {
        Self::new(YearMonth::of(today))
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    /// Move by `delta` months (negative goes back) and return the new month.
    /// Leaves the cursor where it was when the move leaves the supported range.
    pub fn advance(&mut self, delta: i32) -> Option<YearMonth> {
        self.current = self.current.advance(delta)?;
        Some(self.current)
    }

    /// Jump back to the month containing `today`.
    pub fn reset(&mut self, today: NaiveDate) -> YearMonth {
        self.current = YearMonth::of(today);
        self.current
    }
}
