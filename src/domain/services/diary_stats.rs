//! Diary filtering and statistics

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::DiaryEntry;
use crate::domain::value_objects::{DiaryCategory, RecordId};

/// Criteria for listing diary entries. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiaryFilter {
    pub category: Option<DiaryCategory>,
    pub field_id: Option<RecordId>,
    /// Inclusive
    pub from: Option<NaiveDate>,
    /// Inclusive
    pub to: Option<NaiveDate>,
}

impl DiaryFilter {
    pub fn matches(&self, entry: &DiaryEntry) -> bool {
        if self.category.is_some_and(|c| c != entry.category) {
            return false;
        }
        if let Some(field_id) = &self.field_id {
            if entry.field_id.as_ref() != Some(field_id) {
                return false;
            }
        }
        if self.from.is_some_and(|from| entry.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| entry.date > to) {
            return false;
        }
        true
    }
}

/// Entries matching `filter`, newest first.
pub fn filter_entries<'a>(entries: &'a [DiaryEntry], filter: &DiaryFilter) -> Vec<&'a DiaryEntry> {
    let mut matched: Vec<&DiaryEntry> = entries.iter().filter(|e| filter.matches(e)).collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiaryStats {
    pub entries: usize,
    pub total_hours: f64,
    pub total_cost: f64,
    pub total_workers: u64,
    /// Count per category, in `DiaryCategory::ALL` order
    pub by_category: Vec<(DiaryCategory, usize)>,
}

pub fn diary_stats(entries: &[&DiaryEntry]) -> DiaryStats {
    let by_category = DiaryCategory::ALL
        .iter()
        .map(|c| (*c, entries.iter().filter(|e| e.category == *c).count()))
        .collect();

    DiaryStats {
        entries: entries.len(),
        total_hours: entries.iter().map(|e| e.hours).sum(),
        total_cost: entries.iter().map(|e| e.cost).sum(),
        total_workers: entries.iter().map(|e| e.workers as u64).sum(),
        by_category,
    }
}
