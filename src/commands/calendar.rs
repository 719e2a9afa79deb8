//! Calendar command handler

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::entities::{CalendarEvent, DiaryEntry};
use farmbook::domain::services::calendar::{upcoming, MonthCursor, MonthGrid};
use farmbook::presentation::cli::CalendarCommand;
use farmbook::{FarmError, YearMonth};

use super::{open_state, GlobalArgs};
use crate::ui::views::calendar::{CalendarView, DayView};

/// Upcoming events listed under the compact grid.
const COMPACT_UPCOMING_LIMIT: usize = 3;

pub fn cmd_calendar(
    month: Option<YearMonth>,
    offset: i32,
    compact: bool,
    action: Option<CalendarCommand>,
    config: &Config,
    args: GlobalArgs,
) -> Result<()> {
    let ui = args.ui(config);
    let state = open_state(config)?;
    let today = state.today();

    if let Some(CalendarCommand::Day { date }) = action {
        let events: Vec<&CalendarEvent> =
            state.events.all().iter().filter(|e| e.date == date).collect();
        let diary: Vec<&DiaryEntry> = state.diary.all().iter().filter(|e| e.date == date).collect();
        if ui.json {
            crate::ui::json::emit(serde_json::json!({
                "type": "calendar_day",
                "date": date,
                "events": events,
                "diary": diary,
            }))?;
            return Ok(());
        }
        print!(
            "{}",
            DayView::new(date, &events, &diary).render(ui.color, ui.unicode)
        );
        return Ok(());
    }

    let start = month.unwrap_or_else(|| YearMonth::of(today));
    let mut cursor = MonthCursor::new(start);
    let shown = cursor.advance(offset).ok_or_else(|| {
        FarmError::validation(
            "offset",
            format!("{} months from {} is outside the supported calendar", offset, start),
        )
    })?;
    log::debug!("showing {} (offset {})", shown, offset);

    let events = state.events.all();
    let grid = MonthGrid::build(shown, config.calendar.week_start, events);
    let limit = if compact {
        COMPACT_UPCOMING_LIMIT.min(config.calendar.upcoming_limit)
    } else {
        config.calendar.upcoming_limit
    };
    let soon = upcoming(events, today, limit);

    if ui.json {
        let days: Vec<_> = grid
            .days()
            .iter()
            .map(|d| serde_json::json!({"date": d.date, "events": d.items}))
            .collect();
        crate::ui::json::emit(serde_json::json!({
            "type": "calendar",
            "month": shown.to_string(),
            "week_start": config.calendar.week_start,
            "leading_blanks": grid.leading_blanks(),
            "days": days,
            "upcoming": soon,
        }))?;
        return Ok(());
    }

    let view = CalendarView::new(&grid, today, &soon, config.calendar.max_events_per_cell);
    if compact {
        print!("{}", view.render_compact(ui.color, ui.unicode));
    } else {
        print!("{}", view.render(ui.color, ui.unicode));
    }
    Ok(())
}
