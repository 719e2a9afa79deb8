//! Calendar event command handlers

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::entities::{CalendarEvent, Record};
use farmbook::domain::services::calendar::upcoming;
use farmbook::presentation::cli::EventCommand;
use farmbook::{RecordId, YearMonth};

use super::{delete_record, open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::events::EventListView;

pub fn cmd_event(action: EventCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;

    match action {
        EventCommand::Add {
            title,
            date,
            kind,
            priority,
            field,
            duration,
        } => {
            let mut event = CalendarEvent::new(RecordId::generate(state.now()), date, kind, title);
            event.priority = priority;
            event.field = field;
            event.duration = duration;
            let event = state.events.create(event)?;

            let mut summary = ResultSummary::success("Event planned");
            summary.add_detail("Id", event.id.to_string());
            summary.add_detail("Event", event.title());
            summary.add_detail("Kind", event.kind.label());
            summary.with_next_step(format!("farmbook calendar --month {}", YearMonth::of(event.date)));
            report(&ui, "event_added", event, summary)
        }
        EventCommand::List { month, upcoming: only_upcoming } => {
            let today = state.today();
            let all = state.events.all();
            let (title, mut events): (String, Vec<&CalendarEvent>) = if only_upcoming {
                ("Upcoming events".to_string(), upcoming(all, today, usize::MAX))
            } else if let Some(month) = month {
                (
                    format!("Events in {} {}", month.name(), month.year()),
                    all.iter().filter(|e| month.contains(e.date)).collect(),
                )
            } else {
                ("Events".to_string(), all.iter().collect())
            };
            events.sort_by_key(|e| e.date);

            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "events", "data": events}))?;
                return Ok(());
            }
            print!(
                "{}",
                EventListView::new(title, &events).render(ui.color, ui.unicode)
            );
            Ok(())
        }
        EventCommand::Delete(delete) => {
            delete_record(&ui, &mut state.events, &delete.id, delete.yes)
        }
    }
}
