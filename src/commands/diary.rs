//! Work diary command handlers

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::entities::{DiaryEntry, Record};
use farmbook::domain::services::diary_stats::{diary_stats, filter_entries, DiaryFilter};
use farmbook::domain::value_objects::DiaryCategory;
use farmbook::presentation::cli::{DiaryCommand, DiaryFilterArgs};
use farmbook::RecordId;

use super::{currency, delete_record, open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::diary::{CategoriesView, DiaryListView, DiaryStatsView};

fn to_filter(args: &DiaryFilterArgs) -> DiaryFilter {
    DiaryFilter {
        category: args.category,
        field_id: args.field.as_deref().map(RecordId::from),
        from: args.from,
        to: args.to,
    }
}

fn is_filtered(args: &DiaryFilterArgs) -> bool {
    args.category.is_some() || args.field.is_some() || args.from.is_some() || args.to.is_some()
}

pub fn cmd_diary(action: DiaryCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);

    let mut state = open_state(config)?;
    let currency = currency(&state);

    match action {
        DiaryCommand::Add {
            title,
            category,
            date,
            description,
            field,
            hours,
            workers,
            cost,
            tags,
        } => {
            let mut entry = DiaryEntry::new(
                RecordId::generate(state.now()),
                date.unwrap_or_else(|| state.today()),
                category,
                title,
            );
            entry.description = description;
            entry.hours = hours;
            entry.workers = workers;
            entry.cost = cost;
            entry.tags = DiaryEntry::parse_tags(&tags);
            if let Some(field_id) = field {
                let field = state.fields.require(&RecordId::from(field_id.as_str()))?;
                entry.field_id = Some(field.id.clone());
                entry.field_name = Some(field.name.clone());
            }

            let entry = state.diary.create(entry)?;
            let mut summary = ResultSummary::success("Diary entry added");
            summary.add_detail("Id", entry.id.to_string());
            summary.add_detail("Entry", entry.title());
            summary.add_detail("Category", entry.category.label());
            if let Some(name) = &entry.field_name {
                summary.add_detail("Field", name.as_str());
            }
            report(&ui, "diary_added", entry, summary)
        }
        DiaryCommand::List(filter_args) => {
            let entries = filter_entries(state.diary.all(), &to_filter(&filter_args));
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "diary", "data": entries}))?;
                return Ok(());
            }
            let view = DiaryListView::new(&entries, &currency, is_filtered(&filter_args));
            print!("{}", view.render(ui.color, ui.unicode));
            Ok(())
        }
        DiaryCommand::Delete(delete) => {
            delete_record(&ui, &mut state.diary, &delete.id, delete.yes)
        }
        DiaryCommand::Stats(filter_args) => {
            let entries = filter_entries(state.diary.all(), &to_filter(&filter_args));
            let stats = diary_stats(&entries);
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "diary_stats", "data": stats}))?;
                return Ok(());
            }
            print!(
                "{}",
                DiaryStatsView::new(&stats, &currency).render(ui.color, ui.unicode)
            );
            Ok(())
        }
        DiaryCommand::Categories => {
            if ui.json {
                let categories: Vec<_> = DiaryCategory::ALL
                    .iter()
                    .map(|c| serde_json::json!({"id": c.id(), "label": c.label(), "icon": c.icon()}))
                    .collect();
                crate::ui::json::emit(
                    serde_json::json!({"type": "categories", "data": categories}),
                )?;
                return Ok(());
            }
            print!("{}", CategoriesView.render(ui.color, ui.unicode));
            Ok(())
        }
    }
}
