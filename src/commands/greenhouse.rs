//! Greenhouse command handlers

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::entities::{Greenhouse, Record};
use farmbook::presentation::cli::GreenhouseCommand;
use farmbook::RecordId;

use super::{currency, delete_record, ledger, open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::records::{RecordDetailView, RecordListView};

pub fn cmd_greenhouse(action: GreenhouseCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let currency = currency(&state);

    match action {
        GreenhouseCommand::Add {
            name,
            area,
            kind,
            crop,
            notes,
        } => {
            let greenhouse = Greenhouse::new(name, area, kind, crop, state.now()).with_notes(notes);
            let greenhouse = state.greenhouses.create(greenhouse)?;

            let mut summary = ResultSummary::success("Greenhouse added");
            summary.add_detail("Id", greenhouse.id.to_string());
            summary.add_detail("Greenhouse", greenhouse.title());
            report(&ui, "greenhouse_added", greenhouse, summary)
        }
        GreenhouseCommand::List => {
            let greenhouses = state.greenhouses.all();
            if ui.json {
                crate::ui::json::emit(
                    serde_json::json!({"type": "greenhouses", "data": greenhouses}),
                )?;
                return Ok(());
            }
            let view = RecordListView::greenhouses(greenhouses, &currency, ui.color);
            print!("{}", view.render(ui.color, ui.unicode));
            Ok(())
        }
        GreenhouseCommand::Show(id) => {
            let greenhouse = state.greenhouses.require(&RecordId::from(id.id.as_str()))?;
            if ui.json {
                crate::ui::json::emit(
                    serde_json::json!({"type": "greenhouse", "data": greenhouse}),
                )?;
                return Ok(());
            }
            print!(
                "{}",
                RecordDetailView::greenhouse(greenhouse, &currency).render(ui.color, ui.unicode)
            );
            Ok(())
        }
        GreenhouseCommand::Delete(delete) => {
            delete_record(&ui, &mut state.greenhouses, &delete.id, delete.yes)
        }
        GreenhouseCommand::AddExpense(expense) => {
            ledger::add_expense(&ui, &mut state.greenhouses, expense, &currency)
        }
        GreenhouseCommand::AddHarvest(harvest) => {
            ledger::add_harvest(&ui, &mut state.greenhouses, harvest, &currency)
        }
        GreenhouseCommand::AddNote(note) => ledger::add_note(&ui, &mut state.greenhouses, note),
    }
}
