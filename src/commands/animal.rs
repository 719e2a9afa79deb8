//! Livestock command handlers

use anyhow::Result;

use farmbook::application::IncomeForm;
use farmbook::config::Config;
use farmbook::domain::entities::{Animal, Ledger, Record};
use farmbook::domain::services::finance::format_currency;
use farmbook::presentation::cli::AnimalCommand;
use farmbook::RecordId;

use super::{currency, delete_record, ledger, open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::records::{RecordDetailView, RecordListView};

pub fn cmd_animal(action: AnimalCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let currency = currency(&state);

    match action {
        AnimalCommand::Add {
            name,
            kind,
            count,
            notes,
        } => {
            let animal = Animal::new(name, kind, count, state.now()).with_notes(notes);
            let animal = state.animals.create(animal)?;

            let mut summary = ResultSummary::success("Animal group added");
            summary.add_detail("Id", animal.id.to_string());
            summary.add_detail("Group", animal.title());
            report(&ui, "animal_added", animal, summary)
        }
        AnimalCommand::List => {
            let animals = state.animals.all();
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "animals", "data": animals}))?;
                return Ok(());
            }
            let view = RecordListView::animals(animals, &currency, ui.color);
            print!("{}", view.render(ui.color, ui.unicode));
            Ok(())
        }
        AnimalCommand::Show(id) => {
            let animal = state.animals.require(&RecordId::from(id.id.as_str()))?;
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "animal", "data": animal}))?;
                return Ok(());
            }
            print!(
                "{}",
                RecordDetailView::animal(animal, &currency).render(ui.color, ui.unicode)
            );
            Ok(())
        }
        AnimalCommand::Delete(delete) => {
            delete_record(&ui, &mut state.animals, &delete.id, delete.yes)
        }
        AnimalCommand::AddExpense(expense) => {
            ledger::add_expense(&ui, &mut state.animals, expense, &currency)
        }
        AnimalCommand::AddIncome {
            id,
            description,
            amount,
            notes,
        } => {
            let id = RecordId::from(id.as_str());
            let income = state.animals.add_income(
                &id,
                IncomeForm {
                    description,
                    amount,
                    date: None,
                    notes,
                },
            )?;
            let animal = state.animals.require(&id)?;

            let mut summary = ResultSummary::success("Income booked");
            summary.add_detail("On", animal.title());
            summary.add_detail("Description", income.description.as_str());
            summary.add_detail("Amount", format_currency(income.amount, &currency));
            summary.add_detail(
                "Total income",
                format_currency(animal.total_income(), &currency),
            );
            report(&ui, "income_added", &income, summary)
        }
        AnimalCommand::AddNote(note) => ledger::add_note(&ui, &mut state.animals, note),
    }
}
