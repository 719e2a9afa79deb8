//! Field command handlers

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::entities::{Field, Record};
use farmbook::domain::services::finance::{format_currency, seed_plan, SeedPlan};
use farmbook::presentation::cli::FieldCommand;
use farmbook::RecordId;

use super::{currency, delete_record, ledger, open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::records::{RecordDetailView, RecordListView};

pub fn cmd_field(action: FieldCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let currency = currency(&state);

    match action {
        FieldCommand::Add {
            name,
            area,
            crop,
            notes,
        } => {
            let field = Field::new(name, area, crop, state.now()).with_notes(notes);
            let field = state.fields.create(field)?;

            let mut summary = ResultSummary::success("Field added");
            summary.add_detail("Id", field.id.to_string());
            summary.add_detail("Field", field.title());
            summary.with_next_step(format!(
                "farmbook field add-expense {} --description <text> --amount <n>",
                field.id
            ));
            report(&ui, "field_added", field, summary)
        }
        FieldCommand::List => {
            let fields = state.fields.all();
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "fields", "data": fields}))?;
                return Ok(());
            }
            let view = RecordListView::fields(fields, &currency, ui.color);
            print!("{}", view.render(ui.color, ui.unicode));
            Ok(())
        }
        FieldCommand::Show(id) => {
            let field = state.fields.require(&RecordId::from(id.id.as_str()))?;
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "field", "data": field}))?;
                return Ok(());
            }
            print!(
                "{}",
                RecordDetailView::field(field, &currency).render(ui.color, ui.unicode)
            );
            Ok(())
        }
        FieldCommand::Delete(delete) => {
            delete_record(&ui, &mut state.fields, &delete.id, delete.yes)
        }
        FieldCommand::AddExpense(expense) => {
            ledger::add_expense(&ui, &mut state.fields, expense, &currency)
        }
        FieldCommand::AddHarvest(harvest) => {
            ledger::add_harvest(&ui, &mut state.fields, harvest, &currency)
        }
        FieldCommand::AddNote(note) => ledger::add_note(&ui, &mut state.fields, note),
        FieldCommand::Seed {
            id,
            rate,
            price,
            dry_run,
        } => {
            let id = RecordId::from(id.as_str());
            if dry_run {
                let field = state.fields.require(&id)?;
                let plan = seed_plan(field.area, rate, price)?;
                let summary = seed_summary("Seed plan (not booked)", field, &plan, &currency);
                return report(&ui, "seed_plan", &plan, summary);
            }

            let (plan, expense) = state.fields.add_seed_cost(&id, rate, price)?;
            let field = state.fields.require(&id)?;
            let mut summary = seed_summary("Seed cost booked", field, &plan, &currency);
            summary.add_detail("Expense", expense.id.to_string());
            report(
                &ui,
                "seed_cost_added",
                &serde_json::json!({"plan": plan, "expense": expense}),
                summary,
            )
        }
    }
}

fn seed_summary(title: &str, field: &Field, plan: &SeedPlan, currency: &str) -> ResultSummary {
    let mut summary = ResultSummary::success(title);
    summary.add_detail("Field", field.title());
    summary.add_detail(
        "Seed",
        format!(
            "{} kg ({} kg/ha × {} ha)",
            plan.amount_kg, plan.rate_kg_per_ha, plan.area_ha
        ),
    );
    summary.add_detail("Cost", format_currency(plan.cost, currency));
    summary
}
