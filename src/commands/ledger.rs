//! Ledger sub-commands shared by fields, animal groups and greenhouses.

use anyhow::Result;

use farmbook::application::{ExpenseForm, HarvestForm};
use farmbook::domain::entities::{Harvested, Ledger, Record};
use farmbook::domain::ports::KeyValueStore;
use farmbook::domain::services::finance::format_currency;
use farmbook::presentation::cli::{ExpenseArgs, HarvestArgs, NoteArgs};
use farmbook::{RecordId, RecordManager};

use super::report;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;

pub(crate) fn add_expense<R: Ledger, S: KeyValueStore>(
    ui: &UiContext,
    manager: &mut RecordManager<R, S>,
    args: ExpenseArgs,
    currency: &str,
) -> Result<()> {
    let id = RecordId::from(args.id.as_str());
    let expense = manager.add_expense(
        &id,
        ExpenseForm {
            description: args.description,
            amount: args.amount,
            quantity: args.quantity,
            unit: args.unit,
            date: None,
            notes: args.notes,
        },
    )?;
    let record = manager.require(&id)?;

    let mut summary = ResultSummary::success("Expense booked");
    summary.add_detail("On", record.title());
    summary.add_detail("Description", expense.description.as_str());
    summary.add_detail("Amount", format_currency(expense.amount, currency));
    summary.add_detail(
        "Total expenses",
        format_currency(record.total_expenses(), currency),
    );
    report(ui, "expense_added", &expense, summary)
}

pub(crate) fn add_harvest<R: Harvested, S: KeyValueStore>(
    ui: &UiContext,
    manager: &mut RecordManager<R, S>,
    args: HarvestArgs,
    currency: &str,
) -> Result<()> {
    let id = RecordId::from(args.id.as_str());
    let harvest = manager.add_harvest(
        &id,
        HarvestForm {
            quantity: args.quantity,
            unit: args.unit,
            income: args.income,
            date: None,
            notes: args.notes,
        },
    )?;
    let record = manager.require(&id)?;

    let mut summary = ResultSummary::success("Harvest booked");
    summary.add_detail("On", record.title());
    summary.add_detail(
        "Quantity",
        format!("{} {}", harvest.quantity, harvest.unit.symbol()),
    );
    summary.add_detail("Income", format_currency(harvest.income, currency));
    summary.add_detail("Total income", format_currency(record.total_income(), currency));
    report(ui, "harvest_added", &harvest, summary)
}

pub(crate) fn add_note<R: Ledger, S: KeyValueStore>(
    ui: &UiContext,
    manager: &mut RecordManager<R, S>,
    args: NoteArgs,
) -> Result<()> {
    let id = RecordId::from(args.id.as_str());
    let note = manager.add_note(&id, &args.content)?;
    let record = manager.require(&id)?;

    let mut summary = ResultSummary::success("Note added");
    summary.add_detail("On", record.title());
    summary.add_detail("Notes", record.notes().len().to_string());
    report(ui, "note_added", &note, summary)
}
