//! Command handlers
//!
//! Each handler loads farm state through the factory, runs one operation and
//! prints a view (or one NDJSON event with `--json`).

pub mod account;
pub mod advise;
pub mod animal;
pub mod calendar;
pub mod dashboard;
pub mod diary;
pub mod event;
pub mod field;
pub mod greenhouse;
mod ledger;
pub mod store;
pub mod weather;

use anyhow::{Context, Result};
use serde::Serialize;

use farmbook::config::Config;
use farmbook::domain::entities::Record;
use farmbook::domain::ports::KeyValueStore;
use farmbook::presentation::factory::{create_clock, create_farm_state};
use farmbook::presentation::{ColorWhen, ConcreteFarmState};
use farmbook::{RecordId, RecordManager};

use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;

/// Flags every handler receives from `main`.
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

impl GlobalArgs {
    pub fn ui(&self, config: &Config) -> UiContext {
        UiContext::new(self.json, self.verbose, self.color, config)
    }
}

pub(crate) fn open_state(config: &Config) -> Result<ConcreteFarmState> {
    create_farm_state(config, create_clock()).with_context(|| {
        format!(
            "failed to load farm records from {}",
            config.data_dir().display()
        )
    })
}

pub(crate) fn currency(state: &ConcreteFarmState) -> String {
    state.settings.get().currency.clone()
}

/// Ask before deleting unless `--yes` was given or nobody can answer.
pub(crate) fn confirm_delete<R: Record>(ui: &UiContext, record: &R, yes: bool) -> Result<bool> {
    if yes || !ui.interactive {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Delete {} '{}'?", R::KIND, record.title()))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Print the outcome of a store change as a summary box or one JSON event.
pub(crate) fn report<T: Serialize>(
    ui: &UiContext,
    event: &str,
    payload: &T,
    summary: ResultSummary,
) -> Result<()> {
    if ui.json {
        crate::ui::json::emit(serde_json::json!({ "type": event, "data": payload }))?;
        return Ok(());
    }
    print!("{}", summary.render(ui.color, ui.unicode));
    Ok(())
}

/// Delete one record of any kind, asking first when interactive.
pub(crate) fn delete_record<R: Record, S: KeyValueStore>(
    ui: &UiContext,
    manager: &mut RecordManager<R, S>,
    id: &str,
    yes: bool,
) -> Result<()> {
    let id = RecordId::from(id);
    let Some(record) = manager.get(&id).cloned() else {
        log::info!("no {} with id '{}'; nothing deleted", R::KIND, id);
        let mut summary = ResultSummary::partial(format!("No {} to delete", R::KIND));
        summary.add_detail("Id", id.to_string());
        summary.add_info("Nothing with this id is stored; nothing was changed");
        return report(
            ui,
            "deleted",
            &serde_json::json!({"kind": R::KIND, "id": id, "deleted": false}),
            summary,
        );
    };
    if !confirm_delete(ui, &record, yes)? {
        if ui.json {
            crate::ui::json::emit(serde_json::json!({"type": "aborted", "id": id}))?;
        } else {
            println!("Aborted.");
        }
        return Ok(());
    }

    manager.delete(&id)?;
    let mut summary = ResultSummary::success(format!("Deleted {}", R::KIND));
    summary.add_detail("Id", id.to_string());
    summary.add_detail("Was", record.title());
    report(
        ui,
        "deleted",
        &serde_json::json!({"kind": R::KIND, "id": id, "deleted": true}),
        summary,
    )
}
