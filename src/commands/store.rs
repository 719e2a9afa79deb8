//! Store inspection and legacy import

use anyhow::{Context, Result};

use farmbook::application::import_legacy_dump;
use farmbook::config::Config;
use farmbook::presentation::cli::StoreCommand;
use farmbook::presentation::factory::{create_clock, create_store};

use super::GlobalArgs;
use crate::ui::views::store::{ImportView, StoreInfoView};

pub fn cmd_store(action: StoreCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let store = create_store(config);

    match action {
        StoreCommand::Info => {
            let info = store.info().context("failed to read the store")?;
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "store_info", "data": info}))?;
                return Ok(());
            }
            print!("{}", StoreInfoView::new(&info).render(ui.color, ui.unicode));
            Ok(())
        }
        StoreCommand::Import { file, overwrite } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let now = create_clock().now();
            let report = import_legacy_dump(store.as_ref(), &content, overwrite, now)?;
            log::info!(
                "imported {} key(s), kept {}, skipped {}",
                report.imported.len(),
                report.kept.len(),
                report.skipped.len()
            );

            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "imported", "data": report}))?;
                return Ok(());
            }
            print!("{}", ImportView::new(&report, &file).render(ui.color, ui.unicode));
            Ok(())
        }
    }
}
