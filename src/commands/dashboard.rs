//! Dashboard command handler

use anyhow::Result;

use farmbook::config::Config;
use farmbook::Dashboard;

use super::{currency, open_state, GlobalArgs};
use crate::ui::views::dashboard::DashboardView;

pub fn cmd_dashboard(config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let state = open_state(config)?;
    let dashboard = Dashboard::build(&state, config.calendar.upcoming_limit);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({"type": "dashboard", "data": dashboard}))?;
        return Ok(());
    }

    let currency = currency(&state);
    let farm_name = state
        .session
        .current()
        .map(|s| s.user.farm_name.as_str())
        .filter(|name| !name.trim().is_empty());
    let view = DashboardView::new(&dashboard, &currency, farm_name);
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
