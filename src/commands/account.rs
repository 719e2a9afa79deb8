//! Settings and account command handlers

use anyhow::Result;

use farmbook::config::Config;
use farmbook::domain::ports::Registration;
use farmbook::presentation::cli::SettingsCommand;
use farmbook::presentation::factory::{create_account_service, create_clock};

use super::{open_state, report, GlobalArgs};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::views::account::{SettingsView, WhoamiView};

pub fn cmd_settings(action: SettingsCommand, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;

    match action {
        SettingsCommand::Show => {
            let settings = state.settings.get();
            if ui.json {
                crate::ui::json::emit(serde_json::json!({"type": "settings", "data": settings}))?;
                return Ok(());
            }
            print!("{}", SettingsView::new(settings).render(ui.color, ui.unicode));
            Ok(())
        }
        SettingsCommand::Set { key, value } => {
            let settings = state.settings.set(&key, &value)?;
            let mut summary = ResultSummary::success("Setting saved");
            summary.add_detail(key.as_str(), value.trim());
            report(&ui, "settings", settings, summary)
        }
    }
}

pub fn cmd_login(email: &str, password: &str, config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let service = create_account_service(config, create_clock());

    let session = state.session.login(service.as_ref(), email, password)?;
    let mut summary = ResultSummary::success("Signed in");
    summary.add_detail("User", session.user.name.as_str());
    summary.add_detail("Email", session.user.email.as_str());
    report(&ui, "signed_in", &session.user, summary)
}

pub fn cmd_register(
    registration: Registration,
    config: &Config,
    args: GlobalArgs,
) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let service = create_account_service(config, create_clock());

    let session = state.session.register(service.as_ref(), &registration)?;
    let mut summary = ResultSummary::success("Account created");
    summary.add_detail("User", session.user.name.as_str());
    summary.add_detail("Email", session.user.email.as_str());
    summary.add_detail("Farm", session.user.farm_name.as_str());
    report(&ui, "registered", &session.user, summary)
}

pub fn cmd_logout(config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let mut state = open_state(config)?;
    let service = create_account_service(config, create_clock());

    let was_signed_in = state.session.logout(service.as_ref())?;
    let summary = if was_signed_in {
        ResultSummary::success("Signed out")
    } else {
        let mut summary = ResultSummary::partial("Not signed in");
        summary.add_info("Nothing to do");
        summary
    };
    report(
        &ui,
        "signed_out",
        &serde_json::json!({"was_signed_in": was_signed_in}),
        summary,
    )
}

pub fn cmd_whoami(config: &Config, args: GlobalArgs) -> Result<()> {
    let ui = args.ui(config);
    let state = open_state(config)?;
    let session = state.session.current();

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "type": "whoami",
            "user": session.map(|s| &s.user),
        }))?;
        return Ok(());
    }
    print!("{}", WhoamiView::new(session).render(ui.color, ui.unicode));
    Ok(())
}
