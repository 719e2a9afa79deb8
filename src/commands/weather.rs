//! Weather command handler

use anyhow::{Context, Result};
use chrono::Days;

use farmbook::config::Config;
use farmbook::domain::services::weather_analysis::analyze;
use farmbook::presentation::factory::{create_clock, create_weather_provider};
use farmbook::FarmError;

use super::GlobalArgs;
use crate::ui::views::weather::WeatherView;

pub fn cmd_weather(
    days: Option<u32>,
    location: Option<String>,
    config: &Config,
    args: GlobalArgs,
) -> Result<()> {
    let ui = args.ui(config);
    let days = days.unwrap_or(config.services.forecast_days);
    if days == 0 {
        return Err(FarmError::validation("days", "must be at least 1").into());
    }
    let location = location.unwrap_or_else(|| config.services.location.clone());

    let clock = create_clock();
    let provider = create_weather_provider(config, clock.clone());
    let current = provider
        .current(&location)
        .with_context(|| format!("failed to fetch current weather for {}", location))?;
    let forecast = provider
        .forecast(&location, days)
        .with_context(|| format!("failed to fetch the forecast for {}", location))?;
    let yesterday = match clock.today().checked_sub_days(Days::new(1)) {
        Some(date) => Some(provider.history(&location, date)?),
        None => None,
    };
    let analysis = analyze(&current, &forecast);

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "type": "weather",
            "current": current,
            "forecast": forecast,
            "yesterday": yesterday,
            "analysis": analysis,
        }))?;
        return Ok(());
    }

    let mut view = WeatherView::new(&current, &forecast, analysis.as_ref());
    if let Some(day) = &yesterday {
        view = view.with_yesterday(day);
    }
    print!("{}", view.render(ui.color, ui.unicode));
    Ok(())
}
