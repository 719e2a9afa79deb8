//! Advise command handler

use anyhow::{Context, Result};

use farmbook::config::Config;
use farmbook::domain::entities::Field;
use farmbook::domain::services::agronomy::estimate_yield;
use farmbook::presentation::factory::create_advisor;
use farmbook::{FarmError, RecordId};

use super::{currency, open_state, GlobalArgs};
use crate::ui::views::advise::{AdviseView, FieldAdvice, ServiceAdvice};

pub fn cmd_advise(
    field: Option<String>,
    weather_factor: f64,
    config: &Config,
    args: GlobalArgs,
) -> Result<()> {
    let ui = args.ui(config);
    if !weather_factor.is_finite() || weather_factor <= 0.0 {
        return Err(FarmError::validation("weather factor", "must be a positive number").into());
    }

    let state = open_state(config)?;
    let currency = currency(&state);

    let target: Option<&Field> = match &field {
        Some(id) => Some(state.fields.require(&RecordId::from(id.as_str()))?),
        None => state.fields.all().first(),
    };

    let mut advice = Vec::new();
    if let Some(field) = target {
        let local = FieldAdvice::local(field, estimate_yield(field.area, field.crop, weather_factor));
        let entry = match create_advisor(config) {
            Some(advisor) => {
                let service = ServiceAdvice {
                    recommendations: advisor
                        .recommendations(field)
                        .context("advisory service failed")?,
                    prediction: advisor.predict_yield(field).context("advisory service failed")?,
                    insights: advisor
                        .weather_insights(field.crop)
                        .context("advisory service failed")?,
                };
                local.with_service(service)
            }
            None => {
                log::info!("advisory service disabled; using the local yield estimate");
                local
            }
        };
        advice.push(entry);
    }

    if ui.json {
        crate::ui::json::emit(serde_json::json!({"type": "advice", "data": advice}))?;
        return Ok(());
    }
    print!("{}", AdviseView::new(&advice, &currency).render(ui.color, ui.unicode));
    Ok(())
}
