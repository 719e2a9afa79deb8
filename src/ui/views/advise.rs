use serde::Serialize;

use farmbook::domain::entities::Field;
use farmbook::domain::ports::{InsightKind, RecommendationSet, WeatherInsight, YieldPrediction};
use farmbook::domain::services::finance::format_currency;
use farmbook::domain::value_objects::Priority;

use super::{hint, section};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;

/// Advisory output for one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldAdvice {
    pub field_id: String,
    pub field_name: String,
    /// Centners, from the local yield formula
    pub estimated_yield: f64,
    /// Present when the advisory service is enabled
    pub service: Option<ServiceAdvice>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceAdvice {
    pub recommendations: RecommendationSet,
    pub prediction: YieldPrediction,
    pub insights: Vec<WeatherInsight>,
}

impl FieldAdvice {
    pub fn local(field: &Field, estimated_yield: f64) -> Self {
        Self {
            field_id: field.id.to_string(),
            field_name: field.name.clone(),
            estimated_yield,
            service: None,
        }
    }

    pub fn with_service(mut self, service: ServiceAdvice) -> Self {
        self.service = Some(service);
        self
    }
}

pub struct AdviseView<'a> {
    advice: &'a [FieldAdvice],
    currency: &'a str,
}

impl<'a> AdviseView<'a> {
    pub fn new(advice: &'a [FieldAdvice], currency: &'a str) -> Self {
        Self { advice, currency }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(Icon::Advice, "Field advice");
        header.add("Fields", self.advice.len().to_string());
        let mut out = header.render(c, u);

        if self.advice.is_empty() {
            out.push('\n');
            out.push_str(&hint("No fields to advise on. Add one with `farmbook field add`.", c));
            return out;
        }

        for advice in self.advice {
            out.push('\n');
            out.push_str(&self.render_field(advice, c, u));
        }
        out
    }

    fn render_field(&self, advice: &FieldAdvice, c: bool, u: bool) -> String {
        let mut b = Box::with_title(format!(
            "{} {}",
            Icon::Field.colored(c, u),
            ColoredText::plain(advice.field_name.as_str()).bold().render(c)
        ));
        let mut rows = vec![(
            "Yield estimate".to_string(),
            format!("{} c", advice.estimated_yield),
        )];

        let Some(service) = &advice.service else {
            b.add_rows(&rows);
            b.add_empty();
            b.add_line(ColoredText::dim("Advisory service is off; showing the local estimate only.").render(c));
            return b.render(c, u);
        };

        let set = &service.recommendations;
        rows.push((
            "Predicted yield".to_string(),
            format!(
                "{} c/ha ({}% confidence)",
                service.prediction.estimated_yield, service.prediction.confidence
            ),
        ));
        rows.push((
            "High priority".to_string(),
            format!("{} of {}", set.high_priority(), set.recommendations.len()),
        ));
        rows.push((
            "Estimated cost".to_string(),
            format_currency(set.total_cost(), self.currency),
        ));
        b.add_rows(&rows);

        let mut out = b.render(c, u);

        let recommendations: Vec<String> = set
            .recommendations
            .iter()
            .flat_map(|r| {
                [
                    format!(
                        "{} {}  {}",
                        Priority::marker(Some(r.priority), u),
                        ColoredText::plain(r.title.as_str()).bold().render(c),
                        ColoredText::dim(format!("{}% confidence", r.confidence)).render(c)
                    ),
                    format!("  {}", r.description),
                    format!(
                        "  {} {} ({})",
                        Icon::Arrow.colored(c, u),
                        r.action,
                        r.estimated_time
                    ),
                ]
            })
            .collect();
        out.push_str(&section("Recommendations", &recommendations, c));

        let factors: Vec<String> = service
            .prediction
            .factors
            .iter()
            .map(|f| {
                let impact = if f.impact.starts_with('-') {
                    ColoredText::error(f.impact.as_str())
                } else {
                    ColoredText::success(f.impact.as_str())
                };
                format!("{} {}", impact.render(c), f.name)
            })
            .chain(
                service
                    .prediction
                    .recommended_actions
                    .iter()
                    .map(|a| format!("{} {}", Icon::Arrow.colored(c, u), a)),
            )
            .collect();
        out.push_str(&section("Yield factors", &factors, c));

        let insights: Vec<String> = service
            .insights
            .iter()
            .map(|i| {
                let icon = match i.kind {
                    InsightKind::Warning => Icon::Warning,
                    InsightKind::Opportunity => Icon::Success,
                    InsightKind::Info => Icon::Bullet,
                };
                format!("{} {}", icon.colored(c, u), i.text)
            })
            .collect();
        if !insights.is_empty() {
            out.push_str(&section("Weather insights", &insights, c));
        }
        out
    }
}
