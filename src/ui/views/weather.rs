use farmbook::domain::services::agronomy::{care_tips, format_temperature, growing_degree_days};
use farmbook::domain::services::weather_analysis::{HarvestWindow, Level, WeatherAnalysis};
use farmbook::domain::value_objects::{ConditionCode, CurrentWeather, ForecastDay, HistoryDay};

use super::section;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::Box;
use crate::ui::widgets::table::{Align, Table};

pub struct WeatherView<'a> {
    current: &'a CurrentWeather,
    forecast: &'a [ForecastDay],
    analysis: Option<&'a WeatherAnalysis>,
    yesterday: Option<&'a HistoryDay>,
}

impl<'a> WeatherView<'a> {
    pub fn new(
        current: &'a CurrentWeather,
        forecast: &'a [ForecastDay],
        analysis: Option<&'a WeatherAnalysis>,
    ) -> Self {
        Self {
            current,
            forecast,
            analysis,
            yesterday: None,
        }
    }

    pub fn with_yesterday(mut self, day: &'a HistoryDay) -> Self {
        self.yesterday = Some(day);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (c, u) = (supports_color, supports_unicode);
        let mut header = CommandHeader::new(Icon::Weather, self.current.location.as_str());
        header.add("Now", condition(self.current.condition, u));
        header.add("Temperature", format_temperature(self.current.temp_c));
        header.add("Humidity", format!("{}%", self.current.humidity.round()));
        header.add("Wind", format!("{} km/h", self.current.wind_kph.round()));
        header.add("Pressure", format!("{} mb", self.current.pressure_mb.round()));
        if let Some(day) = self.yesterday {
            header.add(
                "Yesterday",
                format!(
                    "{}, {:.1} mm",
                    format_temperature(day.avg_temp_c),
                    day.total_precip_mm
                ),
            );
        }
        let mut out = header.render(c, u);

        let mut table = Table::new(&[
            ("Date", Align::Left),
            ("Conditions", Align::Left),
            ("Min", Align::Right),
            ("Max", Align::Right),
            ("Rain", Align::Right),
            ("Precip", Align::Right),
            ("GDD", Align::Right),
        ]);
        for day in self.forecast {
            table.add_row(vec![
                day.date.format("%a %d %b").to_string(),
                condition(day.condition, u),
                format_temperature(day.min_temp_c),
                format_temperature(day.max_temp_c),
                format!("{}%", day.chance_of_rain),
                format!("{:.1} mm", day.total_precip_mm),
                format!("{:.1}", growing_degree_days(day.avg_temp_c)),
            ]);
        }
        out.push_str(&section("Forecast", &table.render_lines(c, u), c));

        if let Some(analysis) = self.analysis {
            out.push('\n');
            out.push_str(&analysis_box(analysis, c, u));
        }

        let tips: Vec<String> = care_tips(self.current.temp_c, self.current.condition)
            .into_iter()
            .map(|tip| format!("{} {}", Icon::Bullet.render(u), tip))
            .collect();
        out.push_str(&section("Care tips", &tips, c));
        out
    }
}

fn condition(code: ConditionCode, supports_unicode: bool) -> String {
    if supports_unicode {
        format!("{} {}", code.icon(), code.text())
    } else {
        code.text().to_string()
    }
}

fn level(level: Level, supports_color: bool) -> String {
    match level {
        Level::Low => ColoredText::success(level.label()),
        Level::Medium => ColoredText::warning(level.label()),
        Level::High => ColoredText::error(level.label()),
    }
    .render(supports_color)
}

fn analysis_box(analysis: &WeatherAnalysis, c: bool, u: bool) -> String {
    let score = format!("{}/100", analysis.score);
    let score = if analysis.score >= 70 {
        ColoredText::success(score)
    } else if analysis.score >= 40 {
        ColoredText::warning(score)
    } else {
        ColoredText::error(score)
    }
    .render(c);

    let planting = if analysis.planting.can_plant {
        ColoredText::success("yes")
    } else {
        ColoredText::warning("no")
    }
    .render(c);
    let harvesting = match analysis.harvesting {
        HarvestWindow::Suitable => ColoredText::success("suitable"),
        HarvestWindow::Moderate => ColoredText::warning("moderate"),
        HarvestWindow::Unsuitable => ColoredText::error("unsuitable"),
    }
    .render(c);

    let mut b = Box::with_title(ColoredText::plain("Field work outlook").bold().render(c));
    b.add_rows(&[
        ("Score".to_string(), score),
        (
            "Irrigation".to_string(),
            format!(
                "{} ({})",
                level(analysis.irrigation.level, c),
                analysis.irrigation.suggestion
            ),
        ),
        (
            "Planting".to_string(),
            format!("{} ({})", planting, analysis.planting.reason),
        ),
        (
            "Harvesting".to_string(),
            format!("{} ({})", harvesting, analysis.harvesting.reason()),
        ),
        ("Pest risk".to_string(), level(analysis.pest_risk, c)),
        ("Frost risk".to_string(), level(analysis.frost_risk, c)),
    ]);
    if !analysis.recommendations.is_empty() {
        b.add_empty();
        for rec in &analysis.recommendations {
            b.add_line(format!("{} {}", Icon::Arrow.colored(c, u), rec));
        }
    }
    b.render(c, u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use farmbook::domain::services::weather_analysis::analyze;

    fn current(temp_c: f64, condition: ConditionCode) -> CurrentWeather {
        CurrentWeather {
            location: "Bishkek".to_string(),
            temp_c,
            humidity: 55.0,
            wind_kph: 12.0,
            pressure_mb: 1013.0,
            condition,
        }
    }

    fn forecast() -> Vec<ForecastDay> {
        (0..3)
            .map(|i| ForecastDay {
                date: NaiveDate::from_ymd_opt(2024, 5, 1 + i).unwrap(),
                max_temp_c: 24.0,
                min_temp_c: 11.0,
                avg_temp_c: 17.5,
                total_precip_mm: 0.0,
                avg_humidity: 50.0,
                will_it_rain: false,
                chance_of_rain: 10,
                condition: ConditionCode::CLEAR,
            })
            .collect()
    }

    #[test]
    fn shows_forecast_rows_and_degree_days() {
        let now = current(18.0, ConditionCode::CLEAR);
        let days = forecast();
        let rendered = WeatherView::new(&now, &days, None).render(false, false);
        assert!(rendered.contains("Bishkek"));
        assert!(rendered.contains("Temperature: +18°C"));
        assert!(rendered.contains("Wed 01 May"));
        assert!(rendered.contains("7.5"));
        assert!(!rendered.contains("Field work outlook"));
    }

    #[test]
    fn includes_analysis_when_available() {
        let now = current(18.0, ConditionCode::CLEAR);
        let days = forecast();
        let analysis = analyze(&now, &days).unwrap();
        let rendered = WeatherView::new(&now, &days, Some(&analysis)).render(false, false);
        assert!(rendered.contains("Field work outlook"));
        assert!(rendered.contains("Frost risk"));
    }

    #[test]
    fn rain_adds_drainage_tip() {
        let now = current(15.0, ConditionCode::LIGHT_RAIN);
        let rendered = WeatherView::new(&now, &[], None).render(false, false);
        assert!(rendered.contains("Check drainage"));
    }

    #[test]
    fn yesterday_line_uses_history() {
        let now = current(15.0, ConditionCode::CLEAR);
        let history = HistoryDay {
            date: NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            avg_temp_c: 12.4,
            total_precip_mm: 2.3,
            condition: ConditionCode::CLOUDY,
        };
        let rendered = WeatherView::new(&now, &[], None)
            .with_yesterday(&history)
            .render(false, false);
        assert!(rendered.contains("Yesterday:   +12°C, 2.3 mm"));
    }
}
