//! Agricultural reading of a weather forecast.
//!
//! Turns current conditions plus a multi-day forecast into irrigation,
//! planting, harvesting, pest and frost assessments and a 0-100 score.

use serde::Serialize;

use crate::domain::value_objects::{CurrentWeather, ForecastDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Irrigation {
    pub level: Level,
    pub suggestion: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Planting {
    pub can_plant: bool,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HarvestWindow {
    Suitable,
    Moderate,
    Unsuitable,
}

impl HarvestWindow {
    pub fn reason(&self) -> &'static str {
        match self {
            HarvestWindow::Suitable => "Dry weather ahead",
            HarvestWindow::Moderate => "Rain possible",
            HarvestWindow::Unsuitable => "Several rainy days ahead",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAnalysis {
    pub irrigation: Irrigation,
    pub planting: Planting,
    pub harvesting: HarvestWindow,
    pub pest_risk: Level,
    pub frost_risk: Level,
    pub score: u8,
    pub recommendations: Vec<&'static str>,
}

/// Analyze a forecast. Returns `None` when the forecast has no days.
pub fn analyze(current: &CurrentWeather, forecast: &[ForecastDay]) -> Option<WeatherAnalysis> {
    if forecast.is_empty() {
        return None;
    }

    let irrigation = irrigation(forecast);
    let pest_risk = pest_risk(forecast);
    let frost_risk = frost_risk(forecast);
    let score = overall_score(current, forecast);

    let mut recommendations = Vec::new();
    if irrigation.level == Level::High {
        recommendations.push("Increase irrigation by 30% over the next 3 days");
    }
    if pest_risk == Level::High {
        recommendations.push("High pest risk: apply preventive treatment");
    }
    if frost_risk == Level::High {
        recommendations.push("High frost risk: protect warmth-loving crops");
    }
    if score > 80 {
        recommendations.push("Excellent conditions for field work");
    }

    Some(WeatherAnalysis {
        irrigation,
        planting: planting(current, forecast),
        harvesting: harvesting(forecast),
        pest_risk,
        frost_risk,
        score,
        recommendations,
    })
}

fn mean(forecast: &[ForecastDay], f: impl Fn(&ForecastDay) -> f64) -> f64 {
    forecast.iter().map(f).sum::<f64>() / forecast.len() as f64
}

fn irrigation(forecast: &[ForecastDay]) -> Irrigation {
    let precip_3d: f64 = forecast.iter().take(3).map(|d| d.total_precip_mm).sum();
    let avg_temp = mean(forecast, |d| d.avg_temp_c);

    let level = if precip_3d < 5.0 && avg_temp > 20.0 {
        Level::High
    } else if precip_3d < 10.0 && avg_temp > 15.0 {
        Level::Medium
    } else {
        Level::Low
    };
    let suggestion = match level {
        Level::High => "Increase by 30%",
        Level::Medium => "Increase by 15%",
        Level::Low => "Normal",
    };
    Irrigation { level, suggestion }
}

fn planting(current: &CurrentWeather, forecast: &[ForecastDay]) -> Planting {
    // Soil runs roughly 5 °C below air temperature.
    let soil_temp = current.temp_c - 5.0;
    if soil_temp < 8.0 {
        return Planting {
            can_plant: false,
            reason: "Soil temperature too low",
        };
    }
    if forecast[0].will_it_rain {
        return Planting {
            can_plant: false,
            reason: "Rain expected",
        };
    }
    Planting {
        can_plant: true,
        reason: "Favorable conditions",
    }
}

fn harvesting(forecast: &[ForecastDay]) -> HarvestWindow {
    let rainy = forecast.iter().take(3).filter(|d| d.will_it_rain).count();
    match rainy {
        0 => HarvestWindow::Suitable,
        1 => HarvestWindow::Moderate,
        _ => HarvestWindow::Unsuitable,
    }
}

fn pest_risk(forecast: &[ForecastDay]) -> Level {
    let humidity = mean(forecast, |d| d.avg_humidity);
    let temp = mean(forecast, |d| d.avg_temp_c);
    if humidity > 75.0 && temp > 20.0 {
        Level::High
    } else if humidity > 65.0 && temp > 18.0 {
        Level::Medium
    } else {
        Level::Low
    }
}

fn frost_risk(forecast: &[ForecastDay]) -> Level {
    if forecast.iter().any(|d| d.min_temp_c < 2.0) {
        Level::High
    } else if forecast.iter().any(|d| d.min_temp_c < 5.0) {
        Level::Medium
    } else {
        Level::Low
    }
}

fn overall_score(current: &CurrentWeather, forecast: &[ForecastDay]) -> u8 {
    let mut score: i32 = 50;

    let avg_temp = mean(forecast, |d| d.avg_temp_c);
    if (15.0..=25.0).contains(&avg_temp) {
        score += 20;
    } else if (10.0..=30.0).contains(&avg_temp) {
        score += 10;
    }

    let total_precip: f64 = forecast.iter().map(|d| d.total_precip_mm).sum();
    if (5.0..=20.0).contains(&total_precip) {
        score += 15;
    } else if total_precip < 30.0 {
        score += 5;
    }

    if current.wind_kph < 30.0 {
        score += 10;
    }
    if (40.0..=70.0).contains(&current.humidity) {
        score += 10;
    }

    score.clamp(0, 100) as u8
}
