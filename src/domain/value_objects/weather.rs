//! Weather snapshots returned by a weather provider

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Provider condition code (WeatherAPI-style numeric codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionCode(pub u16);

impl ConditionCode {
    pub const CLEAR: ConditionCode = ConditionCode(1000);
    pub const PARTLY_CLOUDY: ConditionCode = ConditionCode(1003);
    pub const CLOUDY: ConditionCode = ConditionCode(1006);
    pub const LIGHT_RAIN: ConditionCode = ConditionCode(1180);

    pub fn text(&self) -> &'static str {
        match self.0 {
            1000 => "Clear",
            1003 => "Partly cloudy",
            1006 => "Cloudy",
            1009 => "Overcast",
            1030 | 1135 => "Fog",
            1063 => "Patchy rain possible",
            1066 => "Patchy snow possible",
            1087 => "Thunder",
            1150 | 1153 => "Drizzle",
            1180 | 1240 => "Light rain",
            1183 | 1243 => "Moderate rain",
            1186 | 1189 | 1246 => "Heavy rain",
            1192 | 1195 => "Torrential rain",
            1210 | 1213 | 1249 | 1252 => "Snow",
            1216 | 1219 | 1222 | 1225 | 1255 => "Heavy snow",
            1237 | 1258 => "Hail",
            1273 | 1276 => "Thunderstorm with rain",
            1279 | 1282 => "Thunderstorm with snow",
            _ => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.0 {
            1000 => "☀️",
            1003 => "⛅",
            1006 | 1009 => "☁️",
            1030 | 1135 | 1147 => "🌫️",
            1063 | 1153 | 1240 => "🌦️",
            1087 | 1273 | 1276 | 1279 | 1282 => "⛈️",
            1066 | 1114 | 1117 | 1204..=1225 | 1249..=1258 => "❄️",
            1150 | 1168..=1201 | 1243..=1246 | 1261 | 1264 => "🌧️",
            _ => "❓",
        }
    }

    pub fn is_rain(&self) -> bool {
        matches!(self.0, 1063 | 1150..=1201 | 1240..=1246 | 1273 | 1276)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location: String,
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub condition: ConditionCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub max_temp_c: f64,
    pub min_temp_c: f64,
    pub avg_temp_c: f64,
    pub total_precip_mm: f64,
    pub avg_humidity: f64,
    pub will_it_rain: bool,
    pub chance_of_rain: u8,
    pub condition: ConditionCode,
}

/// A past day's observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
    pub total_precip_mm: f64,
    pub condition: ConditionCode,
}
