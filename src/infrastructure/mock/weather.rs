use std::sync::Arc;

use chrono::{Days, NaiveDate};

use super::Latency;
use crate::domain::ports::{Clock, ServiceError, WeatherProvider};
use crate::domain::value_objects::{ConditionCode, CurrentWeather, ForecastDay, HistoryDay};

const FORECAST_CONDITIONS: [ConditionCode; 4] = [
    ConditionCode::CLEAR,
    ConditionCode::PARTLY_CLOUDY,
    ConditionCode::CLOUDY,
    ConditionCode::LIGHT_RAIN,
];

/// Provider returns at most this many forecast days.
pub const MAX_FORECAST_DAYS: u32 = 14;

pub struct MockWeather {
    latency: Latency,
    clock: Arc<dyn Clock>,
}

impl MockWeather {
    pub fn new(latency: Latency, clock: Arc<dyn Clock>) -> Self {
        Self { latency, clock }
    }
}

impl WeatherProvider for MockWeather {
    fn current(&self, location: &str) -> Result<CurrentWeather, ServiceError> {
        self.latency.wait(300);
        Ok(CurrentWeather {
            location: location.to_string(),
            temp_c: 18.0,
            humidity: 65.0,
            wind_kph: 12.0,
            pressure_mb: 1013.0,
            condition: ConditionCode::PARTLY_CLOUDY,
        })
    }

    fn forecast(&self, _location: &str, days: u32) -> Result<Vec<ForecastDay>, ServiceError> {
        self.latency.wait(500);
        let today = self.clock.today();
        Ok((0..days.min(MAX_FORECAST_DAYS))
            .filter_map(|i| forecast_day(today, i))
            .collect())
    }

    fn history(&self, _location: &str, date: NaiveDate) -> Result<HistoryDay, ServiceError> {
        self.latency.wait(300);
        Ok(HistoryDay {
            date,
            avg_temp_c: 16.0,
            total_precip_mm: 2.3,
            condition: ConditionCode::LIGHT_RAIN,
        })
    }
}

/// Smoothly varying day `i` after `today`.
fn forecast_day(today: NaiveDate, i: u32) -> Option<ForecastDay> {
    let date = today.checked_add_days(Days::new(u64::from(i)))?;
    let x = f64::from(i);
    let condition = FORECAST_CONDITIONS[i as usize % FORECAST_CONDITIONS.len()];
    let will_it_rain = condition.is_rain();
    Some(ForecastDay {
        date,
        max_temp_c: round1(18.0 + x.sin() * 3.0),
        min_temp_c: round1(12.0 + x.cos() * 2.0),
        avg_temp_c: round1(15.0 + x.sin() * 2.5),
        total_precip_mm: if will_it_rain {
            4.5
        } else {
            f64::from((i * 7) % 10) / 10.0
        },
        avg_humidity: f64::from(60 + (i * 13) % 20),
        will_it_rain,
        chance_of_rain: if will_it_rain { 70 } else { ((i * 11) % 40) as u8 },
        condition,
    })
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
