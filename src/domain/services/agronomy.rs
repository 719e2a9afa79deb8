//! Rule-of-thumb agronomy: yield estimates, growing degree days and
//! temperature-based care tips.

use crate::domain::value_objects::{ConditionCode, Crop};

/// Base temperature for growing degree days, °C.
pub const GDD_BASE_C: f64 = 10.0;

/// Estimated harvest in centners: area × typical yield × weather factor, rounded.
///
/// `weather_factor` is 1.0 for an average season.
pub fn estimate_yield(area_ha: f64, crop: Crop, weather_factor: f64) -> f64 {
    (area_ha * crop.base_yield() * weather_factor).round()
}

pub fn growing_degree_days(avg_temp_c: f64) -> f64 {
    (avg_temp_c - GDD_BASE_C).max(0.0)
}

/// `+18°C` / `-3°C`
pub fn format_temperature(temp_c: f64) -> String {
    let rounded = temp_c.round();
    if rounded > 0.0 {
        format!("+{}°C", rounded)
    } else if rounded < 0.0 {
        format!("{}°C", rounded)
    } else {
        "0°C".to_string()
    }
}

/// Practical tips for the current temperature band, plus rain tips when it rains.
pub fn care_tips(temp_c: f64, condition: ConditionCode) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = if temp_c < 0.0 {
        vec![
            "Protect plants from frost",
            "Insulate greenhouses",
            "Keep animals in heated housing",
            "Check heating systems",
        ]
    } else if temp_c < 10.0 {
        vec![
            "Hold off planting warmth-loving crops",
            "Protect seedlings",
            "Cover beds overnight",
        ]
    } else if temp_c < 20.0 {
        vec![
            "Good conditions for planting most crops",
            "Sow cold-hardy crops",
            "Ventilate greenhouses during the day",
        ]
    } else if temp_c < 30.0 {
        vec![
            "Ideal growing weather",
            "Increase watering",
            "Plant warmth-loving crops",
        ]
    } else {
        vec![
            "Increase watering",
            "Shade plants at midday",
            "Water in the morning or evening",
            "Watch soil moisture",
        ]
    };

    if condition.is_rain() {
        tips.extend(["Postpone irrigation", "Check drainage", "Harvest before the rain"]);
    }
    tips
}
