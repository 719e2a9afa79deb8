use super::Latency;
use crate::domain::entities::Field;
use crate::domain::ports::{
    Advisor, InsightKind, Recommendation, RecommendationSet, ServiceError, WeatherInsight,
    YieldFactor, YieldPrediction,
};
use crate::domain::value_objects::{Crop, Priority};

#[derive(Debug, Clone, Copy, Default)]
pub struct MockAdvisor {
    latency: Latency,
}

impl MockAdvisor {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

#[allow(clippy::too_many_arguments)]
fn recommendation(
    id: u32,
    topic: &str,
    title: &str,
    description: String,
    priority: Priority,
    action: &str,
    estimated_cost: f64,
    estimated_time: &str,
    confidence: u8,
) -> Recommendation {
    Recommendation {
        id,
        topic: topic.to_string(),
        title: title.to_string(),
        description,
        priority,
        action: action.to_string(),
        estimated_cost,
        estimated_time: estimated_time.to_string(),
        confidence,
    }
}

impl Advisor for MockAdvisor {
    fn recommendations(&self, field: &Field) -> Result<RecommendationSet, ServiceError> {
        self.latency.wait(800);
        log::info!("requesting recommendations for '{}'", field.name);
        Ok(RecommendationSet {
            recommendations: vec![
                recommendation(
                    1,
                    "fertilizer",
                    "Fertilizer",
                    format!(
                        "Soil analysis for {} suggests nitrogen fertilizer at 150 kg/ha.",
                        field.name
                    ),
                    Priority::High,
                    "Apply fertilizer within 3 days",
                    45_000.0,
                    "2 days",
                    85,
                ),
                recommendation(
                    2,
                    "irrigation",
                    "Irrigation schedule",
                    "Soil moisture is at 45%. Increase morning irrigation by 20%.".to_string(),
                    Priority::Medium,
                    "Adjust the irrigation system",
                    0.0,
                    "1 hour",
                    78,
                ),
                recommendation(
                    3,
                    "pest",
                    "Pest prevention",
                    format!(
                        "High chance of Colorado beetles on {}. Preventive treatment advised.",
                        field.crop.label().to_lowercase()
                    ),
                    Priority::Medium,
                    "Treat with biological agents",
                    25_000.0,
                    "1 day",
                    65,
                ),
                recommendation(
                    4,
                    "harvest",
                    "Harvest timing",
                    "The crop has reached optimal ripeness. Start harvesting within a week."
                        .to_string(),
                    Priority::High,
                    "Prepare harvesting equipment",
                    0.0,
                    "3 days of preparation",
                    92,
                ),
            ],
        })
    }

    fn predict_yield(&self, _field: &Field) -> Result<YieldPrediction, ServiceError> {
        self.latency.wait(1000);
        let factor = |name: &str, impact: &str| YieldFactor {
            name: name.to_string(),
            impact: impact.to_string(),
        };
        Ok(YieldPrediction {
            estimated_yield: 35.5,
            confidence: 82,
            factors: vec![
                factor("Weather", "+8%"),
                factor("Seed quality", "+5%"),
                factor("Timely irrigation", "+12%"),
                factor("Pests", "-3%"),
            ],
            recommended_actions: vec![
                "Increase irrigation by 15% for 2 weeks".to_string(),
                "Apply an additional top dressing".to_string(),
            ],
        })
    }

    fn weather_insights(&self, _crop: Crop) -> Result<Vec<WeatherInsight>, ServiceError> {
        self.latency.wait(600);
        let insight = |kind, text: &str, impact| WeatherInsight {
            kind,
            text: text.to_string(),
            impact,
        };
        Ok(vec![
            insight(
                InsightKind::Warning,
                "A cold snap is expected. Postpone sowing by 3 days.",
                Priority::Medium,
            ),
            insight(
                InsightKind::Opportunity,
                "Good conditions for applying fertilizer.",
                Priority::High,
            ),
            insight(
                InsightKind::Info,
                "Temperature is optimal for crop growth.",
                Priority::Low,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn recommendation_summary() {
        let field = Field::new("North", 10.0, Crop::Potato, Utc::now());
        let set = MockAdvisor::new(Latency::None)
            .recommendations(&field)
            .unwrap();
        assert_eq!(set.recommendations.len(), 4);
        assert_eq!(set.high_priority(), 2);
        assert_eq!(set.total_cost(), 70_000.0);
    }

    #[test]
    fn yield_prediction_is_fixed() {
        let field = Field::new("North", 10.0, Crop::Wheat, Utc::now());
        let prediction = MockAdvisor::new(Latency::None)
            .predict_yield(&field)
            .unwrap();
        assert_eq!(prediction.estimated_yield, 35.5);
        assert_eq!(prediction.confidence, 82);
        assert_eq!(prediction.factors.len(), 4);
    }
}
