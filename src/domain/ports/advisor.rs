//! Advisor port
//!
//! Agronomic advice for a field: recommended actions, a yield prediction and
//! weather insights for a crop.

use serde::Serialize;

use super::weather_provider::ServiceError;
use crate::domain::entities::Field;
use crate::domain::value_objects::{Crop, Priority};

pub trait Advisor {
    fn recommendations(&self, field: &Field) -> Result<RecommendationSet, ServiceError>;
    fn predict_yield(&self, field: &Field) -> Result<YieldPrediction, ServiceError>;
    fn weather_insights(&self, crop: Crop) -> Result<Vec<WeatherInsight>, ServiceError>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: u32,
    /// fertilizer, irrigation, pest, harvest
    pub topic: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub action: String,
    pub estimated_cost: f64,
    pub estimated_time: String,
    /// Percent
    pub confidence: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn high_priority(&self) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count()
    }

    pub fn total_cost(&self) -> f64 {
        self.recommendations.iter().map(|r| r.estimated_cost).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldFactor {
    pub name: String,
    /// Signed percent, e.g. `+8%`
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YieldPrediction {
    /// Centners per hectare
    pub estimated_yield: f64,
    pub confidence: u8,
    pub factors: Vec<YieldFactor>,
    pub recommended_actions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Opportunity,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInsight {
    pub kind: InsightKind,
    pub text: String,
    pub impact: Priority,
}
