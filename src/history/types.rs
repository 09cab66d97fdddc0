use serde::{Deserialize, Serialize};

/// Flat storage row for one recommendation.
///
/// Crop and soil are stored by name, not code, so history stays readable
/// if the model's label encoding changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRecord {
    pub field_name: String,
    pub field_size: f64,
    /// Resolved unit name (`hectares`, `acres` or `bigha`). Unrecognised
    /// input units are stored as `hectares`, not as the raw string.
    pub field_size_unit: String,
    pub crop_type: String,
    pub soil_type: String,
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub ml_prediction_fertilizer: String,
    pub ml_prediction_confidence: f64,
    pub primary_fertilizer_name: String,
    pub primary_fertilizer_amount: String,
    pub secondary_fertilizer_name: String,
    pub secondary_fertilizer_amount: String,
    pub total_cost_estimate: String,
}

/// A saved recommendation as read back from history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoredRecommendation {
    pub id: i64,
    pub user_id: String,
    pub created_at: String,
    #[serde(flatten)]
    pub record: RecommendationRecord,
}

/// Badge tier for a model confidence score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// High at 90 and above, Medium at 80 and above, Low otherwise.
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 90.0 {
            ConfidenceLevel::High
        } else if confidence >= 80.0 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

impl StoredRecommendation {
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.record.ml_prediction_confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceLevel::from_confidence(95.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(90.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_confidence(89.9), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(80.0), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_confidence(79.9), ConfidenceLevel::Low);
    }

    #[test]
    fn test_confidence_level_serialize() {
        assert_eq!(serde_json::to_string(&ConfidenceLevel::Medium).unwrap(), r#""medium""#);
    }
}
