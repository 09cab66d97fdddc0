//! Types exchanged with a fertilizer predictor.

use serde::{Deserialize, Serialize};

use crate::engine::MeasurementInput;
use crate::error::AgriCureError;

/// Model features, declared in the order the model was trained on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionFeatures {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub soil_type: u32,
    pub crop_type: u32,
    pub nitrogen: f64,
    pub potassium: f64,
    pub phosphorus: f64,
}

impl PredictionFeatures {
    pub fn from_measurement(input: &MeasurementInput) -> Self {
        Self {
            temperature: input.temperature,
            humidity: input.humidity,
            moisture: input.soil_moisture,
            soil_type: input.soil_type,
            crop_type: input.crop_type,
            nitrogen: input.nitrogen,
            potassium: input.potassium,
            phosphorus: input.phosphorus,
        }
    }

    /// Flat feature vector in model order.
    pub fn to_vector(&self) -> [f64; 8] {
        [
            self.temperature,
            self.humidity,
            self.moisture,
            f64::from(self.soil_type),
            f64::from(self.crop_type),
            self.nitrogen,
            self.potassium,
            self.phosphorus,
        ]
    }
}

/// What the model predicted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    /// Fertilizer label, e.g. "Urea" or "14-35-14"
    pub fertilizer: String,
    /// Confidence percentage (0-100)
    pub confidence: f64,
}

impl PredictionResult {
    /// Reject results the engine cannot present.
    pub fn validate(&self) -> Result<(), AgriCureError> {
        if self.fertilizer.trim().is_empty() {
            return Err(AgriCureError::Predictor(
                "prediction has an empty fertilizer name".to_string(),
            ));
        }
        if !self.confidence.is_finite() || !(0.0..=100.0).contains(&self.confidence) {
            return Err(AgriCureError::Predictor(format!(
                "confidence {} outside 0-100",
                self.confidence
            )));
        }
        Ok(())
    }
}
