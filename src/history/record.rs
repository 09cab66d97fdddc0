//! Translation from a rich plan to the flat history row.
//!
//! The engine never sees the storage shape; this is the only place that
//! knows both.

use crate::engine::{MeasurementInput, RecommendationPlan};
use crate::reference::ReferenceTables;

use super::types::RecommendationRecord;

const UNKNOWN_NAME: &str = "Unknown";

impl RecommendationRecord {
    pub fn from_plan(
        input: &MeasurementInput,
        plan: &RecommendationPlan,
        tables: &ReferenceTables,
    ) -> Self {
        Self {
            field_name: input.field_name.clone(),
            field_size: input.field_size,
            field_size_unit: input.field_size_unit.as_str().to_string(),
            crop_type: tables
                .crop_name(input.crop_type)
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            soil_type: tables
                .soil_name(input.soil_type)
                .unwrap_or(UNKNOWN_NAME)
                .to_string(),
            soil_ph: input.soil_ph,
            nitrogen: input.nitrogen,
            phosphorus: input.phosphorus,
            potassium: input.potassium,
            temperature: input.temperature,
            humidity: input.humidity,
            soil_moisture: input.soil_moisture,
            ml_prediction_fertilizer: plan.ml_prediction.fertilizer.clone(),
            ml_prediction_confidence: plan.ml_prediction.confidence,
            primary_fertilizer_name: plan.primary_fertilizer.name.clone(),
            primary_fertilizer_amount: plan.primary_fertilizer.amount.clone(),
            secondary_fertilizer_name: plan.secondary_fertilizer.name.clone(),
            secondary_fertilizer_amount: plan.secondary_fertilizer.amount.clone(),
            total_cost_estimate: plan.cost_estimate.total.clone(),
        }
    }
}
