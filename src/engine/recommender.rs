//! The recommendation engine: validates a measurement, awaits the injected
//! predictor once and assembles the plan.

use std::sync::Arc;

use tracing::{error, info};

use crate::error::AgriCureError;
use crate::predictor::{FertilizerPredictor, PredictionFeatures};
use crate::reference::{default_tables, ReferenceTables};

use super::plan::build_plan;
use super::types::{MeasurementInput, RecommendationPlan};

/// Produces fertilizer plans from field measurements.
///
/// Holds no mutable state; one engine can serve any number of concurrent
/// submissions.
pub struct RecommendationEngine<'t> {
    tables: &'t ReferenceTables,
    predictor: Arc<dyn FertilizerPredictor>,
}

impl RecommendationEngine<'static> {
    /// Create an engine backed by the embedded reference tables.
    pub fn new(predictor: Arc<dyn FertilizerPredictor>) -> Self {
        Self::with_tables(default_tables(), predictor)
    }
}

impl<'t> RecommendationEngine<'t> {
    pub fn with_tables(tables: &'t ReferenceTables, predictor: Arc<dyn FertilizerPredictor>) -> Self {
        Self { tables, predictor }
    }

    pub fn tables(&self) -> &ReferenceTables {
        self.tables
    }

    /// Generate a plan for one submission.
    ///
    /// # Errors
    /// - `InvalidInput` if a reading is non-finite or the field size is not positive
    /// - `Predictor` if the predictor fails or returns an unusable result;
    ///   no partial plan is produced and the call is not retried
    pub async fn generate(&self, input: &MeasurementInput) -> Result<RecommendationPlan, AgriCureError> {
        input.validate()?;

        info!(
            "Generating recommendation for field '{}' using predictor '{}'",
            input.field_name,
            self.predictor.name()
        );

        let features = PredictionFeatures::from_measurement(input);
        let prediction = self.predictor.predict(&features).await.map_err(|e| {
            error!("Prediction failed for field '{}': {}", input.field_name, e);
            match e {
                AgriCureError::Predictor(_) => e,
                other => AgriCureError::Predictor(other.to_string()),
            }
        })?;
        prediction.validate()?;

        let plan = build_plan(input, prediction, self.tables);

        info!(
            "Recommendation complete: primary {} ({}), secondary {} ({}), total {}",
            plan.primary_fertilizer.name,
            plan.primary_fertilizer.amount,
            plan.secondary_fertilizer.name,
            plan.secondary_fertilizer.amount,
            plan.cost_estimate.total
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{FieldSizeUnit, Nutrient};
    use crate::predictor::StubPredictor;

    fn input() -> MeasurementInput {
        MeasurementInput {
            field_name: "River plot".to_string(),
            field_size: 4.0,
            field_size_unit: FieldSizeUnit::Bigha,
            crop_type: 6,
            soil_type: 1,
            soil_ph: 7.0,
            nitrogen: 35.0,
            phosphorus: 18.0,
            potassium: 110.0,
            temperature: 31.0,
            humidity: 70.0,
            soil_moisture: 60.0,
        }
    }

    #[tokio::test]
    async fn test_generate_calls_predictor_once() {
        let stub = Arc::new(StubPredictor::returning("DAP", 81.5));
        let engine = RecommendationEngine::new(stub.clone());

        let plan = engine.generate(&input()).await.unwrap();

        assert_eq!(stub.calls(), 1);
        assert_eq!(plan.primary_fertilizer.name, "DAP");
        assert_eq!(plan.ml_prediction.confidence, 81.5);
        assert_eq!(plan.soil_condition_analysis.nutrient_deficiency, vec![Nutrient::Potassium]);
        assert_eq!(plan.secondary_fertilizer.name, "Potassium sulfate");
    }

    #[tokio::test]
    async fn test_generate_passes_feature_vector() {
        let stub = Arc::new(StubPredictor::returning("Urea", 90.0));
        let engine = RecommendationEngine::new(stub.clone());

        engine.generate(&input()).await.unwrap();

        let features = stub.last_features().unwrap();
        assert_eq!(
            features.to_vector(),
            [31.0, 70.0, 60.0, 1.0, 6.0, 35.0, 110.0, 18.0]
        );
    }

    #[tokio::test]
    async fn test_predictor_failure_propagates() {
        let stub = Arc::new(StubPredictor::failing("model offline"));
        let engine = RecommendationEngine::new(stub);

        let err = engine.generate(&input()).await.unwrap_err();
        assert!(matches!(err, AgriCureError::Predictor(ref msg) if msg.contains("model offline")));
    }

    #[tokio::test]
    async fn test_invalid_input_skips_predictor() {
        let stub = Arc::new(StubPredictor::returning("Urea", 90.0));
        let engine = RecommendationEngine::new(stub.clone());

        let mut bad = input();
        bad.humidity = f64::INFINITY;
        let err = engine.generate(&bad).await.unwrap_err();

        assert!(matches!(err, AgriCureError::InvalidInput { .. }));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_rejected() {
        let stub = Arc::new(StubPredictor::returning("Urea", 140.0));
        let engine = RecommendationEngine::new(stub);

        let err = engine.generate(&input()).await.unwrap_err();
        assert!(matches!(err, AgriCureError::Predictor(_)));
    }

    #[tokio::test]
    async fn test_custom_tables() {
        let tables = crate::reference::parse_tables(
            r#"
            [fertilizers.Urea]
            description = "custom urea text"
            application = "custom method"
            [crops]
            Rice = 6
            [soils]
            Clay = 1
            "#,
        )
        .unwrap();
        let engine = RecommendationEngine::with_tables(&tables, Arc::new(StubPredictor::returning("Urea", 90.0)));

        let plan = engine.generate(&input()).await.unwrap();
        assert_eq!(plan.primary_fertilizer.reason, "custom urea text");
        assert_eq!(engine.tables().crop_name(6), Some("Rice"));
    }
}
