use std::sync::Arc;

use agricure::engine::{FieldSizeUnit, MoistureStatus, Nutrient, PhStatus};
use agricure::{AgriCureError, MeasurementInput, RecommendationEngine, StubPredictor};

fn scenario_input() -> MeasurementInput {
    MeasurementInput {
        field_name: "Test field".to_string(),
        field_size: 2.0,
        field_size_unit: FieldSizeUnit::Hectares,
        crop_type: 3,
        soil_type: 2,
        soil_ph: 5.5,
        nitrogen: 20.0,
        phosphorus: 10.0,
        potassium: 100.0,
        temperature: 25.0,
        humidity: 60.0,
        soil_moisture: 90.0,
    }
}

fn urea_engine() -> RecommendationEngine<'static> {
    RecommendationEngine::new(Arc::new(StubPredictor::returning("Urea", 92.0)))
}

#[tokio::test]
async fn test_all_nutrients_deficient_scenario() {
    let plan = urea_engine().generate(&scenario_input()).await.unwrap();

    let analysis = &plan.soil_condition_analysis;
    assert_eq!(analysis.ph_status, PhStatus::Acidic);
    assert_eq!(analysis.moisture_status, MoistureStatus::High);
    assert_eq!(
        analysis.nutrient_deficiency,
        vec![Nutrient::Nitrogen, Nutrient::Phosphorus, Nutrient::Potassium]
    );

    assert_eq!(plan.primary_fertilizer.name, "Urea");
    assert_eq!(plan.primary_fertilizer.amount, "200 kg");
    assert_eq!(plan.secondary_fertilizer.name, "DAP");
    assert_eq!(plan.secondary_fertilizer.amount, "100 kg");

    assert_eq!(plan.cost_estimate.primary, "₹8,000");
    assert_eq!(plan.cost_estimate.secondary, "₹5,000");
    assert_eq!(plan.cost_estimate.organic, "₹4,000");
    assert_eq!(plan.cost_estimate.total, "₹17,000");

    assert_eq!(plan.ml_prediction.fertilizer, "Urea");
    assert_eq!(plan.ml_prediction.confidence, 92.0);

    assert_eq!(
        analysis.recommendations,
        vec![
            "Adjust soil pH using lime",
            "Improve drainage",
            "Address Nitrogen, Phosphorus, Potassium deficiency",
            "Regular soil testing every 6 months is recommended",
            "Consider crop rotation to maintain soil health",
        ]
    );
}

#[tokio::test]
async fn test_only_potassium_deficient_scenario() {
    let mut input = scenario_input();
    input.phosphorus = 20.0;
    input.potassium = 50.0;

    let plan = urea_engine().generate(&input).await.unwrap();

    assert_eq!(plan.secondary_fertilizer.name, "Potassium sulfate");
    assert_eq!(plan.secondary_fertilizer.amount, "80 kg");
}

#[tokio::test]
async fn test_phosphorus_wins_over_potassium() {
    let mut input = scenario_input();
    input.phosphorus = 10.0;
    input.potassium = 50.0;

    let plan = urea_engine().generate(&input).await.unwrap();
    assert_eq!(plan.secondary_fertilizer.name, "DAP");
}

#[tokio::test]
async fn test_no_deficiency_scenario() {
    let mut input = scenario_input();
    input.nitrogen = 45.0;
    input.phosphorus = 25.0;
    input.potassium = 160.0;
    input.field_size = 3.0;
    input.field_size_unit = FieldSizeUnit::Bigha;

    let plan = urea_engine().generate(&input).await.unwrap();

    assert!(plan.soil_condition_analysis.nutrient_deficiency.is_empty());
    assert_eq!(plan.secondary_fertilizer.name, "Organic Compost");
    // 3 bigha = 0.4014 ha
    assert_eq!(plan.secondary_fertilizer.amount, "401 kg");
    assert_eq!(
        plan.soil_condition_analysis.recommendations[2],
        "Nutrient levels are adequate"
    );
}

#[tokio::test]
async fn test_nitrogen_only_deficiency_still_gets_compost() {
    let mut input = scenario_input();
    input.phosphorus = 25.0;
    input.potassium = 160.0;

    let plan = urea_engine().generate(&input).await.unwrap();

    assert_eq!(plan.soil_condition_analysis.nutrient_deficiency, vec![Nutrient::Nitrogen]);
    assert_eq!(plan.secondary_fertilizer.name, "Organic Compost");
    assert_eq!(plan.secondary_fertilizer.amount, "2000 kg");
}

#[tokio::test]
async fn test_organic_options_fixed_for_any_input() {
    let engine = urea_engine();
    let mut input = scenario_input();
    for (ph, n) in [(4.0, 5.0), (7.0, 50.0), (9.0, 300.0)] {
        input.soil_ph = ph;
        input.nitrogen = n;
        let plan = engine.generate(&input).await.unwrap();
        let names: Vec<&str> = plan.organic_options.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Vermicompost", "Neem Cake", "Bone Meal"]);
    }
}

#[tokio::test]
async fn test_acre_field_scales_amounts() {
    let mut input = scenario_input();
    input.field_size = 10.0;
    input.field_size_unit = FieldSizeUnit::Acres;

    let plan = urea_engine().generate(&input).await.unwrap();

    // 10 acres = 4.04686 ha
    assert_eq!(plan.primary_fertilizer.amount, "405 kg");
    assert_eq!(plan.secondary_fertilizer.amount, "202 kg");
    assert_eq!(plan.cost_estimate.primary, "₹16,187");
    assert_eq!(plan.cost_estimate.secondary, "₹10,117");
    assert_eq!(plan.cost_estimate.organic, "₹8,094");
    assert_eq!(plan.cost_estimate.total, "₹34,398");
}

#[tokio::test]
async fn test_predictor_failure_yields_no_plan() {
    let engine = RecommendationEngine::new(Arc::new(StubPredictor::failing("connection reset")));

    let result = engine.generate(&scenario_input()).await;
    assert!(matches!(result, Err(AgriCureError::Predictor(_))));
}

#[tokio::test]
async fn test_plan_serializes_with_display_keys() {
    let plan = urea_engine().generate(&scenario_input()).await.unwrap();
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["primaryFertilizer"]["amount"], "200 kg");
    assert_eq!(json["secondaryFertilizer"]["applicationMethod"], "Apply as basal dose during soil preparation");
    assert_eq!(json["soilConditionAnalysis"]["phStatus"], "Acidic");
    assert_eq!(json["soilConditionAnalysis"]["nutrientDeficiency"][1], "Phosphorus");
    assert_eq!(json["organicOptions"][1]["applicationTiming"], "Apply at the time of land preparation");
    assert_eq!(json["costEstimate"]["total"], "₹17,000");
    assert_eq!(json["mlPrediction"]["fertilizer"], "Urea");
}
