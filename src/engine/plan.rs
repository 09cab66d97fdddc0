//! Plan assembly: turns a prediction and a soil assessment into the
//! primary, secondary and organic parts of a recommendation.
//!
//! Everything here is pure. Amounts are linear in hectares and rounded to
//! whole kilograms.

use tracing::debug;

use crate::predictor::PredictionResult;
use crate::reference::ReferenceTables;

use super::cost::{round_to_unit, CostBreakdown};
use super::soil::{assess, SoilAssessment};
use super::types::*;
use super::units::to_hectares;

pub const PRIMARY_KG_PER_HECTARE: f64 = 100.0;
pub const DAP_KG_PER_HECTARE: f64 = 50.0;
pub const POTASSIUM_SULFATE_KG_PER_HECTARE: f64 = 40.0;
pub const COMPOST_KG_PER_HECTARE: f64 = 1000.0;
pub const VERMICOMPOST_KG_PER_HECTARE: f64 = 1000.0;
pub const NEEM_CAKE_KG_PER_HECTARE: f64 = 200.0;
pub const BONE_MEAL_KG_PER_HECTARE: f64 = 150.0;

const UNKNOWN_NAME: &str = "Unknown";

/// Format a per-hectare rate as a whole-field dose, e.g. "200 kg".
pub fn kg_amount(rate_per_hectare: f64, hectares: f64) -> String {
    format!("{} kg", round_to_unit(rate_per_hectare * hectares))
}

/// Primary fertilizer from the model's prediction.
///
/// The dose is the same for every fertilizer. Labels missing from the
/// reference table get a generic reason naming the crop and soil.
pub fn primary_fertilizer(
    prediction: &PredictionResult,
    hectares: f64,
    crop_name: &str,
    soil_name: &str,
    tables: &ReferenceTables,
) -> FertilizerDose {
    let (reason, application_method) = match tables.fertilizer_info(&prediction.fertilizer) {
        Some(info) => (info.description.clone(), info.application.clone()),
        None => {
            debug!(
                "No reference entry for '{}', using generic guidance",
                prediction.fertilizer
            );
            (
                format!(
                    "ML model recommends this fertilizer for {} in {} soil",
                    crop_name, soil_name
                ),
                "Apply as per standard agricultural practices".to_string(),
            )
        }
    };

    FertilizerDose {
        name: prediction.fertilizer.clone(),
        amount: kg_amount(PRIMARY_KG_PER_HECTARE, hectares),
        reason,
        application_method,
    }
}

/// Secondary amendment. Phosphorus deficiency wins over potassium; with
/// neither, compost is recommended whatever the nitrogen status.
pub fn secondary_fertilizer(assessment: &SoilAssessment, hectares: f64) -> FertilizerDose {
    if assessment.is_deficient(Nutrient::Phosphorus) {
        FertilizerDose {
            name: "DAP".to_string(),
            amount: kg_amount(DAP_KG_PER_HECTARE, hectares),
            reason: "Addresses phosphorus deficiency identified in soil analysis".to_string(),
            application_method: "Apply as basal dose during soil preparation".to_string(),
        }
    } else if assessment.is_deficient(Nutrient::Potassium) {
        FertilizerDose {
            name: "Potassium sulfate".to_string(),
            amount: kg_amount(POTASSIUM_SULFATE_KG_PER_HECTARE, hectares),
            reason: "Addresses potassium deficiency for better fruit quality".to_string(),
            application_method: "Apply during fruit development stage".to_string(),
        }
    } else {
        FertilizerDose {
            name: "Organic Compost".to_string(),
            amount: kg_amount(COMPOST_KG_PER_HECTARE, hectares),
            reason: "Improves soil structure and provides slow-release nutrients".to_string(),
            application_method: "Apply 2-3 weeks before planting and incorporate into soil"
                .to_string(),
        }
    }
}

/// The fixed organic catalog. Only the amounts depend on the field.
pub fn organic_options(hectares: f64) -> Vec<OrganicOption> {
    let catalog = [
        (
            "Vermicompost",
            VERMICOMPOST_KG_PER_HECTARE,
            "Rich in nutrients, improves soil structure and water retention",
            "Apply 3-4 weeks before planting",
        ),
        (
            "Neem Cake",
            NEEM_CAKE_KG_PER_HECTARE,
            "Natural pest deterrent and slow-release nitrogen source",
            "Apply at the time of land preparation",
        ),
        (
            "Bone Meal",
            BONE_MEAL_KG_PER_HECTARE,
            "Excellent source of phosphorus and calcium",
            "Apply as basal dose before sowing",
        ),
    ];

    catalog
        .into_iter()
        .map(|(name, rate, benefits, timing)| OrganicOption {
            name: name.to_string(),
            amount: kg_amount(rate, hectares),
            benefits: benefits.to_string(),
            application_timing: timing.to_string(),
        })
        .collect()
}

pub fn application_timing() -> ApplicationTiming {
    ApplicationTiming {
        primary: "Apply 1-2 weeks before planting for optimal nutrient availability".to_string(),
        secondary: "Apply during active growth phase or as recommended for specific fertilizer"
            .to_string(),
        organic: "Apply 3-4 weeks before planting to allow decomposition".to_string(),
    }
}

/// The five advisory lines, in display order.
pub fn advisories(assessment: &SoilAssessment) -> Vec<String> {
    let ph = match assessment.ph_status {
        PhStatus::Acidic => "Adjust soil pH using lime".to_string(),
        PhStatus::Alkaline => "Adjust soil pH using sulfur".to_string(),
        PhStatus::Optimal => "Maintain current pH levels".to_string(),
    };

    let moisture = match assessment.moisture_status {
        MoistureStatus::Low => "Increase irrigation frequency",
        MoistureStatus::High => "Improve drainage",
        MoistureStatus::Optimal => "Maintain current moisture levels",
    };

    let nutrients = if assessment.deficiencies.is_empty() {
        "Nutrient levels are adequate".to_string()
    } else {
        let names: Vec<String> = assessment.deficiencies.iter().map(|n| n.to_string()).collect();
        format!("Address {} deficiency", names.join(", "))
    };

    vec![
        ph,
        moisture.to_string(),
        nutrients,
        "Regular soil testing every 6 months is recommended".to_string(),
        "Consider crop rotation to maintain soil health".to_string(),
    ]
}

/// Assemble a full plan from validated input and a prediction.
pub fn build_plan(
    input: &MeasurementInput,
    prediction: PredictionResult,
    tables: &ReferenceTables,
) -> RecommendationPlan {
    let hectares = to_hectares(input.field_size, input.field_size_unit);
    let assessment = assess(
        input.soil_ph,
        input.soil_moisture,
        input.nitrogen,
        input.phosphorus,
        input.potassium,
    );

    let crop_name = tables.crop_name(input.crop_type).unwrap_or(UNKNOWN_NAME);
    let soil_name = tables.soil_name(input.soil_type).unwrap_or(UNKNOWN_NAME);

    let primary = primary_fertilizer(&prediction, hectares, crop_name, soil_name, tables);
    let secondary = secondary_fertilizer(&assessment, hectares);
    let recommendations = advisories(&assessment);

    RecommendationPlan {
        primary_fertilizer: primary,
        secondary_fertilizer: secondary,
        organic_options: organic_options(hectares),
        application_timing: application_timing(),
        cost_estimate: CostBreakdown::for_hectares(hectares).to_estimate(),
        soil_condition_analysis: SoilConditionAnalysis {
            ph_status: assessment.ph_status,
            nutrient_deficiency: assessment.deficiencies,
            moisture_status: assessment.moisture_status,
            recommendations,
        },
        ml_prediction: prediction,
    }
}
