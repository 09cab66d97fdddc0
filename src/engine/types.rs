//! Type definitions for the recommendation engine.
//!
//! Output types serialize with camelCase keys so the display layer can
//! consume a plan without renaming anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AgriCureError;
use crate::predictor::PredictionResult;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Unit a field size was entered in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FieldSizeUnit {
    Hectares,
    Acres,
    Bigha,
}

impl FieldSizeUnit {
    /// Parse a unit string case-insensitively.
    ///
    /// Anything unrecognised is treated as hectares, so the size passes
    /// through the identity conversion.
    pub fn parse(input: &str) -> FieldSizeUnit {
        match input.trim().to_lowercase().as_str() {
            "hectares" => FieldSizeUnit::Hectares,
            "acres" => FieldSizeUnit::Acres,
            "bigha" => FieldSizeUnit::Bigha,
            other => {
                tracing::warn!("Unknown field size unit '{}', treating as hectares", other);
                FieldSizeUnit::Hectares
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSizeUnit::Hectares => "hectares",
            FieldSizeUnit::Acres => "acres",
            FieldSizeUnit::Bigha => "bigha",
        }
    }
}

impl From<String> for FieldSizeUnit {
    fn from(value: String) -> Self {
        FieldSizeUnit::parse(&value)
    }
}

impl fmt::Display for FieldSizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One set of field readings submitted by a farmer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementInput {
    pub field_name: String,
    /// Field area in `field_size_unit`, must be positive
    pub field_size: f64,
    pub field_size_unit: FieldSizeUnit,
    /// Crop code from the reference crop table
    pub crop_type: u32,
    /// Soil code from the reference soil table
    pub soil_type: u32,
    #[serde(rename = "soilPH")]
    pub soil_ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    /// Soil moisture, percent (0-100)
    pub soil_moisture: f64,
}

impl MeasurementInput {
    /// Reject readings the engine cannot compute with.
    ///
    /// Every numeric reading must be finite and the field size must be
    /// positive. The pH range is not checked.
    pub fn validate(&self) -> Result<(), AgriCureError> {
        let readings = [
            ("fieldSize", self.field_size),
            ("soilPH", self.soil_ph),
            ("nitrogen", self.nitrogen),
            ("phosphorus", self.phosphorus),
            ("potassium", self.potassium),
            ("temperature", self.temperature),
            ("humidity", self.humidity),
            ("soilMoisture", self.soil_moisture),
        ];
        for (field, value) in readings {
            if !value.is_finite() {
                return Err(AgriCureError::invalid_input(field, "must be a finite number"));
            }
        }
        if self.field_size <= 0.0 {
            return Err(AgriCureError::invalid_input(
                "fieldSize",
                format!("must be positive, got {}", self.field_size),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// SOIL CLASSIFICATION
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PhStatus {
    Acidic,
    Alkaline,
    Optimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoistureStatus {
    Low,
    High,
    Optimal,
}

/// Primary nutrients, declared in the order deficiencies are checked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

macro_rules! display_as_debug {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        })*
    };
}

display_as_debug!(PhStatus, MoistureStatus, Nutrient);

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// A fertilizer to apply, with its dose for the whole field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerDose {
    pub name: String,
    /// Dose for the field, e.g. "200 kg"
    pub amount: String,
    pub reason: String,
    pub application_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganicOption {
    pub name: String,
    pub amount: String,
    pub benefits: String,
    pub application_timing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApplicationTiming {
    pub primary: String,
    pub secondary: String,
    pub organic: String,
}

/// Formatted cost per category, e.g. "₹8,000".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostEstimate {
    pub primary: String,
    pub secondary: String,
    pub organic: String,
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SoilConditionAnalysis {
    pub ph_status: PhStatus,
    /// Deficient nutrients in check order
    pub nutrient_deficiency: Vec<Nutrient>,
    pub moisture_status: MoistureStatus,
    /// Advisory lines, always five
    pub recommendations: Vec<String>,
}

/// Complete fertilizer plan for one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPlan {
    pub primary_fertilizer: FertilizerDose,
    pub secondary_fertilizer: FertilizerDose,
    pub organic_options: Vec<OrganicOption>,
    pub application_timing: ApplicationTiming,
    pub cost_estimate: CostEstimate,
    pub soil_condition_analysis: SoilConditionAnalysis,
    pub ml_prediction: PredictionResult,
}
