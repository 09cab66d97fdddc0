//! Soil condition classification.
//!
//! All comparisons are strict: a reading exactly on a threshold is never
//! flagged.

use super::types::{MoistureStatus, Nutrient, PhStatus};

pub const PH_ACIDIC_BELOW: f64 = 6.0;
pub const PH_ALKALINE_ABOVE: f64 = 7.5;
pub const MOISTURE_LOW_BELOW: f64 = 40.0;
pub const MOISTURE_HIGH_ABOVE: f64 = 80.0;
pub const NITROGEN_DEFICIENT_BELOW: f64 = 30.0;
pub const PHOSPHORUS_DEFICIENT_BELOW: f64 = 15.0;
pub const POTASSIUM_DEFICIENT_BELOW: f64 = 120.0;

/// Classifier output before advisories are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct SoilAssessment {
    pub ph_status: PhStatus,
    pub moisture_status: MoistureStatus,
    pub deficiencies: Vec<Nutrient>,
}

impl SoilAssessment {
    pub fn is_deficient(&self, nutrient: Nutrient) -> bool {
        self.deficiencies.contains(&nutrient)
    }
}

pub fn classify_ph(ph: f64) -> PhStatus {
    if ph < PH_ACIDIC_BELOW {
        PhStatus::Acidic
    } else if ph > PH_ALKALINE_ABOVE {
        PhStatus::Alkaline
    } else {
        PhStatus::Optimal
    }
}

pub fn classify_moisture(moisture: f64) -> MoistureStatus {
    if moisture < MOISTURE_LOW_BELOW {
        MoistureStatus::Low
    } else if moisture > MOISTURE_HIGH_ABOVE {
        MoistureStatus::High
    } else {
        MoistureStatus::Optimal
    }
}

/// Deficient nutrients, always in Nitrogen, Phosphorus, Potassium order.
pub fn detect_deficiencies(nitrogen: f64, phosphorus: f64, potassium: f64) -> Vec<Nutrient> {
    let checks = [
        (Nutrient::Nitrogen, nitrogen < NITROGEN_DEFICIENT_BELOW),
        (Nutrient::Phosphorus, phosphorus < PHOSPHORUS_DEFICIENT_BELOW),
        (Nutrient::Potassium, potassium < POTASSIUM_DEFICIENT_BELOW),
    ];
    checks
        .into_iter()
        .filter(|&(_, deficient)| deficient)
        .map(|(nutrient, _)| nutrient)
        .collect()
}

pub fn assess(ph: f64, moisture: f64, nitrogen: f64, phosphorus: f64, potassium: f64) -> SoilAssessment {
    SoilAssessment {
        ph_status: classify_ph(ph),
        moisture_status: classify_moisture(moisture),
        deficiencies: detect_deficiencies(nitrogen, phosphorus, potassium),
    }
}
