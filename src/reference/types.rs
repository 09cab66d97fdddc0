//! Type definitions for the reference tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root of `reference_tables.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceTables {
    /// Fertilizer info keyed by the exact label the predictor returns
    pub fertilizers: HashMap<String, FertilizerInfo>,
    /// Crop display name -> model code
    pub crops: HashMap<String, u32>,
    /// Soil display name -> model code
    pub soils: HashMap<String, u32>,
}

/// Human-readable guidance for one fertilizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerInfo {
    /// Why this fertilizer is used
    pub description: String,
    /// How and when to apply it
    pub application: String,
}

impl ReferenceTables {
    /// Look up a fertilizer by its exact predictor label.
    pub fn fertilizer_info(&self, name: &str) -> Option<&FertilizerInfo> {
        self.fertilizers.get(name)
    }

    pub fn crop_name(&self, code: u32) -> Option<&str> {
        name_for_code(&self.crops, code)
    }

    pub fn soil_name(&self, code: u32) -> Option<&str> {
        name_for_code(&self.soils, code)
    }

    /// Case-insensitive reverse lookup of a crop code.
    pub fn crop_code(&self, name: &str) -> Option<u32> {
        code_for_name(&self.crops, name)
    }

    /// Case-insensitive reverse lookup of a soil code.
    pub fn soil_code(&self, name: &str) -> Option<u32> {
        code_for_name(&self.soils, name)
    }

    /// Crop names ordered by code, for form pickers.
    pub fn crop_names(&self) -> Vec<(&str, u32)> {
        sorted_by_code(&self.crops)
    }

    /// Soil names ordered by code, for form pickers.
    pub fn soil_names(&self) -> Vec<(&str, u32)> {
        sorted_by_code(&self.soils)
    }
}

fn name_for_code(map: &HashMap<String, u32>, code: u32) -> Option<&str> {
    map.iter()
        .find(|(_, &c)| c == code)
        .map(|(name, _)| name.as_str())
}

fn code_for_name(map: &HashMap<String, u32>, name: &str) -> Option<u32> {
    let wanted = name.trim();
    map.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
        .map(|(_, &code)| code)
}

fn sorted_by_code(map: &HashMap<String, u32>) -> Vec<(&str, u32)> {
    let mut entries: Vec<(&str, u32)> = map.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    entries.sort_by_key(|&(_, code)| code);
    entries
}
