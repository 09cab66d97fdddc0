//! Raw form submissions.
//!
//! The dashboard form submits every value as a string. Parsing happens here
//! so the engine only ever sees typed, validated readings.

use serde::{Deserialize, Serialize};

use crate::engine::{FieldSizeUnit, MeasurementInput};
use crate::error::AgriCureError;

/// Values exactly as entered in the recommendation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub field_name: String,
    pub field_size: String,
    pub size_unit: String,
    pub crop_type: String,
    #[serde(rename = "soilPH")]
    pub soil_ph: String,
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
    pub soil_type: String,
    pub temperature: String,
    pub humidity: String,
    pub soil_moisture: String,
}

impl FormSubmission {
    /// Parse into a measurement.
    ///
    /// # Errors
    /// `InvalidInput` naming the first field that is empty, not a number,
    /// not finite, or (for crop/soil) not a whole-number code. The size unit
    /// never fails: unknown units are read as hectares.
    pub fn parse(&self) -> Result<MeasurementInput, AgriCureError> {
        let field_name = self.field_name.trim();
        if field_name.is_empty() {
            return Err(AgriCureError::invalid_input("fieldName", "is required"));
        }

        let input = MeasurementInput {
            field_name: field_name.to_string(),
            field_size: parse_number("fieldSize", &self.field_size)?,
            field_size_unit: FieldSizeUnit::parse(&self.size_unit),
            crop_type: parse_code("cropType", &self.crop_type)?,
            soil_type: parse_code("soilType", &self.soil_type)?,
            soil_ph: parse_number("soilPH", &self.soil_ph)?,
            nitrogen: parse_number("nitrogen", &self.nitrogen)?,
            phosphorus: parse_number("phosphorus", &self.phosphorus)?,
            potassium: parse_number("potassium", &self.potassium)?,
            temperature: parse_number("temperature", &self.temperature)?,
            humidity: parse_number("humidity", &self.humidity)?,
            soil_moisture: parse_number("soilMoisture", &self.soil_moisture)?,
        };
        input.validate()?;
        Ok(input)
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64, AgriCureError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AgriCureError::invalid_input(field, "is required"));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AgriCureError::invalid_input(field, format!("'{}' is not a number", trimmed)))?;
    if !value.is_finite() {
        return Err(AgriCureError::invalid_input(field, "must be a finite number"));
    }
    Ok(value)
}

fn parse_code(field: &str, raw: &str) -> Result<u32, AgriCureError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AgriCureError::invalid_input(field, "is required"));
    }
    trimmed.parse().map_err(|_| {
        AgriCureError::invalid_input(field, format!("'{}' is not a valid code", trimmed))
    })
}
