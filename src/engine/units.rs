//! Field area normalization. All per-area rates are expressed per hectare.

use super::types::FieldSizeUnit;

pub const HECTARES_PER_ACRE: f64 = 0.404686;
pub const HECTARES_PER_BIGHA: f64 = 0.1338;

/// Convert a field size to hectares.
pub fn to_hectares(size: f64, unit: FieldSizeUnit) -> f64 {
    match unit {
        FieldSizeUnit::Hectares => size,
        FieldSizeUnit::Acres => size * HECTARES_PER_ACRE,
        FieldSizeUnit::Bigha => size * HECTARES_PER_BIGHA,
    }
}
