//! TOML loading for the reference tables.
//!
//! Provides two loading methods:
//! - `default_tables()` - Embedded tables, parsed once and shared process-wide
//! - `load_tables(path)` - Custom tables from a file path

use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{bail, Result};
use tracing::info;

use super::types::ReferenceTables;

/// Default tables embedded in the binary at compile time.
const DEFAULT_TABLES: &str = include_str!("../../config/reference_tables.toml");

static TABLES: OnceLock<ReferenceTables> = OnceLock::new();

/// Parse and validate reference tables from TOML text.
///
/// Codes must be unique within the crop and soil tables so that the
/// name <-> code mapping stays bidirectional.
pub fn parse_tables(content: &str) -> Result<ReferenceTables> {
    let tables: ReferenceTables = toml::from_str(content)?;
    ensure_unique_codes("crops", tables.crops.values())?;
    ensure_unique_codes("soils", tables.soils.values())?;
    Ok(tables)
}

/// Load tables from a TOML file at the given path.
pub fn load_tables(path: &Path) -> Result<ReferenceTables> {
    let content = std::fs::read_to_string(path)?;
    let tables = parse_tables(&content)?;
    info!(
        "Loaded reference tables from {:?}: {} fertilizers, {} crops, {} soils",
        path,
        tables.fertilizers.len(),
        tables.crops.len(),
        tables.soils.len()
    );
    Ok(tables)
}

/// Get the embedded tables. Parsed on first use, never mutated afterwards.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_tables() -> &'static ReferenceTables {
    TABLES.get_or_init(|| {
        parse_tables(DEFAULT_TABLES).expect("embedded reference_tables.toml must be valid")
    })
}

fn ensure_unique_codes<'a>(table: &str, codes: impl Iterator<Item = &'a u32>) -> Result<()> {
    let mut seen = HashSet::new();
    for code in codes {
        if !seen.insert(*code) {
            bail!("duplicate code {} in [{}] table", code, table);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_tables_load() {
        let tables = default_tables();
        assert_eq!(tables.fertilizers.len(), 7);
        assert_eq!(tables.crops.len(), 11);
        assert_eq!(tables.soils.len(), 5);
    }

    #[test]
    fn test_default_tables_are_shared() {
        let a = default_tables() as *const ReferenceTables;
        let b = default_tables() as *const ReferenceTables;
        assert_eq!(a, b);
    }

    #[test]
    fn test_model_labels_present() {
        let tables = default_tables();
        for name in ["Urea", "DAP", "14-35-14", "28-28", "17-17-17", "20-20", "10-26-26"] {
            let info = tables
                .fertilizer_info(name)
                .unwrap_or_else(|| panic!("missing fertilizer {}", name));
            assert!(!info.description.is_empty());
            assert!(!info.application.is_empty());
        }
    }

    #[test]
    fn test_label_encoding() {
        let tables = default_tables();
        assert_eq!(tables.crop_code("Barley"), Some(0));
        assert_eq!(tables.crop_code("Ground Nuts"), Some(2));
        assert_eq!(tables.crop_name(10), Some("Wheat"));
        assert_eq!(tables.soil_name(0), Some("Black"));
        assert_eq!(tables.soil_code("Sandy"), Some(4));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let toml = r#"
            [fertilizers]
            [crops]
            Wheat = 1
            Maize = 1
            [soils]
            Sandy = 0
        "#;
        let err = parse_tables(toml).unwrap_err();
        assert!(err.to_string().contains("duplicate code 1 in [crops]"));
    }

    #[test]
    fn test_load_tables_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [fertilizers.Potash]
            description = "potassium"
            application = "top dress"
            [crops]
            Rice = 0
            [soils]
            Silt = 0
            "#
        )
        .unwrap();

        let tables = load_tables(file.path()).unwrap();
        assert_eq!(tables.fertilizer_info("Potash").unwrap().application, "top dress");
        assert_eq!(tables.crop_name(0), Some("Rice"));
    }

    #[test]
    fn test_load_tables_missing_file() {
        assert!(load_tables(Path::new("/nonexistent/tables.toml")).is_err());
    }
}
