//! Static reference tables consumed by the recommendation engine.
//!
//! The tables are plain data: fertilizer descriptions keyed by the names the
//! prediction model emits, and the crop/soil name <-> code maps used by the
//! model's label encoding. They are embedded from
//! `config/reference_tables.toml` and parsed once per process.
//!
//! # Example
//!
//! ```ignore
//! use agricure::reference::default_tables;
//!
//! let tables = default_tables();
//! assert_eq!(tables.crop_name(3), Some("Maize"));
//! assert_eq!(tables.soil_code("loamy"), Some(2));
//! ```

mod loader;
mod types;

pub use loader::{default_tables, load_tables, parse_tables};
pub use types::*;
