//! Runtime configuration.
//!
//! Settings come from an optional TOML file and can be overridden by
//! environment variables:
//!
//! | Variable                          | Setting                   |
//! |-----------------------------------|---------------------------|
//! | `AGRICURE_PREDICTOR_URL`          | `predictor.endpoint`      |
//! | `AGRICURE_PREDICTOR_TIMEOUT_SECS` | `predictor.timeout_secs`  |
//! | `AGRICURE_HISTORY_DB`             | `history.db_path`         |
//! | `AGRICURE_REFERENCE_TABLES`       | `reference_tables`        |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::Url;

use crate::error::AgriCureError;
use crate::reference::{default_tables, load_tables, ReferenceTables};

pub const DEFAULT_PREDICTOR_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub predictor: PredictorConfig,
    pub history: HistoryConfig,
    /// Replaces the embedded reference tables when set
    pub reference_tables: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PredictorConfig {
    /// Model-serving URL; required for `HttpPredictor`
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_PREDICTOR_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistoryConfig {
    pub db_path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            db_path: default_history_path(),
        }
    }
}

/// `<data dir>/agricure/recommendation_history.db`, or the working directory
/// when the platform has no data dir.
pub fn default_history_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agricure")
        .join("recommendation_history.db")
}

impl EngineConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(content: &str) -> Result<Self, AgriCureError> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| AgriCureError::Config(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, AgriCureError> {
        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            AgriCureError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply `AGRICURE_*` environment overrides.
    pub fn apply_env(self) -> Result<Self, AgriCureError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AgriCureError> {
        if let Some(url) = lookup("AGRICURE_PREDICTOR_URL") {
            self.predictor.endpoint = Some(url);
        }
        if let Some(secs) = lookup("AGRICURE_PREDICTOR_TIMEOUT_SECS") {
            self.predictor.timeout_secs = secs.trim().parse().map_err(|_| {
                AgriCureError::Config(format!(
                    "AGRICURE_PREDICTOR_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    secs
                ))
            })?;
        }
        if let Some(path) = lookup("AGRICURE_HISTORY_DB") {
            self.history.db_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("AGRICURE_REFERENCE_TABLES") {
            self.reference_tables = Some(PathBuf::from(path));
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), AgriCureError> {
        if let Some(endpoint) = &self.predictor.endpoint {
            let url = Url::parse(endpoint).map_err(|e| {
                AgriCureError::Config(format!("Invalid predictor endpoint '{}': {}", endpoint, e))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AgriCureError::Config(format!(
                    "Predictor endpoint must be http or https, got '{}'",
                    url.scheme()
                )));
            }
        }
        if self.predictor.timeout_secs == 0 {
            warn!("Predictor timeout of 0s rejected");
            return Err(AgriCureError::Config(
                "predictor.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Reference tables to run with: the configured file, or the embedded set.
    pub fn reference_tables(&self) -> Result<ReferenceTablesSource, AgriCureError> {
        match &self.reference_tables {
            Some(path) => load_tables(path)
                .map(ReferenceTablesSource::Loaded)
                .map_err(|e| AgriCureError::ReferenceTables(format!("{:?}: {}", path, e))),
            None => Ok(ReferenceTablesSource::Embedded(default_tables())),
        }
    }
}

/// Reference tables chosen by configuration.
#[derive(Debug)]
pub enum ReferenceTablesSource {
    Embedded(&'static ReferenceTables),
    Loaded(ReferenceTables),
}

impl ReferenceTablesSource {
    pub fn tables(&self) -> &ReferenceTables {
        match self {
            ReferenceTablesSource::Embedded(tables) => tables,
            ReferenceTablesSource::Loaded(tables) => tables,
        }
    }
}
