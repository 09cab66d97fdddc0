//! Predictor backed by a model-serving HTTP endpoint.
//!
//! The endpoint receives the feature set as a JSON object
//! (`{"temperature": .., "humidity": .., "moisture": .., "soilType": ..,
//! "cropType": .., "nitrogen": .., "potassium": .., "phosphorus": ..}`) and
//! answers with `{"fertilizer": "Urea", "confidence": 92.0}`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{error, info};
use url::Url;

use super::types::{PredictionFeatures, PredictionResult};
use super::FertilizerPredictor;
use crate::config::PredictorConfig;
use crate::error::AgriCureError;

/// Calls a remote model once per prediction. No retries.
pub struct HttpPredictor {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpPredictor {
    /// Build a predictor for `endpoint`, failing requests that take longer
    /// than `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AgriCureError> {
        Self::build(endpoint, timeout, reqwest::Client::builder())
    }

    fn build(
        endpoint: &str,
        timeout: Duration,
        builder: reqwest::ClientBuilder,
    ) -> Result<Self, AgriCureError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            AgriCureError::Config(format!("Invalid predictor endpoint '{}': {}", endpoint, e))
        })?;

        let client = builder
            .user_agent("AgriCure/1.0")
            .timeout(timeout)
            .build()
            .map_err(|e| AgriCureError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    pub fn from_config(config: &PredictorConfig) -> Result<Self, AgriCureError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| AgriCureError::Config("No predictor endpoint configured".to_string()))?;
        Self::new(endpoint, Duration::from_secs(config.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FertilizerPredictor for HttpPredictor {
    fn name(&self) -> &str {
        "http"
    }

    async fn predict(&self, features: &PredictionFeatures) -> Result<PredictionResult, AgriCureError> {
        info!("Requesting prediction from {}", self.endpoint);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(features)
            .send()
            .await
            .map_err(|e| {
                let msg = if e.is_timeout() {
                    format!("Prediction request timed out after {:?}", self.timeout)
                } else {
                    format!("Prediction request failed: {}", e)
                };
                error!("{}", msg);
                AgriCureError::Predictor(msg)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            let msg = if e.is_timeout() {
                format!("Prediction response timed out after {:?}", self.timeout)
            } else {
                format!("Failed to read prediction response: {}", e)
            };
            error!("{}", msg);
            AgriCureError::Predictor(msg)
        })?;

        if !status.is_success() {
            let msg = format!(
                "Predictor returned {}: {}",
                status,
                truncate(&body, 200)
            );
            error!("{}", msg);
            return Err(AgriCureError::Predictor(msg));
        }

        let result = serde_json::from_str::<PredictionResult>(&body).map_err(|e| {
            let msg = format!(
                "Failed to parse prediction response: {}. Raw response: {}",
                e,
                truncate(&body, 200)
            );
            error!("{}", msg);
            AgriCureError::Predictor(msg)
        })?;

        if let Err(e) = result.validate() {
            error!("Rejected prediction from {}: {}", self.endpoint, e);
            return Err(e);
        }
        Ok(result)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
