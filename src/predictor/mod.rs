//! Fertilizer prediction backends.
//!
//! The engine only knows the `FertilizerPredictor` trait. `HttpPredictor`
//! talks to a model-serving endpoint; `StubPredictor` returns a fixed
//! answer for tests and offline use.

pub mod http;
pub mod stub;
pub mod types;

use async_trait::async_trait;

use crate::error::AgriCureError;

pub use http::HttpPredictor;
pub use stub::StubPredictor;
pub use types::*;

/// A model that picks a fertilizer from field features.
#[async_trait]
pub trait FertilizerPredictor: Send + Sync {
    /// Short tag for logs.
    fn name(&self) -> &str;

    /// Predict a fertilizer and the model's confidence (0-100).
    async fn predict(&self, features: &PredictionFeatures) -> Result<PredictionResult, AgriCureError>;
}
