pub mod config;
pub mod engine;
mod error;
pub mod form;
pub mod history;
pub mod predictor;
pub mod reference;

pub use config::EngineConfig;
pub use engine::{MeasurementInput, RecommendationEngine, RecommendationPlan};
pub use error::AgriCureError;
pub use form::FormSubmission;
pub use history::{RecommendationHistory, RecommendationRecord, StoredRecommendation};
pub use predictor::{FertilizerPredictor, HttpPredictor, PredictionFeatures, PredictionResult, StubPredictor};

/// Install the global tracing subscriber, filtered by `RUST_LOG`
/// (default `info`). Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
