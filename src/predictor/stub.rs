//! Deterministic predictor for tests and offline runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{PredictionFeatures, PredictionResult};
use super::FertilizerPredictor;
use crate::error::AgriCureError;

/// Always answers with the same result (or the same failure) and records
/// what it was asked.
pub struct StubPredictor {
    outcome: Result<PredictionResult, String>,
    calls: AtomicUsize,
    last_features: Mutex<Option<PredictionFeatures>>,
}

impl StubPredictor {
    pub fn returning(fertilizer: &str, confidence: f64) -> Self {
        Self::with_outcome(Ok(PredictionResult {
            fertilizer: fertilizer.to_string(),
            confidence,
        }))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_outcome(Err(message.to_string()))
    }

    fn with_outcome(outcome: Result<PredictionResult, String>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_features: Mutex::new(None),
        }
    }

    /// Number of `predict` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_features(&self) -> Option<PredictionFeatures> {
        self.last_features.lock().ok().and_then(|guard| *guard)
    }
}

#[async_trait]
impl FertilizerPredictor for StubPredictor {
    fn name(&self) -> &str {
        "stub"
    }

    async fn predict(&self, features: &PredictionFeatures) -> Result<PredictionResult, AgriCureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_features.lock() {
            *guard = Some(*features);
        }
        self.outcome.clone().map_err(AgriCureError::Predictor)
    }
}
