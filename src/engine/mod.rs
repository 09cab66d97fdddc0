//! Fertilizer recommendation engine.
//!
//! Turns one field measurement plus a model prediction into a complete
//! fertilizer plan.
//!
//! # Architecture
//!
//! - **Units**: Field size normalized to hectares
//! - **Soil**: pH, moisture and NPK deficiency classification
//! - **Plan**: Primary/secondary/organic doses and advisories
//! - **Cost**: Per-category rupee estimate
//! - **Recommender**: Validates input and awaits the injected predictor
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use agricure::engine::RecommendationEngine;
//! use agricure::predictor::StubPredictor;
//!
//! let engine = RecommendationEngine::new(Arc::new(StubPredictor::returning("Urea", 92.0)));
//! let plan = engine.generate(&measurement).await?;
//!
//! println!("{} {}", plan.primary_fertilizer.name, plan.primary_fertilizer.amount);
//! for line in &plan.soil_condition_analysis.recommendations {
//!     println!("- {}", line);
//! }
//! ```

mod cost;
mod plan;
mod recommender;
mod soil;
mod types;
mod units;

pub use cost::{format_rupees, CostBreakdown};
pub use plan::{advisories, build_plan, organic_options, primary_fertilizer, secondary_fertilizer};
pub use recommender::RecommendationEngine;
pub use soil::{assess, classify_moisture, classify_ph, detect_deficiencies, SoilAssessment};
pub use types::*;
pub use units::to_hectares;
