//! Recommendation history: the flat storage row and a SQLite store.

mod record;
pub mod store;
pub mod types;

pub use store::RecommendationHistory;
pub use types::*;
