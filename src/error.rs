use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgriCureError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Predictor error: {0}")]
    Predictor(String),

    #[error("Reference table error: {0}")]
    ReferenceTables(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("History error: {0}")]
    History(String),
}

impl AgriCureError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        AgriCureError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<AgriCureError> for String {
    fn from(err: AgriCureError) -> Self {
        err.to_string()
    }
}
