use thiserror::Error;

#[derive(Debug, Error)]
pub enum GiError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Session already exists: {0}")]
    DuplicateSession(String),

    #[error("Intake {index} out of range (plan has {len} items)")]
    IntakeOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid timestamp '{input}': {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No fuel products in catalog")]
    NoProducts,
}

pub type Result<T> = std::result::Result<T, GiError>;
