//! Error types for the HealthPath assistant
//!
//! One crate-wide error enum with context-carrying variants; modules
//! return the `Result` alias and propagate with `?`.

use thiserror::Error;

/// Main error type for the HealthPath assistant
#[derive(Error, Debug)]
pub enum HealthPathError {
    /// A profile field is missing, non-numeric, or outside its hard bounds
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// Dataset could not be loaded or has the wrong shape
    #[error("Dataset error ({path}): {reason}")]
    Dataset { path: String, reason: String },

    /// Clustering was asked for more clusters than rows
    #[error("Cannot form {requested} clusters from {rows} rows")]
    TooFewRows { requested: usize, rows: usize },

    /// Ollama API errors
    #[error("Ollama API error: {0}")]
    OllamaApi(String),

    /// Generative backend unreachable
    #[error("Advice service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Timeout errors
    #[error("Operation timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors with context
    #[error("Assistant error: {0}")]
    Generic(String),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, HealthPathError>;

impl HealthPathError {
    /// Helper for profile field rejections
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        HealthPathError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convert anyhow errors at the binary boundary
impl From<anyhow::Error> for HealthPathError {
    fn from(err: anyhow::Error) -> Self {
        HealthPathError::Generic(err.to_string())
    }
}
