//! Classifier and generation errors

use thiserror::Error;

/// Errors that can occur during emotion classification
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Failed to connect to the classification service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the classification service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The hosted model is still warming up
    ///
    /// Not a real failure: callers map this to the backend's fallback label
    /// without logging an error.
    #[error("Model is loading")]
    ModelLoading,

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The service returned no ranked labels
    #[error("Empty classification result")]
    EmptyResult,

    /// Timeout during classification
    #[error("Classification timeout after {0}ms")]
    Timeout(u64),

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for ClassifierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(0)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Errors that can occur during text generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key was configured for the generative service
    #[error("API key not configured")]
    MissingApiKey,

    /// Failed to connect to the generative service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the generative service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during generation
    #[error("Generation timeout after {0}ms")]
    Timeout(u64),

    /// A single model attempt failed with a server error
    #[error("Model {model} failed: {reason}")]
    ModelFailed { model: String, reason: String },

    /// Every candidate model in the fallback list failed
    #[error("All {0} candidate models failed")]
    AllModelsFailed(usize),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(0)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
