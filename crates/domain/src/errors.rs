//! Domain-level errors

use thiserror::Error;

/// Errors raised by domain value object construction
#[derive(Debug, Error)]
pub enum DomainError {
    /// A label string did not match any known emotion
    #[error("Unknown emotion label: {0}")]
    UnknownEmotion(String),

    /// A label string did not match any known sentiment class
    #[error("Unknown sentiment label: {0}")]
    UnknownSentiment(String),
}
