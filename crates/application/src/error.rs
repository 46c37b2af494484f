//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// These never reach the HTTP caller: services absorb them into fallback
/// content. They exist so adapters have a single boundary type to map into.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Classification backend error
    #[error("Classification error: {0}")]
    Classification(String),

    /// The hosted classification model is still warming up
    #[error("Classification model warming up")]
    ClassifierWarmingUp,

    /// Generative backend error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Mail delivery error
    #[error("Mail error: {0}")]
    Mail(String),

    /// Missing configuration or credentials
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_display() {
        let err = ApplicationError::Classification("timeout".to_string());
        assert_eq!(err.to_string(), "Classification error: timeout");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::UnknownEmotion("X".to_string()).into();
        assert_eq!(err.to_string(), "Unknown emotion label: X");
    }

    #[test]
    fn warming_up_display() {
        assert_eq!(
            ApplicationError::ClassifierWarmingUp.to_string(),
            "Classification model warming up"
        );
    }
}
