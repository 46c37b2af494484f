//! Generative port - Interface for text generation backends

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Result of a generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerativeReply {
    /// Generated text
    pub content: String,
    /// Model identifier that produced it
    pub model: String,
}

/// Port for generative text completion
///
/// An adapter behind this port already handles its own model fallback list;
/// a failure here means every candidate was exhausted.
#[async_trait]
pub trait GenerativePort: Send + Sync {
    /// Generate a completion for the prompt
    async fn generate(&self, prompt: &str) -> Result<GenerativeReply, ApplicationError>;
}
