//! Port definitions for classifier and generative backends

use async_trait::async_trait;
use domain::Emotion;

use crate::error::{ClassifierError, GenerationError};

/// Port for emotion classifier backend implementations
///
/// The three policies (hosted zero-shot, hosted sentiment, in-process
/// lexicon) are interchangeable behind this trait. Each backend carries its
/// own documented fallback label; the application layer applies it on error.
#[async_trait]
pub trait ClassifierBackend: Send + Sync {
    /// Classify text into exactly one emotion label
    async fn classify(&self, text: &str) -> Result<Emotion, ClassifierError>;

    /// Label returned when this backend fails
    fn fallback_emotion(&self) -> Emotion;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Response from a generative engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    /// Generated text
    pub content: String,
    /// Model identifier that produced the text
    pub model: String,
}

/// Port for generative engine implementations
#[async_trait]
pub trait GenerativeEngine: Send + Sync {
    /// Generate a completion for the prompt
    ///
    /// Implementations with a candidate model list try each identifier in
    /// order and stop at the first success.
    async fn generate(&self, prompt: &str) -> Result<GenerationOutput, GenerationError>;
}
