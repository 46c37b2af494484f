//! Generative adapter - Implements GenerativePort over the Gemini engine

use ai_core::{GeminiEngine, GenerationError, GenerativeConfig, GenerativeEngine};
use application::{
    error::ApplicationError,
    ports::{GenerativePort, GenerativeReply},
};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter for the hosted generative engine
///
/// Model fallback over the candidate list lives inside the engine; a failure
/// surfacing here means every candidate was exhausted.
#[derive(Debug)]
pub struct GenerativeAdapter {
    engine: GeminiEngine,
}

impl GenerativeAdapter {
    /// Build the engine from configuration
    ///
    /// Returns `None` when no API key is configured, which callers treat as
    /// degraded mode rather than an error.
    pub fn from_config(config: &GenerativeConfig) -> Result<Option<Self>, ApplicationError> {
        match GeminiEngine::new(config.clone()) {
            Ok(engine) => Ok(Some(Self { engine })),
            Err(GenerationError::MissingApiKey) => Ok(None),
            Err(other) => Err(Self::map_error(other)),
        }
    }

    /// Map GenerationError to ApplicationError
    fn map_error(e: GenerationError) -> ApplicationError {
        match e {
            GenerationError::MissingApiKey => {
                ApplicationError::Configuration("generative API key not configured".to_string())
            },
            other => ApplicationError::Generation(other.to_string()),
        }
    }
}

#[async_trait]
impl GenerativePort for GenerativeAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<GenerativeReply, ApplicationError> {
        let output = self
            .engine
            .generate(prompt)
            .await
            .map_err(Self::map_error)?;

        Ok(GenerativeReply {
            content: output.content,
            model: output.model,
        })
    }
}
