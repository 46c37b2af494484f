//! Gemini-style generative engine client
//!
//! Talks to a generateContent REST API. Candidate model identifiers are
//! tried in their configured order; the loop advances only when the current
//! attempt fails and stops at the first success.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::GenerativeConfig,
    error::GenerationError,
    ports::{GenerationOutput, GenerativeEngine},
};

/// Generative engine over a Gemini-compatible REST API
#[derive(Debug)]
pub struct GeminiEngine {
    client: Client,
    config: GenerativeConfig,
    api_key: SecretString,
}

impl GeminiEngine {
    /// Create a new engine; fails when no API key is configured
    pub fn new(config: GenerativeConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(GenerationError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| GenerationError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            candidates = config.candidate_models.len(),
            "Initialized generative engine"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:generateContent",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// One attempt against one model identifier
    async fn try_model(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ModelFailed {
                model: model.to_string(),
                reason: format!("status {status}: {body}"),
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let text = parsed.text();
        if text.is_empty() {
            return Err(GenerationError::ModelFailed {
                model: model.to_string(),
                reason: "empty candidate text".to_string(),
            });
        }
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct ResponseCandidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl GenerativeEngine for GeminiEngine {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<GenerationOutput, GenerationError> {
        for model in &self.config.candidate_models {
            match self.try_model(model, prompt).await {
                Ok(content) => {
                    debug!(model = %model, "Generation succeeded");
                    return Ok(GenerationOutput {
                        content,
                        model: model.clone(),
                    });
                },
                Err(e) => {
                    warn!(model = %model, error = %e, "Model attempt failed, trying next");
                },
            }
        }

        Err(GenerationError::AllModelsFailed(
            self.config.candidate_models.len(),
        ))
    }
}
