//! Hosted zero-shot classifier backend
//!
//! Submits the text together with the full candidate label set to a
//! zero-shot classification endpoint and takes the top-ranked label
//! verbatim. A warm-up body is reported as `ModelLoading` so callers can
//! fall back without treating it as an error.

use std::time::Duration;

use async_trait::async_trait;
use domain::Emotion;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{config::ClassifierConfig, error::ClassifierError, ports::ClassifierBackend};

/// Zero-shot classification over a hosted inference API
#[derive(Debug)]
pub struct HostedZeroShotClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl HostedZeroShotClassifier {
    /// Create a new backend from configuration
    pub fn new(config: ClassifierConfig) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ClassifierError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn model_url(&self) -> String {
        format!(
            "{}/models/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters {
    candidate_labels: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Ranked { labels: Vec<String> },
    Failure { error: String },
}

fn is_loading_message(error: &str) -> bool {
    error.to_ascii_lowercase().contains("loading")
}

#[async_trait]
impl ClassifierBackend for HostedZeroShotClassifier {
    #[instrument(skip(self, text), fields(text_len = text.len(), model = %self.config.model))]
    async fn classify(&self, text: &str) -> Result<Emotion, ClassifierError> {
        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: Emotion::ALL.iter().map(|e| e.as_str()).collect(),
            },
        };

        let mut builder = self.client.post(self.model_url()).json(&request);
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // The hosted API reports warm-up as a JSON error body, usually with
        // status 503. Check the body before the status so warm-up is not
        // misread as a server failure.
        let parsed: ZeroShotResponse = serde_json::from_str(&body)
            .map_err(|e| ClassifierError::InvalidResponse(format!("{e}: {body}")))?;

        match parsed {
            ZeroShotResponse::Failure { error } if is_loading_message(&error) => {
                debug!("Zero-shot model still loading");
                Err(ClassifierError::ModelLoading)
            },
            ZeroShotResponse::Failure { error } => {
                warn!(status = %status, error = %error, "Zero-shot request failed");
                Err(ClassifierError::ServerError(error))
            },
            ZeroShotResponse::Ranked { labels, .. } => {
                let top = labels.first().ok_or(ClassifierError::EmptyResult)?;
                top.parse()
                    .map_err(|_| ClassifierError::InvalidResponse(format!("unknown label: {top}")))
            },
        }
    }

    fn fallback_emotion(&self) -> Emotion {
        Emotion::Anxious
    }

    fn name(&self) -> &'static str {
        "zero-shot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_url_joins_base_and_model() {
        let backend = HostedZeroShotClassifier::new(ClassifierConfig::default()).unwrap();
        assert_eq!(
            backend.model_url(),
            "https://api-inference.huggingface.co/models/facebook/bart-large-mnli"
        );
    }

    #[test]
    fn model_url_tolerates_trailing_slash() {
        let config = ClassifierConfig {
            base_url: "http://localhost:9000/".to_string(),
            ..Default::default()
        };
        let backend = HostedZeroShotClassifier::new(config).unwrap();
        assert_eq!(
            backend.model_url(),
            "http://localhost:9000/models/facebook/bart-large-mnli"
        );
    }

    #[test]
    fn fallback_is_anxious() {
        let backend = HostedZeroShotClassifier::new(ClassifierConfig::default()).unwrap();
        assert_eq!(backend.fallback_emotion(), Emotion::Anxious);
    }

    #[test]
    fn loading_message_detection() {
        assert!(is_loading_message(
            "Model facebook/bart-large-mnli is currently loading"
        ));
        assert!(!is_loading_message("Internal server error"));
    }

    #[test]
    fn ranked_response_parses() {
        let body = r#"{"sequence":"hi","labels":["Calm","Sad"],"scores":[0.8,0.2]}"#;
        let parsed: ZeroShotResponse = serde_json::from_str(body).unwrap();
        let ZeroShotResponse::Ranked { labels } = parsed else {
            unreachable!("expected ranked response");
        };
        assert_eq!(labels[0], "Calm");
    }

    #[test]
    fn failure_response_parses() {
        let body = r#"{"error":"Model is currently loading","estimated_time":20.0}"#;
        let parsed: ZeroShotResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, ZeroShotResponse::Failure { .. }));
    }
}
