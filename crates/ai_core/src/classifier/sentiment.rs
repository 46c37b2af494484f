//! Hosted sentiment classifier backend
//!
//! Submits the text to a 3-class sentiment endpoint and buckets the top
//! (label, score) pair into an emotion via
//! [`Emotion::from_sentiment`].

use std::time::Duration;

use async_trait::async_trait;
use domain::{Emotion, SentimentLabel};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::{config::ClassifierConfig, error::ClassifierError, ports::ClassifierBackend};

/// Sentiment bucketing over a hosted inference API
#[derive(Debug)]
pub struct HostedSentimentClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl HostedSentimentClassifier {
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
struct SentimentRequest<'a> {
    inputs: &'a str,
}

/// One ranked (label, score) pair
#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Hosted sentiment models answer either a flat ranking or one ranking per
/// input sequence
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SentimentResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl SentimentResponse {
    /// Highest-scoring pair of the first sequence
    fn top(self) -> Option<LabelScore> {
        let ranking = match self {
            Self::Nested(mut sequences) => {
                if sequences.is_empty() {
                    return None;
                }
                sequences.remove(0)
            },
            Self::Flat(ranking) => ranking,
        };
        ranking
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

#[async_trait]
impl ClassifierBackend for HostedSentimentClassifier {
    #[instrument(skip(self, text), fields(text_len = text.len(), model = %self.config.model))]
    async fn classify(&self, text: &str) -> Result<Emotion, ClassifierError> {
        let mut builder = self
            .client
            .post(self.model_url())
            .json(&SentimentRequest { inputs: text });
        if let Some(token) = &self.config.api_token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Sentiment request failed");
            return Err(ClassifierError::ServerError(format!("status {status}: {body}")));
        }

        let parsed: SentimentResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let top = parsed.top().ok_or(ClassifierError::EmptyResult)?;
        let label: SentimentLabel = top
            .label
            .parse()
            .map_err(|_| ClassifierError::InvalidResponse(format!("unknown label: {}", top.label)))?;

        let emotion = Emotion::from_sentiment(label, top.score);
        debug!(label = %top.label, score = top.score, emotion = %emotion, "Sentiment bucketed");
        Ok(emotion)
    }

    fn fallback_emotion(&self) -> Emotion {
        Emotion::Calm
    }

    fn name(&self) -> &'static str {
        "sentiment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_calm() {
        let backend = HostedSentimentClassifier::new(ClassifierConfig::sentiment()).unwrap();
        assert_eq!(backend.fallback_emotion(), Emotion::Calm);
    }

    #[test]
    fn nested_response_takes_first_sequence_top() {
        let body = r#"[[{"label":"negative","score":0.7},{"label":"neutral","score":0.2},{"label":"positive","score":0.1}]]"#;
        let parsed: SentimentResponse = serde_json::from_str(body).unwrap();
        let top = parsed.top().unwrap();
        assert_eq!(top.label, "negative");
        assert!((top.score - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_response_picks_highest_score() {
        let body = r#"[{"label":"neutral","score":0.2},{"label":"positive","score":0.9}]"#;
        let parsed: SentimentResponse = serde_json::from_str(body).unwrap();
        let top = parsed.top().unwrap();
        assert_eq!(top.label, "positive");
    }

    #[test]
    fn empty_response_has_no_top() {
        let parsed: SentimentResponse = serde_json::from_str("[]").unwrap();
        assert!(parsed.top().is_none());
    }

    #[test]
    fn empty_nested_sequence_has_no_top() {
        let parsed: SentimentResponse = serde_json::from_str("[[]]").unwrap();
        assert!(parsed.top().is_none());
    }
}
