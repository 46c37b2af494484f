//! Configuration for classifier backends and the generative engine

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Which classifier backend is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierBackendKind {
    /// Hosted zero-shot classification against the candidate label set
    #[default]
    ZeroShot,
    /// Hosted 3-class sentiment classification, bucketed into emotions
    Sentiment,
    /// In-process lexicon scorer, no network
    Local,
}

/// Configuration for the emotion classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Active backend
    #[serde(default)]
    pub backend: ClassifierBackendKind,

    /// Base URL of the hosted classification service
    #[serde(default = "default_classifier_base_url")]
    pub base_url: String,

    /// Model identifier on the hosted service
    #[serde(default = "default_classifier_model")]
    pub model: String,

    /// Bearer token for the hosted service (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_classifier_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_classifier_base_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_classifier_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

const fn default_classifier_timeout_ms() -> u64 {
    15000
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackendKind::default(),
            base_url: default_classifier_base_url(),
            model: default_classifier_model(),
            api_token: None,
            timeout_ms: default_classifier_timeout_ms(),
        }
    }
}

impl ClassifierConfig {
    /// Config for the hosted sentiment backend
    pub fn sentiment() -> Self {
        Self {
            backend: ClassifierBackendKind::Sentiment,
            model: "cardiffnlp/twitter-roberta-base-sentiment-latest".to_string(),
            ..Default::default()
        }
    }

    /// Config for the in-process lexicon backend
    pub fn local() -> Self {
        Self {
            backend: ClassifierBackendKind::Local,
            ..Default::default()
        }
    }
}

/// Configuration for the generative engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerativeConfig {
    /// Base URL of the generative REST API
    #[serde(default = "default_generative_base_url")]
    pub base_url: String,

    /// API key; absent means the engine is unconfigured (degraded mode).
    /// Sensitive - uses SecretString.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Candidate model identifiers, tried in order until one succeeds
    #[serde(default = "default_candidate_models")]
    pub candidate_models: Vec<String>,

    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_generative_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_generative_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_candidate_models() -> Vec<String> {
    vec![
        "gemini-2.5-flash".to_string(),
        "gemini-2.0-flash".to_string(),
        "gemini-1.5-flash".to_string(),
    ]
}

const fn default_generative_timeout_ms() -> u64 {
    30000
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            base_url: default_generative_base_url(),
            api_key: None,
            candidate_models: default_candidate_models(),
            timeout_ms: default_generative_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_classifier_is_zero_shot() {
        let config = ClassifierConfig::default();
        assert_eq!(config.backend, ClassifierBackendKind::ZeroShot);
        assert_eq!(config.model, "facebook/bart-large-mnli");
        assert_eq!(config.timeout_ms, 15000);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn sentiment_config_switches_backend_and_model() {
        let config = ClassifierConfig::sentiment();
        assert_eq!(config.backend, ClassifierBackendKind::Sentiment);
        assert!(config.model.contains("sentiment"));
    }

    #[test]
    fn backend_kind_deserializes_kebab_case() {
        let kind: ClassifierBackendKind = serde_json::from_str("\"zero-shot\"").unwrap();
        assert_eq!(kind, ClassifierBackendKind::ZeroShot);
        let kind: ClassifierBackendKind = serde_json::from_str("\"local\"").unwrap();
        assert_eq!(kind, ClassifierBackendKind::Local);
    }

    #[test]
    fn generative_defaults_have_ordered_candidates() {
        let config = GenerativeConfig::default();
        assert_eq!(config.candidate_models.len(), 3);
        assert_eq!(config.candidate_models[0], "gemini-2.5-flash");
        assert_eq!(config.timeout_ms, 30000);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn classifier_config_deserializes_with_defaults() {
        let config: ClassifierConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api-inference.huggingface.co");
    }

    #[test]
    fn serialized_classifier_config_omits_token() {
        let config = ClassifierConfig {
            api_token: Some(SecretString::from("hf-bearer-token")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("api_token"));
        assert!(!json.contains("hf-bearer-token"));
    }

    #[test]
    fn serialized_generative_config_omits_key() {
        let config = GenerativeConfig {
            api_key: Some(SecretString::from("gemini-key")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("api_key"));
        assert!(!json.contains("gemini-key"));
    }
}
