//! Classifier adapter - Implements ClassifierPort over an ai_core backend

use std::sync::Arc;

use ai_core::{
    ClassifierBackend, ClassifierBackendKind, ClassifierConfig, ClassifierError,
    HostedSentimentClassifier, HostedZeroShotClassifier, LexiconClassifier,
};
use application::{error::ApplicationError, ports::ClassifierPort};
use async_trait::async_trait;
use domain::Emotion;
use tracing::{debug, instrument};

/// Adapter exposing one of the interchangeable classifier backends
pub struct ClassifierAdapter {
    backend: Arc<dyn ClassifierBackend>,
}

impl std::fmt::Debug for ClassifierAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierAdapter")
            .field("backend", &self.backend.name())
            .finish()
    }
}

impl ClassifierAdapter {
    /// Wrap an already built backend
    pub fn new(backend: Arc<dyn ClassifierBackend>) -> Self {
        Self { backend }
    }

    /// Build the backend selected by the configuration
    pub fn from_config(config: &ClassifierConfig) -> Result<Self, ApplicationError> {
        let backend: Arc<dyn ClassifierBackend> = match config.backend {
            ClassifierBackendKind::ZeroShot => Arc::new(
                HostedZeroShotClassifier::new(config.clone()).map_err(Self::map_error)?,
            ),
            ClassifierBackendKind::Sentiment => Arc::new(
                HostedSentimentClassifier::new(config.clone()).map_err(Self::map_error)?,
            ),
            ClassifierBackendKind::Local => {
                Arc::new(LexiconClassifier::new().map_err(Self::map_error)?)
            },
        };
        debug!(backend = backend.name(), "Classifier backend selected");
        Ok(Self { backend })
    }

    /// Map ClassifierError to ApplicationError
    fn map_error(e: ClassifierError) -> ApplicationError {
        match e {
            ClassifierError::ModelLoading => ApplicationError::ClassifierWarmingUp,
            other => ApplicationError::Classification(other.to_string()),
        }
    }
}

#[async_trait]
impl ClassifierPort for ClassifierAdapter {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn classify(&self, text: &str) -> Result<Emotion, ApplicationError> {
        self.backend.classify(text).await.map_err(Self::map_error)
    }

    fn fallback_emotion(&self) -> Emotion {
        self.backend.fallback_emotion()
    }

    fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_model_loading_is_warming_up() {
        let err = ClassifierAdapter::map_error(ClassifierError::ModelLoading);
        assert!(matches!(err, ApplicationError::ClassifierWarmingUp));
    }

    #[test]
    fn map_error_other_is_classification() {
        let err = ClassifierAdapter::map_error(ClassifierError::EmptyResult);
        assert!(matches!(err, ApplicationError::Classification(_)));

        let err = ClassifierAdapter::map_error(ClassifierError::Timeout(15000));
        assert!(matches!(err, ApplicationError::Classification(_)));
    }

    #[test]
    fn from_config_selects_zero_shot() {
        let adapter = ClassifierAdapter::from_config(&ClassifierConfig::default()).unwrap();
        assert_eq!(adapter.backend_name(), "zero-shot");
        assert_eq!(adapter.fallback_emotion(), Emotion::Anxious);
    }

    #[test]
    fn from_config_selects_sentiment() {
        let adapter = ClassifierAdapter::from_config(&ClassifierConfig::sentiment()).unwrap();
        assert_eq!(adapter.backend_name(), "sentiment");
        assert_eq!(adapter.fallback_emotion(), Emotion::Calm);
    }

    #[test]
    fn from_config_selects_lexicon() {
        let adapter = ClassifierAdapter::from_config(&ClassifierConfig::local()).unwrap();
        assert_eq!(adapter.backend_name(), "local");
        assert_eq!(adapter.fallback_emotion(), Emotion::Anxious);
    }

    #[tokio::test]
    async fn lexicon_backend_classifies_through_adapter() {
        let adapter = ClassifierAdapter::from_config(&ClassifierConfig::local()).unwrap();
        let emotion = adapter.classify("deadlines are piling up, too much").await.unwrap();
        assert_eq!(emotion, Emotion::Overwhelmed);
    }
}
