//! Mood service - Emotion classification with a guaranteed answer
//!
//! Wraps the configured classifier backend and converts every failure into
//! the backend's documented fallback label, so `/predict` can always answer
//! with one of the seven emotions.

use std::{fmt, sync::Arc};

use domain::Emotion;
use tracing::{debug, info, instrument, warn};

use crate::{error::ApplicationError, ports::ClassifierPort};

/// Service for classifying user text into an emotion label
pub struct MoodService {
    classifier: Arc<dyn ClassifierPort>,
}

impl fmt::Debug for MoodService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoodService")
            .field("backend", &self.classifier.backend_name())
            .finish_non_exhaustive()
    }
}

impl MoodService {
    /// Create a new mood service
    pub fn new(classifier: Arc<dyn ClassifierPort>) -> Self {
        Self { classifier }
    }

    /// Classify text, never failing
    ///
    /// Warm-up is answered with the fallback label at info level; real
    /// failures are logged as warnings. Either way the caller gets a label.
    #[instrument(skip(self, text), fields(text_len = text.len(), backend = self.classifier.backend_name()))]
    pub async fn classify(&self, text: &str) -> Emotion {
        match self.classifier.classify(text).await {
            Ok(emotion) => {
                debug!(emotion = %emotion, "Classification succeeded");
                emotion
            },
            Err(ApplicationError::ClassifierWarmingUp) => {
                let fallback = self.classifier.fallback_emotion();
                info!(fallback = %fallback, "Model warming up, answering fallback");
                fallback
            },
            Err(e) => {
                let fallback = self.classifier.fallback_emotion();
                warn!(error = %e, fallback = %fallback, "Classification failed, answering fallback");
                fallback
            },
        }
    }
}
