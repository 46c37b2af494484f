//! Classifier port - Interface for emotion classification backends

use async_trait::async_trait;
use domain::Emotion;

use crate::error::ApplicationError;

/// Port for emotion classification
///
/// Implementations may fail; `MoodService` converts any failure into the
/// backend's documented fallback label.
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    /// Classify text into exactly one emotion label
    async fn classify(&self, text: &str) -> Result<Emotion, ApplicationError>;

    /// Label `MoodService` answers with when this backend fails
    fn fallback_emotion(&self) -> Emotion;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}
