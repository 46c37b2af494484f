//! Application state shared across handlers

use std::sync::Arc;

use application::{MoodService, SupportChatService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Emotion classification service
    pub mood_service: Arc<MoodService>,
    /// Supportive chat service
    pub chat_service: Arc<SupportChatService>,
}
