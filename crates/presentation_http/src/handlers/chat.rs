//! Support chat handler

use application::services::ChatExchange;
use axum::{Json, extract::State};
use domain::ChatAction;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use crate::state::AppState;

/// Chat request body
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message
    pub text: String,
    /// Previously detected mood label. Deliberately lenient: an absent
    /// field falls back to `Calm` rather than rejecting the body, so a
    /// client that skipped `/predict` still gets a grounded prompt.
    #[serde(default = "default_mood")]
    pub mood: String,
    /// Prior turns, accepted for forward compatibility and ignored
    #[serde(default)]
    #[allow(dead_code)]
    pub history: Option<Value>,
    /// Address of the user, quoted in the emergency alert
    #[serde(default)]
    pub user_email: Option<String>,
    /// Destination for the emergency alert
    #[serde(default)]
    pub emergency_email: Option<String>,
}

fn default_mood() -> String {
    "Calm".to_string()
}

/// Chat response body
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Supportive reply, never empty
    pub reply: String,
    /// Set iff an emergency alert was dispatched
    pub action: Option<ChatAction>,
}

/// Produce a supportive reply, possibly dispatching an emergency alert
///
/// Always answers 200 for a well-formed body; generation and delivery
/// failures surface only as canned content.
#[instrument(skip(state, request), fields(text_len = request.text.len(), mood = %request.mood))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let exchange = ChatExchange {
        text: request.text,
        mood: request.mood,
        user_email: request.user_email,
        emergency_email: request.emergency_email,
    };

    let outcome = state.chat_service.respond(&exchange).await;

    Json(ChatResponse {
        reply: outcome.reply,
        action: outcome.action,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_deserialize_minimal() {
        let json = r#"{"text": "rough day"}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "rough day");
        assert_eq!(request.mood, "Calm");
        assert!(request.user_email.is_none());
        assert!(request.emergency_email.is_none());
    }

    #[test]
    fn chat_request_ignores_history() {
        let json = r#"{"text": "hi", "mood": "Low", "history": [{"role": "user"}]}"#;
        let request: ChatRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.mood, "Low");
    }

    #[test]
    fn chat_response_action_serializes_snake_case() {
        let response = ChatResponse {
            reply: "Stay with me.".to_string(),
            action: Some(ChatAction::EmailSent),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"action\":\"email_sent\""));
    }

    #[test]
    fn chat_response_action_null_when_absent() {
        let response = ChatResponse {
            reply: "I hear you.".to_string(),
            action: None,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"action\":null"));
    }
}
