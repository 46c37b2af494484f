//! Mood prediction handler

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Prediction request body
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    /// User text to classify
    pub text: String,
}

/// Prediction response body
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// One of the seven emotion labels
    pub emotion: String,
}

/// Classify user text into an emotion label
///
/// Always answers 200 with a label; backend failures are absorbed into the
/// backend's fallback label by the service.
#[instrument(skip(state, request), fields(text_len = request.text.len()))]
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let emotion = state.mood_service.classify(&request.text).await;

    Json(PredictResponse {
        emotion: emotion.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predict_request_deserialize() {
        let json = r#"{"text": "I feel calm today"}"#;
        let request: PredictRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.text, "I feel calm today");
    }

    #[test]
    fn predict_response_serialize() {
        let response = PredictResponse {
            emotion: "Anxious".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"emotion":"Anxious"}"#);
    }
}
