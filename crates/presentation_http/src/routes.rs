//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/predict", post(handlers::predict::predict))
        .route("/chat", post(handlers::chat::chat))
        .with_state(state)
}
