//! HTTP presentation layer
//!
//! Axum router and handlers for the MoodScape API. Both POST routes answer
//! 200 for any well-formed body; degradation is visible only in content.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
