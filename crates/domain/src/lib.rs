//! Domain layer for the MoodScape backend
//!
//! Contains the emotion label set, the sentiment bucket mapping, chat
//! outcome value objects and the emergency alert entity. This layer has no
//! external service dependencies and defines the ubiquitous language.

pub mod alert;
pub mod chat;
pub mod emotion;
pub mod errors;

pub use alert::EmergencyAlert;
pub use chat::{ChatAction, ChatOutcome};
pub use emotion::{Emotion, SentimentLabel};
pub use errors::DomainError;
