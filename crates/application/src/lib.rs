//! Application layer for the MoodScape backend
//!
//! Defines the ports the adapters implement and the services that carry the
//! swallow-and-default policy: no upstream failure ever propagates past a
//! service, the only caller-visible signal of degradation is content.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{AlertMailerPort, ClassifierPort, GenerativePort};
pub use services::{MoodService, NotificationService, SupportChatService};
