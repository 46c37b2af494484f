//! Application services

mod mood_service;
mod notification_service;
mod support_chat_service;

pub use mood_service::MoodService;
pub use notification_service::NotificationService;
pub use support_chat_service::{ChatExchange, SupportChatService};
