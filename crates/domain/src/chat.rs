//! Chat outcome value objects

use serde::{Deserialize, Serialize};

/// Side effect taken while producing a chat reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    /// An emergency alert email was dispatched
    EmailSent,
}

/// Result of a supportive chat exchange
///
/// The reply is always non-empty; `action` is present only when an alert
/// was dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatOutcome {
    pub reply: String,
    pub action: Option<ChatAction>,
}

impl ChatOutcome {
    /// A reply with no side effect
    pub fn reply_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            action: None,
        }
    }

    /// A reply after an alert email went out
    pub fn with_email_sent(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            action: Some(ChatAction::EmailSent),
        }
    }
}
