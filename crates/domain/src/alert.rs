//! Emergency alert entity
//!
//! Ephemeral: constructed per request, formatted into one email, discarded.

use serde::{Deserialize, Serialize};

/// Placeholder used when the reporting user supplied no address
const ANONYMOUS_REPORTER: &str = "an anonymous user";

/// A single alert to an emergency contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyAlert {
    /// Address of the user who triggered the alert, when known
    pub reporting_user: Option<String>,
    /// Destination address supplied with the chat request
    pub recipient: String,
    /// The user's original message, quoted verbatim in the alert body
    pub triggering_text: String,
}

impl EmergencyAlert {
    pub fn new(
        reporting_user: Option<String>,
        recipient: impl Into<String>,
        triggering_text: impl Into<String>,
    ) -> Self {
        Self {
            reporting_user,
            recipient: recipient.into(),
            triggering_text: triggering_text.into(),
        }
    }

    /// Fixed subject line for every alert
    pub const fn subject(&self) -> &'static str {
        "MoodScape Emergency Alert"
    }

    /// Plain-text alert body quoting the triggering message
    pub fn body(&self) -> String {
        let reporter = self
            .reporting_user
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(ANONYMOUS_REPORTER);
        format!(
            "URGENT: Your friend ({reporter}) needs support.\n\n\
             They said: \"{}\"\n\n\
             Please reach out immediately.",
            self.triggering_text
        )
    }
}
