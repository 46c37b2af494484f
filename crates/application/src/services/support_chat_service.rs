//! Support chat service - Supportive replies with safety escalation
//!
//! Builds the therapist prompt, extracts the safety sentinel from the model
//! reply and dispatches the emergency alert. Every failure path degrades to
//! a canned supportive reply; nothing propagates to the HTTP layer.

use std::{fmt, sync::Arc};

use domain::{ChatOutcome, EmergencyAlert};
use tracing::{debug, instrument, warn};

use crate::{ports::GenerativePort, services::NotificationService};

/// Exact marker the model is instructed to append on a safety-critical
/// utterance
pub const EMERGENCY_SENTINEL: &str = "<TRIGGER_EMERGENCY>";

/// Reply when no generative backend is configured
const DEGRADED_REPLY: &str = "I am listening. Please tell me more.";

/// Reply when every generation attempt failed
const FAILURE_REPLY: &str = "I hear you. I'm right here with you.";

/// Appended when the emergency contact was reached
const NOTIFIED_NOTE: &str = " I have notified your emergency contact.";

/// Appended when delivery to the emergency contact failed
const NOTIFY_FAILED_NOTE: &str =
    " I tried to notify your emergency contact but could not reach them.";

/// Appended when the sentinel fired but no emergency contact was supplied
const HELPLINE_NOTE: &str = " Please reach out to a crisis helpline right away.";

/// One inbound chat exchange
#[derive(Debug, Clone)]
pub struct ChatExchange {
    /// The user's message
    pub text: String,
    /// Previously detected mood label (not validated)
    pub mood: String,
    /// Address of the user, quoted in the alert
    pub user_email: Option<String>,
    /// Destination for the emergency alert
    pub emergency_email: Option<String>,
}

/// Service producing supportive chat replies
pub struct SupportChatService {
    /// Absent means degraded mode, not an error
    generative: Option<Arc<dyn GenerativePort>>,
    notifier: Arc<NotificationService>,
}

impl fmt::Debug for SupportChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupportChatService")
            .field("configured", &self.generative.is_some())
            .finish_non_exhaustive()
    }
}

impl SupportChatService {
    /// Create a new chat service
    ///
    /// Pass `None` for the generative port to run in degraded mode.
    pub fn new(
        generative: Option<Arc<dyn GenerativePort>>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            generative,
            notifier,
        }
    }

    /// Produce a supportive reply and possibly dispatch an alert
    ///
    /// Infallible by contract: the reply is always non-empty and `action`
    /// is set iff the sentinel fired with an emergency contact present.
    #[instrument(skip(self, exchange), fields(text_len = exchange.text.len(), mood = %exchange.mood))]
    pub async fn respond(&self, exchange: &ChatExchange) -> ChatOutcome {
        let Some(generative) = &self.generative else {
            debug!("No generative backend configured, degraded reply");
            return ChatOutcome::reply_only(DEGRADED_REPLY);
        };

        let prompt = build_prompt(&exchange.mood, &exchange.text);

        let reply = match generative.generate(&prompt).await {
            Ok(generated) => {
                debug!(model = %generated.model, "Reply generated");
                generated.content
            },
            Err(e) => {
                warn!(error = %e, "Generation failed, canned reply");
                return ChatOutcome::reply_only(FAILURE_REPLY);
            },
        };

        let mut reply = reply.trim().to_string();
        if !reply.contains(EMERGENCY_SENTINEL) {
            if reply.is_empty() {
                reply = DEGRADED_REPLY.to_string();
            }
            return ChatOutcome::reply_only(reply);
        }

        reply = reply.replace(EMERGENCY_SENTINEL, "").trim().to_string();
        if reply.is_empty() {
            reply = DEGRADED_REPLY.to_string();
        }

        let emergency_contact = exchange
            .emergency_email
            .as_deref()
            .filter(|s| !s.trim().is_empty());

        match emergency_contact {
            Some(contact) => {
                let alert = EmergencyAlert::new(
                    exchange.user_email.clone(),
                    contact,
                    exchange.text.clone(),
                );
                // Action reflects the sentinel, not delivery success; the
                // boolean only changes the wording.
                let delivered = self.notifier.notify(&alert).await;
                reply.push_str(if delivered {
                    NOTIFIED_NOTE
                } else {
                    NOTIFY_FAILED_NOTE
                });
                ChatOutcome::with_email_sent(reply)
            },
            None => {
                reply.push_str(HELPLINE_NOTE);
                ChatOutcome::reply_only(reply)
            },
        }
    }
}

/// Prompt instructing the model to validate the mood, stay short, and
/// append the sentinel on suicidal ideation or self-harm
fn build_prompt(mood: &str, text: &str) -> String {
    format!(
        "You are Moody, an empathetic therapist. The user feels {mood}.\n\
         The user said: \"{text}\"\n\
         Instructions:\n\
         1. Validate their feeling briefly.\n\
         2. Keep it supportive and under 3 sentences.\n\
         3. If they mention suicide or self-harm, end your message with exactly this code: {EMERGENCY_SENTINEL}"
    )
}
