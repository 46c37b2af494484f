//! Alert mailer port - Interface for emergency email delivery

use async_trait::async_trait;
use domain::EmergencyAlert;

use crate::error::ApplicationError;

/// Port for delivering a single alert email
///
/// One synchronous attempt, no retries. Implementations must fail fast
/// without opening a connection when credentials or the recipient are
/// missing.
#[async_trait]
pub trait AlertMailerPort: Send + Sync {
    /// Deliver the alert to its recipient
    async fn send_alert(&self, alert: &EmergencyAlert) -> Result<(), ApplicationError>;
}
