//! Alert mailer adapter - Implements AlertMailerPort using integration_mail

use application::{error::ApplicationError, ports::AlertMailerPort};
use async_trait::async_trait;
use domain::EmergencyAlert;
use integration_mail::{AlertSmtpClient, MailerConfig, MailerError};
use tracing::instrument;

/// Adapter for emergency alert delivery over SMTP
#[derive(Debug)]
pub struct AlertMailerAdapter {
    client: AlertSmtpClient,
}

impl AlertMailerAdapter {
    /// Create a new adapter with the given relay configuration
    pub const fn new(config: MailerConfig) -> Self {
        Self {
            client: AlertSmtpClient::new(config),
        }
    }

    /// Map MailerError to ApplicationError
    fn map_error(e: MailerError) -> ApplicationError {
        match e {
            MailerError::MissingCredential(what) => {
                ApplicationError::Configuration(format!("missing {what}"))
            },
            other => ApplicationError::Mail(other.to_string()),
        }
    }
}

#[async_trait]
impl AlertMailerPort for AlertMailerAdapter {
    #[instrument(skip(self, alert), fields(recipient = %alert.recipient))]
    async fn send_alert(&self, alert: &EmergencyAlert) -> Result<(), ApplicationError> {
        self.client
            .send_alert(alert)
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_missing_credential_is_configuration() {
        let err = AlertMailerAdapter::map_error(MailerError::MissingCredential("sender address"));
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains("sender address"));
    }

    #[test]
    fn map_error_smtp_is_mail() {
        let err = AlertMailerAdapter::map_error(MailerError::AuthenticationFailed);
        assert!(matches!(err, ApplicationError::Mail(_)));

        let err = AlertMailerAdapter::map_error(MailerError::Timeout(10000));
        assert!(matches!(err, ApplicationError::Mail(_)));
    }

    #[tokio::test]
    async fn unconfigured_relay_fails_as_configuration() {
        let adapter = AlertMailerAdapter::new(MailerConfig::default());
        let alert = EmergencyAlert::new(None, "friend@example.com", "please help");

        let result = adapter.send_alert(&alert).await;
        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }
}
