//! Mail relay integration
//!
//! Delivers emergency alert emails over an authenticated, encrypted SMTP
//! session. One attempt per alert, no retries.

mod smtp_client;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use smtp_client::AlertSmtpClient;

/// Mail integration errors
#[derive(Debug, Error)]
pub enum MailerError {
    /// A required credential or address is absent; checked before any
    /// connection is opened
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// TCP or TLS connection failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The relay rejected our credentials
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// SMTP protocol failure
    #[error("SMTP error: {0}")]
    SmtpError(String),

    /// The session exceeded its deadline
    #[error("Mail delivery timeout after {0}ms")]
    Timeout(u64),
}

/// Configuration for the alert mail relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    /// Relay hostname
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// Relay port; 465 implies implicit TLS
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Sender address, also used as the AUTH identity
    #[serde(default)]
    pub sender: Option<String>,

    /// Sender secret for AUTH PLAIN (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub password: Option<SecretString>,

    /// Whole-session timeout in milliseconds
    #[serde(default = "default_mail_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

const fn default_smtp_port() -> u16 {
    465
}

const fn default_mail_timeout_ms() -> u64 {
    10000
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            sender: None,
            password: None,
            timeout_ms: default_mail_timeout_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_gmail_implicit_tls() {
        let config = MailerConfig::default();
        assert_eq!(config.smtp_host, "smtp.gmail.com");
        assert_eq!(config.smtp_port, 465);
        assert_eq!(config.timeout_ms, 10000);
        assert!(config.sender.is_none());
        assert!(config.password.is_none());
    }

    #[test]
    fn missing_credential_display() {
        let err = MailerError::MissingCredential("sender");
        assert_eq!(err.to_string(), "Missing credential: sender");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: MailerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.smtp_port, 465);
    }

    #[test]
    fn serialized_config_omits_password() {
        let config = MailerConfig {
            password: Some(SecretString::from("relay-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("relay-secret"));
    }
}
