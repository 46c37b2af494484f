//! SMTP client for emergency alert delivery
//!
//! A lightweight implicit-TLS SMTP implementation using tokio and
//! tokio-native-tls. Credentials are verified before any socket is opened;
//! the whole session runs under one deadline and makes a single attempt.

use std::time::Duration;

use base64::Engine;
use domain::EmergencyAlert;
use secrecy::ExposeSecret;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::TcpStream,
};
use tokio_native_tls::TlsConnector;
use tracing::{debug, error, instrument, trace};

use crate::{MailerConfig, MailerError};

/// SMTP client for the alert mail relay
///
/// Connects with implicit TLS and authenticates with AUTH PLAIN.
#[derive(Debug, Clone)]
pub struct AlertSmtpClient {
    config: MailerConfig,
}

impl AlertSmtpClient {
    /// Creates a new SMTP client with the given configuration
    pub const fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    /// Sender address and secret, verified non-empty
    fn credentials(&self) -> Result<(&str, &str), MailerError> {
        let sender = self
            .config
            .sender
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(MailerError::MissingCredential("sender address"))?;
        let password = self
            .config
            .password
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|s| !s.trim().is_empty())
            .ok_or(MailerError::MissingCredential("sender secret"))?;
        Ok((sender, password))
    }

    /// Sends one alert email
    ///
    /// Fails fast without any network I/O when the sender address, sender
    /// secret, or recipient is missing.
    #[instrument(skip(self, alert), fields(recipient = %alert.recipient))]
    pub async fn send_alert(&self, alert: &EmergencyAlert) -> Result<(), MailerError> {
        let (sender, _) = self.credentials()?;
        if alert.recipient.trim().is_empty() {
            return Err(MailerError::MissingCredential("recipient address"));
        }

        let message_id = format!(
            "<{}.{}@{}>",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4(),
            Self::extract_domain(sender)
        );
        let content = self.build_email_content(sender, alert, &message_id);

        let deadline = Duration::from_millis(self.config.timeout_ms);
        tokio::time::timeout(deadline, self.send_smtp(&alert.recipient, &content))
            .await
            .map_err(|_| MailerError::Timeout(self.config.timeout_ms))??;

        debug!(message_id = %message_id, "Alert email sent");
        Ok(())
    }

    /// Builds the email content in RFC 5322 format
    fn build_email_content(
        &self,
        sender: &str,
        alert: &EmergencyAlert,
        message_id: &str,
    ) -> String {
        let date = chrono::Utc::now().format("%a, %d %b %Y %H:%M:%S +0000");

        format!(
            "From: {sender}\r\n\
             To: {}\r\n\
             Subject: {}\r\n\
             Date: {date}\r\n\
             Message-ID: {message_id}\r\n\
             MIME-Version: 1.0\r\n\
             Content-Type: text/plain; charset=utf-8\r\n\
             Content-Transfer-Encoding: 8bit\r\n\
             \r\n\
             {}",
            alert.recipient,
            alert.subject(),
            alert.body()
        )
    }

    /// Opens the connection and runs the SMTP session
    async fn send_smtp(&self, to: &str, content: &str) -> Result<(), MailerError> {
        let addr = format!("{}:{}", self.config.smtp_host, self.config.smtp_port);

        let stream = TcpStream::connect(&addr).await.map_err(|e| {
            error!(error = %e, "Failed to connect to SMTP server");
            MailerError::ConnectionFailed(format!("SMTP connection failed: {e}"))
        })?;

        let connector = native_tls::TlsConnector::new()
            .map_err(|e| MailerError::ConnectionFailed(format!("TLS builder failed: {e}")))?;
        let tls = TlsConnector::from(connector);

        let tls_stream = tls
            .connect(&self.config.smtp_host, stream)
            .await
            .map_err(|e| MailerError::ConnectionFailed(format!("TLS handshake failed: {e}")))?;

        self.smtp_session(tls_stream, to, content).await
    }

    /// Handles the SMTP session over TLS
    async fn smtp_session<S>(&self, stream: S, to: &str, content: &str) -> Result<(), MailerError>
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin,
    {
        let (sender, password) = self.credentials()?;

        let (reader, mut writer) = tokio::io::split(stream);
        let mut reader = BufReader::new(reader);

        // Read greeting
        Self::read_response(&mut reader).await?;

        let hostname = hostname::get().map_or_else(
            |_| "localhost".to_string(),
            |h| h.to_string_lossy().to_string(),
        );
        Self::send_command(&mut writer, &format!("EHLO {hostname}")).await?;
        Self::read_response(&mut reader).await?;

        // Authenticate using AUTH PLAIN
        let auth_string = format!("\0{sender}\0{password}");
        let auth_b64 = base64::engine::general_purpose::STANDARD.encode(auth_string);

        Self::send_command(&mut writer, &format!("AUTH PLAIN {auth_b64}")).await?;
        let auth_response = Self::read_response(&mut reader).await?;
        if !auth_response.starts_with("235") {
            return Err(MailerError::AuthenticationFailed);
        }

        Self::send_command(&mut writer, &format!("MAIL FROM:<{sender}>")).await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, &format!("RCPT TO:<{to}>")).await?;
        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "DATA").await?;
        Self::expect_response(&mut reader, "354").await?;

        // Escape dots at the start of lines
        let escaped_content = content.replace("\r\n.", "\r\n..");
        writer
            .write_all(escaped_content.as_bytes())
            .await
            .map_err(|e| MailerError::SmtpError(format!("Failed to send content: {e}")))?;

        // End DATA with <CRLF>.<CRLF>
        writer
            .write_all(b"\r\n.\r\n")
            .await
            .map_err(|e| MailerError::SmtpError(format!("Failed to end DATA: {e}")))?;
        writer.flush().await.ok();

        Self::expect_response(&mut reader, "250").await?;

        Self::send_command(&mut writer, "QUIT").await?;
        // Don't wait for the QUIT response, the server may just close

        Ok(())
    }

    /// Sends an SMTP command
    async fn send_command<W>(writer: &mut W, command: &str) -> Result<(), MailerError>
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        trace!(command = %command.split(' ').next().unwrap_or(command), "Sending SMTP command");
        writer
            .write_all(format!("{command}\r\n").as_bytes())
            .await
            .map_err(|e| MailerError::SmtpError(format!("Failed to send command: {e}")))?;
        writer.flush().await.ok();
        Ok(())
    }

    /// Reads one possibly multi-line SMTP response
    async fn read_response<R>(reader: &mut BufReader<R>) -> Result<String, MailerError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut response = String::new();
        loop {
            let mut line = String::new();
            reader
                .read_line(&mut line)
                .await
                .map_err(|e| MailerError::SmtpError(format!("Failed to read response: {e}")))?;

            trace!(line = %line.trim(), "SMTP response");
            response.push_str(&line);

            // Last line has no hyphen after the code
            if line.len() >= 4 && line.chars().nth(3) != Some('-') {
                break;
            }
        }
        Ok(response)
    }

    /// Expects a specific response code
    async fn expect_response<R>(
        reader: &mut BufReader<R>,
        expected_code: &str,
    ) -> Result<(), MailerError>
    where
        R: tokio::io::AsyncRead + Unpin,
    {
        let response = Self::read_response(reader).await?;
        if !response.starts_with(expected_code) {
            return Err(MailerError::SmtpError(format!(
                "Expected {expected_code}, got: {response}"
            )));
        }
        Ok(())
    }

    /// Extracts the domain from an email address
    fn extract_domain(email: &str) -> String {
        email.split('@').nth(1).unwrap_or("moodscape.local").to_string()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    fn configured() -> MailerConfig {
        MailerConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1465,
            sender: Some("alerts@moodscape.app".to_string()),
            password: Some(SecretString::from("app-password")),
            timeout_ms: 1000,
        }
    }

    fn alert() -> EmergencyAlert {
        EmergencyAlert::new(
            Some("user@example.com".to_string()),
            "friend@example.com",
            "I can't do this anymore",
        )
    }

    #[tokio::test]
    async fn missing_sender_fails_without_io() {
        let client = AlertSmtpClient::new(MailerConfig {
            sender: None,
            ..configured()
        });
        let result = client.send_alert(&alert()).await;
        assert!(matches!(
            result,
            Err(MailerError::MissingCredential("sender address"))
        ));
    }

    #[tokio::test]
    async fn blank_sender_counts_as_missing() {
        let client = AlertSmtpClient::new(MailerConfig {
            sender: Some("  ".to_string()),
            ..configured()
        });
        let result = client.send_alert(&alert()).await;
        assert!(matches!(result, Err(MailerError::MissingCredential(_))));
    }

    #[tokio::test]
    async fn missing_password_fails_without_io() {
        let client = AlertSmtpClient::new(MailerConfig {
            password: None,
            ..configured()
        });
        let result = client.send_alert(&alert()).await;
        assert!(matches!(
            result,
            Err(MailerError::MissingCredential("sender secret"))
        ));
    }

    #[tokio::test]
    async fn missing_recipient_fails_without_io() {
        let client = AlertSmtpClient::new(configured());
        let blank_recipient = EmergencyAlert::new(None, "  ", "text");
        let result = client.send_alert(&blank_recipient).await;
        assert!(matches!(
            result,
            Err(MailerError::MissingCredential("recipient address"))
        ));
    }

    #[tokio::test]
    async fn unreachable_relay_is_connection_failed() {
        // Port 1465 on localhost is not listening
        let client = AlertSmtpClient::new(configured());
        let result = client.send_alert(&alert()).await;
        assert!(matches!(
            result,
            Err(MailerError::ConnectionFailed(_) | MailerError::Timeout(_))
        ));
    }

    #[test]
    fn email_content_has_fixed_subject_and_quoted_text() {
        let client = AlertSmtpClient::new(configured());
        let content =
            client.build_email_content("alerts@moodscape.app", &alert(), "<1@moodscape.app>");

        assert!(content.contains("From: alerts@moodscape.app"));
        assert!(content.contains("To: friend@example.com"));
        assert!(content.contains("Subject: MoodScape Emergency Alert"));
        assert!(content.contains("Message-ID: <1@moodscape.app>"));
        assert!(content.contains("\"I can't do this anymore\""));
    }

    #[test]
    fn extract_domain_from_email() {
        assert_eq!(
            AlertSmtpClient::extract_domain("alerts@moodscape.app"),
            "moodscape.app"
        );
        assert_eq!(AlertSmtpClient::extract_domain("invalid"), "moodscape.local");
    }
}
