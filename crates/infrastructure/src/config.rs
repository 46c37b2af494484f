//! Application configuration
//!
//! Layered sources: defaults, an optional `config` file, then environment
//! variables with the `MOODSCAPE` prefix. Credentials are read from their
//! own variables on top, and a bare `PORT` variable is honored for platform
//! compatibility.

use ai_core::{ClassifierConfig, GenerativeConfig};
use config::builder::{ConfigBuilder, DefaultState};
use integration_mail::MailerConfig;
use serde::{Deserialize, Serialize};

/// Credential variables read directly from the environment. The prefixed
/// source splits keys on `_` and cannot address field names containing one,
/// so these must not rely on it.
const CREDENTIAL_VARS: [(&str, &str); 4] = [
    ("MOODSCAPE_CLASSIFIER_API_TOKEN", "classifier.api_token"),
    ("MOODSCAPE_GENERATIVE_API_KEY", "generative.api_key"),
    ("MOODSCAPE_MAIL_SENDER", "mail.sender"),
    ("MOODSCAPE_MAIL_PASSWORD", "mail.password"),
];

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8000
}

const fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: true,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Emotion classifier configuration
    #[serde(default)]
    pub classifier: ClassifierConfig,

    /// Generative engine configuration
    #[serde(default)]
    pub generative: GenerativeConfig,

    /// Alert mail relay configuration
    #[serde(default)]
    pub mail: MailerConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., MOODSCAPE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("MOODSCAPE")
                    .separator("_")
                    .try_parsing(true),
            );

        builder = apply_credentials(builder, |name| std::env::var(name).ok())?;

        // Hosting platforms inject a bare PORT variable
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Whether the generative engine has an API key
    pub fn generative_configured(&self) -> bool {
        self.generative.api_key.is_some()
    }
}

/// Layer the credential variables over `builder`
fn apply_credentials<F>(
    mut builder: ConfigBuilder<DefaultState>,
    var: F,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (name, key) in CREDENTIAL_VARS {
        if let Some(value) = var(name) {
            builder = builder.set_override(key, value)?;
        }
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use ai_core::ClassifierBackendKind;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.cors_enabled);
    }

    #[test]
    fn app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.classifier.backend, ClassifierBackendKind::ZeroShot);
        assert_eq!(config.mail.smtp_host, "smtp.gmail.com");
        assert!(!config.generative_configured());
    }

    #[test]
    fn app_config_deserialization() {
        let json = r#"{"server":{"port":9000}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn classifier_backend_from_config_json() {
        let json = r#"{"classifier":{"backend":"local"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.classifier.backend, ClassifierBackendKind::Local);
    }

    #[test]
    fn generative_configured_with_api_key() {
        let json = r#"{"generative":{"api_key":"test-key"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.generative_configured());
    }

    #[test]
    fn credential_vars_bind_to_nested_fields() {
        let vars = |name: &str| match name {
            "MOODSCAPE_CLASSIFIER_API_TOKEN" => Some("hf-bearer-token".to_string()),
            "MOODSCAPE_GENERATIVE_API_KEY" => Some("gemini-key".to_string()),
            "MOODSCAPE_MAIL_SENDER" => Some("alerts@moodscape.app".to_string()),
            "MOODSCAPE_MAIL_PASSWORD" => Some("relay-secret".to_string()),
            _ => None,
        };
        let builder = apply_credentials(config::Config::builder(), vars).unwrap();
        let config: AppConfig = builder.build().unwrap().try_deserialize().unwrap();

        let token = config.classifier.api_token.as_ref().unwrap();
        assert_eq!(token.expose_secret(), "hf-bearer-token");
        assert!(config.generative_configured());
        assert_eq!(config.mail.sender.as_deref(), Some("alerts@moodscape.app"));
        let password = config.mail.password.unwrap();
        assert_eq!(password.expose_secret(), "relay-secret");
    }

    #[test]
    fn absent_credential_vars_leave_defaults() {
        let builder = apply_credentials(config::Config::builder(), |_| None).unwrap();
        let config: AppConfig = builder.build().unwrap().try_deserialize().unwrap();
        assert!(config.classifier.api_token.is_none());
        assert!(!config.generative_configured());
        assert!(config.mail.password.is_none());
    }

    #[test]
    fn app_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("server"));
        assert!(json.contains("classifier"));
        assert!(json.contains("generative"));
        assert!(json.contains("mail"));
    }
}
