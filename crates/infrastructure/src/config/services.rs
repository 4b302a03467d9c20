//! External service configuration: AI provider, SMS provider, processing
//! collaborator, and log sink.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

const fn redacted(secret: Option<&SecretString>) -> Option<&'static str> {
    if secret.is_some() {
        Some("[REDACTED]")
    } else {
        None
    }
}

/// AI provider configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    /// Provider API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &redacted(self.api_key.as_ref()))
            .finish()
    }
}

impl AiConfig {
    /// Whether a non-empty API key is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        present(self.api_key.as_ref().map(ExposeSecret::expose_secret))
    }
}

/// SMS provider configuration
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct SmsConfig {
    /// Provider account identifier
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Provider auth token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub auth_token: Option<SecretString>,

    /// Number messages are sent from (E.164 format)
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &redacted(self.auth_token.as_ref()))
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

impl SmsConfig {
    /// Whether the full credential triple is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        present(self.account_sid.as_deref())
            && present(self.auth_token.as_ref().map(ExposeSecret::expose_secret))
            && present(self.phone_number.as_deref())
    }
}

/// Processing collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// URL the validated message is POSTed to; unset means acknowledge only
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_processing_timeout")]
    pub timeout_secs: u64,
}

const fn default_processing_timeout() -> u64 {
    30
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_processing_timeout(),
        }
    }
}

impl ProcessingConfig {
    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().filter(|e| !e.trim().is_empty())
    }
}

/// External log sink configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSinkConfig {
    /// URL error entries are POSTed to in production
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl LogSinkConfig {
    /// Configured endpoint, ignoring blank values
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref().filter(|e| !e.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Option<SecretString> {
        Some(SecretString::from(value.to_string()))
    }

    #[test]
    fn ai_requires_non_empty_key() {
        assert!(!AiConfig::default().is_configured());
        assert!(!AiConfig { api_key: secret("  ") }.is_configured());
        assert!(AiConfig { api_key: secret("sk-1") }.is_configured());
    }

    #[test]
    fn sms_requires_complete_triple() {
        let complete = SmsConfig {
            account_sid: Some("AC1".into()),
            auth_token: secret("tok"),
            phone_number: Some("+15550000000".into()),
        };
        assert!(complete.is_configured());

        let missing_token = SmsConfig {
            auth_token: None,
            ..complete.clone()
        };
        assert!(!missing_token.is_configured());

        let blank_number = SmsConfig {
            phone_number: Some(String::new()),
            ..complete
        };
        assert!(!blank_number.is_configured());
    }

    #[test]
    fn blank_endpoints_are_ignored() {
        let processing = ProcessingConfig {
            endpoint: Some(" ".into()),
            ..Default::default()
        };
        assert!(processing.endpoint().is_none());
        assert_eq!(processing.timeout_secs, 30);

        let sink = LogSinkConfig {
            endpoint: Some("http://collector/logs".into()),
        };
        assert_eq!(sink.endpoint(), Some("http://collector/logs"));
    }

    #[test]
    fn debug_redacts_token() {
        let sms = SmsConfig {
            account_sid: Some("AC1".into()),
            auth_token: secret("hunter2"),
            phone_number: None,
        };
        let debug = format!("{sms:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("AC1"));
    }
}
