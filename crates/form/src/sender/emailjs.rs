//! EmailJS REST delivery

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::ContactSender;
use crate::error::SendError;
use crate::payload::ContactPayload;

const SEND_PATH: &str = "api/v1.0/email/send";
const DEFAULT_BASE_URL: &str = "https://api.emailjs.com/";

/// EmailJS account settings.
///
/// Identifiers come from the environment or a config file; none are baked in.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailJsConfig {
    /// Email service id (`service_...`).
    pub service_id: String,
    /// Template id (`template_...`). Template variables: `firstName`,
    /// `lastName`, `phone`, `email`.
    pub template_id: String,
    /// Account public key, sent as `user_id`.
    pub public_key: String,
    /// Optional private key, sent as `accessToken`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    /// API root. Must end with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Whole-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> Url {
    // Constant, always parses.
    Url::parse(DEFAULT_BASE_URL).expect("default EmailJS URL is valid")
}

const fn default_timeout_secs() -> u64 {
    10
}

impl EmailJsConfig {
    /// Settings pointing at the public EmailJS API.
    pub fn new(
        service_id: impl Into<String>,
        template_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            access_token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Overrides the API root.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the private key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    fn check(&self) -> Result<(), SendError> {
        let missing: Vec<&str> = [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SendError::Config(format!("missing {}", missing.join(", "))))
        }
    }
}

impl fmt::Debug for EmailJsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailJsConfig")
            .field("service_id", &self.service_id)
            .field("template_id", &self.template_id)
            .field("public_key", &self.public_key)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactPayload,
}

/// Sends the contact payload through EmailJS.
#[derive(Debug, Clone)]
pub struct EmailJsSender {
    client: reqwest::Client,
    endpoint: Url,
    config: EmailJsConfig,
}

impl EmailJsSender {
    /// Validates the settings and builds the HTTP client.
    pub fn new(config: EmailJsConfig) -> Result<Self, SendError> {
        config.check()?;
        let endpoint = config
            .base_url
            .join(SEND_PATH)
            .map_err(|e| SendError::Config(format!("invalid base_url: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            config,
        })
    }

    /// The URL messages are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSender for EmailJsSender {
    async fn send(&self, payload: &ContactPayload) -> Result<(), SendError> {
        let request = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: payload,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "EmailJS accepted message");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(SendError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
