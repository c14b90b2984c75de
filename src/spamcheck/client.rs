//! HTTP client for the spam-check service.

use super::message::MAX_MESSAGE_CHARS;
use super::response::{FilterRequest, SpamCheckResponse};
use crate::error::{MailScoreError, Result, SpamCheckErrorKind};
use reqwest::blocking::Client;
use std::time::Duration;

/// Public SpamAssassin scoring endpoint (Postmark SpamCheck).
pub const DEFAULT_ENDPOINT: &str = "https://spamcheck.postmarkapp.com/filter";

/// Report verbosity requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportDetail {
    /// Full report with per-rule breakdown
    #[default]
    Long,
    /// Score only
    Short,
}

impl ReportDetail {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

/// Spam-check client configuration.
#[derive(Debug, Clone)]
pub struct SpamCheckConfig {
    /// Service endpoint URL
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Report verbosity
    pub detail: ReportDetail,
}

impl Default for SpamCheckConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            detail: ReportDetail::Long,
        }
    }
}

/// HTTP client for the spam-check service.
pub struct SpamCheckClient {
    client: Client,
    config: SpamCheckConfig,
}

/// Helper to convert reqwest errors to spam-check errors
fn network_error(msg: &str, err: &reqwest::Error) -> MailScoreError {
    MailScoreError::spam_check(msg, SpamCheckErrorKind::NetworkError(err.to_string()))
}

impl SpamCheckClient {
    /// Create a new spam-check client.
    pub fn new(config: SpamCheckConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;

        Ok(Self { client, config })
    }

    /// Submit a raw RFC 5322 message for scoring.
    pub fn check(&self, message: &str) -> Result<SpamCheckResponse> {
        if message.len() > MAX_MESSAGE_CHARS {
            return Err(MailScoreError::spam_check(
                "message exceeds service limit",
                SpamCheckErrorKind::MessageTooLarge {
                    size: message.len(),
                    limit: MAX_MESSAGE_CHARS,
                },
            ));
        }

        let request = FilterRequest {
            email: message,
            options: self.config.detail.as_str(),
        };

        tracing::debug!(
            endpoint = %self.config.endpoint,
            options = self.config.detail.as_str(),
            message_size = message.len(),
            "submitting message for spam scoring"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .map_err(|e| network_error("Spam-check request failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(MailScoreError::spam_check(
                "service returned an error status",
                SpamCheckErrorKind::ServiceError {
                    status: status.as_u16(),
                    body: body.chars().take(200).collect(),
                },
            ));
        }

        let parsed: SpamCheckResponse = response.json().map_err(|e| {
            MailScoreError::spam_check(
                "response body is not valid JSON",
                SpamCheckErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        if !parsed.success {
            return Err(MailScoreError::spam_check(
                "service reported failure",
                SpamCheckErrorKind::ServiceFailure(
                    parsed
                        .message
                        .unwrap_or_else(|| "no failure message provided".to_string()),
                ),
            ));
        }

        Ok(parsed)
    }
}
