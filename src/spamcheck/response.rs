//! Wire types for the spam-check service.
//!
//! The service serializes numbers inconsistently (sometimes JSON numbers,
//! sometimes quoted strings), so every score field goes through a lenient
//! deserializer.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body of the `/filter` call.
#[derive(Debug, Serialize)]
pub struct FilterRequest<'a> {
    /// Raw RFC 5322 message
    pub email: &'a str,
    /// Report verbosity: `"long"` or `"short"`
    pub options: &'a str,
}

/// Response of the `/filter` call.
#[derive(Debug, Clone, Deserialize)]
pub struct SpamCheckResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "number_or_string")]
    pub score: f64,
    #[serde(default)]
    pub rules: Vec<RawRuleHit>,
    #[serde(default)]
    pub report: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One triggered rule as reported by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRuleHit {
    #[serde(default)]
    pub rule: String,
    #[serde(default, deserialize_with = "number_or_string")]
    pub score: f64,
    #[serde(default)]
    pub description: String,
}

/// A triggered rule after decoding: signed delta, identifier, description.
#[derive(Debug, Clone, PartialEq)]
pub struct SpamRuleHit {
    pub rule_id: String,
    /// Signed score contribution; negative deltas are reputation-positive
    pub score_delta: f64,
    pub description: String,
}

impl From<RawRuleHit> for SpamRuleHit {
    fn from(raw: RawRuleHit) -> Self {
        Self {
            rule_id: raw.rule,
            score_delta: raw.score,
            description: raw.description,
        }
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Number(f64),
        Text(String),
    }

    match Value::deserialize(deserializer)? {
        Value::Number(n) => Ok(n),
        Value::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
