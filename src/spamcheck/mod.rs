//! External SpamAssassin score integration.
//!
//! The service call is the only fallible, suspending step of an analysis
//! run. Its outcome is always a [`CategoryResult`]: on success the raw score
//! is normalized to the common 0-100 scale and the strongest rule hits
//! become individual checks; on any failure a single failing check describes
//! the problem and the category is flagged for exclusion from the overall
//! mean so that an outage does not read as a bad email.

pub mod client;
pub mod message;
pub mod response;
pub mod rules_fr;

pub use client::{ReportDetail, SpamCheckClient, SpamCheckConfig, DEFAULT_ENDPOINT};
pub use message::{synthesize_message, MAX_MESSAGE_CHARS};
pub use response::{SpamCheckResponse, SpamRuleHit};

use crate::error::MailScoreError;
use crate::score::{CategoryResult, CheckResult, Priority};
use tracing::{debug, warn};

/// Service score above which a message is likely to be filtered.
pub const SPAM_THRESHOLD: f64 = 5.0;

/// Rule hits surfaced per analysis, strongest first.
pub const MAX_RULE_HITS: usize = 5;

/// Marker of server-side operational warnings that are noise for senders.
const ADMIN_NOTICE_MARKER: &str = "ADMINISTRATOR NOTICE";

/// Outcome of the spam-score category.
#[derive(Debug)]
pub struct SpamCheckOutcome {
    /// Category result, always present (failing synthetic check on error)
    pub result: CategoryResult,
    /// Raw service score, absent on failure
    pub raw_score: Option<f64>,
    /// Full service report when requested
    pub report: Option<String>,
    /// True when the category must be excluded from the overall mean
    pub failed: bool,
}

/// Map the service scale (0 = clean, ~10 = certain spam) to 0-100.
///
/// Piecewise linear: scores under 2 are clean, 2 to 5 degrades from 100 to
/// 50, and beyond 5 degrades from 50 to 0 with a floor at 0.
#[must_use]
pub fn normalize_score(raw: f64) -> u32 {
    let normalized = if raw < 2.0 {
        100.0
    } else if raw < SPAM_THRESHOLD {
        100.0 - (raw - 2.0) / 3.0 * 50.0
    } else {
        (50.0 - (raw - SPAM_THRESHOLD) / 5.0 * 50.0).max(0.0)
    };
    normalized.round() as u32
}

/// Drop rule hits that carry no actionable signal: zero deltas and
/// server-side administrative notices.
#[must_use]
pub fn filter_rule_hits(hits: Vec<SpamRuleHit>) -> Vec<SpamRuleHit> {
    hits.into_iter()
        .filter(|hit| hit.score_delta != 0.0)
        .filter(|hit| !hit.description.contains(ADMIN_NOTICE_MARKER))
        .collect()
}

/// Keep the strongest hits by absolute delta, descending. The sort is
/// stable, so equal-magnitude hits retain their service order.
#[must_use]
pub fn top_rule_hits(mut hits: Vec<SpamRuleHit>, limit: usize) -> Vec<SpamRuleHit> {
    hits.sort_by(|a, b| b.score_delta.abs().total_cmp(&a.score_delta.abs()));
    hits.truncate(limit);
    hits
}

/// Build the spam-score category from a successful service response.
#[must_use]
pub fn outcome_from_response(response: SpamCheckResponse) -> SpamCheckOutcome {
    let raw = response.score;
    let score = normalize_score(raw);

    let verdict = if raw < 2.0 {
        "Excellent, très peu de risque de filtrage"
    } else if raw < SPAM_THRESHOLD {
        "Acceptable, quelques signaux à corriger"
    } else {
        "Élevé, risque de classement en spam"
    };
    let mut checks = vec![CheckResult::new(
        raw < SPAM_THRESHOLD,
        "Score SpamAssassin",
        format!("{raw:.1}/10 - {verdict}"),
        Priority::High,
    )];

    let hits = filter_rule_hits(response.rules.into_iter().map(Into::into).collect());
    for hit in top_rule_hits(hits, MAX_RULE_HITS) {
        let translated = rules_fr::translate(&hit.rule_id, &hit.description);
        let mut check = CheckResult::new(
            // Negative deltas are reputation-positive signals
            hit.score_delta < 0.0,
            translated.title,
            format!("{:+.1} pts - {}", hit.score_delta, translated.description),
            translated.priority,
        );
        if let Some(solution) = translated.solution {
            check = check.with_aux(solution);
        }
        checks.push(check);
    }

    debug!(raw, score, checks = checks.len(), "spam score normalized");

    SpamCheckOutcome {
        result: CategoryResult::new(score, checks),
        raw_score: Some(raw),
        report: response.report,
        failed: false,
    }
}

/// Build the spam-score category for a failed service call.
#[must_use]
pub fn failure_outcome(error: &MailScoreError) -> SpamCheckOutcome {
    warn!(%error, "spam check unavailable, excluding category from the mean");
    let check = CheckResult::new(
        false,
        "Score SpamAssassin",
        format!("Service indisponible : {error}"),
        Priority::High,
    );
    SpamCheckOutcome {
        result: CategoryResult::new(0, vec![check]),
        raw_score: None,
        report: None,
        failed: true,
    }
}

/// Run the spam check end to end. Never returns an error: failures become a
/// failing category flagged for exclusion.
pub fn run_check(client: &SpamCheckClient, raw_message: &str) -> SpamCheckOutcome {
    match client.check(raw_message) {
        Ok(response) => outcome_from_response(response),
        Err(error) => failure_outcome(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpamCheckErrorKind;

    fn hit(rule: &str, delta: f64, description: &str) -> SpamRuleHit {
        SpamRuleHit {
            rule_id: rule.to_string(),
            score_delta: delta,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_normalization_anchors() {
        assert_eq!(normalize_score(1.0), 100);
        assert_eq!(normalize_score(3.5), 75);
        assert_eq!(normalize_score(5.0), 50);
        assert_eq!(normalize_score(7.5), 25);
        assert_eq!(normalize_score(10.0), 0);
        assert_eq!(normalize_score(12.0), 0);
    }

    #[test]
    fn test_normalization_boundaries() {
        assert_eq!(normalize_score(0.0), 100);
        assert_eq!(normalize_score(1.999), 100);
        assert_eq!(normalize_score(2.0), 100);
        assert_eq!(normalize_score(4.999), 50);
    }

    #[test]
    fn test_filter_drops_zero_deltas_and_admin_notices() {
        let hits = vec![
            hit("RULE_A", 0.0, "no contribution"),
            hit("URIBL_BLOCKED", 0.5, "ADMINISTRATOR NOTICE: The query to URIBL was blocked."),
            hit("MIME_HTML_ONLY", 0.7, "Message only has text/html MIME parts"),
        ];
        let filtered = filter_rule_hits(hits);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].rule_id, "MIME_HTML_ONLY");
    }

    #[test]
    fn test_top_hits_by_absolute_magnitude() {
        let hits = vec![
            hit("A", 0.1, "a"),
            hit("B", -2.5, "b"),
            hit("C", 1.2, "c"),
            hit("D", 0.1, "d"),
            hit("E", 3.0, "e"),
            hit("F", -0.8, "f"),
            hit("G", 0.2, "g"),
        ];
        let top = top_rule_hits(hits, MAX_RULE_HITS);
        let ids: Vec<&str> = top.iter().map(|h| h.rule_id.as_str()).collect();
        // Stable: A precedes D at equal magnitude
        assert_eq!(ids, ["E", "B", "C", "F", "G"]);
    }

    #[test]
    fn test_outcome_from_clean_response() {
        let response = SpamCheckResponse {
            success: true,
            score: 1.2,
            rules: vec![],
            report: Some("report text".to_string()),
            message: None,
        };
        let outcome = outcome_from_response(response);
        assert!(!outcome.failed);
        assert_eq!(outcome.result.score, 100);
        assert_eq!(outcome.raw_score, Some(1.2));
        assert!(outcome.result.checks[0].pass);
    }

    #[test]
    fn test_outcome_from_spammy_response() {
        let json = r#"{
            "success": true,
            "score": 7.5,
            "rules": [
                {"rule": "BAYES_99", "score": 3.5, "description": "spam probability 99 to 100%"},
                {"rule": "SPF_PASS", "score": -0.5, "description": "SPF: sender matches SPF record"},
                {"rule": "ZERO_RULE", "score": 0.0, "description": "informational"}
            ]
        }"#;
        let response: SpamCheckResponse = serde_json::from_str(json).unwrap();
        let outcome = outcome_from_response(response);
        assert_eq!(outcome.result.score, 25);
        // Synthetic check fails above threshold
        assert!(!outcome.result.checks[0].pass);
        // Zero-delta rule filtered, two hits remain
        assert_eq!(outcome.result.checks.len(), 3);
        // Rule hits carry the translation table's priority
        assert_eq!(outcome.result.checks[1].priority, Priority::High);
        // Negative delta reads as a positive signal
        let spf = &outcome.result.checks[2];
        assert!(spf.pass);
        assert_eq!(spf.title, "SPF validé");
        assert_eq!(spf.priority, Priority::Low);
    }

    #[test]
    fn test_failure_outcome_excluded() {
        let error = MailScoreError::spam_check(
            "POST /filter",
            SpamCheckErrorKind::NetworkError("connection refused".to_string()),
        );
        let outcome = failure_outcome(&error);
        assert!(outcome.failed);
        assert_eq!(outcome.result.score, 0);
        assert_eq!(outcome.result.checks.len(), 1);
        assert!(!outcome.result.checks[0].pass);
        assert!(outcome.result.checks[0].description.contains("Service indisponible"));
    }
}
