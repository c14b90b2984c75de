//! Pipeline orchestration: load → analyze → aggregate.
//!
//! The six local analyzers run synchronously on the calling thread while the
//! spam check (the only network call) runs on a worker thread; both sides
//! join before aggregation. Only the synthesized raw message crosses the
//! thread boundary since the parsed DOM is not `Send`.

mod output;

pub use output::{should_use_color, write_output, OutputTarget};

use crate::analyzers;
use crate::document::{extract_html_from_eml, Document};
use crate::error::{InputErrorKind, MailScoreError, Result, SpamCheckErrorKind};
use crate::score::{aggregate, Category, OverallResult};
use crate::spamcheck::{
    self, message, SpamCheckClient, SpamCheckConfig, SpamCheckOutcome,
};
use std::path::Path;
use tracing::{debug, info};

/// Exit codes for CI integration
pub mod exit_codes {
    /// Success - score at or above the threshold (or no threshold set)
    pub const SUCCESS: i32 = 0;
    /// Score fell below the `--fail-under` threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

/// Full outcome of one analysis run.
#[derive(Debug)]
pub struct Analysis {
    /// Aggregated score, tier and per-category results
    pub overall: OverallResult,
    /// Raw service score, absent when the spam check was skipped or failed
    pub raw_spam_score: Option<f64>,
    /// Full SpamAssassin report when the service provided one
    pub spam_report: Option<String>,
}

/// Load a [`Document`] from an HTML or EML file.
///
/// `.eml` input is decoded first; everything else must be HTML.
pub fn load_document(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path).map_err(|e| MailScoreError::io(path, e))?;
    if raw.trim().is_empty() {
        return Err(MailScoreError::input(
            path.display().to_string(),
            InputErrorKind::EmptySource,
        ));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let html = match extension.as_str() {
        "html" | "htm" => raw,
        "eml" => extract_html_from_eml(&raw).ok_or_else(|| {
            MailScoreError::input(path.display().to_string(), InputErrorKind::NoHtmlPart)
        })?,
        other => {
            return Err(MailScoreError::input(
                path.display().to_string(),
                InputErrorKind::UnsupportedExtension {
                    extension: other.to_string(),
                },
            ))
        }
    };

    debug!(path = %path.display(), bytes = html.len(), "document loaded");
    Ok(Document::parse(&html))
}

/// Run the full analysis over a document.
///
/// With a spam config, the service call runs on a worker thread concurrently
/// with the local analyzers; its failure never fails the run.
pub fn analyze(doc: &Document, spam: Option<SpamCheckConfig>) -> Analysis {
    let spam_handle = spam.map(|config| {
        let subject = doc
            .title_text()
            .unwrap_or_else(|| message::DEFAULT_SUBJECT.to_string());
        let raw_message = message::synthesize_message(
            doc.raw_source(),
            message::DEFAULT_FROM,
            message::DEFAULT_TO,
            &subject,
        );
        std::thread::spawn(move || -> SpamCheckOutcome {
            match SpamCheckClient::new(config) {
                Ok(client) => spamcheck::run_check(&client, &raw_message),
                Err(error) => spamcheck::failure_outcome(&error),
            }
        })
    });

    let mut categories = analyzers::run_all(doc);

    let mut excluded = Vec::new();
    let mut raw_spam_score = None;
    let mut spam_report = None;
    if let Some(handle) = spam_handle {
        let outcome = handle.join().unwrap_or_else(|_| {
            spamcheck::failure_outcome(&MailScoreError::spam_check(
                "worker thread",
                SpamCheckErrorKind::NetworkError("spam check thread panicked".to_string()),
            ))
        });
        if outcome.failed {
            excluded.push(Category::SpamScore);
        }
        raw_spam_score = outcome.raw_score;
        spam_report = outcome.report;
        categories.insert(Category::SpamScore, outcome.result);
    }

    let overall = aggregate(categories, excluded);
    info!(
        score = overall.total_score,
        tier = overall.status_tier.label(),
        "analysis complete"
    );

    Analysis {
        overall,
        raw_spam_score,
        spam_report,
    }
}
