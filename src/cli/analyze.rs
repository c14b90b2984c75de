//! Analyze command handler.

use crate::error::Result;
use crate::pipeline::{
    analyze, exit_codes, load_document, should_use_color, write_output, OutputTarget,
};
use crate::reports::{JsonReporter, ReportFormat, SummaryReporter};
use crate::spamcheck::{ReportDetail, SpamCheckConfig};
use std::path::PathBuf;
use std::time::Duration;

/// Analyze command configuration
pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub output: ReportFormat,
    pub output_file: Option<PathBuf>,
    /// Skip the external spam-score call entirely
    pub no_spam_check: bool,
    pub spam_endpoint: String,
    pub spam_timeout: Duration,
    /// Request the short (score-only) service report
    pub short_spam_report: bool,
    /// Exit non-zero when the overall score is below this threshold
    pub fail_under: Option<u8>,
    pub no_color: bool,
    pub quiet: bool,
}

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let doc = load_document(&config.input)?;

    let spam = (!config.no_spam_check).then(|| SpamCheckConfig {
        endpoint: config.spam_endpoint.clone(),
        timeout: config.spam_timeout,
        detail: if config.short_spam_report {
            ReportDetail::Short
        } else {
            ReportDetail::Long
        },
    });

    tracing::info!(input = %config.input.display(), spam = spam.is_some(), "analyzing email");
    let analysis = analyze(&doc, spam);

    let target = OutputTarget::from_option(config.output_file.clone());
    let rendered = match config.output {
        ReportFormat::Json => JsonReporter::new().generate(&analysis)?,
        ReportFormat::Summary => {
            let reporter = if should_use_color(config.no_color, &target) {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            reporter.generate(&analysis)
        }
    };
    write_output(&rendered, &target, config.quiet)?;

    if let Some(threshold) = config.fail_under {
        if analysis.overall.total_score < threshold {
            tracing::warn!(
                score = analysis.overall.total_score,
                threshold,
                "score below threshold"
            );
            return Ok(exit_codes::BELOW_THRESHOLD);
        }
    }

    Ok(exit_codes::SUCCESS)
}
