//! Report generation for analysis results.
//!
//! Two formats: a compact colored summary for the terminal and a JSON
//! export for programmatic use. The summary shows at most 8
//! recommendations, the export carries up to 10.

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use clap::ValueEnum;

/// Output format for analysis reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Compact human-readable terminal output
    Summary,
    /// Structured JSON export
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cli_names() {
        assert_eq!(
            ReportFormat::from_str("summary", true).unwrap(),
            ReportFormat::Summary
        );
        assert_eq!(
            ReportFormat::from_str("json", true).unwrap(),
            ReportFormat::Json
        );
    }
}
