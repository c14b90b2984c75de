//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → analyze → report pipeline and the
//! CLI command handler with real fixture files. The external spam check is
//! disabled or pointed at an unreachable endpoint, never at the real
//! service.

use mailscore::cli::{run_analyze, AnalyzeConfig};
use mailscore::pipeline::{analyze, exit_codes, load_document};
use mailscore::reports::{JsonReporter, ReportFormat};
use mailscore::score::Category;
use mailscore::spamcheck::{SpamCheckConfig, DEFAULT_ENDPOINT};
use std::path::{Path, PathBuf};
use std::time::Duration;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

mod load_stage {
    use super::*;

    #[test]
    fn load_html_fixture() {
        let doc = load_document(&fixture_path("newsletter_good.html")).expect("loads");
        assert!(doc.title_text().is_some());
        assert!(doc.body_text().contains("sélection du mois"));
    }

    #[test]
    fn load_eml_fixture_decodes_quoted_printable() {
        let doc = load_document(&fixture_path("newsletter.eml")).expect("loads");
        assert!(doc.body_text().contains("nouveautés de septembre"));
        // Only the html part is analyzed
        assert!(!doc.body_text().contains("Version texte"));
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_document(&fixture_path("missing.html")).is_err());
    }
}

mod analysis {
    use super::*;

    #[test]
    fn analyzers_are_idempotent_across_runs() {
        let doc = load_document(&fixture_path("newsletter_good.html")).expect("loads");
        let first = analyze(&doc, None);
        let second = analyze(&doc, None);
        assert_eq!(first.overall.total_score, second.overall.total_score);
        assert_eq!(first.overall.categories, second.overall.categories);
    }

    #[test]
    fn unreachable_spam_service_is_excluded_not_zeroed() {
        let doc = load_document(&fixture_path("newsletter_good.html")).expect("loads");
        let config = SpamCheckConfig {
            endpoint: "http://127.0.0.1:9/filter".to_string(),
            timeout: Duration::from_millis(200),
            ..SpamCheckConfig::default()
        };

        let with_failed_spam = analyze(&doc, Some(config));
        let without_spam = analyze(&doc, None);

        assert_eq!(
            with_failed_spam.overall.excluded_from_mean,
            vec![Category::SpamScore]
        );
        assert_eq!(
            with_failed_spam.overall.total_score,
            without_spam.overall.total_score
        );
        // The failed category is still visible in the report
        let spam_result = &with_failed_spam.overall.categories[&Category::SpamScore];
        assert_eq!(spam_result.score, 0);
        assert!(!spam_result.checks[0].pass);
    }

    #[test]
    fn json_export_of_excluded_spam_category() {
        let doc = load_document(&fixture_path("newsletter_good.html")).expect("loads");
        let config = SpamCheckConfig {
            endpoint: "http://127.0.0.1:9/filter".to_string(),
            timeout: Duration::from_millis(200),
            ..SpamCheckConfig::default()
        };
        let analysis = analyze(&doc, Some(config));
        let rendered = JsonReporter::new().generate(&analysis).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert_eq!(value["categories"].as_object().unwrap().len(), 7);
        assert_eq!(value["excluded_from_mean"][0], "Score SpamAssassin");
        assert!(value.get("spam_score_raw").is_none());
    }
}

mod cli_handler {
    use super::*;

    fn base_config(input: PathBuf, output_file: PathBuf) -> AnalyzeConfig {
        AnalyzeConfig {
            input,
            output: ReportFormat::Json,
            output_file: Some(output_file),
            no_spam_check: true,
            spam_endpoint: DEFAULT_ENDPOINT.to_string(),
            spam_timeout: Duration::from_secs(30),
            short_spam_report: false,
            fail_under: None,
            no_color: true,
            quiet: true,
        }
    }

    #[test]
    fn analyze_command_writes_json_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let report_path = dir.path().join("report.json");
        let config = base_config(fixture_path("newsletter_good.html"), report_path.clone());

        let code = run_analyze(config).expect("runs");
        assert_eq!(code, exit_codes::SUCCESS);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(report_path).unwrap()).unwrap();
        assert!(value["total_score"].as_u64().unwrap() >= 90);
        assert_eq!(value["status"], "Excellent");
        assert!(value["recommendations"].as_array().unwrap().len() <= 10);
    }

    #[test]
    fn fail_under_threshold_drives_exit_code() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut config = base_config(
            fixture_path("promo_bad.html"),
            dir.path().join("report.json"),
        );
        config.fail_under = Some(75);

        let code = run_analyze(config).expect("runs");
        assert_eq!(code, exit_codes::BELOW_THRESHOLD);
    }

    #[test]
    fn summary_format_writes_plain_text() {
        let dir = tempfile::tempdir().expect("temp dir");
        let report_path = dir.path().join("report.txt");
        let mut config = base_config(fixture_path("newsletter_good.html"), report_path.clone());
        config.output = ReportFormat::Summary;

        let code = run_analyze(config).expect("runs");
        assert_eq!(code, exit_codes::SUCCESS);

        let rendered = std::fs::read_to_string(report_path).unwrap();
        assert!(rendered.contains("Score : "));
        // File output is never colored
        assert!(!rendered.contains('\x1b'));
    }
}
