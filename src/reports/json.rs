//! JSON report export.

use crate::error::Result;
use crate::pipeline::Analysis;
use crate::score::{recommendations, Category, CategoryResult, Recommendation, EXPORT_LIMIT};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// Serializable snapshot of one analysis run.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub total_score: u8,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spam_score_raw: Option<f64>,
    pub categories: IndexMap<&'static str, &'a CategoryResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_from_mean: Vec<&'static str>,
    pub recommendations: Vec<Recommendation>,
}

/// JSON report generator.
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render an analysis as pretty-printed JSON.
    pub fn generate(&self, analysis: &Analysis) -> Result<String> {
        let categories: IndexMap<&'static str, &CategoryResult> = analysis
            .overall
            .categories
            .iter()
            .map(|(category, result)| (category.name(), result))
            .collect();

        let report = JsonReport {
            generated_at: Utc::now(),
            total_score: analysis.overall.total_score,
            status: analysis.overall.status_tier.label(),
            spam_score_raw: analysis.raw_spam_score,
            categories,
            excluded_from_mean: analysis
                .overall
                .excluded_from_mean
                .iter()
                .map(Category::name)
                .collect(),
            recommendations: recommendations(&analysis.overall.categories, EXPORT_LIMIT),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::pipeline::analyze;

    #[test]
    fn test_json_report_shape() {
        let doc = Document::parse("<html><body><p>Bonjour</p></body></html>");
        let analysis = analyze(&doc, None);
        let rendered = JsonReporter::new().generate(&analysis).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");

        assert!(value["total_score"].is_u64());
        assert!(value["status"].is_string());
        assert_eq!(value["categories"].as_object().unwrap().len(), 6);
        assert!(value["categories"]["Conformité"]["checks"].is_array());
        assert!(value.get("spam_score_raw").is_none());
    }

    #[test]
    fn test_export_recommendation_limit() {
        let doc = Document::parse("<html><body></body></html>");
        let analysis = analyze(&doc, None);
        let rendered = JsonReporter::new().generate(&analysis).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        let recs = value["recommendations"].as_array().unwrap();
        assert!(recs.len() <= 10);
        assert!(!recs.is_empty());
    }
}
