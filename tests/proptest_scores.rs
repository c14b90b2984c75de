//! Property tests for score bounds and aggregation invariants.

use mailscore::analyzers;
use mailscore::document::Document;
use mailscore::score::{aggregate, CategoryResult, Category};
use mailscore::spamcheck::normalize_score;
use proptest::prelude::*;

proptest! {
    /// Category scores stay within bounds for arbitrary input, including
    /// markup fragments the parser has to repair.
    #[test]
    fn category_scores_within_bounds(html in ".{0,500}") {
        let doc = Document::parse(&html);
        for (_, result) in analyzers::run_all(&doc) {
            prop_assert!(result.score <= result.max_score);
        }
    }

    /// The overall score is always in 0..=100 for any category scores.
    #[test]
    fn overall_score_within_bounds(scores in proptest::collection::vec(0u32..=100, 1..=7)) {
        let mut categories = indexmap::IndexMap::new();
        let all = [
            Category::Structure,
            Category::Content,
            Category::Images,
            Category::Links,
            Category::Performance,
            Category::Compliance,
            Category::SpamScore,
        ];
        for (category, score) in all.iter().zip(scores) {
            categories.insert(*category, CategoryResult::new(score, vec![]));
        }
        let overall = aggregate(categories, vec![]);
        prop_assert!(overall.total_score <= 100);
    }

    /// Normalized spam scores are always in 0..=100 and never increase as
    /// the raw score gets worse.
    #[test]
    fn spam_normalization_monotonic(raw in 0.0f64..20.0) {
        let normalized = normalize_score(raw);
        prop_assert!(normalized <= 100);
        let worse = normalize_score(raw + 0.5);
        prop_assert!(worse <= normalized);
    }
}
