//! Analyzer integration tests against realistic email fixtures.

use mailscore::analyzers;
use mailscore::document::Document;
use mailscore::score::{
    aggregate, recommendations, Category, Priority, StatusTier, DISPLAY_LIMIT,
};
use std::path::{Path, PathBuf};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn load_fixture(name: &str) -> Document {
    let html = std::fs::read_to_string(fixture_path(name)).expect("fixture readable");
    Document::parse(&html)
}

mod well_formed_newsletter {
    use super::*;

    #[test]
    fn scores_excellent_overall() {
        let doc = load_fixture("newsletter_good.html");
        let categories = analyzers::run_all(&doc);
        let overall = aggregate(categories, vec![]);

        assert!(
            overall.total_score >= 90,
            "expected excellent score, got {}",
            overall.total_score
        );
        assert_eq!(overall.status_tier, StatusTier::Excellent);
    }

    #[test]
    fn structure_and_compliance_are_perfect() {
        let doc = load_fixture("newsletter_good.html");
        let categories = analyzers::run_all(&doc);
        assert_eq!(categories[&Category::Structure].score, 100);
        assert_eq!(categories[&Category::Images].score, 100);
        assert_eq!(categories[&Category::Compliance].score, 100);
        assert_eq!(categories[&Category::Performance].score, 100);
    }

    #[test]
    fn only_missing_list_unsubscribe_header_in_links() {
        let doc = load_fixture("newsletter_good.html");
        let categories = analyzers::run_all(&doc);
        let links = &categories[&Category::Links];
        assert_eq!(links.score, 90);
        let failing: Vec<_> = links.failing_checks().collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].title, "List-Unsubscribe header");
    }
}

mod spammy_promo {
    use super::*;

    #[test]
    fn scores_poorly_overall() {
        let doc = load_fixture("promo_bad.html");
        let categories = analyzers::run_all(&doc);
        let overall = aggregate(categories, vec![]);
        assert!(
            overall.total_score < 60,
            "expected a failing score, got {}",
            overall.total_score
        );
    }

    #[test]
    fn flags_the_expected_structural_problems() {
        let doc = load_fixture("promo_bad.html");
        let categories = analyzers::run_all(&doc);

        let structure = &categories[&Category::Structure];
        let failing: Vec<&str> = structure.failing_checks().map(|c| c.title.as_str()).collect();
        assert!(failing.contains(&"DOCTYPE HTML5"));
        assert!(failing.contains(&"Pas de CSS externe"));
        assert!(failing.contains(&"Pas d'images Base64"));
        assert!(failing.contains(&"Utilisation de tableaux"));
    }

    #[test]
    fn flags_scripts_forms_and_insecure_links() {
        let doc = load_fixture("promo_bad.html");
        let categories = analyzers::run_all(&doc);

        let performance = &categories[&Category::Performance];
        let perf_failing: Vec<&str> =
            performance.failing_checks().map(|c| c.title.as_str()).collect();
        assert!(perf_failing.contains(&"Pas de JavaScript"));
        assert!(perf_failing.contains(&"Pas de formulaires"));

        let links = &categories[&Category::Links];
        let links_failing: Vec<&str> = links.failing_checks().map(|c| c.title.as_str()).collect();
        assert!(links_failing.contains(&"Protocole HTTPS sur tous les liens"));
        assert!(links_failing.contains(&"Lien de désinscription OBLIGATOIRE"));
        assert!(links_failing.contains(&"Texte descriptif des liens"));
    }

    #[test]
    fn content_checks_catch_shouting_and_spam_words() {
        let doc = load_fixture("promo_bad.html");
        let categories = analyzers::run_all(&doc);

        let content = &categories[&Category::Content];
        let failing: Vec<&str> = content.failing_checks().map(|c| c.title.as_str()).collect();
        assert!(failing.contains(&"Mots à risque spam"));
        assert!(failing.contains(&"Utilisation des majuscules"));
        assert!(failing.contains(&"Points d'exclamation"));
    }
}

mod recommendation_ordering {
    use super::*;

    #[test]
    fn legal_issues_come_before_cosmetic_ones() {
        // No unsubscribe link, no postal address, 0 images, 0 links
        let doc = Document::parse("<html><body><p>Un texte court sans rien.</p></body></html>");
        let categories = analyzers::run_all(&doc);
        let recs = recommendations(&categories, DISPLAY_LIMIT);

        assert!(!recs.is_empty());
        assert_eq!(recs[0].priority, Priority::High);

        let high_texts: Vec<&str> = recs
            .iter()
            .filter(|r| r.priority == Priority::High)
            .map(|r| r.text.as_str())
            .collect();
        assert!(
            high_texts.iter().any(|t| t.contains("désinscription")),
            "missing unsubscribe recommendation in {high_texts:?}"
        );
        assert!(
            high_texts.iter().any(|t| t.contains("adresse postale")),
            "missing postal address recommendation in {high_texts:?}"
        );

        // Priorities are non-increasing across the list
        let ranks: Vec<u8> = recs.iter().map(|r| r.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn compliance_capped_without_legal_checks() {
        let doc = Document::parse("<html><body><p>Un texte court sans rien.</p></body></html>");
        let categories = analyzers::run_all(&doc);
        // Unsubscribe (+30) and postal address (+25) are unreachable
        assert!(categories[&Category::Compliance].score <= 45);
    }
}

mod gmail_clipping {
    use super::*;

    #[test]
    fn oversized_html_gets_minimal_weight_credit() {
        // 150 KB of HTML: the Gmail check fails with the truncation warning
        // and contributes +5 rather than +35 or +20.
        let filler = "<p style=\"margin:0\">contenu</p>".repeat(5000);
        let doc = Document::parse(&format!("<html><body>{filler}</body></html>"));
        assert!(doc.byte_size() > 120 * 1024);

        let categories = analyzers::run_all(&doc);
        let performance = &categories[&Category::Performance];
        let weight_check = &performance.checks[0];
        assert!(!weight_check.pass);
        assert!(weight_check.description.contains("tronquer"));
        // +5 weight, +20 total, +15 requests, +15 js, +15 forms
        assert_eq!(performance.score, 70);
    }
}
