//! Content analyzer: textual quality and spam-trigger signals.
//!
//! Text measurements use the rendered body text; the HTML length used for
//! the text ratio is the raw source length, so markup-heavy emails with
//! little visible text are penalized.

use crate::catalog::CheckId;
use crate::document::{attr, Document};
use crate::score::CategoryResult;

/// Trigger words commonly weighted by content filters. Matching is a
/// case-insensitive substring search over the body text.
pub const SPAM_WORDS: &[&str] = &[
    "gratuit",
    "free",
    "urgent",
    "cliquez ici",
    "click here",
    "garantie",
    "argent facile",
    "gagner",
    "prize",
    "winner",
    "congratulations",
    "act now",
    "limited time",
    "offre limitée",
    "millionaire",
    "casino",
    "100%",
    "satisfaction garantie",
    "risque zéro",
    "viagra",
    "lottery",
    "act immediately",
    "apply now",
    "become a member",
    "billing",
    "billion",
    "cash bonus",
    "cheap",
    "clearance",
    "collect",
    "compare rates",
    "credit",
    "dear friend",
    "discount",
    "earn money",
    "eliminate debt",
];

const MIN_TEXT_LENGTH: usize = 100;
const MIN_READABLE_LENGTH: i64 = 50;

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    let body_text = doc.body_text();
    let text_length = body_text.trim().chars().count();

    let long_enough = text_length > MIN_TEXT_LENGTH;
    checks.push(CheckId::TextLength.result(
        long_enough,
        if long_enough {
            format!("{text_length} caractères - Suffisant")
        } else {
            format!("{text_length} caractères - Minimum 100 caractères recommandé")
        },
    ));
    if long_enough {
        score += CheckId::TextLength.weight();
    }

    let html_length = doc.raw_source().chars().count();
    let text_ratio = if html_length == 0 {
        0.0
    } else {
        text_length as f64 / html_length as f64 * 100.0
    };
    let good_ratio = text_ratio > 15.0;
    checks.push(CheckId::TextRatio.result(
        good_ratio,
        format!(
            "{text_ratio:.1}% de texte - {}",
            if good_ratio {
                "Bon équilibre"
            } else {
                "Augmentez le contenu textuel"
            }
        ),
    ));
    if good_ratio {
        score += CheckId::TextRatio.weight();
    } else if text_ratio > 10.0 {
        score += 8;
    }

    let lower_content = body_text.to_lowercase();
    let spam_words_found: Vec<&str> = SPAM_WORDS
        .iter()
        .filter(|word| lower_content.contains(&word.to_lowercase()))
        .copied()
        .collect();
    let spam_count = spam_words_found.len();
    checks.push(CheckId::SpamWords.result(
        spam_count < 3,
        match spam_count {
            0 => "Aucun mot à risque détecté".to_string(),
            1 | 2 => format!(
                "{spam_count} mot(s) à surveiller: {}",
                spam_words_found[..spam_count.min(2)].join(", ")
            ),
            _ => format!(
                "{spam_count} mots à risque: {}... - Réduisez leur usage",
                spam_words_found[..spam_count.min(3)].join(", ")
            ),
        },
    ));
    score += match spam_count {
        0 => CheckId::SpamWords.weight(),
        1 | 2 => 12,
        3 | 4 => 6,
        _ => 0,
    };

    // Ratio over the untrimmed text, matching how clients perceive SHOUTING
    let total_chars = body_text.chars().count();
    let uppercase_chars = body_text.chars().filter(char::is_ascii_uppercase).count();
    let uppercase_ratio = if total_chars == 0 {
        0.0
    } else {
        uppercase_chars as f64 / total_chars as f64 * 100.0
    };
    let moderate_uppercase = uppercase_ratio < 30.0;
    checks.push(CheckId::UppercaseUsage.result(
        moderate_uppercase,
        if moderate_uppercase {
            format!("{uppercase_ratio:.1}% de majuscules - Correct")
        } else {
            "Trop de majuscules - Évitez les PHRASES EN CAPITALES".to_string()
        },
    ));
    if moderate_uppercase {
        score += CheckId::UppercaseUsage.weight();
    }

    let exclamation_count = body_text.matches('!').count();
    let few_exclamations = exclamation_count < 5;
    checks.push(CheckId::Exclamations.result(
        few_exclamations,
        if few_exclamations {
            format!("{exclamation_count} point(s) d'exclamation - Acceptable")
        } else {
            format!("{exclamation_count} points d'exclamation - Réduisez pour éviter l'aspect spam")
        },
    ));
    if few_exclamations {
        score += CheckId::Exclamations.weight();
    }

    // Text attributable to alt attributes does not count as readable content
    let alt_text_length: usize = doc
        .select("img")
        .iter()
        .filter_map(|img| attr(img, "alt"))
        .map(|alt| alt.chars().count())
        .sum();
    let text_without_alt = text_length as i64 - alt_text_length as i64;
    let readable = text_without_alt > MIN_READABLE_LENGTH;
    checks.push(CheckId::ReadableWithoutImages.result(
        readable,
        if readable {
            "L'email reste lisible même sans images - Excellent"
        } else {
            "Assurez-vous que l'email soit compréhensible sans affichage des images"
        },
    ));
    if readable {
        score += CheckId::ReadableWithoutImages.weight();
    }

    let has_physical_address = has_postal_address(&body_text);
    checks.push(CheckId::ContentPhysicalAddress.result(
        has_physical_address,
        if has_physical_address {
            "Adresse physique détectée - Conformité légale (CAN-SPAM, RGPD)"
        } else {
            "Ajoutez votre adresse postale dans le footer (obligation légale)"
        },
    ));
    if has_physical_address {
        score += CheckId::ContentPhysicalAddress.weight();
    }

    CategoryResult::new(score, checks)
}

/// Heuristic postal-address detection: a number followed by a street word,
/// or a five-digit postal code.
pub(crate) fn has_postal_address(text: &str) -> bool {
    use regex::Regex;
    use std::sync::LazyLock;

    static STREET: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?i)\d+.*(?:rue|avenue|boulevard|street|road|ave|blvd|way|place)")
            .expect("valid street regex")
    });
    static POSTAL_CODE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d{5}").expect("valid postal code regex"));

    STREET.is_match(text) || POSTAL_CODE.is_match(text)
}
