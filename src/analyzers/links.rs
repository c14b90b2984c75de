//! Links analyzer: anchor inventory, HTTPS coverage and unsubscribe signals.

use crate::catalog::CheckId;
use crate::document::{attr, Document};
use crate::score::CategoryResult;

const MAX_LINK_COUNT: usize = 30;

/// Anchor texts considered non-descriptive for accessibility.
const GENERIC_LINK_TEXTS: &[&str] = &["cliquez ici", "click here", "ici", "here"];

/// Anchor text or href fragments that identify an unsubscribe link.
const UNSUBSCRIBE_MARKERS: &[&str] = &[
    "unsubscribe",
    "désinscrire",
    "désinscription",
    "se désabonner",
];

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    let links = doc.select("a");
    let link_count = links.len();

    let optimal_count = link_count > 0 && link_count < MAX_LINK_COUNT;
    checks.push(CheckId::LinkCount.result(
        optimal_count,
        match link_count {
            0 => "Aucun lien - Ajoutez au moins un CTA".to_string(),
            n if n < MAX_LINK_COUNT => format!("{n} lien(s) - Quantité appropriée"),
            n => format!("{n} liens - Limitez à 30 maximum pour éviter les filtres spam"),
        },
    ));
    if optimal_count {
        score += CheckId::LinkCount.weight();
    } else if (MAX_LINK_COUNT..50).contains(&link_count) {
        score += 10;
    }

    let mut https_links = 0usize;
    let mut http_links = 0usize;
    for link in &links {
        if let Some(href) = attr(link, "href") {
            if href.starts_with("https://") {
                https_links += 1;
            } else if href.starts_with("http://") {
                http_links += 1;
            }
        }
    }

    let all_https = http_links == 0 && https_links > 0;
    checks.push(CheckId::HttpsLinks.result(
        all_https,
        if all_https {
            "Tous les liens utilisent HTTPS - Sécurisé et conforme".to_string()
        } else if http_links > 0 {
            format!(
                "{http_links} lien(s) en HTTP - UTILISEZ HTTPS pour tous les liens (sécurité + déliverabilité)"
            )
        } else {
            "Vérifiez les protocoles des liens".to_string()
        },
    ));
    if all_https {
        score += CheckId::HttpsLinks.weight();
    } else if http_links < 3 {
        score += 12;
    }

    let mut has_unsubscribe = false;
    let mut unsubscribe_position = "none";
    for (index, link) in links.iter().enumerate() {
        let text = link.as_node().text_contents().to_lowercase();
        let href = attr(link, "href").unwrap_or_default().to_lowercase();
        let msys_opt_out = attr(link, "data-msys-unsubscribe").as_deref() == Some("1");

        if UNSUBSCRIBE_MARKERS.iter().any(|m| text.contains(m))
            || href.contains("unsubscribe")
            || msys_opt_out
        {
            has_unsubscribe = true;
            // Expected in the last third of the email (footer)
            unsubscribe_position = if index as f64 > link_count as f64 * 0.66 {
                "footer"
            } else {
                "top"
            };
        }
    }

    checks.push(CheckId::UnsubscribeLink.result(
        has_unsubscribe,
        if has_unsubscribe {
            format!(
                "Lien de désinscription présent ({unsubscribe_position}) - Conformité légale (RGPD, CAN-SPAM)"
            )
        } else {
            "AJOUTEZ un lien de désinscription clair et visible (obligation légale)".to_string()
        },
    ));
    if has_unsubscribe {
        score += CheckId::UnsubscribeLink.weight();
    }

    let generic_texts: Vec<String> = links
        .iter()
        .map(|link| link.as_node().text_contents().trim().to_lowercase())
        .filter(|text| !text.is_empty() && GENERIC_LINK_TEXTS.contains(&text.as_str()))
        .collect();
    let descriptive = generic_texts.is_empty();
    checks.push(CheckId::DescriptiveLinkText.result(
        descriptive,
        if link_count == 0 {
            "Pas de liens".to_string()
        } else if descriptive {
            "Tous les liens ont un texte descriptif - Excellent pour l'accessibilité".to_string()
        } else {
            format!(
                "{} lien(s) avec texte générique (\"cliquez ici\") - Utilisez des textes descriptifs",
                generic_texts.len()
            )
        },
    ));
    if descriptive {
        score += CheckId::DescriptiveLinkText.weight();
    } else if generic_texts.len() < 3 {
        score += 8;
    }

    // Header detection over the raw source: the header only appears there
    // when the input came from a full message rather than a bare HTML body.
    let raw = doc.raw_source();
    let has_list_unsub = raw.contains("list-unsubscribe") || raw.contains("List-Unsubscribe");
    checks.push(CheckId::ListUnsubscribeHeader.result(
        has_list_unsub,
        if has_list_unsub {
            "List-Unsubscribe header détecté - One-click unsubscribe (Gmail, Yahoo)"
        } else {
            "Recommandé : Ajoutez un header List-Unsubscribe pour faciliter la désinscription"
        },
    ));
    if has_list_unsub {
        score += CheckId::ListUnsubscribeHeader.weight();
    }

    CategoryResult::new(score, checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_html(html: &str) -> CategoryResult {
        analyze(&Document::parse(html))
    }

    #[test]
    fn test_no_links_at_all() {
        let result = analyze_html("<html><body><p>Texte</p></body></html>");
        // count fails (+0), https fails but http<3 (+12), no unsubscribe (+0),
        // descriptive passes vacuously (+15), no header (+0)
        assert_eq!(result.score, 27);
        assert!(result.checks[0].description.contains("Aucun lien"));
    }

    #[test]
    fn test_clean_links_with_unsubscribe() {
        let html = r#"<html><body>
<a href="https://shop.test/offres">Voir nos offres</a>
<a href="https://shop.test/contact">Nous contacter</a>
<a href="https://shop.test/unsubscribe">Se désinscrire</a>
</body></html>"#;
        let result = analyze_html(html);
        // count +20, https +25, unsubscribe +30, descriptive +15, header absent
        assert_eq!(result.score, 90);
        let unsub = &result.checks[2];
        assert!(unsub.pass);
        assert!(unsub.description.contains("footer"));
    }

    #[test]
    fn test_http_links_fail_https_check() {
        let html = r#"<html><body>
<a href="http://insecure.test/a">Un</a>
<a href="http://insecure.test/b">Deux</a>
<a href="http://insecure.test/c">Trois</a>
</body></html>"#;
        let result = analyze_html(html);
        let https = &result.checks[1];
        assert!(!https.pass);
        assert!(https.description.contains("3 lien(s) en HTTP"));
    }

    #[test]
    fn test_msys_unsubscribe_attribute_detected() {
        let html = r#"<html><body><a href="https://x.test/o" data-msys-unsubscribe="1">Gérer</a></body></html>"#;
        let result = analyze_html(html);
        assert!(result.checks[2].pass);
    }

    #[test]
    fn test_generic_link_text_flagged() {
        let html = r#"<html><body>
<a href="https://x.test/a">cliquez ici</a>
<a href="https://x.test/b">Notre catalogue</a>
</body></html>"#;
        let result = analyze_html(html);
        let descriptive = &result.checks[3];
        assert!(!descriptive.pass);
        assert!(descriptive.description.contains("1 lien(s) avec texte générique"));
    }

    #[test]
    fn test_list_unsubscribe_header_in_raw_source() {
        let html = "List-Unsubscribe: <mailto:u@x.test>\n<html><body><a href=\"https://x.test\">Lien</a></body></html>";
        let result = analyze_html(html);
        assert!(result.checks[4].pass);
    }

    #[test]
    fn test_too_many_links_partial_credit() {
        let anchors: String = (0..35)
            .map(|i| format!(r#"<a href="https://x.test/{i}">Lien {i}</a>"#))
            .collect();
        let result = analyze_html(&format!("<html><body>{anchors}</body></html>"));
        let count = &result.checks[0];
        assert!(!count.pass);
        assert!(count.description.contains("35 liens"));
    }
}
