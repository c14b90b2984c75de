//! Compliance analyzer: legal obligations and inbox-rendering requirements.
//!
//! Viewport and media-query tokens are searched in the raw source because
//! `<style>` blocks and head metadata may be rewritten during parsing.

use super::content::has_postal_address;
use crate::catalog::CheckId;
use crate::document::{attr, Document};
use crate::score::CategoryResult;

/// Minimum visible length for a pre-header to be useful as inbox preview.
const MIN_PREHEADER_CHARS: usize = 10;

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    let body_text = doc.body_text();

    let has_unsubscribe = doc.select("a").iter().any(|link| {
        let text = link.as_node().text_contents().to_lowercase();
        let href = attr(link, "href").unwrap_or_default().to_lowercase();
        text.contains("unsubscribe")
            || text.contains("désinscrire")
            || text.contains("désinscription")
            || href.contains("unsubscribe")
    });
    checks.push(CheckId::ComplianceUnsubscribe.result(
        has_unsubscribe,
        if has_unsubscribe {
            "Lien de désinscription présent - Conformité RGPD/CAN-SPAM"
        } else {
            "OBLIGATOIRE : Ajoutez un lien de désinscription clair"
        },
    ));
    if has_unsubscribe {
        score += CheckId::ComplianceUnsubscribe.weight();
    }

    let has_address = has_postal_address(&body_text);
    checks.push(CheckId::CompliancePostalAddress.result(
        has_address,
        if has_address {
            "Adresse postale détectée - Conformité CAN-SPAM Act"
        } else {
            "OBLIGATOIRE (USA) : Ajoutez votre adresse postale dans le footer"
        },
    ));
    if has_address {
        score += CheckId::CompliancePostalAddress.weight();
    }

    let preheader_len = doc
        .preheader_text()
        .map_or(0, |text| text.chars().count());
    let has_preheader = preheader_len > MIN_PREHEADER_CHARS;
    checks.push(CheckId::PreheaderOptimized.result(
        has_preheader,
        if has_preheader {
            format!("Pre-header présent ({preheader_len} caractères) - Améliore l'aperçu inbox")
        } else {
            "Ajoutez un pre-header (texte caché) pour optimiser l'aperçu dans les boîtes mail"
                .to_string()
        },
    ));
    if has_preheader {
        score += CheckId::PreheaderOptimized.weight();
    }

    let lower_text = body_text.to_lowercase();
    let has_sender_identity = doc.select_first(r#"[name="from"], meta[name="from"]"#).is_some()
        || lower_text.contains("de la part de")
        || lower_text.contains("envoyé par");
    checks.push(CheckId::SenderIdentity.result(
        has_sender_identity,
        if has_sender_identity {
            "Expéditeur identifiable - Transparence pour les destinataires"
        } else {
            "Clarifiez l'identité de l'expéditeur dans l'email"
        },
    ));
    if has_sender_identity {
        score += CheckId::SenderIdentity.weight();
    }

    let raw = doc.raw_source();
    let mobile_ready =
        raw.contains("viewport") || raw.contains("device-width") || raw.contains("@media");
    checks.push(CheckId::MobileOptimization.result(
        mobile_ready,
        if mobile_ready {
            "Meta viewport ou media queries détectés - Design responsive"
        } else {
            "Ajoutez une optimisation mobile (viewport meta tag ou media queries)"
        },
    ));
    if mobile_ready {
        score += CheckId::MobileOptimization.weight();
    }

    CategoryResult::new(score, checks)
}
