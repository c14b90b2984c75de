//! Structure analyzer: HTML skeleton and layout conventions.
//!
//! Base64 image sources are counted against the raw source because a parser
//! may rewrite or drop `src` attributes; everything else reads the DOM.

use super::parse_leading_u32;
use crate::catalog::CheckId;
use crate::document::{attr, Document};
use crate::score::CategoryResult;
use regex::Regex;
use std::sync::LazyLock;

static BASE64_IMG_SRC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)src=["']data:image"#).expect("valid base64 src regex"));

// Anchored so that max-width/min-width do not count as a container width
static STYLE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[;\s])width\s*:\s*([0-9]+)").expect("valid style width regex")
});

/// Container width range considered email-safe.
const MIN_WIDTH_PX: u32 = 600;
const MAX_WIDTH_PX: u32 = 650;

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    // DOCTYPE HTML5 (raw source: the parser inserts one when missing)
    let has_doctype = doc.raw_source().to_lowercase().contains("<!doctype html");
    checks.push(CheckId::Doctype.result(
        has_doctype,
        if has_doctype {
            "DOCTYPE HTML5 présent - Standard moderne"
        } else {
            "Ajoutez <!DOCTYPE html> pour une meilleure compatibilité"
        },
    ));
    if has_doctype {
        score += CheckId::Doctype.weight();
    }

    let has_title = doc.select_first("title").is_some();
    checks.push(CheckId::TitleTag.result(
        has_title,
        if has_title {
            "La balise title est présente"
        } else {
            "Ajoutez une balise <title> pour identifier l'email"
        },
    ));
    if has_title {
        score += CheckId::TitleTag.weight();
    }

    // Tables remain the layout standard across email clients
    let table_count = doc.count("table");
    let has_tables = table_count > 0;
    checks.push(CheckId::LayoutTables.result(
        has_tables,
        if has_tables {
            format!("{table_count} tableau(x) - Standard pour layout email")
        } else {
            "Utilisez des tableaux pour la mise en page (meilleure compatibilité)".to_string()
        },
    ));
    if has_tables {
        score += CheckId::LayoutTables.weight();
    }

    let has_external_css = doc.count(r#"link[rel="stylesheet"]"#) > 0;
    checks.push(CheckId::NoExternalCss.result(
        !has_external_css,
        if has_external_css {
            "CSS externe détecté - Utilisez plutôt du CSS inline"
        } else {
            "Pas de CSS externe - Excellent"
        },
    ));
    if !has_external_css {
        score += CheckId::NoExternalCss.weight();
    }

    let inline_styles = doc.count("[style]");
    checks.push(CheckId::InlineCss.result(
        inline_styles > 0,
        if inline_styles > 0 {
            format!("{inline_styles} éléments avec style inline - Bonne pratique")
        } else {
            "Ajoutez du CSS inline pour une meilleure compatibilité".to_string()
        },
    ));
    if inline_styles > 0 {
        score += CheckId::InlineCss.weight();
    }

    let current_width = container_width(doc);
    let has_optimal_width =
        current_width.is_some_and(|w| (MIN_WIDTH_PX..=MAX_WIDTH_PX).contains(&w));
    checks.push(CheckId::OptimalWidth.result(
        has_optimal_width,
        match current_width {
            Some(w) if has_optimal_width => format!("{w}px - Largeur optimale pour emails"),
            Some(w) => format!("{w}px - Recommandé : 600-650px max"),
            None => "Définissez une largeur de 600-650px pour compatibilité mobile".to_string(),
        },
    ));
    if has_optimal_width {
        score += CheckId::OptimalWidth.weight();
    }

    let has_preheader = doc
        .preheader_text()
        .is_some_and(|text| !text.is_empty());
    checks.push(CheckId::Preheader.result(
        has_preheader,
        if has_preheader {
            "Pre-header détecté - Optimise l'aperçu inbox"
        } else {
            "Ajoutez un pre-header caché pour améliorer l'aperçu dans les clients mail"
        },
    ));
    if has_preheader {
        score += CheckId::Preheader.weight();
    }

    let base64_count = BASE64_IMG_SRC.find_iter(doc.raw_source()).count();
    let has_base64 = base64_count > 0;
    checks.push(CheckId::NoBase64Images.result(
        !has_base64,
        if has_base64 {
            format!("{base64_count} image(s) Base64 - Alourdit l'email, hébergez-les en ligne")
        } else {
            "Pas d'images Base64 - Excellent".to_string()
        },
    ));
    if !has_base64 {
        score += CheckId::NoBase64Images.weight();
    }

    CategoryResult::new(score, checks)
}

/// Width of the main layout container, from the `width` attribute of the
/// first top-level table, falling back to an inline `width:` style.
fn container_width(doc: &Document) -> Option<u32> {
    let container =
        doc.select_first("body > table, body > div > table, body > center > table")?;

    if let Some(width_attr) = attr(&container, "width") {
        if let Some(px) = parse_leading_u32(&width_attr) {
            return Some(px);
        }
    }

    let style = attr(&container, "style")?;
    STYLE_WIDTH
        .captures(&style)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
