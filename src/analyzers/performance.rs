//! Performance analyzer: payload weight, external requests and active content.
//!
//! Script detection deliberately cross-checks the raw source against the DOM:
//! sanitizing parsers drop `<script>` elements, and entity-escaped markup
//! never reaches the DOM at all, so each detection channel is counted
//! independently and the highest count wins.

use crate::catalog::CheckId;
use crate::document::Document;
use crate::score::CategoryResult;
use regex::Regex;
use std::sync::LazyLock;

static RAW_EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\son[a-z]+\s*=\s*["']"#).expect("valid handler regex")
});

static JAVASCRIPT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:href|src)\s*=\s*["']\s*javascript:"#).expect("valid js url regex")
});

/// Gmail clips messages above this HTML size.
const GMAIL_CLIP_LIMIT_KB: f64 = 102.0;
const TOTAL_WEIGHT_LIMIT_KB: f64 = 500.0;
const MAX_EXTERNAL_REQUESTS: usize = 20;

pub fn analyze(doc: &Document) -> CategoryResult {
    let mut checks = Vec::new();
    let mut score = 0;

    let html_size_kb = doc.byte_size() as f64 / 1024.0;
    let under_gmail_limit = html_size_kb < GMAIL_CLIP_LIMIT_KB;
    checks.push(CheckId::HtmlWeight.result(
        under_gmail_limit,
        if under_gmail_limit {
            format!("{html_size_kb:.1} KB - Sous la limite Gmail (102KB)")
        } else {
            format!("{html_size_kb:.1} KB - DÉPASSÉ! Gmail va tronquer l'email ([Message clipped])")
        },
    ));
    if under_gmail_limit {
        score += CheckId::HtmlWeight.weight();
    } else if html_size_kb < 120.0 {
        score += 20;
    } else {
        score += 5;
    }

    let under_total_limit = html_size_kb < TOTAL_WEIGHT_LIMIT_KB;
    checks.push(CheckId::TotalWeight.result(
        under_total_limit,
        if under_total_limit {
            format!("{html_size_kb:.1} KB - Excellent pour éco-conception")
        } else {
            format!("{html_size_kb:.1} KB - Optimisez le poids (max 500KB recommandé)")
        },
    ));
    if under_total_limit {
        score += CheckId::TotalWeight.weight();
    } else if html_size_kb < 1000.0 {
        score += 10;
    }

    let total_requests = doc.count(r#"img[src^="http"]"#)
        + doc.count(r#"link[href^="http"]"#)
        + doc.count(r#"script[src^="http"]"#);
    let limited_requests = total_requests < MAX_EXTERNAL_REQUESTS;
    checks.push(CheckId::ExternalRequests.result(
        limited_requests,
        format!(
            "{total_requests} requête(s) externe(s) - {}",
            if limited_requests {
                "Optimal"
            } else {
                "Réduisez le nombre de ressources"
            }
        ),
    ));
    if limited_requests {
        score += CheckId::ExternalRequests.weight();
    } else if total_requests < 40 {
        score += 8;
    }

    let script_count = detect_scripts(doc);
    let no_scripts = script_count == 0;
    checks.push(CheckId::NoJavascript.result(
        no_scripts,
        if no_scripts {
            "Pas de JavaScript - Conforme aux limitations email".to_string()
        } else {
            format!(
                "{script_count} script(s) détecté(s) - JavaScript est bloqué par la plupart des clients mail"
            )
        },
    ));
    if no_scripts {
        score += CheckId::NoJavascript.weight();
    }

    let form_count = doc.count("form");
    let no_forms = form_count == 0;
    checks.push(CheckId::NoForms.result(
        no_forms,
        if no_forms {
            "Pas de formulaires - Conforme".to_string()
        } else {
            format!("{form_count} formulaire(s) - Non supportés par la plupart des clients mail")
        },
    ));
    if no_forms {
        score += CheckId::NoForms.weight();
    }

    CategoryResult::new(score, checks)
}

/// Count script content across every channel an email client could execute.
///
/// Tag presence is the maximum of four independent detections so that a
/// parser dropping `<script>` elements cannot hide them; event handlers and
/// `javascript:` URLs are counted on top.
fn detect_scripts(doc: &Document) -> usize {
    let raw = doc.raw_source().to_lowercase();

    let tag_count = doc
        .count("script")
        .max(raw.matches("<script").count())
        .max(raw.matches("</script").count())
        .max(raw.matches("&lt;script").count());

    let dom_handlers: usize = doc
        .select("*")
        .iter()
        .map(|el| {
            el.attributes
                .borrow()
                .map
                .keys()
                .filter(|name| name.local.as_ref().starts_with("on"))
                .count()
        })
        .sum();
    let raw_handlers = RAW_EVENT_HANDLER.find_iter(doc.raw_source()).count();
    let handler_count = dom_handlers.max(raw_handlers);

    let js_url_count = JAVASCRIPT_URL.find_iter(doc.raw_source()).count();

    tag_count + handler_count + js_url_count
}
