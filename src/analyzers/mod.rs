//! Category analyzers.
//!
//! Each analyzer is a pure function of the [`Document`]: no I/O, no shared
//! state, deterministic for a fixed input. Missing or empty DOM content is
//! reported as failing checks, never as errors. Analyzers may run in any
//! order; [`run_all`] evaluates them in report display order.

pub mod compliance;
pub mod content;
pub mod images;
pub mod links;
pub mod performance;
pub mod structure;

use crate::document::Document;
use crate::score::{Category, CategoryResult};
use indexmap::IndexMap;

/// Run the six local analyzers against a document.
///
/// The returned map is in report display order. The external spam-score
/// category is not produced here; see [`crate::spamcheck`].
pub fn run_all(doc: &Document) -> IndexMap<Category, CategoryResult> {
    let mut results = IndexMap::new();
    results.insert(Category::Structure, structure::analyze(doc));
    results.insert(Category::Content, content::analyze(doc));
    results.insert(Category::Images, images::analyze(doc));
    results.insert(Category::Links, links::analyze(doc));
    results.insert(Category::Performance, performance::analyze(doc));
    results.insert(Category::Compliance, compliance::analyze(doc));
    results
}

/// Parse the leading unsigned integer of a width value such as `640`,
/// `640px` or `640 px`. Mirrors lenient attribute parsing: trailing
/// garbage is ignored, a non-numeric prefix yields `None`.
pub(crate) fn parse_leading_u32(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits: String = trimmed.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}
