//! Remediation recommendations derived from failing checks.

use super::types::{Category, CategoryResult, Recommendation};
use indexmap::IndexMap;

/// Maximum recommendations shown in the terminal summary.
pub const DISPLAY_LIMIT: usize = 8;

/// Maximum recommendations carried in exported reports.
pub const EXPORT_LIMIT: usize = 10;

/// Collect failing checks into prioritized recommendations.
///
/// Each failing check contributes its description verbatim, carrying the
/// priority attached to its catalogue definition. The sort is stable: within
/// a priority tier, category-then-check declaration order is preserved.
/// Results are truncated to `limit` entries after sorting.
pub fn recommendations(
    categories: &IndexMap<Category, CategoryResult>,
    limit: usize,
) -> Vec<Recommendation> {
    let mut items: Vec<Recommendation> = categories
        .values()
        .flat_map(CategoryResult::failing_checks)
        .map(|check| Recommendation {
            text: check.description.clone(),
            priority: check.priority,
        })
        .collect();

    items.sort_by_key(|r| r.priority.rank());
    items.truncate(limit);
    items
}
