//! Overall score derivation.
//!
//! The overall score is the unweighted mean of category percentages. A
//! category marked excluded (the external spam score after a service
//! failure) stays visible in the result but changes the divisor instead of
//! dragging the mean down as a zero.

use super::types::{Category, CategoryResult, OverallResult, StatusTier};
use indexmap::IndexMap;
use tracing::debug;

/// Aggregate category results into the overall score and tier.
///
/// Pure and idempotent: identical inputs always produce the identical
/// result. An empty or fully-excluded input aggregates to zero.
pub fn aggregate(
    categories: IndexMap<Category, CategoryResult>,
    excluded_from_mean: Vec<Category>,
) -> OverallResult {
    let included: Vec<f64> = categories
        .iter()
        .filter(|(category, _)| !excluded_from_mean.contains(category))
        .map(|(_, result)| result.percent())
        .collect();

    let total_score = if included.is_empty() {
        0
    } else {
        let mean = included.iter().sum::<f64>() / included.len() as f64;
        // Round half up, clamped to the u8 score range
        mean.round().clamp(0.0, 100.0) as u8
    };

    let status_tier = StatusTier::from_score(total_score);
    debug!(
        total_score,
        tier = status_tier.label(),
        included = included.len(),
        excluded = excluded_from_mean.len(),
        "aggregated category scores"
    );

    OverallResult {
        total_score,
        status_tier,
        categories,
        excluded_from_mean,
    }
}
