//! Score aggregation and remediation advice.

pub mod aggregate;
pub mod recommend;
mod types;

pub use aggregate::aggregate;
pub use recommend::{recommendations, DISPLAY_LIMIT, EXPORT_LIMIT};
pub use types::{
    Category, CategoryResult, CheckResult, OverallResult, Priority, Recommendation, StatusTier,
    MAX_CATEGORY_SCORE,
};
