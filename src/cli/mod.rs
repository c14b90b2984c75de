//! CLI command handlers.

mod analyze;

pub use analyze::{run_analyze, AnalyzeConfig};
