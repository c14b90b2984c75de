//! **mailscore: deliverability and compliance scoring for HTML emails.**
//!
//! `mailscore` analyzes an HTML email (or a full `.eml` message) against the
//! conventions that determine whether it lands in the inbox: structure and
//! layout, textual content, images, links, payload weight and legal
//! compliance. Each category is scored out of 100 by a fixed catalogue of
//! weighted checks; the overall score is the unweighted mean of the category
//! percentages. An optional call to a SpamAssassin scoring service
//! (Postmark SpamCheck) contributes a seventh category.
//!
//! ## Core Concepts & Modules
//!
//! - **[`document`]**: the immutable [`Document`] value analyzed by the
//!   pipeline, holding both the parsed DOM and the raw source. Several
//!   checks deliberately read the raw source, since a sanitizing parser can
//!   hide exactly the content they look for.
//! - **[`catalog`]**: the static catalogue of checks with their categories,
//!   titles, weights and remediation priorities.
//! - **[`analyzers`]**: one pure function per category; missing content is
//!   reported as failing checks, never as errors.
//! - **[`spamcheck`]**: the external SpamAssassin adapter. A service failure
//!   becomes a failing category excluded from the overall mean.
//! - **[`score`]**: aggregation into an [`OverallResult`] and derivation of
//!   prioritized [`Recommendation`]s.
//! - **[`pipeline`]**: orchestration from file loading to the aggregated
//!   [`pipeline::Analysis`], and output plumbing.
//! - **[`reports`]**: terminal summary and JSON export.
//!
//! ## Getting Started
//!
//! ```no_run
//! use mailscore::document::Document;
//! use mailscore::pipeline::analyze;
//!
//! let html = std::fs::read_to_string("newsletter.html")?;
//! let doc = Document::parse(&html);
//! let analysis = analyze(&doc, None);
//! println!("score: {}/100", analysis.overall.total_score);
//! # Ok::<(), std::io::Error>(())
//! ```

#![allow(clippy::too_many_lines, clippy::module_name_repetitions)]

pub mod analyzers;
pub mod catalog;
pub mod cli;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod reports;
pub mod score;
pub mod spamcheck;

pub use document::Document;
pub use error::{MailScoreError, Result};
pub use score::{
    Category, CategoryResult, CheckResult, OverallResult, Priority, Recommendation, StatusTier,
};
