//! Result types shared by analyzers, aggregation and reporting.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Maximum raw score of every category. Uniform so that category scores can
/// be averaged as plain percentages.
pub const MAX_CATEGORY_SCORE: u32 = 100;

/// Analysis categories, in report display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Category {
    Structure,
    Content,
    Images,
    Links,
    Performance,
    Compliance,
    SpamScore,
}

impl Category {
    /// Human-readable category name (report headings)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Content => "Contenu",
            Self::Images => "Images",
            Self::Links => "Liens",
            Self::Performance => "Performance",
            Self::Compliance => "Conformité",
            Self::SpamScore => "Score SpamAssassin",
        }
    }

    /// The six local analyzer categories, excluding the external spam score.
    #[must_use]
    pub const fn analyzers() -> &'static [Category] {
        &[
            Self::Structure,
            Self::Content,
            Self::Images,
            Self::Links,
            Self::Performance,
            Self::Compliance,
        ]
    }
}

/// Remediation priority of a check, attached to its catalogue definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: lower sorts first.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "HAUTE",
            Self::Medium => "MOYENNE",
            Self::Low => "BASSE",
        }
    }
}

/// A single named pass/fail evaluation with human-readable messaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check passed
    pub pass: bool,
    /// Check title (stable, used as report heading)
    pub title: String,
    /// Human-readable outcome message
    pub description: String,
    /// Optional secondary message (e.g. remediation guidance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux_description: Option<String>,
    /// Remediation priority when the check fails
    pub priority: Priority,
}

impl CheckResult {
    /// Create a check result.
    pub fn new(
        pass: bool,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            pass,
            title: title.into(),
            description: description.into(),
            aux_description: None,
            priority,
        }
    }

    /// Attach a secondary description.
    #[must_use]
    pub fn with_aux(mut self, aux: impl Into<String>) -> Self {
        self.aux_description = Some(aux.into());
        self
    }
}

/// Score and check results of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Raw score in `0..=max_score`
    pub score: u32,
    /// Always [`MAX_CATEGORY_SCORE`]
    pub max_score: u32,
    /// Check results in declaration order
    pub checks: Vec<CheckResult>,
}

impl CategoryResult {
    /// Create a category result, clamping the score into bounds.
    #[must_use]
    pub fn new(score: u32, checks: Vec<CheckResult>) -> Self {
        Self {
            score: score.min(MAX_CATEGORY_SCORE),
            max_score: MAX_CATEGORY_SCORE,
            checks,
        }
    }

    /// Score as a percentage of the category maximum.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.max_score) * 100.0
        }
    }

    /// Iterator over failing checks.
    pub fn failing_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.pass)
    }
}

/// Qualitative tier of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StatusTier {
    /// 90-100
    Excellent,
    /// 75-89
    Good,
    /// 60-74
    Average,
    /// 40-59
    Poor,
    /// 0-39
    Bad,
}

impl StatusTier {
    /// Map an overall score to its tier.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Average,
            40..=59 => Self::Poor,
            _ => Self::Bad,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Bon",
            Self::Average => "Moyen",
            Self::Poor => "Faible",
            Self::Bad => "Mauvais",
        }
    }
}

/// Aggregated analysis outcome: overall score, tier and per-category results.
///
/// Recomputed on every analysis run, never persisted across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct OverallResult {
    /// Rounded unweighted mean of included category percentages
    pub total_score: u8,
    /// Qualitative tier of `total_score`
    pub status_tier: StatusTier,
    /// Per-category results in display order
    pub categories: IndexMap<Category, CategoryResult>,
    /// Categories present in `categories` but excluded from the mean
    /// (the spam-score category when the external service failed)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_from_mean: Vec<Category>,
}

/// A prioritized remediation action derived from a failing check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Remediation text (the failing check's description)
    pub text: String,
    /// Priority tier
    pub priority: Priority,
}
