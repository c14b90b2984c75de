//! Summary report generator for shell output.

use crate::pipeline::Analysis;
use crate::score::{recommendations, Priority, StatusTier, DISPLAY_LIMIT};
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn tier_color(tier: StatusTier) -> &'static str {
    match tier {
        StatusTier::Excellent | StatusTier::Good => "green",
        StatusTier::Average => "yellow",
        StatusTier::Poor | StatusTier::Bad => "red",
    }
}

const fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "red",
        Priority::Medium => "yellow",
        Priority::Low => "dim",
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render an analysis as a compact terminal summary.
    #[must_use]
    pub fn generate(&self, analysis: &Analysis) -> String {
        let mut out = String::new();
        let overall = &analysis.overall;

        let headline = format!(
            "Score : {}/100 ({})",
            overall.total_score,
            overall.status_tier.label()
        );
        let _ = writeln!(
            out,
            "{}",
            self.color(&self.color(&headline, tier_color(overall.status_tier)), "bold")
        );
        let _ = writeln!(out);

        for (category, result) in &overall.categories {
            let percent = result.percent().round() as u32;
            let excluded = overall.excluded_from_mean.contains(category);
            let suffix = if excluded { " (exclu de la moyenne)" } else { "" };
            let _ = writeln!(
                out,
                "{} {percent}%{suffix}",
                self.color(&format!("{:<20}", category.name()), "cyan")
            );
            for check in &result.checks {
                let marker = if check.pass {
                    self.color("✓", "green")
                } else {
                    self.color("✗", "red")
                };
                let _ = writeln!(out, "  {marker} {} : {}", check.title, check.description);
            }
            let _ = writeln!(out);
        }

        if let Some(raw) = analysis.raw_spam_score {
            let _ = writeln!(out, "Score SpamAssassin brut : {raw:.1}/10");
            let _ = writeln!(out);
        }

        let recs = recommendations(&overall.categories, DISPLAY_LIMIT);
        if !recs.is_empty() {
            let _ = writeln!(out, "{}", self.color("Recommandations :", "bold"));
            for rec in &recs {
                let label = self.color(
                    &format!("[{}]", rec.priority.label()),
                    priority_color(rec.priority),
                );
                let _ = writeln!(out, "  {label} {}", rec.text);
            }
        }

        out
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}
