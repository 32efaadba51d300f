use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

use crate::models::constants::{score, DIVIDER_WIDTH};

/// Findings of a README validation run.
///
/// Checks only ever append. The score is derived from the counts rather
/// than stored, so it can never drift from the findings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Score band shown next to the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl Rating {
    pub fn from_score(value: u8) -> Self {
        if value >= score::EXCELLENT {
            Rating::Excellent
        } else if value >= score::GOOD {
            Rating::Good
        } else if value >= score::FAIR {
            Rating::Fair
        } else {
            Rating::NeedsImprovement
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Rating::Excellent => "🎉",
            Rating::Good => "👍",
            Rating::Fair => "😐",
            Rating::NeedsImprovement => "😞",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::Fair => write!(f, "Fair"),
            Rating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    valid: bool,
    issues: &'a [String],
    warnings: &'a [String],
    suggestions: &'a [String],
    score: u8,
}

impl ValidationReport {
    pub(crate) fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    pub(crate) fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub(crate) fn suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    /// Total number of findings across all three categories.
    pub(crate) fn finding_count(&self) -> usize {
        self.issues.len() + self.warnings.len() + self.suggestions.len()
    }

    /// `100 - 10 * issues - 3 * warnings`, clamped to `0..=100`.
    pub fn score(&self) -> u8 {
        let penalty = (self.issues.len() as u32).saturating_mul(score::ISSUE_PENALTY)
            + (self.warnings.len() as u32).saturating_mul(score::WARNING_PENALTY);
        100u32.saturating_sub(penalty).min(100) as u8
    }

    /// A README is valid when it has no issues; warnings and suggestions
    /// never fail it.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score())
    }

    /// JSON object with `valid`, the three finding lists and `score`.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ReportJson {
            valid: self.is_valid(),
            issues: &self.issues,
            warnings: &self.warnings,
            suggestions: &self.suggestions,
            score: self.score(),
        })
    }

    /// Console report for the README at `path`.
    pub fn render(&self, path: &str) -> String {
        let divider = "=".repeat(DIVIDER_WIDTH);
        let rating = self.rating();
        let mut out = String::new();

        let _ = writeln!(out, "\n{divider}");
        let _ = writeln!(out, "{} {path}", "README Validation Results:".bold());
        let _ = writeln!(out, "{divider}");
        let _ = writeln!(
            out,
            "\nScore: {}/100 {} ({rating})",
            self.score().to_string().bold(),
            rating.emoji()
        );

        if self.issues.is_empty() {
            let _ = writeln!(out, "\n{}", "✅ No critical issues found!".green());
        } else {
            render_section(&mut out, "❌", "Issues", &self.issues);
        }
        render_section(&mut out, "⚠️ ", "Warnings", &self.warnings);
        render_section(&mut out, "💡", "Suggestions", &self.suggestions);

        let _ = writeln!(out, "\n{divider}");
        if self.is_valid() {
            let _ = writeln!(out, "{}", "✅ README validation passed!".green().bold());
        } else {
            let _ = writeln!(
                out,
                "{}",
                "❌ README validation failed. Please fix the issues above."
                    .red()
                    .bold()
            );
        }
        let _ = writeln!(out, "{divider}");
        out
    }
}

fn render_section(out: &mut String, marker: &str, title: &str, findings: &[String]) {
    if findings.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{marker} {}", format!("{title} ({}):", findings.len()).bold());
    for finding in findings {
        let _ = writeln!(out, "   {marker} {finding}");
    }
}
