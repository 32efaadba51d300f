//! The individual README checks.
//!
//! Every check reads the document and appends findings to the report; none
//! of them looks at another's output.

use regex::Regex;
use std::sync::LazyLock;

use super::report::ValidationReport;

/// Only the first lines are searched for the H1 title.
const TITLE_SCAN_LINES: usize = 10;
const MIN_TITLE_LEN: usize = 2;
const MAX_TITLE_LEN: usize = 80;

const DESCRIPTION_SCAN_LINES: usize = 20;
const MIN_DESCRIPTION_LEN: usize = 20;

const MIN_LINES: usize = 20;
const MAX_LINES: usize = 1000;
const MIN_WORDS: usize = 50;

const LONG_LINE: usize = 120;
/// More long lines than this earns a suggestion.
const LONG_LINE_TOLERANCE: usize = 10;

/// Placeholder links listed in the warning; the rest are only counted.
const PLACEHOLDER_SHOWN: usize = 3;
const PLACEHOLDER_MARKERS: &[&str] = &["example.com", "your-", "placeholder", "todo"];

const FENCE: &str = "```";

static REQUIRED_SECTIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "Installation",
            Regex::new(r"(?i)##\s+(Installation|Getting Started|Setup)")
                .expect("Invalid regex pattern"),
        ),
        (
            "Usage",
            Regex::new(r"(?i)##\s+(Usage|Quick Start|Examples)").expect("Invalid regex pattern"),
        ),
        (
            "License",
            Regex::new(r"(?i)##\s+License").expect("Invalid regex pattern"),
        ),
    ]
});

static RECOMMENDED_SECTIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "Contributing",
            Regex::new(r"(?i)##\s+(Contributing|Contribution)").expect("Invalid regex pattern"),
        ),
        (
            "Features",
            Regex::new(r"(?i)##\s+Features").expect("Invalid regex pattern"),
        ),
    ]
});

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^\)]*)\)").expect("Invalid regex pattern")
});

/// README text plus its lines, split once for all checks.
pub struct Document<'a> {
    pub text: &'a str,
    pub lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: text.split('\n').collect(),
        }
    }

    fn heading_levels(&self) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|line| line.starts_with('#'))
            .map(|line| line.len() - line.trim_start_matches('#').len())
            .collect()
    }
}

pub type Check = fn(&Document<'_>, &mut ValidationReport);

/// Checks in the order their findings appear in the report.
pub const CHECKS: &[(&str, Check)] = &[
    ("title", check_title),
    ("description", check_description),
    ("sections", check_sections),
    ("code_blocks", check_code_blocks),
    ("links", check_links),
    ("length", check_length),
    ("formatting", check_formatting),
];

pub fn check_title(doc: &Document<'_>, report: &mut ValidationReport) {
    let title_line = doc
        .lines
        .iter()
        .take(TITLE_SCAN_LINES)
        .find(|line| line.starts_with("# ") && line.len() > 2);

    let Some(line) = title_line else {
        report.issue("Missing H1 title (# Project Name)");
        return;
    };

    let title = line.trim_start_matches(['#', ' ']).trim();
    let len = title.chars().count();
    if len < MIN_TITLE_LEN {
        report.issue("Title is too short");
    } else if len > MAX_TITLE_LEN {
        report.warning(format!("Title is very long (>{MAX_TITLE_LEN} characters)"));
    }
}

pub fn check_description(doc: &Document<'_>, report: &mut ValidationReport) {
    let has_description = doc.lines.iter().take(DESCRIPTION_SCAN_LINES).any(|line| {
        !line.starts_with('#')
            && !line.starts_with("[![")
            && !line.starts_with("![")
            && line.trim().chars().count() > MIN_DESCRIPTION_LEN
    });

    if !has_description {
        report.issue("Missing project description (add 1-2 sentences after title)");
    }
}

pub fn check_sections(doc: &Document<'_>, report: &mut ValidationReport) {
    for (name, pattern) in REQUIRED_SECTIONS.iter() {
        if !pattern.is_match(doc.text) {
            report.issue(format!("Missing required section: {name}"));
        }
    }
    for (name, pattern) in RECOMMENDED_SECTIONS.iter() {
        if !pattern.is_match(doc.text) {
            report.warning(format!("Missing recommended section: {name}"));
        }
    }
}

/// Fence markers must pair up. Only opening fences are checked for a
/// language tag.
pub fn check_code_blocks(doc: &Document<'_>, report: &mut ValidationReport) {
    if doc.text.matches(FENCE).count() % 2 != 0 {
        report.issue("Unclosed code block (missing closing ```)");
    }

    let mut in_block = false;
    let mut without_language = 0;
    for line in &doc.lines {
        let Some(info) = line.trim_start().strip_prefix(FENCE) else {
            continue;
        };
        if !in_block && info.trim().is_empty() {
            without_language += 1;
        }
        in_block = !in_block;
    }

    if without_language > 0 {
        report.suggestion(format!(
            "{without_language} code block(s) without language specification"
        ));
    }
}

pub fn check_links(doc: &Document<'_>, report: &mut ValidationReport) {
    let mut empty = 0;
    let mut placeholders = Vec::new();

    for caps in LINK.captures_iter(doc.text) {
        let text = &caps[1];
        let url = &caps[2];

        if url.trim().is_empty() {
            empty += 1;
        }
        let lowered = url.to_lowercase();
        if PLACEHOLDER_MARKERS.iter().any(|m| lowered.contains(m)) {
            placeholders.push(format!("{text} -> {url}"));
        }
    }

    if empty > 0 {
        report.issue(format!("{empty} empty link(s) found"));
    }
    if !placeholders.is_empty() {
        let listed: Vec<String> = placeholders
            .iter()
            .take(PLACEHOLDER_SHOWN)
            .map(|link| format!("     - {link}"))
            .collect();
        report.warning(format!(
            "{} placeholder link(s) found:\n{}",
            placeholders.len(),
            listed.join("\n")
        ));
    }
}

pub fn check_length(doc: &Document<'_>, report: &mut ValidationReport) {
    let line_count = doc.lines.len();
    if line_count < MIN_LINES {
        report.warning(format!("README is very short (<{MIN_LINES} lines)"));
    } else if line_count > MAX_LINES {
        report.suggestion(format!(
            "README is very long (>{MAX_LINES} lines). Consider splitting into multiple docs"
        ));
    }

    if doc.text.split_whitespace().count() < MIN_WORDS {
        report.issue(format!("README is too short (<{MIN_WORDS} words)"));
    }
}

pub fn check_formatting(doc: &Document<'_>, report: &mut ValidationReport) {
    let levels = doc.heading_levels();

    if levels.windows(2).any(|pair| pair[1] > pair[0] + 1) {
        report.warning("Skipped heading level (e.g., H1 -> H3 without H2)");
    }

    match levels.iter().filter(|&&level| level == 1).count() {
        0 => report.issue("No H1 heading found"),
        1 => {}
        n => report.warning(format!("Multiple H1 headings ({n}). Use only one H1 for title")),
    }

    let long_lines = doc
        .lines
        .iter()
        .filter(|line| line.chars().count() > LONG_LINE && !line.starts_with("http"))
        .count();
    if long_lines > LONG_LINE_TOLERANCE {
        report.suggestion(format!(
            "{long_lines} lines are very long (>{LONG_LINE} chars)"
        ));
    }
}
