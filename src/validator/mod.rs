//! README structure and quality checks.
//!
//! [`validate`] runs every check in [`checks::CHECKS`] over the text and
//! collects their findings into a [`ValidationReport`]. Findings are data,
//! never errors; only loading the file can fail.

pub mod checks;
pub mod report;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use report::{Rating, ValidationReport};

/// Run all checks over README text.
pub fn validate(text: &str) -> ValidationReport {
    let doc = checks::Document::new(text);
    let mut report = ValidationReport::default();

    for (name, check) in checks::CHECKS {
        let before = report.finding_count();
        check(&doc, &mut report);
        tracing::debug!(check = name, findings = report.finding_count() - before, "check finished");
    }

    report
}

/// Read and validate the README at `path`.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    if !path.is_file() {
        return Err(Error::ReadmeNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate(&text))
}
