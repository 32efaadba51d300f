//! `readmegen validate <README> [--json]`

use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::Path;

use crate::error::Error;
use crate::utils::display_path;
use crate::validator;

/// Validate a README and exit 0 when it has no issues, 1 otherwise.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let report = match validator::validate_file(path) {
        Ok(report) => report,
        Err(e @ Error::ReadmeNotFound(_)) => {
            println!("{} {e}", "Error:".red());
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("Failed to validate README"),
    };

    if json {
        let out = report
            .to_json_pretty()
            .context("Failed to serialize validation report")?;
        println!("{out}");
    } else {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        print!("{}", report.render(&display_path(path, &cwd)));
    }

    std::process::exit(if report.is_valid() { 0 } else { 1 });
}
