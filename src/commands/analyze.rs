//! `readmegen analyze [PATH] [--json]`

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::analyzer;

/// Analyze the project at `path` and print the table followed by the JSON
/// record, or only the JSON with `json`.
pub fn execute(path: &Path, json: bool) -> Result<()> {
    let meta = match analyzer::analyze(path) {
        Ok(meta) => meta,
        Err(e) => {
            println!("{} {e}", "Error analyzing project:".red());
            std::process::exit(1);
        }
    };

    let report = meta
        .to_json_pretty()
        .context("Failed to serialize analysis results")?;

    if json {
        println!("{report}");
        return Ok(());
    }

    print!("{}", meta.render_table());
    println!("{}", "JSON Output:".bold());
    println!("{report}");
    Ok(())
}
