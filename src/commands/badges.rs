//! `readmegen badges [INPUT.json] [--from DIR] [...]`
//!
//! Values are layered lowest to highest: config defaults, analysis of
//! `--from`, the input JSON, then explicit flags.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::analyzer;
use crate::badges::{self, BadgeContext, CoverageService};
use crate::config::Config;

/// Options of the `badges` subcommand.
#[derive(Debug, Clone, Default)]
pub struct BadgeOptions {
    pub input: Option<PathBuf>,
    pub from: Option<PathBuf>,
    pub username: Option<String>,
    pub branch: Option<String>,
    pub workflow: Option<String>,
    pub project_name: Option<String>,
    pub coverage: Option<String>,
    pub config: Option<PathBuf>,
}

impl BadgeOptions {
    fn flag_overrides(&self) -> BadgeContext {
        BadgeContext {
            project_name: self.project_name.clone(),
            username: self.username.clone(),
            branch: self.branch.clone(),
            workflow_name: self.workflow.clone(),
            ..Default::default()
        }
    }
}

pub fn execute(options: BadgeOptions) -> Result<()> {
    if options.input.is_none() && options.from.is_none() {
        print_usage();
        std::process::exit(1);
    }

    let (ctx, coverage) = match build_context(&options) {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red());
            std::process::exit(1);
        }
    };

    let specs = match coverage {
        Some(service) => badges::plan_with_coverage(&ctx, service),
        None => badges::plan(&ctx),
    };
    let rendered = badges::rendered(specs);
    if !rendered.is_empty() {
        println!("{}", rendered.join("\n"));
    }
    Ok(())
}

/// Merge every input source into one context, plus the coverage service
/// to append, if any.
pub fn build_context(options: &BadgeOptions) -> Result<(BadgeContext, Option<CoverageService>)> {
    let config = load_config(options)?;
    let mut ctx = config.badge_defaults();

    if let Some(dir) = &options.from {
        let meta = analyzer::analyze(dir)
            .with_context(|| format!("Failed to analyze {}", dir.display()))?;
        ctx = ctx.with_overrides(BadgeContext::from_metadata(&meta));
    }

    if let Some(input) = &options.input {
        ctx = ctx.with_overrides(BadgeContext::load(input)?);
    }

    ctx = ctx.with_overrides(options.flag_overrides());

    let coverage = match &options.coverage {
        Some(name) => Some(name.parse::<CoverageService>()?),
        None => config.badges.coverage,
    };

    Ok((ctx, coverage))
}

fn load_config(options: &BadgeOptions) -> Result<Config> {
    let config = match (&options.config, &options.from) {
        (Some(path), _) => Config::load(path)?,
        (None, Some(dir)) => Config::load_from_root(dir)?,
        (None, None) => Config::load_from_root(Path::new("."))?,
    };
    Ok(config)
}

fn print_usage() {
    println!("Usage: readmegen badges <project_info.json> [--from DIR]");
    println!("\n{}", "Example project_info.json:".bold());
    println!(
        r#"{{
  "project_name": "my-awesome-lib",
  "username": "github-user",
  "language": "python",
  "package_manager": "pypi",
  "license": "MIT",
  "ci_service": "github-actions",
  "branch": "main"
}}"#
    );
}
