use anyhow::Result;
use clap::CommandFactory;
use readmegen::commands::badges::BadgeOptions;
use readmegen::commands::{analyze, badges, validate};
use readmegen::completions::write_completions;
use std::io;

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze { path, json } => analyze::execute(&path, json),
        Commands::Badges {
            input,
            from,
            username,
            branch,
            workflow,
            project_name,
            coverage,
            config,
        } => badges::execute(BadgeOptions {
            input,
            from,
            username,
            branch,
            workflow,
            project_name,
            coverage,
            config,
        }),
        Commands::Validate { readme, json } => validate::execute(&readme, json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            write_completions(&mut cmd, shell, &mut io::stdout());
            Ok(())
        }
    }
}
