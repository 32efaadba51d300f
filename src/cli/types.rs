use clap::{Parser, Subcommand};
use readmegen::completions::Shell;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Infer project metadata, render README badges and lint READMEs", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect language, package manager, license and more for a project
    Analyze {
        /// Project root to analyze
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print only the JSON record
        #[arg(long)]
        json: bool,
    },

    /// Render markdown badges from a JSON description and/or an analyzed project
    Badges {
        /// JSON file with project_name, username, language, package_manager,
        /// license, ci_service, branch and workflow_name
        input: Option<PathBuf>,

        /// Analyze this project directory for badge values
        #[arg(long, value_name = "DIR")]
        from: Option<PathBuf>,

        /// GitHub user or organization
        #[arg(short, long)]
        username: Option<String>,

        /// Branch shown by build and coverage badges (default: main)
        #[arg(short, long)]
        branch: Option<String>,

        /// GitHub Actions workflow name (default: CI)
        #[arg(short, long)]
        workflow: Option<String>,

        /// Override the project name
        #[arg(long)]
        project_name: Option<String>,

        /// Append a coverage badge (codecov, coveralls)
        #[arg(long)]
        coverage: Option<String>,

        /// Config file to use instead of <DIR>/.readmegen.toml
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Check a README for structure and quality; exits 1 when it has issues
    Validate {
        /// Path to the README file
        readme: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
