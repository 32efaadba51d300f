use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{DIVIDER_WIDTH, TABLE_LABEL_WIDTH};

/// Broad classification of what a project builds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectType {
    #[serde(rename = "webapp")]
    Webapp,

    #[serde(rename = "cli-tool")]
    CliTool,

    #[serde(rename = "library")]
    Library,

    /// Fallback when no rule matched.
    #[default]
    #[serde(rename = "application")]
    Application,
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Webapp => write!(f, "webapp"),
            ProjectType::CliTool => write!(f, "cli-tool"),
            ProjectType::Library => write!(f, "library"),
            ProjectType::Application => write!(f, "application"),
        }
    }
}

/// Everything the analyzer could infer about a project tree.
///
/// Built once per analysis run and never mutated afterwards. Every field is
/// independent: a missing signal leaves the field `None` (or `false`).
///
/// Serializes to a flat JSON object. The name and git fields use the
/// `project_name` / `git_repo` keys so the record can be handed directly to
/// the badge renderer as its input document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMetadata {
    #[serde(rename = "project_name")]
    pub name: Option<String>,
    pub language: Option<String>,
    pub project_type: ProjectType,
    pub package_manager: Option<String>,
    pub has_tests: bool,
    pub ci_service: Option<String>,
    pub dependencies_file: Option<String>,
    pub build_system: Option<String>,
    pub framework: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub has_docs: bool,
    #[serde(rename = "git_repo")]
    pub is_git_repo: bool,
}

impl ProjectMetadata {
    /// Fields in output order as `(json key, rendered value)`; absent
    /// optional fields yield `None`.
    pub fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("project_name", self.name.clone()),
            ("language", self.language.clone()),
            ("project_type", Some(self.project_type.to_string())),
            ("package_manager", self.package_manager.clone()),
            ("has_tests", Some(self.has_tests.to_string())),
            ("ci_service", self.ci_service.clone()),
            ("dependencies_file", self.dependencies_file.clone()),
            ("build_system", self.build_system.clone()),
            ("framework", self.framework.clone()),
            ("description", self.description.clone()),
            ("version", self.version.clone()),
            ("license", self.license.clone()),
            ("has_docs", Some(self.has_docs.to_string())),
            ("git_repo", Some(self.is_git_repo.to_string())),
        ]
    }

    /// One `Label....... value` line per present field.
    pub fn table_rows(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .filter_map(|(key, value)| {
                value.map(|v| format!("{:.<width$} {v}", label_for(key), width = TABLE_LABEL_WIDTH))
            })
            .collect()
    }

    /// Human-readable report framed by divider lines.
    pub fn render_table(&self) -> String {
        let divider = "=".repeat(DIVIDER_WIDTH);
        let mut out = format!("\n{divider}\nProject Analysis Results\n{divider}\n\n");
        for row in self.table_rows() {
            out.push_str(&row);
            out.push('\n');
        }
        out.push_str(&format!("\n{divider}\n"));
        out
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `package_manager` -> `Package Manager`
fn label_for(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
