//! Input record for the badge renderer.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::constants::{DEFAULT_BRANCH, DEFAULT_WORKFLOW};
use crate::models::ProjectMetadata;

/// Package managers whose projects publish to a differently named registry.
const REGISTRY_ALIASES: &[(&str, &str)] = &[
    ("pip", "pypi"),
    ("pipenv", "pypi"),
    ("poetry", "pypi"),
    ("bundler", "gem"),
];

/// Everything the badge renderer reads.
///
/// Deserializes from a flat JSON object; unknown keys are ignored, so an
/// analyzer report is itself a valid input. `username`, `branch` and
/// `workflow_name` cannot be inferred from a source tree and come from the
/// caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BadgeContext {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub package_manager: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub ci_service: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub workflow_name: Option<String>,
}

impl BadgeContext {
    /// Parse a JSON document.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Load a JSON input file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Seed a context from analyzer output.
    pub fn from_metadata(meta: &ProjectMetadata) -> Self {
        Self {
            project_name: meta.name.clone(),
            language: meta.language.clone(),
            package_manager: meta.package_manager.as_deref().map(registry_for),
            license: meta.license.clone(),
            ci_service: meta.ci_service.clone(),
            ..Default::default()
        }
    }

    /// Field-wise merge where every value set in `overrides` wins.
    pub fn with_overrides(self, overrides: BadgeContext) -> Self {
        Self {
            project_name: overrides.project_name.or(self.project_name),
            username: overrides.username.or(self.username),
            language: overrides.language.or(self.language),
            package_manager: overrides.package_manager.or(self.package_manager),
            license: overrides.license.or(self.license),
            ci_service: overrides.ci_service.or(self.ci_service),
            branch: overrides.branch.or(self.branch),
            workflow_name: overrides.workflow_name.or(self.workflow_name),
        }
    }

    pub fn project_name(&self) -> Option<&str> {
        non_empty(&self.project_name)
    }

    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(&self.language)
    }

    pub fn package_manager(&self) -> Option<&str> {
        non_empty(&self.package_manager)
    }

    pub fn license(&self) -> Option<&str> {
        non_empty(&self.license)
    }

    pub fn ci_service(&self) -> Option<&str> {
        non_empty(&self.ci_service)
    }

    pub fn branch(&self) -> &str {
        non_empty(&self.branch).unwrap_or(DEFAULT_BRANCH)
    }

    pub fn workflow_name(&self) -> &str {
        non_empty(&self.workflow_name).unwrap_or(DEFAULT_WORKFLOW)
    }

    /// Owner and project, when both are known.
    pub fn repository(&self) -> Option<(&str, &str)> {
        Some((self.username()?, self.project_name()?))
    }
}

/// Registry name the version badge uses for a package manager.
pub fn registry_for(package_manager: &str) -> String {
    REGISTRY_ALIASES
        .iter()
        .find(|(manager, _)| *manager == package_manager)
        .map_or(package_manager, |&(_, registry)| registry)
        .to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
