//! Optional per-project defaults read from `.readmegen.toml`.
//!
//! ```toml
//! [badges]
//! username = "octocat"
//! branch = "develop"
//! workflow_name = "Build"
//! coverage = "codecov"
//! ```
//!
//! A missing file means "no defaults". Unlike project manifests, a file
//! that exists but does not parse is reported.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::badges::{BadgeContext, CoverageService};
use crate::error::{Error, Result};

/// Config file name looked up in the project root.
pub const CONFIG_FILE: &str = ".readmegen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub badges: BadgeDefaults,
}

/// Values the analyzer cannot infer from a source tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeDefaults {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub workflow_name: Option<String>,
    /// Coverage service whose badge is appended after the others.
    #[serde(default)]
    pub coverage: Option<CoverageService>,
}

impl Config {
    /// Load `.readmegen.toml` from `root`, falling back to defaults when absent.
    pub fn load_from_root(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no config file");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Load an explicitly named config file; it must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Badge context holding only the configured defaults.
    pub fn badge_defaults(&self) -> BadgeContext {
        BadgeContext {
            username: self.badges.username.clone(),
            branch: self.badges.branch.clone(),
            workflow_name: self.badges.workflow_name.clone(),
            ..Default::default()
        }
    }
}
