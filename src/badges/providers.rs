//! Per-family badge builders and their provider tables.
//!
//! Each builder returns `None` when its preconditions are not met or the
//! provider is unknown; that badge is simply left out.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::context::BadgeContext;
use crate::models::constants::SHIELDS_BASE;
use crate::utils::{capitalize, url_escape};

/// Uppercased license code to `(badge display name, color)`.
const LICENSE_BADGES: &[(&str, &str, &str)] = &[
    ("MIT", "MIT", "yellow"),
    ("APACHE-2.0", "Apache_2.0", "blue"),
    ("APACHE", "Apache_2.0", "blue"),
    ("GPL-3.0", "GPLv3", "blue"),
    ("GPL", "GPLv3", "blue"),
    ("BSD-3", "BSD_3--Clause", "blue"),
    ("BSD", "BSD_3--Clause", "blue"),
];

const DEFAULT_LICENSE_COLOR: &str = "blue";

/// Badge display name to canonical license text.
const LICENSE_LINKS: &[(&str, &str)] = &[
    ("MIT", "https://opensource.org/licenses/MIT"),
    ("Apache_2.0", "https://opensource.org/licenses/Apache-2.0"),
    ("GPLv3", "https://www.gnu.org/licenses/gpl-3.0"),
    ("BSD_3--Clause", "https://opensource.org/licenses/BSD-3-Clause"),
];

/// Link target when the license has no canonical URL.
const LOCAL_LICENSE_LINK: &str = "LICENSE";

/// Lowercased language to badge color.
const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("python", "blue"),
    ("javascript", "yellow"),
    ("typescript", "blue"),
    ("rust", "orange"),
    ("go", "cyan"),
    ("java", "red"),
    ("ruby", "red"),
    ("php", "purple"),
    ("c++", "pink"),
    ("c", "gray"),
    ("swift", "orange"),
    ("kotlin", "purple"),
];

const DEFAULT_LANGUAGE_COLOR: &str = "blue";

/// Code coverage services with a badge endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageService {
    Codecov,
    Coveralls,
}

impl FromStr for CoverageService {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "codecov" => Ok(CoverageService::Codecov),
            "coveralls" => Ok(CoverageService::Coveralls),
            _ => Err(anyhow!(
                "Unsupported coverage service: {s}. Supported services: codecov, coveralls"
            )),
        }
    }
}

impl fmt::Display for CoverageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoverageService::Codecov => write!(f, "codecov"),
            CoverageService::Coveralls => write!(f, "coveralls"),
        }
    }
}

fn lookup<'t>(table: &'t [(&'t str, &'t str)], key: &str) -> Option<&'t str> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)
}

/// CI build status for GitHub Actions, Travis CI or CircleCI.
pub fn build_badge(ctx: &BadgeContext) -> Option<String> {
    let ci = ctx.ci_service()?.to_lowercase();
    let (user, project) = ctx.repository()?;

    match ci.as_str() {
        "github-actions" => {
            let workflow = ctx.workflow_name();
            let url = format!("https://github.com/{user}/{project}/workflows/{workflow}/badge.svg");
            let link = format!("https://github.com/{user}/{project}/actions");
            Some(format!("[![Build Status]({url})]({link})"))
        }
        "travis" => {
            let branch = ctx.branch();
            let url = format!("https://travis-ci.org/{user}/{project}.svg?branch={branch}");
            let link = format!("https://travis-ci.org/{user}/{project}");
            Some(format!("[![Build Status]({url})]({link})"))
        }
        "circleci" => {
            let url = format!("https://circleci.com/gh/{user}/{project}.svg?style=svg");
            let link = format!("https://circleci.com/gh/{user}/{project}");
            Some(format!("[![CircleCI]({url})]({link})"))
        }
        _ => None,
    }
}

/// Published version on the project's package registry.
pub fn version_badge(ctx: &BadgeContext) -> Option<String> {
    let registry = ctx.package_manager()?.to_lowercase();
    let project = ctx.project_name()?;

    let (alt, url, link) = match registry.as_str() {
        "npm" => (
            "npm version",
            format!("{SHIELDS_BASE}/npm/v/{project}.svg"),
            format!("https://www.npmjs.com/package/{project}"),
        ),
        "pypi" => (
            "PyPI version",
            format!("{SHIELDS_BASE}/pypi/v/{project}.svg"),
            format!("https://pypi.org/project/{project}/"),
        ),
        "cargo" => (
            "Crates.io",
            format!("{SHIELDS_BASE}/crates/v/{project}.svg"),
            format!("https://crates.io/crates/{project}"),
        ),
        "gem" => (
            "Gem Version",
            format!("{SHIELDS_BASE}/gem/v/{project}.svg"),
            format!("https://rubygems.org/gems/{project}"),
        ),
        "nuget" => (
            "NuGet",
            format!("{SHIELDS_BASE}/nuget/v/{project}.svg"),
            format!("https://www.nuget.org/packages/{project}/"),
        ),
        _ => return None,
    };
    Some(format!("[![{alt}]({url})]({link})"))
}

/// Monthly downloads; only npm and PyPI expose them.
pub fn downloads_badge(ctx: &BadgeContext) -> Option<String> {
    let registry = ctx.package_manager()?.to_lowercase();
    let project = ctx.project_name()?;

    match registry.as_str() {
        "npm" => Some(format!(
            "[![npm downloads]({SHIELDS_BASE}/npm/dm/{project}.svg)](https://www.npmjs.com/package/{project})"
        )),
        "pypi" => Some(format!(
            "[![PyPI downloads]({SHIELDS_BASE}/pypi/dm/{project}.svg)](https://pypi.org/project/{project}/)"
        )),
        _ => None,
    }
}

pub fn license_badge(ctx: &BadgeContext) -> Option<String> {
    let code = ctx.license()?.to_uppercase();

    let (name, color) = LICENSE_BADGES
        .iter()
        .find(|(key, _, _)| *key == code)
        .map(|&(_, name, color)| (name.to_string(), color))
        .unwrap_or((code.clone(), DEFAULT_LICENSE_COLOR));

    let url = format!("{SHIELDS_BASE}/badge/License-{name}-{color}.svg");
    let link = lookup(LICENSE_LINKS, &name).unwrap_or(LOCAL_LICENSE_LINK);
    Some(format!("[![License]({url})]({link})"))
}

pub fn language_badge(ctx: &BadgeContext) -> Option<String> {
    let language = ctx.language()?;

    let color = lookup(LANGUAGE_COLORS, &language.to_lowercase()).unwrap_or(DEFAULT_LANGUAGE_COLOR);
    let display = capitalize(language);
    let url = format!(
        "{SHIELDS_BASE}/badge/Language-{}-{color}.svg",
        url_escape(&display)
    );
    Some(format!("![Language: {display}]({url})"))
}

/// Coverage report badge; needs both username and project name.
pub fn coverage_badge(ctx: &BadgeContext, service: CoverageService) -> Option<String> {
    let (user, project) = ctx.repository()?;
    let branch = ctx.branch();

    Some(match service {
        CoverageService::Codecov => format!(
            "[![Coverage](https://codecov.io/gh/{user}/{project}/branch/{branch}/graph/badge.svg)](https://codecov.io/gh/{user}/{project})"
        ),
        CoverageService::Coveralls => format!(
            "[![Coverage Status](https://coveralls.io/repos/github/{user}/{project}/badge.svg?branch={branch})](https://coveralls.io/github/{user}/{project}?branch={branch})"
        ),
    })
}

/// Free-form static badge.
pub fn custom_badge(label: &str, message: &str, color: &str) -> String {
    format!(
        "![{label}]({SHIELDS_BASE}/badge/{}-{}-{color})",
        url_escape(label),
        url_escape(message)
    )
}
