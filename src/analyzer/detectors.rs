//! Per-field detectors.
//!
//! Each detector is a pure function of the [`ProjectTree`] and never fails:
//! unreadable or malformed inputs simply leave the field empty.

use regex::Regex;
use std::sync::LazyLock;

use super::rules::RuleChain;
use super::tree::{read_text, ProjectTree};
use crate::models::ProjectType;

const WEB_INDICATORS: &[&str] = &[
    "app.py",
    "server.js",
    "index.html",
    "views",
    "templates",
    "public",
    "static",
    "routes",
    "controllers",
];

const CLI_INDICATORS: &[&str] = &["main.rs", "cli.py", "cmd", "bin"];

/// A CLI indicator next to one of these means "library with a CLI".
const LIBRARY_MARKERS: &[&str] = &["src/lib.rs", "lib"];

/// Manifests that only library-style projects carry at the root.
const LIBRARY_MANIFESTS: &[&str] = &["setup.py", "Cargo.toml"];

const PACKAGE_MANAGERS: &[(&str, &str)] = &[
    ("package.json", "npm"),
    ("yarn.lock", "yarn"),
    ("pnpm-lock.yaml", "pnpm"),
    ("setup.py", "pip"),
    ("requirements.txt", "pip"),
    ("Pipfile", "pipenv"),
    ("poetry.lock", "poetry"),
    ("Cargo.toml", "cargo"),
    ("go.mod", "go"),
    ("Gemfile", "bundler"),
    ("composer.json", "composer"),
    ("pom.xml", "maven"),
    ("build.gradle", "gradle"),
];

const TEST_DIRS: &[&str] = &["test", "tests", "spec", "__tests__"];

const TEST_FILE_PATTERNS: &[&str] = &["test_*.py", "*_test.py", "*.test.js", "*.spec.js"];

const CI_SERVICES: &[(&str, &str)] = &[
    (".github/workflows", "github-actions"),
    (".travis.yml", "travis"),
    (".circleci", "circleci"),
    (".gitlab-ci.yml", "gitlab-ci"),
    ("Jenkinsfile", "jenkins"),
    (".drone.yml", "drone"),
    ("azure-pipelines.yml", "azure-pipelines"),
];

const DEPENDENCY_FILES: &[&str] = &[
    "requirements.txt",
    "Pipfile",
    "package.json",
    "Cargo.toml",
    "go.mod",
    "Gemfile",
    "pom.xml",
];

const BUILD_SYSTEMS: &[(&str, &str)] = &[
    ("Makefile", "make"),
    ("CMakeLists.txt", "cmake"),
    ("build.gradle", "gradle"),
    ("pom.xml", "maven"),
    ("webpack.config.js", "webpack"),
    ("rollup.config.js", "rollup"),
    ("vite.config.js", "vite"),
];

/// Checked against the merged dependencies/devDependencies keys, in order.
const NPM_FRAMEWORKS: &[&str] = &[
    "react", "vue", "angular", "svelte", "next", "nuxt", "express",
];

/// Import lines that identify a Python web framework.
const PYTHON_FRAMEWORKS: &[(&str, &[&str])] = &[
    ("flask", &["from flask import", "import flask"]),
    ("fastapi", &["from fastapi import", "import fastapi"]),
];

/// Either of these must exist before top-level `.py` files are scanned.
const PYTHON_ENTRY_POINTS: &[&str] = &["app.py", "main.py"];

const README_FILES: &[&str] = &["README.md", "README.rst", "README.txt"];

const LICENSE_FILES: &[&str] = &["LICENSE", "LICENSE.txt", "LICENSE.md", "COPYING"];

const DOC_INDICATORS: &[&str] = &["docs", "doc", "documentation", "README.md"];

/// Minimum length (exclusive) of a README line to count as a description.
const MIN_DESCRIPTION_LEN: usize = 20;

/// README lines considered for the description, title line included.
const DESCRIPTION_SCAN_LINES: usize = 10;

static SETUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name\s*=\s*["']([^"']+)["']"#).expect("Invalid regex pattern")
});

static TOML_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name\s*=\s*"([^"]+)""#).expect("Invalid regex pattern"));

static TOML_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"description\s*=\s*"([^"]+)""#).expect("Invalid regex pattern")
});

static TOML_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"version\s*=\s*"([^"]+)""#).expect("Invalid regex pattern"));

static SETUP_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"version\s*=\s*["']([^"']+)["']"#).expect("Invalid regex pattern")
});

/// Project name from manifests, falling back to the root directory name.
pub fn detect_name(tree: &ProjectTree) -> Option<String> {
    RuleChain::new("name")
        .rule("package.json", |t| t.package_json_str("name"))
        .rule("setup.py", |t| t.capture("setup.py", &SETUP_NAME))
        .rule("Cargo.toml", |t| t.capture("Cargo.toml", &TOML_NAME))
        .rule("pyproject.toml", |t| t.capture("pyproject.toml", &TOML_NAME))
        .rule("directory name", ProjectTree::root_name)
        .evaluate(tree)
}

pub fn detect_project_type(tree: &ProjectTree) -> ProjectType {
    RuleChain::new("project_type")
        .rule("web indicators", |t| {
            any_exists(t, WEB_INDICATORS).then_some(ProjectType::Webapp)
        })
        .rule("cli indicators", |t| {
            if !any_exists(t, CLI_INDICATORS) {
                return None;
            }
            if any_exists(t, LIBRARY_MARKERS) {
                Some(ProjectType::Library)
            } else {
                Some(ProjectType::CliTool)
            }
        })
        .rule("library manifest", |t| {
            any_exists(t, LIBRARY_MANIFESTS).then_some(ProjectType::Library)
        })
        .rule("package.json", |t| {
            let pkg = t.package_json()?;
            let pkg = pkg.as_object()?;
            if pkg.get("bin").is_some_and(is_truthy) {
                Some(ProjectType::CliTool)
            } else {
                Some(ProjectType::Library)
            }
        })
        .evaluate(tree)
        .unwrap_or_default()
}

fn any_exists(tree: &ProjectTree, paths: &[&str]) -> bool {
    paths.iter().any(|p| tree.exists(p))
}

pub fn detect_package_manager(tree: &ProjectTree) -> Option<String> {
    RuleChain::from_markers("package_manager", PACKAGE_MANAGERS).evaluate(tree)
}

/// Top-level test directory, or a test-named file anywhere in the tree.
pub fn has_tests(tree: &ProjectTree) -> bool {
    if TEST_DIRS.iter().any(|d| tree.exists(d)) {
        return true;
    }

    let patterns: Vec<glob::Pattern> = TEST_FILE_PATTERNS
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();

    tree.files().any(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| patterns.iter().any(|p| p.matches(&name)))
    })
}

pub fn detect_ci(tree: &ProjectTree) -> Option<String> {
    RuleChain::from_markers("ci_service", CI_SERVICES).evaluate(tree)
}

pub fn find_dependencies_file(tree: &ProjectTree) -> Option<String> {
    RuleChain::first_existing("dependencies_file", DEPENDENCY_FILES).evaluate(tree)
}

pub fn detect_build_system(tree: &ProjectTree) -> Option<String> {
    RuleChain::from_markers("build_system", BUILD_SYSTEMS).evaluate(tree)
}

/// Web framework from npm dependencies, then Python markers.
///
/// Python files are scanned in directory-listing order and the first file
/// that imports a known framework wins. With several files importing
/// different frameworks the answer depends on the filesystem's listing
/// order.
pub fn detect_framework(tree: &ProjectTree) -> Option<String> {
    RuleChain::new("framework")
        .rule("package.json dependencies", npm_framework)
        .when_exists("manage.py", "django".to_string())
        .rule("python imports", python_framework)
        .evaluate(tree)
}

fn npm_framework(tree: &ProjectTree) -> Option<String> {
    let pkg = tree.package_json()?;
    let declared = |name: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|&section| pkg.get(section).and_then(|s| s.get(name)).is_some())
    };
    NPM_FRAMEWORKS
        .iter()
        .find(|&&fw| declared(fw))
        .map(|fw| fw.to_string())
}

fn python_framework(tree: &ProjectTree) -> Option<String> {
    if !PYTHON_ENTRY_POINTS.iter().any(|p| tree.exists(p)) {
        return None;
    }

    tree.top_level_files_with_extension("py")
        .iter()
        .filter_map(|path| read_text(path))
        .find_map(|content| {
            PYTHON_FRAMEWORKS
                .iter()
                .find(|(_, imports)| imports.iter().any(|i| content.contains(i)))
                .map(|(name, _)| name.to_string())
        })
}

pub fn extract_description(tree: &ProjectTree) -> Option<String> {
    let mut chain = RuleChain::new("description")
        .rule("package.json", |t| t.package_json_str("description"))
        .rule("Cargo.toml", |t| t.capture("Cargo.toml", &TOML_DESCRIPTION));
    for &readme in README_FILES {
        chain = chain.rule(readme, move |t| {
            t.read(readme).and_then(|c| readme_description(&c))
        });
    }
    chain.evaluate(tree)
}

/// First substantial line after the title within the opening lines.
fn readme_description(content: &str) -> Option<String> {
    content
        .split('\n')
        .take(DESCRIPTION_SCAN_LINES)
        .skip(1)
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with('[')
                && line.chars().count() > MIN_DESCRIPTION_LEN
        })
        .map(|line| line.trim_matches(|c| c == '>' || c == ' ').trim().to_string())
}

pub fn extract_version(tree: &ProjectTree) -> Option<String> {
    RuleChain::new("version")
        .rule("package.json", |t| t.package_json_str("version"))
        .rule("Cargo.toml", |t| t.capture("Cargo.toml", &TOML_VERSION))
        .rule("setup.py", |t| t.capture("setup.py", &SETUP_VERSION))
        .evaluate(tree)
}

/// License short code from a license file, else `package.json`'s field.
///
/// License files are tried in order; one whose text matches no known
/// license is passed over.
pub fn detect_license(tree: &ProjectTree) -> Option<String> {
    let mut chain = RuleChain::new("license");
    for &file in LICENSE_FILES {
        chain = chain.rule(file, move |t| {
            t.read(file).and_then(|c| classify_license(&c).map(str::to_string))
        });
    }
    chain
        .rule("package.json", |t| t.package_json_str("license"))
        .evaluate(tree)
}

/// Classify license text by substring, in priority order.
pub fn classify_license(text: &str) -> Option<&'static str> {
    if text.contains("MIT License") {
        Some("MIT")
    } else if text.contains("Apache License") && text.contains("2.0") {
        Some("Apache-2.0")
    } else if text.contains("GNU GENERAL PUBLIC LICENSE") && text.contains("Version 3") {
        Some("GPL-3.0")
    } else if text.contains("BSD") {
        Some("BSD")
    } else {
        None
    }
}

pub fn has_documentation(tree: &ProjectTree) -> bool {
    DOC_INDICATORS.iter().any(|p| tree.exists(p))
}

pub fn is_git_repo(tree: &ProjectTree) -> bool {
    tree.exists(".git")
}

/// JSON truthiness: null, false, 0, "" and empty containers are false.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn project(files: &[(&str, &str)]) -> (TempDir, ProjectTree) {
        let temp = TempDir::new().unwrap();
        for (path, content) in files {
            let full = temp.path().join(path);
            if path.ends_with('/') {
                fs::create_dir_all(&full).unwrap();
                continue;
            }
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(full, content).unwrap();
        }
        let tree = ProjectTree::scan(temp.path()).unwrap();
        (temp, tree)
    }

    #[test]
    fn test_name_from_package_json() {
        let (_t, tree) = project(&[
            ("package.json", r#"{"name": "web-thing"}"#),
            ("Cargo.toml", "[package]\nname = \"crate-thing\""),
        ]);
        assert_eq!(detect_name(&tree).as_deref(), Some("web-thing"));
    }

    #[test]
    fn test_name_from_setup_py_single_quotes() {
        let (_t, tree) = project(&[("setup.py", "setup(\n    name='pyproj',\n)")]);
        assert_eq!(detect_name(&tree).as_deref(), Some("pyproj"));
    }

    #[test]
    fn test_name_skips_malformed_package_json() {
        let (_t, tree) = project(&[
            ("package.json", "{ broken"),
            ("Cargo.toml", "[package]\nname = \"fallback-crate\""),
        ]);
        assert_eq!(detect_name(&tree).as_deref(), Some("fallback-crate"));
    }

    #[test]
    fn test_name_from_pyproject() {
        let (_t, tree) = project(&[("pyproject.toml", "[project]\nname = \"poetic\"")]);
        assert_eq!(detect_name(&tree).as_deref(), Some("poetic"));
    }

    #[test]
    fn test_name_falls_back_to_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("dirname-project");
        fs::create_dir(&root).unwrap();
        let tree = ProjectTree::scan(&root).unwrap();
        assert_eq!(detect_name(&tree).as_deref(), Some("dirname-project"));
    }

    #[test]
    fn test_web_indicators_beat_cli_indicators() {
        let (_t, tree) = project(&[("index.html", "<html>"), ("main.rs", "fn main() {}")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Webapp);
    }

    #[test]
    fn test_web_indicator_directory() {
        let (_t, tree) = project(&[("templates/", "")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Webapp);
    }

    #[test]
    fn test_cli_indicator_with_library_marker() {
        let (_t, tree) = project(&[("bin/", ""), ("src/lib.rs", "")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Library);

        let (_t, tree) = project(&[("cli.py", "")]);
        assert_eq!(detect_project_type(&tree), ProjectType::CliTool);
    }

    #[test]
    fn test_library_manifest() {
        let (_t, tree) = project(&[("Cargo.toml", "[package]")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Library);
    }

    #[test]
    fn test_package_json_bin() {
        let (_t, tree) = project(&[("package.json", r#"{"bin": {"tool": "cli.js"}}"#)]);
        assert_eq!(detect_project_type(&tree), ProjectType::CliTool);

        let (_t, tree) = project(&[("package.json", r#"{"bin": ""}"#)]);
        assert_eq!(detect_project_type(&tree), ProjectType::Library);
    }

    #[test]
    fn test_malformed_package_json_defaults_to_application() {
        let (_t, tree) = project(&[("package.json", "not json at all")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Application);
    }

    #[test]
    fn test_non_object_package_json_defaults_to_application() {
        let (_t, tree) = project(&[("package.json", "[1, 2]")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Application);

        let (_t, tree) = project(&[("package.json", "\"just a string\"")]);
        assert_eq!(detect_project_type(&tree), ProjectType::Application);
    }

    #[test]
    fn test_package_manager_priority() {
        let (_t, tree) = project(&[("yarn.lock", ""), ("package.json", "{}")]);
        assert_eq!(detect_package_manager(&tree).as_deref(), Some("npm"));

        let (_t, tree) = project(&[("go.mod", "module x")]);
        assert_eq!(detect_package_manager(&tree).as_deref(), Some("go"));
    }

    #[test]
    fn test_has_tests_from_directory() {
        let (_t, tree) = project(&[("__tests__/", "")]);
        assert!(has_tests(&tree));
    }

    #[test]
    fn test_has_tests_from_nested_pattern() {
        let (_t, tree) = project(&[("src/widget/widget.spec.js", "")]);
        assert!(has_tests(&tree));

        let (_t, tree) = project(&[("pkg/test_core.py", "")]);
        assert!(has_tests(&tree));

        let (_t, tree) = project(&[("src/testing.py", "")]);
        assert!(!has_tests(&tree));
    }

    #[test]
    fn test_detect_ci() {
        let (_t, tree) = project(&[(".github/workflows/ci.yml", ""), (".travis.yml", "")]);
        assert_eq!(detect_ci(&tree).as_deref(), Some("github-actions"));

        let (_t, tree) = project(&[("Jenkinsfile", "")]);
        assert_eq!(detect_ci(&tree).as_deref(), Some("jenkins"));
    }

    #[test]
    fn test_dependencies_and_build_system() {
        let (_t, tree) = project(&[
            ("package.json", "{}"),
            ("requirements.txt", ""),
            ("vite.config.js", ""),
            ("Makefile", ""),
        ]);
        assert_eq!(find_dependencies_file(&tree).as_deref(), Some("requirements.txt"));
        assert_eq!(detect_build_system(&tree).as_deref(), Some("make"));
    }

    #[test]
    fn test_framework_from_dev_dependencies() {
        let (_t, tree) = project(&[(
            "package.json",
            r#"{"dependencies": {"express": "4"}, "devDependencies": {"vue": "3"}}"#,
        )]);
        assert_eq!(detect_framework(&tree).as_deref(), Some("vue"));
    }

    #[test]
    fn test_framework_django() {
        let (_t, tree) = project(&[("manage.py", ""), ("package.json", "{}")]);
        assert_eq!(detect_framework(&tree).as_deref(), Some("django"));
    }

    #[test]
    fn test_framework_flask_import() {
        let (_t, tree) = project(&[("app.py", "from flask import Flask\napp = Flask(__name__)")]);
        assert_eq!(detect_framework(&tree).as_deref(), Some("flask"));
    }

    #[test]
    fn test_framework_fastapi_needs_entry_point() {
        let (_t, tree) = project(&[("server.py", "import fastapi")]);
        assert_eq!(detect_framework(&tree), None);

        let (_t, tree) = project(&[("main.py", "import fastapi")]);
        assert_eq!(detect_framework(&tree).as_deref(), Some("fastapi"));
    }

    #[test]
    fn test_framework_skips_unreadable_python_file() {
        let (temp, _) = project(&[("main.py", "print('hi')")]);
        fs::write(temp.path().join("binary.py"), [0xff, 0xfe]).unwrap();
        fs::write(temp.path().join("web.py"), "from flask import Flask").unwrap();
        let tree = ProjectTree::scan(temp.path()).unwrap();
        assert_eq!(detect_framework(&tree).as_deref(), Some("flask"));
    }

    #[test]
    fn test_description_sources() {
        let (_t, tree) = project(&[("Cargo.toml", "[package]\ndescription = \"A crate that does things\"")]);
        assert_eq!(extract_description(&tree).as_deref(), Some("A crate that does things"));

        let (_t, tree) = project(&[(
            "README.md",
            "# Title\n\n[![badge](x)](y)\nshort\n> A quoted description of this project\n",
        )]);
        assert_eq!(
            extract_description(&tree).as_deref(),
            Some("A quoted description of this project")
        );
    }

    #[test]
    fn test_readme_description_skips_first_line_and_limits_scan() {
        let first_line_only = "This first line is long enough to qualify\n# Title";
        assert_eq!(readme_description(first_line_only), None);

        let mut late = "# Title\n".to_string();
        late.push_str(&"\n".repeat(9));
        late.push_str("This line sits beyond the tenth line of the file");
        assert_eq!(readme_description(&late), None);
    }

    #[test]
    fn test_description_falls_through_readme_variants() {
        let (_t, tree) = project(&[
            ("README.md", "# Title\nshort"),
            ("README.rst", "Title\nThe reStructuredText description line"),
        ]);
        assert_eq!(
            extract_description(&tree).as_deref(),
            Some("The reStructuredText description line")
        );
    }

    #[test]
    fn test_version_sources() {
        let (_t, tree) = project(&[
            ("package.json", r#"{"name": "x"}"#),
            ("Cargo.toml", "[package]\nversion = \"0.3.1\""),
        ]);
        assert_eq!(extract_version(&tree).as_deref(), Some("0.3.1"));

        let (_t, tree) = project(&[("setup.py", "setup(version='2.0.0')")]);
        assert_eq!(extract_version(&tree).as_deref(), Some("2.0.0"));
    }

    #[test]
    fn test_classify_license() {
        assert_eq!(classify_license("Copyright\n\nMIT License\n..."), Some("MIT"));
        assert_eq!(
            classify_license("Apache License\nVersion 2.0, January 2004"),
            Some("Apache-2.0")
        );
        assert_eq!(
            classify_license("GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007"),
            Some("GPL-3.0")
        );
        assert_eq!(classify_license("Redistribution ... BSD style"), Some("BSD"));
        assert_eq!(classify_license("All rights reserved."), None);
    }

    #[test]
    fn test_license_falls_back_to_package_json() {
        let (_t, tree) = project(&[
            ("LICENSE", "Proprietary. All rights reserved."),
            ("package.json", r#"{"license": "ISC"}"#),
        ]);
        assert_eq!(detect_license(&tree).as_deref(), Some("ISC"));

        let (_t, tree) = project(&[("COPYING", "The MIT License (MIT)\nMIT License")]);
        assert_eq!(detect_license(&tree).as_deref(), Some("MIT"));
    }

    #[test]
    fn test_docs_and_git() {
        let (temp, tree) = project(&[("doc/", "")]);
        assert!(has_documentation(&tree));
        assert!(!is_git_repo(&tree));

        fs::create_dir(temp.path().join(".git")).unwrap();
        let tree = ProjectTree::scan(temp.path()).unwrap();
        assert!(is_git_repo(&tree));
        assert!(tree.root().join(".git").exists());
    }
}
