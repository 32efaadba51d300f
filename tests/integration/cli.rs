//! The `readmegen` binary: output and exit codes

use std::fs;

use super::helpers::{fixture_project, node_project, readmegen, run, stdout, write_files};

const GOOD_README: &str = "# Tidy Logs

Structured log formatting for Node services, with zero configuration and no runtime dependencies.

## Installation

```bash
npm install tidy-logs
```

## Usage

Require the module and pass it a record. Every call returns a single formatted
line that is ready to be written to a terminal or a file on disk.

## License

MIT
";

#[test]
fn test_analyze_missing_root_exits_1() {
    let temp = fixture_project(&[]);
    let missing = temp.path().join("does-not-exist");

    let output = run(readmegen().arg("analyze").arg(&missing));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error analyzing project:"));
}

#[test]
fn test_analyze_prints_table_then_json() {
    let project = node_project();
    let output = run(readmegen().arg("analyze").arg(project.path()));

    assert!(output.status.success());
    let out = stdout(&output);
    let table = out.find("Project Analysis Results").unwrap();
    let json = out.find("JSON Output:").unwrap();
    assert!(table < json);
    assert!(out.contains("Package Manager"));
}

#[test]
fn test_analyze_json_only() {
    let project = node_project();
    let output = run(readmegen().args(["analyze", "--json"]).arg(project.path()));

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["project_name"], "tidy-logs");
    assert_eq!(value["project_type"], "cli-tool");
    assert_eq!(value["framework"], serde_json::Value::Null);
}

#[test]
fn test_validate_exit_codes() {
    let temp = fixture_project(&[("GOOD.md", GOOD_README), ("BAD.md", "Just a line.\n")]);

    let good = run(readmegen().arg("validate").arg(temp.path().join("GOOD.md")));
    assert_eq!(good.status.code(), Some(0));
    assert!(stdout(&good).contains("README validation passed!"));

    let bad = run(readmegen().arg("validate").arg(temp.path().join("BAD.md")));
    assert_eq!(bad.status.code(), Some(1));
    assert!(stdout(&bad).contains("README validation failed"));
}

#[test]
fn test_validate_missing_readme() {
    let temp = fixture_project(&[]);
    let output = run(readmegen().arg("validate").arg(temp.path().join("README.md")));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("README not found"));
}

#[test]
fn test_validate_json_report() {
    let temp = fixture_project(&[("README.md", GOOD_README)]);
    let output = run(readmegen()
        .args(["validate", "--json"])
        .arg(temp.path().join("README.md")));

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["issues"].as_array().unwrap().len(), 0);
    assert!(value["score"].as_u64().unwrap() <= 100);
}

#[test]
fn test_badges_without_input_prints_usage() {
    let output = run(readmegen().arg("badges"));
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage: readmegen badges"));
}

#[test]
fn test_badges_from_input_json() {
    let temp = fixture_project(&[(
        "info.json",
        r#"{"project_name": "crab", "package_manager": "cargo", "license": "MIT"}"#,
    )]);
    let output = run(readmegen()
        .arg("badges")
        .arg(temp.path().join("info.json"))
        .args(["--username", "octo", "--coverage", "codecov"])
        .current_dir(temp.path()));

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("https://crates.io/crates/crab"));
    assert!(lines[1].contains("License-MIT-yellow"));
    assert!(lines[2].contains("https://codecov.io/gh/octo/crab"));
}

#[test]
fn test_badges_from_project_uses_config() {
    let project = node_project();
    write_files(
        project.path(),
        &[(".readmegen.toml", "[badges]\nusername = \"octo\"\nworkflow_name = \"Build\"\n")],
    );

    let output = run(readmegen().args(["badges", "--from"]).arg(project.path()));

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("https://github.com/octo/tidy-logs/workflows/Build/badge.svg"));
}

#[test]
fn test_badges_invalid_json_exits_1() {
    let temp = fixture_project(&[("info.json", "{\"project_name\": ")]);
    let output = run(readmegen()
        .arg("badges")
        .arg(temp.path().join("info.json"))
        .current_dir(temp.path()));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_completions_bash() {
    let output = run(readmegen().args(["completions", "bash"]));
    assert!(output.status.success());
    let script = stdout(&output);
    for name in ["readmegen", "analyze", "badges", "validate"] {
        assert!(script.contains(name), "script lacks {name}");
    }

    let output = run(readmegen().args(["completions", "tcsh"]));
    assert!(!output.status.success());
}

#[test]
fn test_output_is_stable_across_runs() {
    let project = node_project();
    fs::write(project.path().join("extra.py"), "").unwrap();

    let first = stdout(&run(readmegen().args(["analyze", "--json"]).arg(project.path())));
    let second = stdout(&run(readmegen().args(["analyze", "--json"]).arg(project.path())));
    assert_eq!(first, second);
}
