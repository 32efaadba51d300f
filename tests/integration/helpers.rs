//! Shared fixtures for integration tests

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

use readmegen::models::ProjectMetadata;

/// Create a project tree from `(relative path, content)` pairs. A path
/// ending in `/` creates an empty directory.
pub fn fixture_project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_files(temp_dir.path(), files);
    temp_dir
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let target = root.join(path);
        if path.ends_with('/') {
            fs::create_dir_all(&target).expect("Failed to create directory");
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&target, content).expect("Failed to write fixture file");
    }
}

/// A small npm package with tests, CI and an MIT license.
pub fn node_project() -> TempDir {
    fixture_project(&[
        (
            "package.json",
            r#"{
  "name": "tidy-logs",
  "version": "2.1.0",
  "description": "Structured log formatting for Node services",
  "license": "MIT",
  "bin": {"tidy-logs": "bin/cli.js"},
  "dependencies": {"chalk": "^5.0.0"}
}"#,
        ),
        ("index.js", "module.exports = {};\n"),
        ("bin/cli.js", "#!/usr/bin/env node\n"),
        ("src/format.js", ""),
        ("tests/format.test.js", ""),
        (".github/workflows/ci.yml", "name: CI\n"),
        ("LICENSE", "MIT License\n\nCopyright (c) 2024\n"),
    ])
}

/// Assemble a README the way a generator would: title, badges, description
/// and the standard sections.
pub fn compose_readme(meta: &ProjectMetadata, badges: &[String]) -> String {
    let name = meta.name.as_deref().unwrap_or("project");
    let description = meta
        .description
        .as_deref()
        .unwrap_or("A project without a description yet, described here instead.");
    let manager = meta.package_manager.as_deref().unwrap_or("npm");
    let license = meta.license.as_deref().unwrap_or("MIT");

    format!(
        "# {name}

{badges}

{description}

## Features

- Reads input from files or standard input
- Writes formatted output that is easy to scan

## Installation

```bash
{manager} install {name}
```

## Usage

Import the module and call the formatter with a log record. The result is a
single line of text that can be written anywhere a string is accepted.

## Contributing

Pull requests are welcome. Please open an issue first to discuss changes.

## License

{license}
",
        badges = badges.join("\n"),
    )
}

/// Command for the compiled binary with logging and color turned off.
pub fn readmegen() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_readmegen"));
    cmd.env_remove("READMEGEN_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

pub fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to run readmegen")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
