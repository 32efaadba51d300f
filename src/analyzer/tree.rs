//! Read-only snapshot of a project directory that detectors inspect.

use regex::Regex;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// A project root plus the list of files found under it.
///
/// The tree is walked once, in file-name order within each directory, so
/// every detector sees the same deterministic enumeration. File contents are
/// never cached: each detector reads what it needs and drops it.
#[derive(Debug)]
pub struct ProjectTree {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl ProjectTree {
    /// Walk `root` and build the snapshot.
    ///
    /// Fails only when `root` is missing or is not a directory. Entries that
    /// cannot be read during the walk are skipped.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(Error::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let root = root.canonicalize().map_err(|source| Error::Io {
            path: root.to_path_buf(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.path().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&root) {
                files.push(relative.to_path_buf());
            }
        }

        tracing::debug!(root = %root.display(), files = files.len(), "scanned project tree");
        Ok(Self { root, files })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final component of the (canonical) root path.
    pub fn root_name(&self) -> Option<String> {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Every file in walk order, relative to the root.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(PathBuf::as_path)
    }

    /// Files with no dot-prefixed segment anywhere in their relative path.
    pub fn visible_files(&self) -> impl Iterator<Item = &Path> {
        self.files().filter(|path| !is_hidden(path))
    }

    /// Whether `relative` (file or directory) exists under the root.
    pub fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }

    /// Contents of `relative` as UTF-8 text.
    ///
    /// Missing, unreadable and non-UTF-8 files all yield `None`.
    pub fn read(&self, relative: &str) -> Option<String> {
        read_text(&self.root.join(relative))
    }

    /// `package.json` decoded as JSON, or `None` when absent or malformed.
    pub fn package_json(&self) -> Option<Value> {
        let content = self.read("package.json")?;
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring malformed package.json");
                None
            }
        }
    }

    /// A string-valued top-level key of `package.json`.
    pub fn package_json_str(&self, key: &str) -> Option<String> {
        self.package_json()?
            .get(key)?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// First capture group of `pattern` in `relative`.
    pub fn capture(&self, relative: &str, pattern: &Regex) -> Option<String> {
        let content = self.read(relative)?;
        pattern
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Top-level files with the given extension, in directory-listing order.
    ///
    /// The order is whatever the filesystem returns and is not sorted, so it
    /// can differ between filesystems.
    pub fn top_level_files_with_extension(&self, extension: &str) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "cannot list project root");
                return Vec::new();
            }
        };

        entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .filter(|p| p.extension().is_some_and(|ext| ext == extension))
            .collect()
    }
}

/// Read a file as text, collapsing every failure to `None`.
pub fn read_text(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring unreadable file");
            None
        }
    }
}

fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
