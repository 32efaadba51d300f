//! Project metadata inference.
//!
//! The analyzer walks a project root once and runs an independent detector
//! per metadata field:
//! - Name, description, version and license from manifests and README/LICENSE files
//! - Primary language by file-extension majority
//! - Project type, package manager, CI service and build system from marker files
//! - Test, docs and git presence

pub mod detectors;
pub mod language;
pub mod rules;
pub mod tree;

use std::path::Path;

use crate::error::Result;
use crate::models::ProjectMetadata;

pub use rules::RuleChain;
pub use tree::ProjectTree;

/// Analyze the project rooted at `root`.
///
/// Fails only when `root` does not exist or is not a directory.
pub fn analyze(root: &Path) -> Result<ProjectMetadata> {
    let tree = ProjectTree::scan(root)?;
    tracing::info!(root = %tree.root().display(), "analyzing project");
    let meta = analyze_tree(&tree);
    tracing::info!(project_type = %meta.project_type, "analysis finished");
    Ok(meta)
}

/// Run every detector against an already scanned tree.
pub fn analyze_tree(tree: &ProjectTree) -> ProjectMetadata {
    ProjectMetadata {
        name: detectors::detect_name(tree),
        language: language::detect_language(tree),
        project_type: detectors::detect_project_type(tree),
        package_manager: detectors::detect_package_manager(tree),
        has_tests: detectors::has_tests(tree),
        ci_service: detectors::detect_ci(tree),
        dependencies_file: detectors::find_dependencies_file(tree),
        build_system: detectors::detect_build_system(tree),
        framework: detectors::detect_framework(tree),
        description: detectors::extract_description(tree),
        version: detectors::extract_version(tree),
        license: detectors::detect_license(tree),
        has_docs: detectors::has_documentation(tree),
        is_git_repo: detectors::is_git_repo(tree),
    }
}
