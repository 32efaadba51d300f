//! Analyzer output flowing into the badge renderer and validator

use super::helpers::{compose_readme, fixture_project, node_project};
use readmegen::analyzer;
use readmegen::badges::{self, BadgeContext};
use readmegen::models::ProjectType;
use readmegen::validator;

#[test]
fn test_analyze_node_project() {
    let project = node_project();
    let meta = analyzer::analyze(project.path()).unwrap();

    assert_eq!(meta.name.as_deref(), Some("tidy-logs"));
    assert_eq!(meta.language.as_deref(), Some("JavaScript"));
    assert_eq!(meta.project_type, ProjectType::CliTool);
    assert_eq!(meta.package_manager.as_deref(), Some("npm"));
    assert_eq!(meta.ci_service.as_deref(), Some("github-actions"));
    assert_eq!(meta.dependencies_file.as_deref(), Some("package.json"));
    assert_eq!(meta.version.as_deref(), Some("2.1.0"));
    assert_eq!(meta.license.as_deref(), Some("MIT"));
    assert!(meta.has_tests);
}

#[test]
fn test_metadata_to_badges() {
    let project = node_project();
    let meta = analyzer::analyze(project.path()).unwrap();

    let ctx = BadgeContext::from_metadata(&meta).with_overrides(BadgeContext {
        username: Some("octo".to_string()),
        ..Default::default()
    });
    let rendered = badges::render(&ctx);

    assert_eq!(rendered.len(), 5);
    assert!(rendered[0].contains("https://github.com/octo/tidy-logs/workflows/CI/badge.svg"));
    assert!(rendered[1].contains("https://www.npmjs.com/package/tidy-logs"));
    assert!(rendered[2].contains("/npm/dm/tidy-logs.svg"));
    assert!(rendered[3].contains("License-MIT-yellow"));
    assert!(rendered[4].contains("Language-Javascript-yellow"));
}

#[test]
fn test_analysis_json_is_badge_input() {
    let project = node_project();
    let meta = analyzer::analyze(project.path()).unwrap();
    let json = meta.to_json_pretty().unwrap();

    let ctx = BadgeContext::from_json(&json).unwrap();
    assert_eq!(ctx.project_name(), Some("tidy-logs"));
    assert_eq!(ctx.license(), Some("MIT"));
    // No username in analyzer output, so no build badge.
    assert!(badges::render(&ctx)
        .iter()
        .all(|badge| !badge.contains("Build Status")));
}

#[test]
fn test_generated_readme_validates() {
    let project = node_project();
    let meta = analyzer::analyze(project.path()).unwrap();
    let rendered = badges::render(&BadgeContext::from_metadata(&meta));

    let readme = compose_readme(&meta, &rendered);
    let report = validator::validate(&readme);

    assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert_eq!(report.score(), 100);
}

#[test]
fn test_empty_project_still_yields_valid_pipeline() {
    let project = fixture_project(&[("notes/", "")]);
    let meta = analyzer::analyze(project.path()).unwrap();
    assert_eq!(meta.project_type, ProjectType::Application);

    let rendered = badges::render(&BadgeContext::from_metadata(&meta));
    assert!(rendered.is_empty());

    let report = validator::validate(&compose_readme(&meta, &rendered));
    assert!(report.is_valid(), "issues: {:?}", report.issues);
}
