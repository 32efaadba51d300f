//! Markdown badge rendering from project metadata.

pub mod context;
pub mod providers;

pub use context::BadgeContext;
pub use providers::{coverage_badge, custom_badge, CoverageService};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    Build,
    Version,
    Downloads,
    License,
    Language,
    Coverage,
}

impl fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeKind::Build => write!(f, "build"),
            BadgeKind::Version => write!(f, "version"),
            BadgeKind::Downloads => write!(f, "downloads"),
            BadgeKind::License => write!(f, "license"),
            BadgeKind::Language => write!(f, "language"),
            BadgeKind::Coverage => write!(f, "coverage"),
        }
    }
}

/// A badge family whose precondition field is set, paired with its
/// rendered markdown. `markdown` is `None` when the provider is unknown or
/// a required value (such as the username) is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeSpec {
    pub kind: BadgeKind,
    pub provider: String,
    pub markdown: Option<String>,
}

type BadgeBuilder = fn(&BadgeContext) -> Option<String>;

/// Provider label for badges served straight from shields.io.
const SHIELDS_PROVIDER: &str = "shields.io";

/// Registries that publish download counts. Matched case-sensitively.
const DOWNLOAD_REGISTRIES: &[&str] = &["npm", "pypi"];

/// Badge families in emission order. The provider is `None` when the
/// family's precondition field is absent.
fn families(ctx: &BadgeContext) -> Vec<(BadgeKind, Option<String>, BadgeBuilder)> {
    let registry = ctx.package_manager().map(str::to_lowercase);
    let downloads = ctx
        .package_manager()
        .filter(|pm| DOWNLOAD_REGISTRIES.contains(pm))
        .map(str::to_string);
    let shields = |field: Option<&str>| field.map(|_| SHIELDS_PROVIDER.to_string());

    vec![
        (
            BadgeKind::Build,
            ctx.ci_service().map(str::to_lowercase),
            providers::build_badge as BadgeBuilder,
        ),
        (BadgeKind::Version, registry, providers::version_badge as BadgeBuilder),
        (BadgeKind::Downloads, downloads, providers::downloads_badge as BadgeBuilder),
        (BadgeKind::License, shields(ctx.license()), providers::license_badge as BadgeBuilder),
        (BadgeKind::Language, shields(ctx.language()), providers::language_badge as BadgeBuilder),
    ]
}

/// Every applicable badge family: build, version, downloads, license, language.
pub fn plan(ctx: &BadgeContext) -> Vec<BadgeSpec> {
    families(ctx)
        .into_iter()
        .filter_map(|(kind, provider, build)| {
            let provider = provider?;
            let markdown = build(ctx);
            if markdown.is_none() {
                tracing::debug!(%kind, %provider, "badge omitted");
            }
            Some(BadgeSpec {
                kind,
                provider,
                markdown,
            })
        })
        .collect()
}

/// [`plan`] followed by a coverage badge from `service`.
pub fn plan_with_coverage(ctx: &BadgeContext, service: CoverageService) -> Vec<BadgeSpec> {
    let mut specs = plan(ctx);
    specs.push(BadgeSpec {
        kind: BadgeKind::Coverage,
        provider: service.to_string(),
        markdown: coverage_badge(ctx, service),
    });
    specs
}

/// Rendered markdown of the specs that produced any.
pub fn rendered(specs: Vec<BadgeSpec>) -> Vec<String> {
    specs.into_iter().filter_map(|spec| spec.markdown).collect()
}

/// Rendered badges in emission order. Never fails; inapplicable badges are
/// just absent.
pub fn render(ctx: &BadgeContext) -> Vec<String> {
    rendered(plan(ctx))
}

/// Badges joined by newlines; empty when none apply.
pub fn render_markdown(ctx: &BadgeContext) -> String {
    render(ctx).join("\n")
}
