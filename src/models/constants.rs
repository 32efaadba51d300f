/// Column width of the dotted label in the analysis table.
/// Labels are right-padded with `.` up to this width before the value.
pub const TABLE_LABEL_WIDTH: usize = 30;

/// Width of the `=` divider lines framing console reports.
pub const DIVIDER_WIDTH: usize = 60;

/// Base URL for shields.io badge images.
pub const SHIELDS_BASE: &str = "https://img.shields.io";

/// Default CI branch used by build and coverage badges.
pub const DEFAULT_BRANCH: &str = "main";

/// Default GitHub Actions workflow name used by the build badge.
pub const DEFAULT_WORKFLOW: &str = "CI";

/// Score thresholds for the README rating bands.
pub mod score {
    /// At or above this score a README is rated "Excellent".
    pub const EXCELLENT: u8 = 80;

    /// At or above this score a README is rated "Good".
    pub const GOOD: u8 = 60;

    /// At or above this score a README is rated "Fair".
    /// Anything lower "Needs Improvement".
    pub const FAIR: u8 = 40;

    /// Points deducted per issue.
    pub const ISSUE_PENALTY: u32 = 10;

    /// Points deducted per warning. Suggestions cost nothing.
    pub const WARNING_PENALTY: u32 = 3;
}
