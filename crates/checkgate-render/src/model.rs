#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warn,
    Fail,
}

impl RenderableSeverity {
    pub fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warn => "WARN",
            RenderableSeverity::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Fail,
}

impl RenderableStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderableStatus::Pass => "PASS",
            RenderableStatus::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableLocation {
    pub path: String,
    pub line: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRecord {
    pub severity: RenderableSeverity,
    /// Category id, e.g. `violation`.
    pub category: String,
    pub name: String,
    /// Carries any `[WAIVER]`-style marker verbatim.
    pub reason: String,
    pub location: Option<RenderableLocation>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableGroup {
    /// `FAIL01`, `WARN01`, `INFO01`, ...
    pub code: String,
    pub description: String,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableCheck {
    pub id: String,
    pub item_description: String,
    pub status: RenderableStatus,
    /// Already formatted: a count, `yes`, or `N/A`.
    pub value: String,
    pub records: Vec<RenderableRecord>,
    /// Most severe first.
    pub groups: Vec<RenderableGroup>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub checks_total: u32,
    pub checks_passed: u32,
    pub checks_failed: u32,
    pub checks_waived: u32,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub checks: Vec<RenderableCheck>,
    pub data: RenderableData,
}
