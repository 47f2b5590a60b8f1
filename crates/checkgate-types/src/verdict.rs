use crate::LogPath;
use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Severity is intentionally small: it maps cleanly to signoff log levels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Fail,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Fail => "fail",
        }
    }

    /// Parse a user-supplied severity: `info`, `warn` or `fail`, case-insensitive.
    pub fn parse(v: &str) -> Option<Severity> {
        match v.trim().to_ascii_lowercase().as_str() {
            "info" => Some(Severity::Info),
            "warn" => Some(Severity::Warn),
            "fail" => Some(Severity::Fail),
            _ => None,
        }
    }

    pub fn group_prefix(self) -> &'static str {
        match self {
            Severity::Info => ids::GROUP_PREFIX_INFO,
            Severity::Warn => ids::GROUP_PREFIX_WARN,
            Severity::Fail => ids::GROUP_PREFIX_FAIL,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to an item.
///
/// Declaration order is the order in which categories appear in a verdict's details.
/// `Violation` and `Advisory` share a slot: forced-pass mode turns the former into the latter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Satisfied,
    AuxiliaryInfo,
    WaivedViolation,
    Violation,
    Advisory,
    UnusedWaiver,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Satisfied => ids::CATEGORY_SATISFIED,
            Category::AuxiliaryInfo => ids::CATEGORY_AUXILIARY_INFO,
            Category::WaivedViolation => ids::CATEGORY_WAIVED_VIOLATION,
            Category::Violation => ids::CATEGORY_VIOLATION,
            Category::Advisory => ids::CATEGORY_ADVISORY,
            Category::UnusedWaiver => ids::CATEGORY_UNUSED_WAIVER,
        }
    }

    /// Position in the details trail.
    pub fn rank(self) -> u8 {
        match self {
            Category::Satisfied => 0,
            Category::AuxiliaryInfo => 1,
            Category::WaivedViolation => 2,
            Category::Violation | Category::Advisory => 3,
            Category::UnusedWaiver => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which input produced an outcome record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Found,
    Missing,
    Extra,
    Auxiliary,
    Waiver,
    Note,
}

impl Origin {
    /// Records of this origin answer an enumerated requirement.
    pub fn is_requirement(self) -> bool {
        matches!(self, Origin::Found | Origin::Missing)
    }
}

/// Normalized, severity-tagged explanation of one item's fate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeRecord {
    pub name: String,
    pub severity: Severity,
    pub category: Category,
    pub origin: Origin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<LogPath>,
    pub reason: String,
}

impl OutcomeRecord {
    pub fn is_violation(&self) -> bool {
        self.category == Category::Violation
    }
}

/// Scalar result of a check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum VerdictValue {
    /// Number of satisfied (or waived) enumerated requirements.
    Count(u32),
    /// Boolean check: the required thing is present.
    Present,
    NotApplicable,
}

impl fmt::Display for VerdictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictValue::Count(n) => write!(f, "{n}"),
            VerdictValue::Present => f.write_str("yes"),
            VerdictValue::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Item names sharing a severity and description, for compact summaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityGroup {
    pub severity: Severity,
    pub description: String,
    pub items: Vec<String>,
}

/// Final artifact of one check invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckVerdict {
    pub value: VerdictValue,
    pub is_pass: bool,
    pub details: Vec<OutcomeRecord>,
    /// Keyed by group code (`INFO01`, `WARN01`, `FAIL01`, ...).
    pub severity_groups: BTreeMap<String, SeverityGroup>,
    pub item_description: String,
}

impl CheckVerdict {
    pub fn count(&self, severity: Severity) -> usize {
        self.details.iter().filter(|r| r.severity == severity).count()
    }

    pub fn records(&self, category: Category) -> impl Iterator<Item = &OutcomeRecord> {
        self.details.iter().filter(move |r| r.category == category)
    }
}
