use crate::CheckVerdict;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for checkgate reports.
pub const SCHEMA_REPORT_V1: &str = "checkgate.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Record counts across every check, by severity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportCounts {
    pub info: u32,
    pub warn: u32,
    pub fail: u32,
}

/// How a check's value was computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Existence alone decides; value is present or not applicable.
    Boolean,
    /// Value counts satisfied requirements.
    Value,
}

/// One evaluated check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckEntry {
    pub id: String,
    pub mode: CheckMode,
    /// Stable identifier intended for trending: a hash of
    /// `id + mode + (category, name)` of every detail record.
    pub fingerprint: String,
    pub verdict: CheckVerdict,
}

/// An error that prevented the run from completing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolError {
    pub check_id: String,
    pub code: String,
    pub message: String,
}

/// Run-level summary payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportData {
    pub profile: String,
    pub checks_total: u32,
    pub checks_passed: u32,
    pub checks_failed: u32,
    /// Checks whose pass depends on at least one waiver.
    pub checks_waived: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ToolError>,
}

/// The report envelope written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckgateReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub status: RunStatus,
    pub counts: ReportCounts,
    pub checks: Vec<CheckEntry>,
    pub data: ReportData,
}
