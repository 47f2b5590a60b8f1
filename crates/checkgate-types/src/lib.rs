//! Stable DTOs and IDs used across the checkgate workspace.
//!
//! This crate is intentionally boring:
//! - the verdict shape every report consumer depends on
//! - the evidence document handed over by log parsers
//! - stable marker strings and schema IDs
//! - explain registry for categories and markers

#![forbid(unsafe_code)]

pub mod evidence;
pub mod explain;
pub mod ids;
pub mod path;
pub mod receipt;
pub mod verdict;

pub use evidence::{EvidenceCheck, EvidenceDocument, EvidenceEntry, Metadata};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::LogPath;
pub use receipt::{
    CheckEntry, CheckMode, CheckgateReport, ReportCounts, ReportData, RunStatus, SCHEMA_REPORT_V1, ToolError,
    ToolMeta,
};
pub use verdict::{
    Category, CheckVerdict, Origin, OutcomeRecord, Severity, SeverityGroup, VerdictValue,
};
