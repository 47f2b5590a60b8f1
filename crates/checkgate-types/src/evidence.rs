//! Evidence document produced by log/report parsers.
//!
//! Parsers are domain-specific and live elsewhere; this is only the hand-over shape.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Schema identifier for evidence documents.
pub const SCHEMA_EVIDENCE_V1: &str = "checkgate.evidence.v1";

/// Open, display-only metadata attached to an evidence item.
///
/// Well-known keys: `line_number`, `file_path`, `note`, `reason`, `path`, `version`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, JsonValue>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<JsonValue>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<JsonValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Line number, accepting either a JSON number or a numeric string.
    pub fn line_number(&self) -> Option<u32> {
        match self.0.get("line_number")? {
            JsonValue::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn file_path(&self) -> Option<&str> {
        self.text("file_path")
    }

    /// Non-empty string value for `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One evidence item: a name plus whatever the parser recorded about it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceEntry {
    pub name: String,
    #[serde(flatten)]
    pub metadata: Metadata,
}

/// Evidence for one check, already partitioned into buckets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceCheck {
    pub id: String,
    #[serde(default)]
    pub found: Vec<EvidenceEntry>,
    #[serde(default)]
    pub missing: Vec<EvidenceEntry>,
    #[serde(default)]
    pub extra: Vec<EvidenceEntry>,
    /// Informational items shown in the trail but never counted.
    #[serde(default)]
    pub auxiliary: Vec<EvidenceEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub checks: Vec<EvidenceCheck>,
}
