use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `checkgate.toml` schema v1.
///
/// This is a *user-facing* config model: everything is optional so partial configs stay valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckgateConfigV1 {
    /// Optional schema string for tooling (`checkgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `advisory`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Description overrides applied to every check.
    #[serde(default, skip_serializing_if = "DescriptionsConfig::is_empty")]
    pub descriptions: DescriptionsConfig,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// What the check's items are, echoed into the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `boolean` or `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiver_enabled: Option<bool>,

    /// Severity of unwaived unexpected items: `info`, `warn`, `fail`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_severity: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_pass: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisory_notes: Vec<String>,

    /// Display template for item names, e.g. `"{name} ({version})"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waivers: Vec<WaiverConfig>,

    #[serde(default, skip_serializing_if = "DescriptionsConfig::is_empty")]
    pub descriptions: DescriptionsConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WaiverConfig {
    /// Matched against item names (word subset first, then fragment).
    pub key: String,

    #[serde(default)]
    pub reason: String,
}

/// Text overrides. Reasons may reference item metadata as `{key}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DescriptionsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfied: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waived: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused_waiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfied_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waived_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unused_waiver_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auxiliary_reason: Option<String>,
}

impl DescriptionsConfig {
    pub fn is_empty(&self) -> bool {
        *self == DescriptionsConfig::default()
    }

    /// Built-in texts used when nothing else is configured.
    pub fn builtin() -> Self {
        Self {
            satisfied: Some("Items found".to_string()),
            violation: Some("Violations".to_string()),
            waived: Some("Waived items".to_string()),
            unused_waiver: Some("Unused waivers".to_string()),
            auxiliary: Some("Additional information".to_string()),
            advisory: Some("Advisory (waived as info)".to_string()),
            satisfied_reason: Some("Item found".to_string()),
            violation_reason: Some("Item not found".to_string()),
            extra_reason: Some("Unexpected item".to_string()),
            waived_reason: Some("Waived".to_string()),
            unused_waiver_reason: Some("Waiver not used".to_string()),
            auxiliary_reason: Some("Reference information".to_string()),
        }
    }

    /// Field-wise overlay: values set in `other` win.
    pub fn overlay(&self, other: &DescriptionsConfig) -> DescriptionsConfig {
        fn pick(base: &Option<String>, over: &Option<String>) -> Option<String> {
            over.clone().or_else(|| base.clone())
        }
        DescriptionsConfig {
            satisfied: pick(&self.satisfied, &other.satisfied),
            violation: pick(&self.violation, &other.violation),
            waived: pick(&self.waived, &other.waived),
            unused_waiver: pick(&self.unused_waiver, &other.unused_waiver),
            auxiliary: pick(&self.auxiliary, &other.auxiliary),
            advisory: pick(&self.advisory, &other.advisory),
            satisfied_reason: pick(&self.satisfied_reason, &other.satisfied_reason),
            violation_reason: pick(&self.violation_reason, &other.violation_reason),
            extra_reason: pick(&self.extra_reason, &other.extra_reason),
            waived_reason: pick(&self.waived_reason, &other.waived_reason),
            unused_waiver_reason: pick(&self.unused_waiver_reason, &other.unused_waiver_reason),
            auxiliary_reason: pick(&self.auxiliary_reason, &other.auxiliary_reason),
        }
    }
}
