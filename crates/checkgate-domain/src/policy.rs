use crate::model::{AuxiliaryItem, EvidenceBuckets};
use crate::waiver::WaiverSet;
use checkgate_types::{Category, CheckMode, Metadata, Severity};
use std::fmt;
use std::sync::Arc;

type ReasonFn = dyn Fn(&Metadata) -> String + Send + Sync;
type NameFn = dyn Fn(&str, &Metadata) -> String + Send + Sync;

/// Something that produces a reason string for an item: literal text or a function of its metadata.
#[derive(Clone)]
pub struct Reason(Arc<ReasonFn>);

impl Reason {
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self(Arc::new(move |_| text.clone()))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Metadata) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn render(&self, metadata: &Metadata) -> String {
        (self.0)(metadata)
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Reason(..)")
    }
}

impl From<&str> for Reason {
    fn from(value: &str) -> Self {
        Reason::text(value)
    }
}

impl From<String> for Reason {
    fn from(value: String) -> Self {
        Reason::text(value)
    }
}

/// Display-name formatter applied after classification. Waivers always see the raw name.
#[derive(Clone)]
pub struct NameFormatter(Arc<NameFn>);

impl NameFormatter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &Metadata) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    pub fn format(&self, name: &str, metadata: &Metadata) -> String {
        (self.0)(name, metadata)
    }
}

impl fmt::Debug for NameFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NameFormatter(..)")
    }
}

/// Caller-supplied text echoed into outcome records and severity groups.
#[derive(Clone, Debug)]
pub struct Descriptions {
    pub satisfied_desc: String,
    pub violation_desc: String,
    pub waived_desc: String,
    pub unused_waiver_desc: String,
    pub auxiliary_desc: String,
    pub advisory_desc: String,

    pub satisfied_reason: Reason,
    pub violation_reason: Reason,
    pub extra_reason: Reason,
    pub waived_base_reason: Reason,
    pub unused_waiver_reason: Reason,
    pub auxiliary_reason: Reason,
}

impl Descriptions {
    /// Group description for records of `category`.
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Satisfied => &self.satisfied_desc,
            Category::AuxiliaryInfo => &self.auxiliary_desc,
            Category::WaivedViolation => &self.waived_desc,
            Category::Violation => &self.violation_desc,
            Category::Advisory => &self.advisory_desc,
            Category::UnusedWaiver => &self.unused_waiver_desc,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CheckOptions {
    pub waiver_enabled: bool,
    /// Severity of unwaived unexpected items.
    pub extra_severity: Severity,
    pub auxiliary_items: Vec<AuxiliaryItem>,
    /// Treat the whole check as advisory: violations become info and the check passes.
    pub forced_pass: bool,
    /// Free-text notes shown ahead of downgraded violations. Only valid with `forced_pass`.
    pub advisory_notes: Vec<String>,
    pub display_name: Option<NameFormatter>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            waiver_enabled: false,
            extra_severity: Severity::Warn,
            auxiliary_items: Vec::new(),
            forced_pass: false,
            advisory_notes: Vec::new(),
            display_name: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// No enumerated requirement list; existence alone decides.
    Boolean,
    /// Evidence was matched against an enumerated requirement list.
    Value,
}

impl Mode {
    pub fn has_enumerated_requirements(self) -> bool {
        self == Mode::Value
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Boolean => "boolean",
            Mode::Value => "value",
        }
    }
}

impl From<Mode> for CheckMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Boolean => CheckMode::Boolean,
            Mode::Value => CheckMode::Value,
        }
    }
}

/// Everything one invocation reads. All borrows are read-only for the call's duration.
#[derive(Clone, Copy, Debug)]
pub struct CheckRequest<'a> {
    pub evidence: &'a EvidenceBuckets,
    pub waivers: &'a WaiverSet,
    pub options: &'a CheckOptions,
    pub descriptions: &'a Descriptions,
    pub item_description: &'a str,
}
