//! Stable identifiers: reason markers, severity group prefixes, and tool-level codes.
//!
//! Markers are appended verbatim to an outcome's `reason`. Report diffs depend on them byte-for-byte.

// Markers
pub const MARKER_WAIVER: &str = "[WAIVER]";
pub const MARKER_FORCED_PASS: &str = "[WAIVED_AS_INFO]";
pub const MARKER_ADVISORY_NOTE: &str = "[WAIVED_INFO]";

// Severity group code prefixes (`INFO01`, `WARN01`, `FAIL01`, ...)
pub const GROUP_PREFIX_INFO: &str = "INFO";
pub const GROUP_PREFIX_WARN: &str = "WARN";
pub const GROUP_PREFIX_FAIL: &str = "FAIL";

// Categories (as serialized)
pub const CATEGORY_SATISFIED: &str = "satisfied";
pub const CATEGORY_AUXILIARY_INFO: &str = "auxiliary_info";
pub const CATEGORY_WAIVED_VIOLATION: &str = "waived_violation";
pub const CATEGORY_VIOLATION: &str = "violation";
pub const CATEGORY_ADVISORY: &str = "advisory";
pub const CATEGORY_UNUSED_WAIVER: &str = "unused_waiver";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
