//! Explain registry for outcome categories and reason markers.
//!
//! Maps category IDs and markers to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a category or marker.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the category/marker.
    pub title: &'static str,
    /// What it means when a record carries it.
    pub description: &'static str,
    /// What to do about it.
    pub remediation: &'static str,
    /// Before/after configuration examples.
    pub examples: ExamplePair,
}

/// Before and after configuration examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Configuration that produces the record.
    pub before: &'static str,
    /// Configuration that resolves it.
    pub after: &'static str,
}

/// Look up an explanation by category ID or marker.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Categories
        ids::CATEGORY_SATISFIED => Some(explain_satisfied()),
        ids::CATEGORY_AUXILIARY_INFO => Some(explain_auxiliary_info()),
        ids::CATEGORY_WAIVED_VIOLATION => Some(explain_waived_violation()),
        ids::CATEGORY_VIOLATION => Some(explain_violation()),
        ids::CATEGORY_ADVISORY => Some(explain_advisory()),
        ids::CATEGORY_UNUSED_WAIVER => Some(explain_unused_waiver()),

        // Markers
        ids::MARKER_WAIVER => Some(explain_waiver_marker()),
        ids::MARKER_FORCED_PASS => Some(explain_forced_pass_marker()),
        ids::MARKER_ADVISORY_NOTE => Some(explain_advisory_note_marker()),

        _ => None,
    }
}

/// List all known category IDs.
pub fn all_categories() -> &'static [&'static str] {
    &[
        ids::CATEGORY_SATISFIED,
        ids::CATEGORY_AUXILIARY_INFO,
        ids::CATEGORY_WAIVED_VIOLATION,
        ids::CATEGORY_VIOLATION,
        ids::CATEGORY_ADVISORY,
        ids::CATEGORY_UNUSED_WAIVER,
    ]
}

/// List all known markers.
pub fn all_markers() -> &'static [&'static str] {
    &[
        ids::MARKER_WAIVER,
        ids::MARKER_FORCED_PASS,
        ids::MARKER_ADVISORY_NOTE,
    ]
}

// --- Category explanations ---

fn explain_satisfied() -> Explanation {
    Explanation {
        title: "Satisfied",
        description: "\
The evidence producer found the item the check requires.

Satisfied records are informational. In value checks they count toward the
check's value.",
        remediation: "\
Nothing to do.",
        examples: ExamplePair {
            before: r#"{ "found": [{ "name": "Netlist File", "line_number": 12 }] }"#,
            after: r#"{ "found": [{ "name": "Netlist File", "line_number": 12 }] }"#,
        },
    }
}

fn explain_auxiliary_info() -> Explanation {
    Explanation {
        title: "Auxiliary Information",
        description: "\
Context recorded next to the real evidence: tool versions, run paths, and other
details a reviewer wants to see.

Auxiliary records never count toward a value and never fail a check.",
        remediation: "\
Nothing to do. Move the item to `found` if it is a real requirement.",
        examples: ExamplePair {
            before: r#"{ "auxiliary": [{ "name": "Tool: Quantus 21.1" }] }"#,
            after: r#"{ "auxiliary": [{ "name": "Tool: Quantus 21.1" }] }"#,
        },
    }
}

fn explain_waived_violation() -> Explanation {
    Explanation {
        title: "Waived Violation",
        description: "\
An item was missing (or present unexpectedly) but matched an approved waiver.

The record is downgraded to info, its reason carries the waiver's reason, and it
is tagged with the `[WAIVER]` marker. Waived requirements still count toward a
value check's count.",
        remediation: "\
Confirm the waiver is still justified. Remove the waiver once the underlying
problem is fixed; it will otherwise show up as an unused waiver.",
        examples: ExamplePair {
            before: r#"[checks."IMP-1"]
waiver_enabled = false"#,
            after: r#"[checks."IMP-1"]
waiver_enabled = true

[[checks."IMP-1".waivers]]
key = "SPEF File"
reason = "SPEF not required for this block (approved)""#,
        },
    }
}

fn explain_violation() -> Explanation {
    Explanation {
        title: "Violation",
        description: "\
A required item is missing, or an unexpected item is present, and no waiver
covers it.

Any violation fails the check. Missing items are reported at `fail` severity;
unexpected extras use the check's `extra_severity` (default `warn`).",
        remediation: "\
Fix the underlying problem and re-run the tool, or add an approved waiver
whose key matches the item name:
- word match: every word of the key appears in the item name (any order)
- fragment match: the key is a substring of the name, or the name of the key",
        examples: ExamplePair {
            before: r#"{ "missing": [{ "name": "SPEF File", "reason": "Skipped" }] }"#,
            after: r#"{ "found": [{ "name": "SPEF File" }] }"#,
        },
    }
}

fn explain_advisory() -> Explanation {
    Explanation {
        title: "Advisory",
        description: "\
The check runs in forced-pass mode: its violations are reported as information
only and the check always passes.

Downgraded violations carry the `[WAIVED_AS_INFO]` marker. Notes written by the
check's owner carry the `[WAIVED_INFO]` marker and appear first.",
        remediation: "\
Treat advisory records as review items. Turn `forced_pass` off once the check is
expected to block signoff.",
        examples: ExamplePair {
            before: r#"[checks."IMP-1"]
forced_pass = true
advisory_notes = ["Reviewed with block owner"]"#,
            after: r#"[checks."IMP-1"]
forced_pass = false"#,
        },
    }
}

fn explain_unused_waiver() -> Explanation {
    Explanation {
        title: "Unused Waiver",
        description: "\
A configured waiver did not match any item in this run.

Stale waivers hide future regressions: a waiver written for yesterday's failure
silently covers tomorrow's. Unused waivers are reported as warnings but do not
fail the check.",
        remediation: "\
Delete the waiver if the problem it covered is gone, or fix its key so it
matches the item name the tool actually reports.",
        examples: ExamplePair {
            before: r#"[[checks."IMP-1".waivers]]
key = "Old Netlist Name"
reason = "legacy""#,
            after: r#"# waiver removed"#,
        },
    }
}

// --- Marker explanations ---

fn explain_waiver_marker() -> Explanation {
    let mut exp = explain_waived_violation();
    exp.title = "[WAIVER] marker";
    exp
}

fn explain_forced_pass_marker() -> Explanation {
    let mut exp = explain_advisory();
    exp.title = "[WAIVED_AS_INFO] marker";
    exp
}

fn explain_advisory_note_marker() -> Explanation {
    let mut exp = explain_advisory();
    exp.title = "[WAIVED_INFO] marker";
    exp
}
