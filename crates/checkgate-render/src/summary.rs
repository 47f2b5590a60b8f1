//! Compact, grep-friendly lines for CI logs.

use crate::{RenderableCheck, RenderableReport};

/// `[FAIL01] Violations: SPEF File, DEF File` per group, most severe first.
pub fn render_check_summary(check: &RenderableCheck) -> Vec<String> {
    check
        .groups
        .iter()
        .map(|g| format!("[{}] {}: {}", g.code, g.description, g.items.join(", ")))
        .collect()
}

/// A status line per check followed by its indented group lines.
pub fn render_summary(report: &RenderableReport) -> String {
    let mut out = String::new();

    for check in &report.checks {
        out.push_str(&format!(
            "{} {} (value: {})",
            check.status.label(),
            check.id,
            check.value
        ));
        if !check.item_description.is_empty() {
            out.push_str(&format!(" {}", check.item_description));
        }
        out.push('\n');
        for line in render_check_summary(check) {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "checkgate: {} ({}/{} checks passed, {} waived)\n",
        report.status.label(),
        report.data.checks_passed,
        report.data.checks_total,
        report.data.checks_waived
    ));

    out
}
