use crate::{RenderableCheck, RenderableReport};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Checkgate report\n\n");
    out.push_str(&format!(
        "- Status: **{}**\n- Profile: {}\n- Checks: {} total, {} passed, {} failed, {} waived\n\n",
        report.status.label(),
        report.data.profile,
        report.data.checks_total,
        report.data.checks_passed,
        report.data.checks_failed,
        report.data.checks_waived
    ));

    if !report.data.errors.is_empty() {
        out.push_str("## Errors\n\n");
        for e in &report.data.errors {
            out.push_str(&format!("- {}\n", e));
        }
        out.push('\n');
    }

    if report.checks.is_empty() {
        out.push_str("No checks evaluated.\n");
        return out;
    }

    for check in &report.checks {
        render_check(&mut out, check);
    }

    out
}

fn render_check(out: &mut String, check: &RenderableCheck) {
    out.push_str(&format!("## `{}`", check.id));
    if !check.item_description.is_empty() {
        out.push_str(&format!(": {}", check.item_description));
    }
    out.push_str("\n\n");
    out.push_str(&format!(
        "- Status: **{}**\n- Value: {}\n\n",
        check.status.label(),
        check.value
    ));

    if check.records.is_empty() {
        out.push_str("No items.\n\n");
        return;
    }

    for r in &check.records {
        out.push_str(&format!(
            "- [{}] {}: {}",
            r.severity.label(),
            if r.name.is_empty() { "(unnamed)" } else { r.name.as_str() },
            r.reason
        ));
        if let Some(loc) = &r.location {
            match loc.line {
                Some(line) => out.push_str(&format!(" (`{}`:{})", loc.path, line)),
                None => out.push_str(&format!(" (`{}`)", loc.path)),
            }
        }
        out.push('\n');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{empty_report, sample_report};

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&empty_report());
        assert!(md.contains("Status: **PASS**"));
        assert!(md.contains("No checks evaluated"));
    }

    #[test]
    fn renders_checks_with_markers_and_locations() {
        let md = render_markdown(&sample_report());
        assert!(md.contains("Status: **FAIL**"));
        assert!(md.contains("2 total, 1 passed, 1 failed, 1 waived"));
        assert!(md.contains("## `IMP-10-0-0-00`: Netlist/SPEF files"));
        assert!(md.contains("- [FAIL] SPEF File: Skipped (`logs/sta.log`:40)"));
        assert!(md.contains("- [INFO] Timing Library: Waived: approved[WAIVER]"));
        assert!(md.contains("- Value: yes"));
    }

    #[test]
    fn renders_errors_section() {
        let mut report = empty_report();
        report.data.errors.push("tool.runtime: evidence file missing".to_string());
        let md = render_markdown(&report);
        assert!(md.contains("## Errors"));
        assert!(md.contains("- tool.runtime: evidence file missing"));
    }
}
