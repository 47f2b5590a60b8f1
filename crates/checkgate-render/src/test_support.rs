use crate::{
    RenderableCheck, RenderableData, RenderableGroup, RenderableLocation, RenderableRecord,
    RenderableReport, RenderableSeverity, RenderableStatus,
};

fn record(
    severity: RenderableSeverity,
    category: &str,
    name: &str,
    reason: &str,
    location: Option<(&str, u32)>,
) -> RenderableRecord {
    RenderableRecord {
        severity,
        category: category.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
        location: location.map(|(path, line)| RenderableLocation {
            path: path.to_string(),
            line: Some(line),
        }),
    }
}

fn group(code: &str, description: &str, items: &[&str]) -> RenderableGroup {
    RenderableGroup {
        code: code.to_string(),
        description: description.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// One failing value check and one waived boolean check.
pub fn sample_report() -> RenderableReport {
    let failing = RenderableCheck {
        id: "IMP-10-0-0-00".to_string(),
        item_description: "Netlist/SPEF files".to_string(),
        status: RenderableStatus::Fail,
        value: "1".to_string(),
        records: vec![
            record(
                RenderableSeverity::Info,
                "satisfied",
                "Netlist File",
                "Item found",
                Some(("logs/sta.log", 12)),
            ),
            record(
                RenderableSeverity::Fail,
                "violation",
                "SPEF File",
                "Skipped",
                Some(("logs/sta.log", 40)),
            ),
            record(
                RenderableSeverity::Warn,
                "violation",
                "Stale DEF",
                "Unexpected item",
                None,
            ),
        ],
        groups: vec![
            group("FAIL01", "Violations", &["SPEF File"]),
            group("WARN01", "Violations", &["Stale DEF"]),
            group("INFO01", "Items found", &["Netlist File"]),
        ],
    };

    let waived = RenderableCheck {
        id: "IMP-10-0-0-01".to_string(),
        item_description: String::new(),
        status: RenderableStatus::Pass,
        value: "yes".to_string(),
        records: vec![
            record(
                RenderableSeverity::Info,
                "waived_violation",
                "Timing Library",
                "Waived: approved[WAIVER]",
                None,
            ),
            record(
                RenderableSeverity::Warn,
                "unused_waiver",
                "Old Block",
                "Waiver not used: legacy",
                None,
            ),
        ],
        groups: vec![
            group("WARN01", "Unused waivers", &["Old Block"]),
            group("INFO01", "Waived items", &["Timing Library"]),
        ],
    };

    RenderableReport {
        status: RenderableStatus::Fail,
        checks: vec![failing, waived],
        data: RenderableData {
            profile: "strict".to_string(),
            checks_total: 2,
            checks_passed: 1,
            checks_failed: 1,
            checks_waived: 1,
            errors: Vec::new(),
        },
    }
}

pub fn empty_report() -> RenderableReport {
    RenderableReport {
        status: RenderableStatus::Pass,
        checks: Vec::new(),
        data: RenderableData {
            profile: "strict".to_string(),
            checks_total: 0,
            checks_passed: 0,
            checks_failed: 0,
            checks_waived: 0,
            errors: Vec::new(),
        },
    }
}
