use crate::check::tool_meta;
use anyhow::Context;
use checkgate_render::{
    RenderableCheck, RenderableData, RenderableGroup, RenderableLocation, RenderableRecord,
    RenderableReport, RenderableSeverity, RenderableStatus,
};
use checkgate_types::{
    CheckEntry, CheckgateReport, OutcomeRecord, ReportCounts, ReportData, RunStatus,
    SCHEMA_REPORT_V1, Severity, ToolError, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<CheckgateReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse checkgate report")
}

pub fn serialize_report(report: &CheckgateReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &CheckgateReport) -> RenderableReport {
    RenderableReport {
        status: renderable_status(report.status),
        checks: report.checks.iter().map(renderable_check).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            checks_total: report.data.checks_total,
            checks_passed: report.data.checks_passed,
            checks_failed: report.data.checks_failed,
            checks_waived: report.data.checks_waived,
            errors: report
                .data
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.check_id, e.message))
                .collect(),
        },
    }
}

fn renderable_status(status: RunStatus) -> RenderableStatus {
    match status {
        RunStatus::Pass => RenderableStatus::Pass,
        RunStatus::Fail => RenderableStatus::Fail,
    }
}

fn renderable_severity(severity: Severity) -> RenderableSeverity {
    match severity {
        Severity::Info => RenderableSeverity::Info,
        Severity::Warn => RenderableSeverity::Warn,
        Severity::Fail => RenderableSeverity::Fail,
    }
}

fn renderable_check(entry: &CheckEntry) -> RenderableCheck {
    let v = &entry.verdict;

    let mut groups: Vec<_> = v.severity_groups.iter().collect();
    // Most severe first; codes already order groups within a severity.
    groups.sort_by(|(ac, ag), (bc, bg)| bg.severity.cmp(&ag.severity).then(ac.cmp(bc)));

    RenderableCheck {
        id: entry.id.clone(),
        item_description: v.item_description.clone(),
        status: if v.is_pass {
            RenderableStatus::Pass
        } else {
            RenderableStatus::Fail
        },
        value: v.value.to_string(),
        records: v.details.iter().map(renderable_record).collect(),
        groups: groups
            .into_iter()
            .map(|(code, g)| RenderableGroup {
                code: code.clone(),
                description: g.description.clone(),
                items: g.items.clone(),
            })
            .collect(),
    }
}

fn renderable_record(r: &OutcomeRecord) -> RenderableRecord {
    RenderableRecord {
        severity: renderable_severity(r.severity),
        category: r.category.as_str().to_string(),
        name: r.name.clone(),
        reason: r.reason.clone(),
        location: r.file_path.as_ref().map(|p| RenderableLocation {
            path: p.as_str().to_string(),
            line: r.line_number,
        }),
    }
}

/// Report written when the run could not complete.
pub fn runtime_error_report(profile: &str, message: &str) -> CheckgateReport {
    let now = OffsetDateTime::now_utc();

    CheckgateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        status: RunStatus::Fail,
        counts: ReportCounts {
            info: 0,
            warn: 0,
            fail: 1,
        },
        checks: Vec::new(),
        data: ReportData {
            profile: profile.to_string(),
            errors: vec![ToolError {
                check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
                code: ids::CODE_RUNTIME_ERROR.to_string(),
                message: message.to_string(),
            }],
            ..ReportData::default()
        },
    }
}
