//! The `check` use case: evaluate evidence against configured checks and produce a report.

use anyhow::Context;
use checkgate_domain::model::EvidenceBuckets;
use checkgate_domain::policy::{CheckRequest, Mode};
use checkgate_domain::{run_boolean_check, run_value_check};
use checkgate_settings::{Overrides, ResolvedConfig};
use checkgate_types::evidence::SCHEMA_EVIDENCE_V1;
use checkgate_types::{
    Category, CheckEntry, CheckVerdict, CheckgateReport, EvidenceCheck, EvidenceDocument,
    ReportCounts, ReportData, RunStatus, SCHEMA_REPORT_V1, Severity, ToolMeta,
};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Evidence document contents (JSON).
    pub evidence_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CheckgateReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and evidence, evaluate every check, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        checkgate_settings::CheckgateConfigV1::default()
    } else {
        checkgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = checkgate_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let evidence = parse_evidence_json(input.evidence_text)?;

    for configured in resolved.checks.keys() {
        if !evidence.checks.iter().any(|c| &c.id == configured) {
            warn!(check = %configured, "configured check has no evidence; skipped");
        }
    }

    info!(
        profile = resolved.profile(),
        checks = evidence.checks.len(),
        "evaluating checks"
    );

    let checks = evidence
        .checks
        .par_iter()
        .map(|check| evaluate_check(check, &resolved))
        .collect::<anyhow::Result<Vec<CheckEntry>>>()?;

    let finished_at = OffsetDateTime::now_utc();

    let report = build_report(checks, resolved.profile(), started_at, finished_at);

    info!(
        status = ?report.status,
        passed = report.data.checks_passed,
        failed = report.data.checks_failed,
        "run complete"
    );

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Parse an evidence document, rejecting foreign schemas and duplicate check ids.
pub fn parse_evidence_json(text: &str) -> anyhow::Result<EvidenceDocument> {
    let doc: EvidenceDocument = serde_json::from_str(text).context("parse evidence json")?;

    if let Some(schema) = doc.schema.as_deref() {
        if schema != SCHEMA_EVIDENCE_V1 {
            anyhow::bail!("unsupported evidence schema: {schema} (expected {SCHEMA_EVIDENCE_V1})");
        }
    }

    let mut seen = BTreeSet::new();
    for check in &doc.checks {
        if !seen.insert(check.id.as_str()) {
            anyhow::bail!("duplicate check id in evidence: {}", check.id);
        }
    }

    Ok(doc)
}

fn evaluate_check(check: &EvidenceCheck, resolved: &ResolvedConfig) -> anyhow::Result<CheckEntry> {
    let mut rc = resolved
        .for_check(&check.id)
        .with_context(|| format!("resolve check {}", check.id))?;

    let (buckets, auxiliary) = EvidenceBuckets::from_check(check);
    rc.options.auxiliary_items = auxiliary;

    let request = CheckRequest {
        evidence: &buckets,
        waivers: &rc.waivers,
        options: &rc.options,
        descriptions: &rc.descriptions,
        item_description: &rc.item_description,
    };

    let verdict = match rc.mode {
        Mode::Boolean => run_boolean_check(&request),
        Mode::Value => run_value_check(&request),
    }
    .with_context(|| format!("evaluate check {}", check.id))?;

    info!(
        check = %check.id,
        mode = rc.mode.as_str(),
        pass = verdict.is_pass,
        value = %verdict.value,
        "check evaluated"
    );

    Ok(CheckEntry {
        id: check.id.clone(),
        mode: rc.mode.into(),
        fingerprint: fingerprint(&check.id, rc.mode, &verdict),
        verdict,
    })
}

/// Stable SHA-256 over the check's identity and the shape of its detail trail.
///
/// Identity fields: check id, mode, and `(category, name)` of every record in order.
/// Reasons are left out so rewording a description does not move the fingerprint.
pub fn fingerprint(check_id: &str, mode: Mode, verdict: &CheckVerdict) -> String {
    let mut hasher = Sha256::new();
    hasher.update(check_id.as_bytes());
    hasher.update(b"|");
    hasher.update(mode.as_str().as_bytes());
    for r in &verdict.details {
        hasher.update(b"|");
        hasher.update(r.category.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(r.name.as_bytes());
    }
    hex::encode(hasher.finalize())
}

fn build_report(
    checks: Vec<CheckEntry>,
    profile: &str,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> CheckgateReport {
    let mut counts = ReportCounts::default();
    let mut data = ReportData {
        profile: profile.to_string(),
        ..ReportData::default()
    };

    for entry in &checks {
        let v = &entry.verdict;
        counts.info += count_u32(v.count(Severity::Info));
        counts.warn += count_u32(v.count(Severity::Warn));
        counts.fail += count_u32(v.count(Severity::Fail));

        data.checks_total += 1;
        if v.is_pass {
            data.checks_passed += 1;
            if depends_on_waiver(v) {
                data.checks_waived += 1;
            }
        } else {
            data.checks_failed += 1;
        }
    }

    let status = if data.checks_failed == 0 {
        RunStatus::Pass
    } else {
        RunStatus::Fail
    };

    CheckgateReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        status,
        counts,
        checks,
        data,
    }
}

fn depends_on_waiver(verdict: &CheckVerdict) -> bool {
    verdict
        .details
        .iter()
        .any(|r| matches!(r.category, Category::WaivedViolation | Category::Advisory))
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub(crate) fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "checkgate".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Map run status to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(status: RunStatus) -> i32 {
    match status {
        RunStatus::Pass => 0,
        RunStatus::Fail => 2,
    }
}
