use crate::model::{CheckConfig, CheckgateConfigV1, DescriptionsConfig};
use crate::presets::{self, ProfileDefaults};
use crate::template;
use anyhow::Context;
use checkgate_domain::error::parse_severity;
use checkgate_domain::policy::{CheckOptions, Descriptions, Mode};
use checkgate_domain::waiver::WaiverSet;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

/// Everything the engine needs to evaluate one check.
#[derive(Clone, Debug)]
pub struct ResolvedCheck {
    pub id: String,
    pub item_description: String,
    pub mode: Mode,
    /// Auxiliary items are left empty; they come from the evidence.
    pub options: CheckOptions,
    pub waivers: WaiverSet,
    pub descriptions: Descriptions,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub defaults: ProfileDefaults,
    pub checks: BTreeMap<String, ResolvedCheck>,
    /// Builtin texts overlaid with the top-level `[descriptions]` table.
    pub descriptions: DescriptionsConfig,
}

impl ResolvedConfig {
    pub fn profile(&self) -> &str {
        &self.defaults.profile
    }

    /// Resolution for `check_id`: its configured form, or profile defaults in boolean mode.
    pub fn for_check(&self, check_id: &str) -> anyhow::Result<ResolvedCheck> {
        match self.checks.get(check_id) {
            Some(resolved) => Ok(resolved.clone()),
            None => resolve_check(
                check_id,
                &CheckConfig::default(),
                &self.defaults,
                &self.descriptions,
            ),
        }
    }
}

pub fn resolve_config(
    cfg: CheckgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let defaults = presets::preset(&profile)?;
    let descriptions = DescriptionsConfig::builtin().overlay(&cfg.descriptions);

    let mut checks = BTreeMap::new();
    for (check_id, cc) in cfg.checks.iter() {
        let resolved = resolve_check(check_id, cc, &defaults, &descriptions)
            .with_context(|| format!("invalid config for check {check_id}"))?;
        checks.insert(check_id.clone(), resolved);
    }

    Ok(ResolvedConfig {
        defaults,
        checks,
        descriptions,
    })
}

fn resolve_check(
    check_id: &str,
    cc: &CheckConfig,
    defaults: &ProfileDefaults,
    descriptions: &DescriptionsConfig,
) -> anyhow::Result<ResolvedCheck> {
    let mode = match cc.mode.as_deref() {
        Some(m) => parse_mode(m)?,
        None => defaults.mode,
    };

    let extra_severity = match cc.extra_severity.as_deref() {
        Some(sev) => parse_severity(sev).context("invalid extra_severity")?,
        None => defaults.extra_severity,
    };

    // An explicit waiver_enabled = true opts the check out of a forced-pass profile.
    let forced_pass = cc
        .forced_pass
        .unwrap_or(defaults.forced_pass && cc.waiver_enabled != Some(true));
    let waiver_enabled = cc
        .waiver_enabled
        .unwrap_or(defaults.waivers_when_listed && !forced_pass && !cc.waivers.is_empty());

    let waivers = build_waivers(cc)?;
    let descriptions = build_descriptions(&descriptions.overlay(&cc.descriptions));

    let options = CheckOptions {
        waiver_enabled,
        extra_severity,
        auxiliary_items: Vec::new(),
        forced_pass,
        advisory_notes: cc.advisory_notes.clone(),
        display_name: cc.display_name.as_deref().map(template::name_formatter),
    };

    Ok(ResolvedCheck {
        id: check_id.to_string(),
        item_description: cc.description.clone().unwrap_or_default(),
        mode,
        options,
        waivers,
        descriptions,
    })
}

fn build_waivers(cc: &CheckConfig) -> anyhow::Result<WaiverSet> {
    let mut seen = BTreeSet::new();
    let mut waivers = WaiverSet::new();
    for w in &cc.waivers {
        if !seen.insert(w.key.as_str()) {
            anyhow::bail!("duplicate waiver key: {}", w.key);
        }
        waivers.insert(w.key.clone(), w.reason.clone());
    }
    Ok(waivers)
}

fn build_descriptions(d: &DescriptionsConfig) -> Descriptions {
    fn text(v: &Option<String>) -> String {
        v.clone().unwrap_or_default()
    }
    fn reason(v: &Option<String>) -> checkgate_domain::policy::Reason {
        template::reason(v.as_deref().unwrap_or_default())
    }

    Descriptions {
        satisfied_desc: text(&d.satisfied),
        violation_desc: text(&d.violation),
        waived_desc: text(&d.waived),
        unused_waiver_desc: text(&d.unused_waiver),
        auxiliary_desc: text(&d.auxiliary),
        advisory_desc: text(&d.advisory),
        satisfied_reason: reason(&d.satisfied_reason),
        violation_reason: reason(&d.violation_reason),
        extra_reason: reason(&d.extra_reason),
        waived_base_reason: reason(&d.waived_reason),
        unused_waiver_reason: reason(&d.unused_waiver_reason),
        auxiliary_reason: reason(&d.auxiliary_reason),
    }
}

fn parse_mode(v: &str) -> anyhow::Result<Mode> {
    match v {
        "boolean" => Ok(Mode::Boolean),
        "value" => Ok(Mode::Value),
        other => anyhow::bail!("unknown mode: {other} (expected boolean|value)"),
    }
}
