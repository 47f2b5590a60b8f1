//! Repository chores: JSON schema generation, demo conformance, explain coverage.

use anyhow::{Context, anyhow, bail};
use checkgate_app::{CheckInput, run_check, serialize_report};
use checkgate_settings::Overrides;
use schemars::{Schema, schema_for};
use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    let here = Path::new(env!("CARGO_MANIFEST_DIR"));
    here.parent().map(Path::to_path_buf).unwrap_or_else(|| here.to_path_buf())
}

/// Every schema the repository publishes under `schemas/`, keyed by file stem.
fn published_schemas() -> [(&'static str, Schema); 3] {
    [
        ("checkgate.report.v1", schema_for!(checkgate_types::CheckgateReport)),
        ("checkgate.config.v1", schema_for!(checkgate_settings::CheckgateConfigV1)),
        ("checkgate.evidence.v1", schema_for!(checkgate_types::EvidenceDocument)),
    ]
}

fn schema_text(schema: &Schema) -> anyhow::Result<String> {
    let mut text = serde_json::to_string_pretty(schema).context("render schema as json")?;
    text.push('\n');
    Ok(text)
}

fn write_schemas() -> anyhow::Result<()> {
    let dir = workspace_root().join("schemas");
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    for (stem, schema) in published_schemas() {
        let target = dir.join(format!("{stem}.json"));
        fs::write(&target, schema_text(&schema)?)
            .with_context(|| format!("write {}", target.display()))?;
        println!("wrote {}", target.display());
    }
    Ok(())
}

/// Fails when a committed schema is absent or differs from the generated one.
fn check_schemas() -> anyhow::Result<()> {
    let dir = workspace_root().join("schemas");
    let mut stale = Vec::new();

    for (stem, schema) in published_schemas() {
        let target = dir.join(format!("{stem}.json"));
        let committed = match fs::read_to_string(&target) {
            Ok(text) => text,
            Err(_) => {
                stale.push(format!("{stem} (missing)"));
                continue;
            }
        };
        if committed != schema_text(&schema)? {
            stale.push(format!("{stem} (out of date)"));
        }
    }

    if stale.is_empty() {
        println!("schemas match the Rust types");
        return Ok(());
    }
    for entry in &stale {
        eprintln!("  - {entry}");
    }
    bail!("{} schema(s) need `cargo xtask emit-schemas`", stale.len())
}

/// Evaluate each `demos/<name>/evidence.json` (with its sibling `checkgate.toml`, if any)
/// and validate the resulting report against the report schema.
fn conform() -> anyhow::Result<()> {
    let report_schema = serde_json::to_value(schema_for!(checkgate_types::CheckgateReport))
        .context("report schema to json")?;
    let validator = jsonschema::validator_for(&report_schema)
        .map_err(|e| anyhow!("compile report schema: {e}"))?;

    let demos = workspace_root().join("demos");
    let mut cases: Vec<PathBuf> = fs::read_dir(&demos)
        .with_context(|| format!("list {}", demos.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|dir| dir.join("evidence.json").is_file())
        .collect();
    cases.sort();
    if cases.is_empty() {
        bail!("no demo evidence found under {}", demos.display());
    }

    let mut problems = Vec::new();
    for case in &cases {
        let label = case
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let evidence = fs::read_to_string(case.join("evidence.json"))
            .with_context(|| format!("read {label}/evidence.json"))?;
        let config = fs::read_to_string(case.join("checkgate.toml")).unwrap_or_default();

        let output = run_check(CheckInput {
            evidence_text: &evidence,
            config_text: &config,
            overrides: Overrides::default(),
        })
        .with_context(|| format!("evaluate demo {label}"))?;

        let report: serde_json::Value = serde_json::from_slice(&serialize_report(&output.report)?)?;
        let before = problems.len();
        problems.extend(validator.iter_errors(&report).map(|e| format!("{label}: {e}")));
        if problems.len() == before {
            println!("ok {label} ({:?})", output.report.status);
        }
    }

    if problems.is_empty() {
        println!("{} demo reports conform", cases.len());
        return Ok(());
    }
    for problem in &problems {
        eprintln!("  - {problem}");
    }
    bail!("{} schema violation(s) in demo reports", problems.len())
}

fn explain_coverage() -> anyhow::Result<()> {
    use checkgate_types::explain::{all_categories, all_markers, lookup_explanation};

    let mut gaps = Vec::new();
    for (kind, ids) in [("category", all_categories()), ("marker", all_markers())] {
        for id in ids {
            let Some(exp) = lookup_explanation(id) else {
                gaps.push(format!("{kind} {id}: no entry"));
                continue;
            };
            for (field, text) in [
                ("title", exp.title),
                ("description", exp.description),
                ("remediation", exp.remediation),
            ] {
                if text.is_empty() {
                    gaps.push(format!("{kind} {id}: empty {field}"));
                }
            }
        }
    }

    if gaps.is_empty() {
        println!("{} categories have explanations", all_categories().len());
        println!("{} markers have explanations", all_markers().len());
        return Ok(());
    }
    for gap in &gaps {
        eprintln!("  - {gap}");
    }
    bail!("{} explanation gap(s)", gaps.len())
}

fn usage() {
    eprintln!("xtask commands:");
    eprintln!("  help              print this list");
    eprintln!("  emit-schemas      regenerate schemas/*.json from the Rust types");
    eprintln!("  validate-schemas  fail if schemas/ is stale");
    eprintln!("  print-schema-ids  list schema ids");
    eprintln!("  conform           run demos/ and validate their reports");
    eprintln!("  explain-coverage  fail if a category or marker lacks an explanation");
}

fn main() -> anyhow::Result<()> {
    let command = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match command.as_str() {
        "help" | "--help" | "-h" => {
            usage();
            Ok(())
        }
        "emit-schemas" | "schemas" => write_schemas(),
        "validate-schemas" => check_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for (stem, _) in published_schemas() {
                println!("{stem}");
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other} (try `cargo xtask help`)"),
    }
}
