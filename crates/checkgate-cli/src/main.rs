//! CLI entry point for checkgate.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `checkgate-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use checkgate_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_annotations, render_markdown, render_summary, run_check, run_explain,
    runtime_error_report, serialize_report, to_renderable, verdict_exit_code,
};
use checkgate_settings::Overrides;
use checkgate_types::CheckgateReport;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "checkgate",
    version,
    about = "Turn parsed signoff evidence into auditable pass/fail verdicts"
)]
struct Cli {
    /// Override profile (strict|advisory).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate evidence and write the report.
    Check {
        /// Evidence document (JSON) produced by the log parsers.
        #[arg(long)]
        evidence: Utf8PathBuf,

        /// Path to checkgate config TOML. A missing file means defaults.
        #[arg(long, default_value = "checkgate.toml")]
        config: Utf8PathBuf,

        /// Destination of the JSON report.
        #[arg(long, default_value = "artifacts/checkgate/report.json")]
        report_out: Utf8PathBuf,

        /// Also write a Markdown rendering of the report.
        #[arg(long)]
        write_markdown: bool,

        /// Destination of the Markdown report, used with `--write-markdown`.
        #[arg(long, default_value = "artifacts/checkgate/report.md")]
        markdown_out: Utf8PathBuf,

        /// Print compact severity-group lines to stdout.
        #[arg(long)]
        summary: bool,
    },

    /// Render a previously written report as Markdown.
    Md {
        /// JSON report to read.
        #[arg(long, default_value = "artifacts/checkgate/report.json")]
        report: Utf8PathBuf,

        /// Output file; stdout when omitted.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Print GitHub Actions workflow commands for Warn/Fail records.
    Annotations {
        /// JSON report to read.
        #[arg(long, default_value = "artifacts/checkgate/report.json")]
        report: Utf8PathBuf,

        /// Stop after this many annotations.
        #[arg(long, default_value_t = 10)]
        max: usize,
    },

    /// Explain an outcome category or reason marker.
    Explain {
        /// A category (e.g. "waived_violation") or marker (e.g. "[WAIVER]" or "WAIVER").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.debug);

    match cli.cmd {
        Commands::Check {
            ref evidence,
            ref config,
            ref report_out,
            write_markdown,
            ref markdown_out,
            summary,
        } => cmd_check(
            &cli,
            evidence,
            config,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
            summary,
        ),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("logging initialized at level: {}", level);
}

fn cmd_check(
    cli: &Cli,
    evidence_path: &Utf8Path,
    config_path: &Utf8Path,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    summary: bool,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let evidence_text = std::fs::read_to_string(evidence_path)
            .with_context(|| format!("read evidence: {}", evidence_path))?;

        // Missing config is allowed (defaults apply).
        let config_text = if config_path.exists() {
            std::fs::read_to_string(config_path)
                .with_context(|| format!("read config: {}", config_path))?
        } else {
            debug!("no config at {}; using defaults", config_path);
            String::new()
        };

        let input = CheckInput {
            evidence_text: &evidence_text,
            config_text: &config_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
            },
        };

        let output = run_check(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;

        let view = to_renderable(&output.report);
        if let Some(md_path) = markdown_out {
            let md = render_markdown(&view);
            write_file(md_path, md.as_bytes()).context("write markdown")?;
        }
        if summary {
            print!("{}", render_summary(&view));
        }

        Ok(verdict_exit_code(output.report.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = cli
                .profile
                .clone()
                .or_else(|| configured_profile(config_path))
                .unwrap_or_else(|| "strict".to_string());
            let report = runtime_error_report(&profile, &format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("checkgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Profile named by the config file, if it can still be read after a failed run.
fn configured_profile(config_path: &Utf8Path) -> Option<String> {
    let text = std::fs::read_to_string(config_path).ok()?;
    checkgate_settings::parse_config_toml(&text).ok()?.profile
}

fn write_report_file(path: &Utf8Path, report: &CheckgateReport) -> anyhow::Result<()> {
    write_file(path, &serialize_report(report)?)
}

fn write_file(path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("create {dir}"))?;
    }
    std::fs::write(path, contents).with_context(|| format!("write {path}"))
}

fn read_report(path: &Utf8Path) -> anyhow::Result<CheckgateReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read report: {path}"))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    let md = render_markdown(&to_renderable(&report));

    match output {
        Some(path) => write_file(&path, md.as_bytes())?,
        None => print!("{md}"),
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report = read_report(&report_path)?;
    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_categories,
            available_markers,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_categories, available_markers)
            );
            std::process::exit(1);
        }
    }
}
