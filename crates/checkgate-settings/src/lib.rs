//! Config parsing and profile resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;
mod template;

pub use model::{CheckConfig, CheckgateConfigV1, DescriptionsConfig, WaiverConfig};
pub use presets::ProfileDefaults;
pub use resolve::{Overrides, ResolvedCheck, ResolvedConfig};

/// Schema identifier accepted in `checkgate.toml`.
pub const SCHEMA_CONFIG_V1: &str = "checkgate.config.v1";

/// Parse `checkgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CheckgateConfigV1> {
    let cfg: CheckgateConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CONFIG_V1 {
            anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
        }
    }
    Ok(cfg)
}

/// Resolve the effective per-check configuration (profile + overrides + per-check config).
pub fn resolve_config(
    cfg: CheckgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
