use checkgate_domain::policy::Mode;
use checkgate_types::Severity;

/// Profile-level defaults for a check that does not say otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDefaults {
    pub profile: String,
    pub mode: Mode,
    pub extra_severity: Severity,
    /// Checks downgrade every violation to advisory info.
    pub forced_pass: bool,
    /// Waivers are honored when the check lists any.
    pub waivers_when_listed: bool,
}

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into per-check config.
pub fn preset(profile: &str) -> anyhow::Result<ProfileDefaults> {
    match profile {
        "strict" => Ok(strict_profile()),
        "advisory" => Ok(advisory_profile()),
        other => anyhow::bail!("unknown profile: {other} (expected strict|advisory)"),
    }
}

fn strict_profile() -> ProfileDefaults {
    ProfileDefaults {
        profile: "strict".to_string(),
        mode: Mode::Boolean,
        extra_severity: Severity::Warn,
        forced_pass: false,
        waivers_when_listed: true,
    }
}

fn advisory_profile() -> ProfileDefaults {
    // Report everything, block nothing.
    ProfileDefaults {
        profile: "advisory".to_string(),
        mode: Mode::Boolean,
        extra_severity: Severity::Warn,
        forced_pass: true,
        waivers_when_listed: false,
    }
}
