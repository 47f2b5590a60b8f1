use checkgate_types::Severity;

/// Caller-contract violations. The engine has no I/O, so these are the only ways a call can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Waivers and forced-pass are two different escape hatches; a check uses at most one.
    #[error("waiver_enabled and forced_pass cannot both be set")]
    ConflictingWaiverModes,

    #[error("unknown severity: {0} (expected info|warn|fail)")]
    UnknownSeverity(String),

    #[error("advisory notes require forced_pass")]
    NotesWithoutForcedPass,
}

/// Parse a severity override at the call boundary.
pub fn parse_severity(v: &str) -> Result<Severity, EngineError> {
    Severity::parse(v).ok_or_else(|| EngineError::UnknownSeverity(v.to_string()))
}
