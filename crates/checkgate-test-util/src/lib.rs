//! Shared test utilities for the checkgate workspace.
//!
//! A regular library crate rather than a `#[cfg(test)]` module so integration tests in other crates can depend on it.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` when the root object looks like a
///    report envelope (`schema`, `tool`, `status`, `checks`). Evidence metadata that happens to
///    carry a `tool`/`version` pair is left alone.
/// 2. **Root-only**: run timestamps become `"__TIMESTAMP__"`. Item metadata may legitimately
///    contain keys with the same names.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };

    let is_envelope = ["schema", "tool", "status", "checks"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String("__VERSION__".to_string()),
        );
    }

    for key in TIMESTAMP_KEYS {
        if obj.contains_key(key) {
            obj.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
        }
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_fields() {
        let input = json!({
            "schema": "checkgate.report.v1",
            "tool": { "name": "checkgate", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "finished_at": "2026-01-01T00:00:01Z",
            "status": "pass",
            "checks": []
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "checkgate");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
    }

    #[test]
    fn nested_lookalikes_are_untouched() {
        let input = json!({
            "schema": "checkgate.report.v1",
            "tool": { "name": "checkgate", "version": "0.1.0" },
            "started_at": "2026-01-01T00:00:00Z",
            "status": "fail",
            "checks": [{ "verdict": { "started_at": "keep", "tool": { "version": "21.1" } } }]
        });

        let result = normalize_nondeterministic(input);
        assert_eq!(result["checks"][0]["verdict"]["started_at"], "keep");
        assert_eq!(result["checks"][0]["verdict"]["tool"]["version"], "21.1");
    }

    #[test]
    fn non_envelope_is_returned_unchanged() {
        let input = json!({ "tool": { "version": "1" }, "started_at": "x" });
        assert_eq!(normalize_nondeterministic(input.clone()), input);
    }
}
