//! `{key}` placeholders in configured text, filled from item metadata.

use checkgate_domain::policy::{NameFormatter, Reason};
use checkgate_types::Metadata;
use serde_json::Value as JsonValue;

/// Literal text stays a literal `Reason`; text with placeholders reads metadata per item.
pub fn reason(text: &str) -> Reason {
    if !text.contains('{') {
        return Reason::text(text);
    }
    let template = text.to_string();
    Reason::from_fn(move |meta| fill(&template, None, meta))
}

/// `{name}` is the raw item name; every other placeholder reads metadata.
pub fn name_formatter(template: &str) -> NameFormatter {
    let template = template.to_string();
    NameFormatter::new(move |name, meta| fill(&template, Some(name), meta))
}

/// Unknown placeholders render as `?`. Unbalanced braces are kept as written.
fn fill(template: &str, name: Option<&str>, meta: &Metadata) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = after[..end].trim();
                out.push_str(&lookup(key, name, meta));
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup(key: &str, name: Option<&str>, meta: &Metadata) -> String {
    if key == "name" {
        if let Some(name) = name {
            return name.to_string();
        }
    }
    match meta.get(key) {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        Some(JsonValue::Number(n)) => n.to_string(),
        Some(JsonValue::Bool(b)) => b.to_string(),
        _ => "?".to_string(),
    }
}
