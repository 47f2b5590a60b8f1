//! The `explain` use case: look up category/marker documentation.

use checkgate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available categories and markers.
    NotFound {
        identifier: String,
        available_categories: &'static [&'static str],
        available_markers: &'static [&'static str],
    },
}

/// Look up an explanation for a category id or reason marker.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let identifier = identifier.trim();
    match explain::lookup_explanation(identifier).or_else(|| lookup_bare_marker(identifier)) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_categories: explain::all_categories(),
            available_markers: explain::all_markers(),
        },
    }
}

/// `WAIVER` works as well as `[WAIVER]`; brackets are awkward in shells.
fn lookup_bare_marker(identifier: &str) -> Option<Explanation> {
    explain::all_markers()
        .iter()
        .find(|m| m.trim_start_matches('[').trim_end_matches(']') == identifier)
        .and_then(|m| explain::lookup_explanation(m))
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    categories: &[&'static str],
    markers: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown category or marker: {}\n\n", identifier));
    out.push_str("Available categories:\n");
    for c in categories {
        out.push_str(&format!("  - {}\n", c));
    }
    out.push_str("\nAvailable markers:\n");
    for m in markers {
        out.push_str(&format!("  - {}\n", m));
    }

    out
}
