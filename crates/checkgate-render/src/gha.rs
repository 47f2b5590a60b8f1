use crate::{RenderableReport, RenderableSeverity};

/// Render Warn/Fail records as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line}::{message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for check in &report.checks {
        for r in &check.records {
            let level = match r.severity {
                RenderableSeverity::Fail => "error",
                RenderableSeverity::Warn => "warning",
                RenderableSeverity::Info => continue,
            };

            let mut meta = String::new();
            if let Some(loc) = &r.location {
                meta.push_str(&format!("file={}", loc.path));
                if let Some(line) = loc.line {
                    meta.push_str(&format!(",line={}", line));
                }
            }

            let message = escape(&format!("[{}:{}] {}: {}", check.id, r.category, r.name, r.reason));

            if meta.is_empty() {
                out.push(format!("::{}::{}", level, message));
            } else {
                out.push(format!("::{} {}::{}", level, meta, message));
            }
        }
    }

    out
}

fn escape(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
