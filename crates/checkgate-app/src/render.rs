//! Render use cases: markdown, GitHub annotations, and log summaries from in-memory reports.

use checkgate_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    checkgate_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    checkgate_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

pub fn render_summary(report: &RenderableReport) -> String {
    checkgate_render::render_summary(report)
}
