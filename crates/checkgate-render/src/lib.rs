//! Rendering utilities for CI surfaces (Markdown, GitHub annotations, log summaries).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod summary;

#[cfg(test)]
mod test_support;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableCheck, RenderableData, RenderableGroup, RenderableLocation, RenderableRecord,
    RenderableReport, RenderableSeverity, RenderableStatus,
};
pub use summary::{render_check_summary, render_summary};
