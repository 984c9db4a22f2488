#![forbid(unsafe_code)]

//! `quadplot` is a headless quadrant scatter chart renderer.
//!
//! Rendering is a two-step pipeline with no retained state:
//!
//! 1. [`layout_chart`] turns a validated [`model::ChartSpec`] into a
//!    [`layout::ChartLayout`] of plain drawable data (rects, lines, text).
//! 2. [`svg::render_chart_svg`] serializes a layout into an SVG string.
//!
//! Hover tooltips are part of the emitted SVG: every data point carries a
//! pre-laid-out tooltip group that is hidden at rest and revealed by
//! instance-scoped `:hover` CSS rules in the document `<style>`. Re-rendering
//! with changed inputs means running the pipeline again; nothing survives
//! between calls.

pub mod config;
pub mod layout;
pub mod model;
pub mod scale;
pub mod svg;
pub mod text;
pub mod theme;

use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("quadrant list must contain exactly 4 labels, found {found}")]
    QuadrantCount { found: usize },
    #[error("{axis} range is degenerate: min {min} must be less than max {max}")]
    DegenerateRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{axis} range bound is not finite")]
    NonFiniteRange { axis: &'static str },
    #[error("chart spec JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

pub use config::ChartConfig;
pub use layout::{ChartLayout, layout_chart};
pub use model::{AxisRange, ChartSpec, DataPoint, LegendEntry, RegressionLine};
pub use svg::{SvgRenderOptions, render_chart_svg};
pub use theme::ChartTheme;

/// Converts an arbitrary string into a conservative SVG `id` token suitable
/// for embedding multiple charts in the same document.
///
/// The root `<svg id="...">` value prefixes every CSS selector the renderer
/// emits (hover rules, keyframes). If two inlined charts shared an id, one
/// chart's hover rules would apply to the other, so callers should pass each
/// instance a distinct id.
pub fn sanitize_svg_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "q-untitled".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "q-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "q" {
        return "q-untitled".to_string();
    }
    out.to_string()
}

/// Validates, lays out, and renders a chart spec in one call.
pub fn render_svg(
    spec: &ChartSpec,
    chart_config: &ChartConfig,
    chart_theme: &ChartTheme,
    layout_options: &LayoutOptions,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    let chart = layout_chart(spec, chart_config, chart_theme, layout_options)?;
    render_chart_svg(&chart, svg_options)
}
