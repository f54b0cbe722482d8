//! Inspection commands
//!
//! Each command renders its report into a `String`; the binary prints it.

use std::fmt::Write;
use std::path::Path;

use benchboard_core::{ChartView, Dataset, RenderRequest, tooltip_lines};
use benchboard_types::PageConfig;

/// Result of `check`: the report plus whether any record had issues.
pub struct CheckReport {
    pub text: String,
    pub issues: usize,
}

pub fn load_dataset(path: &Path) -> Result<Dataset, String> {
    let dataset = Dataset::load(path).map_err(|e| error_chain(&e))?;
    tracing::debug!(path = %path.display(), charts = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

/// Flatten an error and its sources into one line.
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let _ = write!(message, ": {inner}");
        source = inner.source();
    }
    message
}

pub fn keys(dataset: &Dataset) -> String {
    let mut out = String::new();
    for (key, config) in dataset.entries() {
        let _ = writeln!(
            out,
            "{key}\t{}\t{} series",
            config.chart_type().unwrap_or("?"),
            config.datasets().len()
        );
    }
    out
}

/// Pretty JSON of the configuration the page would hand to the chart library.
pub fn show(
    dataset: &Dataset,
    key: &str,
    detail: bool,
    config: &PageConfig,
) -> Result<String, String> {
    let shared = dataset
        .get(key)
        .ok_or_else(|| format!("no chart configuration for key {key:?}"))?;
    let view = if detail {
        ChartView::Detail(config.detail.overrides())
    } else {
        ChartView::Overview
    };
    let request = RenderRequest::prepare(shared, &view, false);
    serde_json::to_string_pretty(request.config.as_value()).map_err(|e| e.to_string())
}

pub fn tooltips(dataset: &Dataset, key: &str) -> Result<String, String> {
    let config = dataset
        .get(key)
        .ok_or_else(|| format!("no chart configuration for key {key:?}"))?;

    let mut out = String::new();
    let mut current: Option<String> = None;
    for (label, point) in config.points() {
        if current.as_deref() != Some(label.as_str()) {
            let _ = writeln!(out, "[{label}]");
            current = Some(label);
        }
        let _ = writeln!(out, "  {}", tooltip_lines(&point).join(" | "));
    }
    Ok(out)
}

pub fn check(dataset: &Dataset) -> CheckReport {
    let mut text = String::new();
    let mut issues = 0;
    for (key, config) in dataset.entries() {
        for issue in config.issues() {
            issues += 1;
            let _ = writeln!(text, "{key}: {}", issue.describe());
        }
    }
    if issues == 0 {
        let _ = writeln!(text, "{} configurations ok", dataset.len());
    }
    CheckReport { text, issues }
}
