//! Chart binder
//!
//! Renders one chart per placeholder element. The key selecting the
//! configuration comes from a `data-*` attribute on each placeholder, or is
//! fixed for the whole page (single-chart page driven by the URL).

use crate::dataset::Dataset;
use crate::dom::DomNode;

use super::{ChartBackend, ChartRegistry, ChartView, RenderRequest};

/// Where a placeholder's dataset key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// `data-<name>` attribute of each placeholder
    Attribute(String),
    /// Same key for every placeholder
    Fixed(String),
}

impl KeySource {
    fn key_for<N: DomNode>(&self, node: &N) -> Option<String> {
        match self {
            Self::Attribute(name) => node.data(name),
            Self::Fixed(key) => Some(key.clone()),
        }
    }
}

/// Render a chart into every element under `root` matching `selector`.
///
/// Placeholders without a key or without a configuration are skipped. The
/// returned registry owns the rendered instances, keyed by placeholder
/// ordinal among the matches.
pub fn bind_charts<N, B>(
    root: &N,
    selector: &str,
    keys: &KeySource,
    dataset: &Dataset,
    backend: &B,
    view: &ChartView,
) -> ChartRegistry<usize, B::Handle>
where
    N: DomNode,
    B: ChartBackend<N>,
{
    let mut registry = ChartRegistry::new();

    for (ordinal, node) in root.query_all(selector).into_iter().enumerate() {
        let Some(key) = keys.key_for(&node) else {
            tracing::debug!(selector, ordinal, "Chart placeholder without key");
            continue;
        };
        let Some(config) = dataset.get(&key) else {
            tracing::debug!(selector, key = %key, "No chart configuration for key");
            continue;
        };

        match backend.render(&node, RenderRequest::prepare(config, view, true)) {
            Ok(handle) => registry.replace(ordinal, handle),
            Err(e) => tracing::warn!(key = %key, error = %e, "Failed to render chart"),
        }
    }

    tracing::debug!(selector, rendered = registry.len(), "Charts bound");
    registry
}
