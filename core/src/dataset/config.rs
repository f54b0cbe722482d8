//! Chart configuration records
//!
//! A configuration is an opaque Chart.js definition (`type`, `data`,
//! `options`). The page only ever touches a handful of option paths, so the
//! record stays a JSON value and is overlaid in place on a private copy.

use benchboard_types::DisplayOverrides;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::tooltip::DataPoint;

/// Opaque chart definition keyed by index or id in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartConfig(Value);

/// Structural problems that prevent overlays from applying cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    NotAnObject,
    OptionsNotAnObject,
    PluginsNotAnObject,
    MissingDatasets,
}

impl ConfigIssue {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NotAnObject => "record is not a JSON object",
            Self::OptionsNotAnObject => "`options` is not an object",
            Self::PluginsNotAnObject => "`options.plugins` is not an object",
            Self::MissingDatasets => "`data.datasets` is missing or not an array",
        }
    }
}

impl ChartConfig {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Chart type (`line`, `bar`, ...) when declared
    pub fn chart_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Series in declaration order
    pub fn datasets(&self) -> &[Value] {
        self.0
            .pointer("/data/datasets")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.0.pointer("/options/aspectRatio").and_then(Value::as_f64)
    }

    pub fn legend_display(&self) -> Option<bool> {
        self.0
            .pointer("/options/plugins/legend/display")
            .and_then(Value::as_bool)
    }

    /// Apply display flags, creating intermediate option objects as needed.
    pub fn apply_overrides(&mut self, overrides: &DisplayOverrides) {
        if let Some(ratio) = overrides.aspect_ratio {
            if let Some(options) = self.object_at(&["options"]) {
                options.insert("aspectRatio".to_string(), Value::from(ratio));
            }
        }
        if let Some(display) = overrides.legend_display {
            if let Some(legend) = self.object_at(&["options", "plugins", "legend"]) {
                legend.insert("display".to_string(), Value::Bool(display));
            }
        }
    }

    /// Ensure `options.plugins.tooltip.callbacks` exists and return it, so a
    /// renderer can attach its label callback there.
    pub fn tooltip_callbacks_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.object_at(&["options", "plugins", "tooltip", "callbacks"])
    }

    /// Every plotted point with the value the page would format for it.
    ///
    /// The chart library formats values itself; here the raw `y` is rendered
    /// with its JSON representation.
    pub fn points(&self) -> Vec<(String, DataPoint)> {
        let mut points = Vec::new();
        for dataset in self.datasets() {
            let label = dataset
                .get("label")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let Some(data) = dataset.get("data").and_then(Value::as_array) else {
                continue;
            };
            for raw in data {
                let formatted = match raw.get("y") {
                    Some(Value::String(s)) => s.clone(),
                    Some(y) => y.to_string(),
                    None => raw.to_string(),
                };
                points.push((label.clone(), DataPoint::from_raw(formatted, raw)));
            }
        }
        points
    }

    /// Report structural problems, in path order.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let Some(root) = self.0.as_object() else {
            return vec![ConfigIssue::NotAnObject];
        };

        let mut issues = Vec::new();
        match root.get("options") {
            None => {}
            Some(Value::Object(options)) => {
                if matches!(options.get("plugins"), Some(p) if !p.is_object()) {
                    issues.push(ConfigIssue::PluginsNotAnObject);
                }
            }
            Some(_) => issues.push(ConfigIssue::OptionsNotAnObject),
        }
        if !self.0.pointer("/data/datasets").is_some_and(Value::is_array) {
            issues.push(ConfigIssue::MissingDatasets);
        }
        issues
    }

    /// Walk `path`, inserting empty objects for missing segments.
    ///
    /// Returns `None` when a segment exists but is not an object.
    fn object_at(&mut self, path: &[&str]) -> Option<&mut Map<String, Value>> {
        if self.0.is_null() {
            self.0 = Value::Object(Map::new());
        }
        let mut current = self.0.as_object_mut()?;
        for segment in path {
            current = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()))
                .as_object_mut()?;
        }
        Some(current)
    }
}

impl From<Value> for ChartConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
