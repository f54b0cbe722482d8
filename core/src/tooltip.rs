//! Tooltip label formatting
//!
//! Maps one hovered data point to the lines shown in its tooltip. Run points
//! (timing of a single run) carry `duration` and `run_at`; timeline points
//! carry the runner `version` and optional `tags`.

use serde_json::Value;

/// Raw fields of a plotted observation used for tooltip text.
///
/// A field is present only when the page would treat it as truthy: missing,
/// `null`, `false`, `0` and empty strings all count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointFields {
    pub duration: Option<String>,
    pub run_at: Option<String>,
    pub version: Option<String>,
    pub tags: Option<String>,
}

/// One hovered point: the library-formatted value plus raw fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPoint {
    pub formatted_value: String,
    pub fields: PointFields,
}

impl DataPoint {
    pub fn new(formatted_value: impl Into<String>) -> Self {
        Self {
            formatted_value: formatted_value.into(),
            fields: PointFields::default(),
        }
    }

    /// Build from the raw point object handed over by the chart library.
    pub fn from_raw(formatted_value: impl Into<String>, raw: &Value) -> Self {
        let field = |name: &str| raw.get(name).and_then(truthy_text);
        Self {
            formatted_value: formatted_value.into(),
            fields: PointFields {
                duration: field("duration"),
                run_at: field("run_at"),
                version: field("version"),
                tags: field("tags"),
            },
        }
    }

    pub fn with_duration(mut self, duration: &str, run_at: &str) -> Self {
        self.fields.duration = Some(duration.to_string());
        self.fields.run_at = Some(run_at.to_string());
        self
    }

    pub fn with_version(mut self, version: &str, tags: Option<&str>) -> Self {
        self.fields.version = Some(version.to_string());
        self.fields.tags = tags.map(String::from);
        self
    }
}

/// Text of a JSON value as template interpolation renders it, or `None` when
/// the value is falsy.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| truthy_text(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some("[object Object]".to_string()),
    }
}

/// Tooltip lines for a point, in display order.
pub fn tooltip_lines(point: &DataPoint) -> Vec<String> {
    let fields = &point.fields;
    if let Some(duration) = &fields.duration {
        return vec![
            point.formatted_value.clone(),
            duration.clone(),
            fields.run_at.clone().unwrap_or_default(),
        ];
    }

    let mut lines = vec![point.formatted_value.clone()];
    if let Some(version) = &fields.version {
        lines.push(format!("(version: {version})"));
        if let Some(tags) = &fields.tags {
            lines.push(format!("(tags: {tags})"));
        }
    }
    lines
}
