//! Shared configuration types for benchboard
//!
//! This crate contains serializable configuration types that are shared between
//! the native inspection CLI (benchboard) and the WASM frontend (benchboard-app).
//! Every field carries a serde default so a partial config only overrides what
//! it names.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Page Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Which page script behavior to run, read from `<body data-page="...">`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Timeline grid: nav, tab groups, overview charts and single/multi switchers
    #[default]
    Timeline,
    /// Speedup charts per runner
    Runners,
    /// One enlarged chart selected by the `index` URL parameter
    Single,
}

impl PageKind {
    /// Parse the `data-page` attribute value. Unknown values yield `None`.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "timeline" => Some(Self::Timeline),
            "runners" => Some(Self::Runners),
            "single" => Some(Self::Single),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Runners => "runners",
            Self::Single => "single",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde Default Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_detail_aspect_ratio() -> Option<f64> {
    Some(2.0)
}
fn default_hidden_class() -> String {
    "hidden".to_string()
}
fn default_data_element_id() -> String {
    "chart-data".to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Display Overrides
// ─────────────────────────────────────────────────────────────────────────────

/// Option overlays applied to a chart configuration before rendering.
///
/// `None` leaves the corresponding option untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend_display: Option<bool>,
}

impl DisplayOverrides {
    /// Overrides for the enlarged single-chart rendering
    pub fn detail() -> Self {
        Self {
            aspect_ratio: Some(2.0),
            legend_display: Some(true),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.aspect_ratio.is_none() && self.legend_display.is_none()
    }
}

/// Detail overrides as they appear in a config file. Defaults to the detail
/// rendering (aspect ratio 2.0, legend forced on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailConfig {
    #[serde(default = "default_detail_aspect_ratio")]
    pub aspect_ratio: Option<f64>,
    #[serde(default = "default_true")]
    pub show_legend: bool,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: default_detail_aspect_ratio(),
            show_legend: true,
        }
    }
}

impl DetailConfig {
    pub fn overrides(&self) -> DisplayOverrides {
        DisplayOverrides {
            aspect_ratio: self.aspect_ratio,
            legend_display: self.show_legend.then_some(true),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marker Conventions
// ─────────────────────────────────────────────────────────────────────────────

/// Chart placeholders scanned by the chart binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartMarkers {
    /// Overview charts on the timeline page and the canvas on the single page
    pub timeline_selector: String,
    /// Speedup charts on the runners page
    pub runner_selector: String,
    /// `data-*` attribute holding the dataset key
    pub key_attr: String,
    /// Element that receives the heading on the single page
    pub single_title_id: String,
    /// URL query parameter selecting the chart on the single page
    pub url_param: String,
}

impl Default for ChartMarkers {
    fn default() -> Self {
        Self {
            timeline_selector: ".timeline-chart".to_string(),
            runner_selector: ".by-runner-chart".to_string(),
            key_attr: "index".to_string(),
            single_title_id: "title".to_string(),
            url_param: "index".to_string(),
        }
    }
}

/// Page navigation links and the sections they reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMarkers {
    /// Id of the element containing the navigation links
    pub nav_id: String,
    /// Link selector inside the nav element
    pub link_selector: String,
    /// `data-*` attribute on a link naming its section suffix
    pub key_attr: String,
    /// Sections are the elements whose id starts with this prefix;
    /// a link with key `S` targets `<prefix>-S`
    pub section_prefix: String,
}

impl Default for NavMarkers {
    fn default() -> Self {
        Self {
            nav_id: "page_nav".to_string(),
            link_selector: "a".to_string(),
            key_attr: "index".to_string(),
            section_prefix: "section".to_string(),
        }
    }
}

/// Tab group structure and active styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabMarkers {
    pub group_selector: String,
    pub tab_selector: String,
    pub link_selector: String,
    pub body_selector: String,
    /// `data-*` attribute pairing tabs with bodies by key instead of position
    pub key_attr: String,
    /// Classes applied to the active tab
    pub active_classes: Vec<String>,
}

impl Default for TabMarkers {
    fn default() -> Self {
        Self {
            group_selector: ".cbtk-tab".to_string(),
            tab_selector: ".nav-item".to_string(),
            link_selector: ".nav-link".to_string(),
            body_selector: ".tab-pane".to_string(),
            key_attr: "tab".to_string(),
            active_classes: ["border-l", "border-r", "border-t", "-mb-px", "font-bold"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Single/multi switcher scopes and their parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherMarkers {
    pub scope_selector: String,
    pub overview_selector: String,
    pub detail_selector: String,
    pub title_selector: String,
    pub canvas_selector: String,
    pub link_selector: String,
    pub back_selector: String,
    /// `data-*` attribute on a detail link holding the dataset key
    pub key_attr: String,
    /// `data-*` attribute on a detail link holding the display title
    pub title_attr: String,
}

impl Default for SwitcherMarkers {
    fn default() -> Self {
        Self {
            scope_selector: ".single-multi-charts".to_string(),
            overview_selector: ".timeline-multi".to_string(),
            detail_selector: ".timeline-single".to_string(),
            title_selector: ".timeline-single-title".to_string(),
            canvas_selector: ".timeline-single-canvas".to_string(),
            link_selector: ".timeline-link-single".to_string(),
            back_selector: ".timeline-single-back".to_string(),
            key_attr: "index".to_string(),
            title_attr: "bench".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Config
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the page scripts need to find their marker elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Class toggled to hide sections, tab bodies and switcher containers
    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
    /// Id of the `<script type="application/json">` element carrying the dataset
    #[serde(default = "default_data_element_id")]
    pub data_element_id: String,
    #[serde(default)]
    pub charts: ChartMarkers,
    #[serde(default)]
    pub nav: NavMarkers,
    #[serde(default)]
    pub tabs: TabMarkers,
    #[serde(default)]
    pub switcher: SwitcherMarkers,
    #[serde(default)]
    pub detail: DetailConfig,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            hidden_class: default_hidden_class(),
            data_element_id: default_data_element_id(),
            charts: ChartMarkers::default(),
            nav: NavMarkers::default(),
            tabs: TabMarkers::default(),
            switcher: SwitcherMarkers::default(),
            detail: DetailConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: PageConfig =
            serde_json::from_str(r#"{"hidden_class": "is-hidden", "tabs": {"key_attr": "pane"}}"#)
                .unwrap();

        assert_eq!(config.hidden_class, "is-hidden");
        assert_eq!(config.tabs.key_attr, "pane");
        assert_eq!(config.tabs.group_selector, ".cbtk-tab");
        assert_eq!(config.tabs.active_classes.len(), 5);
        assert_eq!(config.data_element_id, "chart-data");
        assert_eq!(config.detail, DetailConfig::default());
    }

    #[test]
    fn test_detail_overrides() {
        assert_eq!(DetailConfig::default().overrides(), DisplayOverrides::detail());

        let no_legend = DetailConfig {
            aspect_ratio: None,
            show_legend: false,
        };
        assert!(no_legend.overrides().is_empty());
    }

    #[test]
    fn test_page_kind_from_attr() {
        assert_eq!(PageKind::from_attr("Runners"), Some(PageKind::Runners));
        assert_eq!(PageKind::from_attr(" single "), Some(PageKind::Single));
        assert_eq!(PageKind::from_attr("home"), None);
        assert_eq!(PageKind::default(), PageKind::Timeline);
    }
}
