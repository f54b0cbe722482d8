//! Tests for dataset lookup and configuration overlays

use benchboard_types::DisplayOverrides;
use serde_json::json;

use super::*;

fn line_config(title: &str) -> serde_json::Value {
    json!({
        "type": "line",
        "data": {
            "datasets": [
                {"label": "runner-1.0.0", "data": [
                    {"x": "2024-01-01T00:00:00", "y": 1.5, "version": "1.0.0", "tags": null},
                    {"x": "2024-01-02T00:00:00", "y": 1.25, "version": "1.0.1", "tags": "omp=4"}
                ]}
            ]
        },
        "options": {
            "aspectRatio": 1.5,
            "plugins": {"legend": {"display": false}, "title": {"display": false, "text": title}}
        }
    })
}

#[test]
fn test_indexed_lookup() {
    let dataset = Dataset::from_json(&json!([line_config("a"), line_config("b")]).to_string()).unwrap();

    assert_eq!(dataset.len(), 2);
    assert!(dataset.get("1").is_some());
    assert!(dataset.get("2").is_none());
    assert!(dataset.get("x").is_none());
    assert!(dataset.get("").is_none());
}

#[test]
fn test_indexed_lookup_needs_canonical_index() {
    let dataset = Dataset::from_json(&json!([line_config("a"), line_config("b")]).to_string()).unwrap();

    assert!(dataset.get("0").is_some());
    for key in [" 1", "1 ", "01", "+1", "-0", "1.0", "00"] {
        assert!(dataset.get(key).is_none(), "{key:?} should not resolve");
    }
}

#[test]
fn test_keyed_lookup() {
    let text = json!({
        "suite/runner/bench_a": line_config("a"),
        "0": line_config("zero"),
    })
    .to_string();
    let dataset = Dataset::from_json(&text).unwrap();

    assert!(matches!(dataset, Dataset::Keyed(_)));
    assert!(dataset.contains("suite/runner/bench_a"));
    assert!(dataset.contains("0"));
    assert!(!dataset.contains("suite/runner"));

    let keys: Vec<_> = dataset.entries().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["0", "suite/runner/bench_a"]);
}

#[test]
fn test_invalid_json_is_error() {
    assert!(matches!(Dataset::from_json("{not json"), Err(DatasetError::Parse(_))));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(&dir.path().join("data.json")).unwrap_err();
    assert!(matches!(err, DatasetError::ReadFile { .. }));
}

#[test]
fn test_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, json!([line_config("a")]).to_string()).unwrap();

    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset.get("0").and_then(ChartConfig::chart_type), Some("line"));
}

#[test]
fn test_detail_overrides_apply_to_clone_only() {
    let dataset = Dataset::from_json(&json!([line_config("a")]).to_string()).unwrap();
    let shared = dataset.get("0").unwrap();

    let mut detail = shared.clone();
    detail.apply_overrides(&DisplayOverrides::detail());

    assert_eq!(detail.aspect_ratio(), Some(2.0));
    assert_eq!(detail.legend_display(), Some(true));
    assert_eq!(shared.aspect_ratio(), Some(1.5));
    assert_eq!(shared.legend_display(), Some(false));
}

#[test]
fn test_overrides_create_missing_objects() {
    let mut config = ChartConfig::new(json!({"type": "bar", "data": {"datasets": []}}));
    config.apply_overrides(&DisplayOverrides::detail());

    assert_eq!(config.aspect_ratio(), Some(2.0));
    assert_eq!(config.legend_display(), Some(true));
}

#[test]
fn test_empty_overrides_leave_config_untouched() {
    let original = ChartConfig::new(line_config("a"));
    let mut config = original.clone();
    config.apply_overrides(&DisplayOverrides::default());
    assert_eq!(config, original);
}

#[test]
fn test_tooltip_callbacks_slot() {
    let mut config = ChartConfig::new(line_config("a"));
    config
        .tooltip_callbacks_mut()
        .unwrap()
        .insert("label".to_string(), json!("placeholder"));

    assert_eq!(
        config.as_value().pointer("/options/plugins/tooltip/callbacks/label"),
        Some(&json!("placeholder"))
    );
    // Existing plugin settings survive
    assert_eq!(config.legend_display(), Some(false));
}

#[test]
fn test_points_carry_series_label() {
    let config = ChartConfig::new(line_config("a"));
    let points = config.points();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].0, "runner-1.0.0");
    assert_eq!(points[0].1.formatted_value, "1.5");
    assert_eq!(points[1].1.fields.tags.as_deref(), Some("omp=4"));
}

#[test]
fn test_issues() {
    assert!(ChartConfig::new(line_config("a")).issues().is_empty());
    assert_eq!(
        ChartConfig::new(json!([1, 2])).issues(),
        vec![ConfigIssue::NotAnObject]
    );
    assert_eq!(
        ChartConfig::new(json!({"options": 3, "data": {}})).issues(),
        vec![ConfigIssue::OptionsNotAnObject, ConfigIssue::MissingDatasets]
    );
    assert_eq!(
        ChartConfig::new(json!({"options": {"plugins": []}, "data": {"datasets": []}})).issues(),
        vec![ConfigIssue::PluginsNotAnObject]
    );
}
