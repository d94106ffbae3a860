use assert_json_diff::assert_json_include;
use lifeline_client::presentation::chart::*;
use serde_json::json;

#[test]
fn test_palette() {
    assert_eq!(default_colors()["primary"], "#10B981");
    assert_eq!(default_colors()["danger"], "#EF4444");
}

#[test]
fn test_line_preset() {
    let options = line_chart_defaults();
    assert_json_include!(
        actual: options,
        expected: json!({
            "responsive": true,
            "maintainAspectRatio": false,
            "elements": {"line": {"tension": 0.4}},
            "scales": {"y": {"beginAtZero": true, "grid": {"borderDash": [8, 4]}}}
        })
    );
}

#[test]
fn test_bar_preset_has_rounded_bars() {
    assert_eq!(bar_chart_defaults()["elements"]["bar"]["borderRadius"], 4);
}

#[test]
fn test_chart_options_merges_plugins_one_level() {
    let options = chart_options(
        Some(ChartKind::Line),
        &json!({
            "responsive": false,
            "plugins": {"tooltip": {"enabled": false}}
        }),
    );

    assert_eq!(options["responsive"], false);
    // custom tooltip replaces the default one
    assert_eq!(options["plugins"]["tooltip"], json!({"enabled": false}));
    // legend untouched
    assert_eq!(options["plugins"]["legend"]["position"], "top");
    assert_eq!(options["elements"]["point"]["radius"], 4);
}

#[test]
fn test_chart_options_without_kind() {
    let options = chart_options(None, &json!({}));
    assert_eq!(options, chart_defaults());
}

#[test]
fn test_chart_kind_parsing() {
    assert_eq!("doughnut".parse::<ChartKind>().unwrap(), ChartKind::Doughnut);
    assert!("pie".parse::<ChartKind>().is_err());
}

#[test]
fn test_dataset_defaults() {
    assert_eq!(dataset_defaults(Some(ChartKind::Doughnut)), json!({"borderWidth": 0}));
    assert_eq!(dataset_defaults(None), json!({}));

    let dataset = create_chart_dataset(&json!({
        "type": "bar",
        "label": "Revenue",
        "data": [1, 2, 3],
        "maxBarThickness": 24
    }));
    assert_eq!(
        dataset,
        json!({
            "type": "bar",
            "label": "Revenue",
            "data": [1, 2, 3],
            "borderRadius": 4,
            "maxBarThickness": 24
        })
    );
}

#[test]
fn test_dataset_without_type_uses_line_styling() {
    let dataset = create_chart_dataset(&json!({"label": "Cash", "data": [4, 5]}));
    assert_eq!(
        dataset,
        json!({
            "label": "Cash",
            "data": [4, 5],
            "borderWidth": 2,
            "pointBackgroundColor": "white",
            "pointBorderWidth": 2
        })
    );

    let unknown = create_chart_dataset(&json!({"type": "radar", "data": [1]}));
    assert_eq!(unknown, json!({"type": "radar", "data": [1]}));
}
