/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Option presets for the dashboard charts
//!
//! The presets are plain JSON documents in the shape the front-end charting
//! library expects, so views can ship them as-is or tweak them first.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::str::FromStr;

/// Palette hex codes
pub const PRIMARY: &str = "#10B981";
/// Negative values and errors
pub const DANGER: &str = "#EF4444";
/// Warnings
pub const WARNING: &str = "#EAB308";
/// Neutral highlights
pub const INFO: &str = "#3B82F6";
/// Secondary series
pub const GRAY: &str = "#94A3B8";

const FONT_FAMILY: &str = "'Inter', sans-serif";

/// Chart types with dedicated presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Line chart
    Line,
    /// Bar chart
    Bar,
    /// Doughnut chart
    Doughnut,
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "doughnut" => Ok(ChartKind::Doughnut),
            other => Err(format!("unknown chart type: {other}")),
        }
    }
}

/// Named palette
#[must_use]
pub fn default_colors() -> Value {
    json!({
        "primary": PRIMARY,
        "danger": DANGER,
        "warning": WARNING,
        "info": INFO,
        "gray": GRAY,
    })
}

/// Options shared by every chart type
#[must_use]
pub fn chart_defaults() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": {
                "position": "top",
                "labels": {
                    "usePointStyle": true,
                    "padding": 20,
                    "font": { "size": 12, "family": FONT_FAMILY }
                }
            },
            "tooltip": {
                "backgroundColor": "rgba(15, 23, 42, 0.9)",
                "padding": 12,
                "titleFont": { "size": 14, "family": FONT_FAMILY, "weight": "600" },
                "bodyFont": { "size": 12, "family": FONT_FAMILY },
                "borderWidth": 0,
                "cornerRadius": 8
            }
        }
    })
}

fn axis_scales() -> Value {
    let ticks = json!({ "font": { "size": 12, "family": FONT_FAMILY } });
    json!({
        "x": { "grid": { "display": false }, "ticks": ticks },
        "y": { "beginAtZero": true, "grid": { "borderDash": [8, 4] }, "ticks": ticks }
    })
}

/// Top-level keys of `overlay` replace those of `base`
fn spread(base: Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (k, v) in overlay {
                base.insert(k.clone(), v.clone());
            }
            Value::Object(base)
        }
        (base, _) => base,
    }
}

/// Line chart preset
#[must_use]
pub fn line_chart_defaults() -> Value {
    spread(
        chart_defaults(),
        &json!({
            "elements": {
                "line": { "tension": 0.4, "borderWidth": 2 },
                "point": { "radius": 4, "hitRadius": 8, "hoverRadius": 6 }
            },
            "scales": axis_scales()
        }),
    )
}

/// Bar chart preset
#[must_use]
pub fn bar_chart_defaults() -> Value {
    spread(
        chart_defaults(),
        &json!({
            "elements": { "bar": { "borderRadius": 4 } },
            "scales": axis_scales()
        }),
    )
}

/// Doughnut chart preset, legend at the bottom
#[must_use]
pub fn doughnut_chart_defaults() -> Value {
    let mut options = spread(chart_defaults(), &json!({ "cutout": "75%" }));
    if let Some(legend) = options.pointer_mut("/plugins/legend/position") {
        *legend = json!("bottom");
    }
    options
}

fn preset(kind: Option<ChartKind>) -> Value {
    match kind {
        Some(ChartKind::Line) => line_chart_defaults(),
        Some(ChartKind::Bar) => bar_chart_defaults(),
        Some(ChartKind::Doughnut) => doughnut_chart_defaults(),
        None => chart_defaults(),
    }
}

/// Preset for `kind` overlaid with `custom`
///
/// Top-level keys of `custom` win, except `plugins` which is merged one
/// level deep so a custom tooltip keeps the default legend.
#[must_use]
pub fn chart_options(kind: Option<ChartKind>, custom: &Value) -> Value {
    let defaults = preset(kind);
    let mut plugins = defaults
        .get("plugins")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));
    if let Some(custom_plugins) = custom.get("plugins") {
        plugins = spread(plugins, custom_plugins);
    }

    let mut options = spread(defaults, custom);
    if let Value::Object(map) = &mut options {
        map.insert("plugins".to_string(), plugins);
    }
    options
}

/// Dataset styling for `kind`; empty for unknown kinds
#[must_use]
pub fn dataset_defaults(kind: Option<ChartKind>) -> Value {
    match kind {
        Some(ChartKind::Line) => json!({
            "borderWidth": 2,
            "pointBackgroundColor": "white",
            "pointBorderWidth": 2
        }),
        Some(ChartKind::Bar) => json!({ "borderRadius": 4, "maxBarThickness": 40 }),
        Some(ChartKind::Doughnut) => json!({ "borderWidth": 0 }),
        None => Value::Object(Map::new()),
    }
}

/// Dataset built from `options`, on top of the defaults named by its `type`
///
/// Without a `type` the line defaults apply; an unrecognised one gets none.
#[must_use]
pub fn create_chart_dataset(options: &Value) -> Value {
    let kind = match options.get("type") {
        None => Some(ChartKind::Line),
        Some(t) => t.as_str().and_then(|t| t.parse().ok()),
    };
    spread(dataset_defaults(kind), options)
}
