//! Process-wide default option tree.

use serde_json::{Value, json};
use std::sync::OnceLock;

use crate::path::Tree;

/// Microsoft Office (2013+) chart series palette.
pub const OFFICE10: [&str; 10] = [
    "#4472C4", // blue
    "#ED7D31", // orange
    "#A5A5A5", // gray
    "#FFC000", // gold
    "#5B9BD5", // light blue
    "#70AD47", // green
    "#264478", // dark blue
    "#9E480E", // dark orange
    "#636363", // dark gray
    "#997300", // brownish gold
];

static DEFAULTS: OnceLock<Tree> = OnceLock::new();

/// The default option tree. Built once and only ever handed out by shared
/// reference; resolution always merges into a fresh copy.
pub fn defaults() -> &'static Tree {
    DEFAULTS.get_or_init(build)
}

fn build() -> Tree {
    let tree = json!({
        "chart": {
            "draw": true,
            "locale": "en",
            "class": "chart",
            "style": {
                "width": "600px",
                "height": "400px",
                "background-color": "#FFFFFF",
                "font-family": "sans-serif",
                "font-size": "12px",
                "color": "#333333"
            }
        },
        "title": {
            "draw": true,
            "text": "Bar Chart",
            "height": "40px",
            "class": "title justify-middle align-center",
            "style": { "font-size": "18px", "font-weight": "bold" }
        },
        "yAxisTitle": {
            "draw": true,
            "text": "Value",
            "width": "30px",
            "class": "y-axis-title justify-middle align-center",
            "style": {}
        },
        "yAxisLabels": {
            "draw": true,
            "precision": 0,
            "width": "50px",
            "class": "y-axis-labels",
            "style": { "font-size": "11px" }
        },
        "bars": {
            "colors": OFFICE10,
            "gaps": [0.5, 0.5, 0.5],
            "width": "1fr",
            "height": "1fr",
            "class": "bars",
            "style": {}
        },
        "values": {
            "draw": true,
            "position": "top",
            "precision": 0,
            "minHeight": 14,
            "class": "value justify-middle",
            "style": { "font-size": "11px", "color": "#FFFFFF" }
        },
        "gridlines": {
            "draw": true,
            "interval": 0,
            "color": "#DDDDDD",
            "class": "gridlines",
            "style": {}
        },
        "legend": {
            "draw": true,
            "text": [],
            "height": "30px",
            "class": "legend justify-middle align-center",
            "style": {}
        },
        "xAxisLabels": {
            "draw": true,
            "text": [],
            "height": "30px",
            "class": "x-axis-labels",
            "style": {}
        },
        "classes": {
            "align-top": { "display": "flex", "align-items": "flex-start" },
            "align-center": { "display": "flex", "align-items": "center" },
            "align-bottom": { "display": "flex", "align-items": "flex-end" },
            "justify-middle": { "display": "flex", "justify-content": "center" }
        }
    });
    match tree {
        Value::Object(map) => map,
        _ => Tree::new(),
    }
}
