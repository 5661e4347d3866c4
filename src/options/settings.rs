//! Typed view of a resolved option tree.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::path::Tree;

/// Style properties forwarded verbatim to the surface.
pub type Style = BTreeMap<String, String>;

/// All chart settings after translation and resolution.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub chart: ChartSettings,
    pub title: TextSettings,
    pub y_axis_title: TextSettings,
    pub y_axis_labels: AxisLabelSettings,
    pub bars: BarSettings,
    pub values: ValueSettings,
    pub gridlines: GridlineSettings,
    pub legend: LabelListSettings,
    pub x_axis_labels: LabelListSettings,
    /// Shared utility classes, keyed by class name.
    #[serde(default, deserialize_with = "de_rules")]
    pub classes: BTreeMap<String, Style>,
}

impl Settings {
    /// Deserialize a resolved tree. Anything produced by
    /// [`translate`](super::translate) + [`resolve`](super::resolve) over the
    /// shipped defaults deserializes cleanly.
    pub fn from_tree(tree: &Tree) -> Result<Self> {
        serde_json::from_value(Value::Object(tree.clone())).map_err(Error::Settings)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartSettings {
    pub draw: bool,
    pub locale: String,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

/// Title-like components: one line of text in its own track.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextSettings {
    pub draw: bool,
    pub text: String,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AxisLabelSettings {
    pub draw: bool,
    #[serde(deserialize_with = "de_precision")]
    pub precision: usize,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BarSettings {
    pub colors: Vec<String>,
    /// Leading, between-bar and trailing gap, in bar widths.
    pub gaps: [f64; 3],
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

/// Where a value label sits inside its segment along the bar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePosition {
    Top,
    Center,
    Bottom,
}

impl ValuePosition {
    /// Utility class aligning the label inside its segment.
    pub fn class(self) -> &'static str {
        match self {
            Self::Top => "align-top",
            Self::Center => "align-center",
            Self::Bottom => "align-bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueSettings {
    pub draw: bool,
    pub position: ValuePosition,
    #[serde(deserialize_with = "de_precision")]
    pub precision: usize,
    /// Segments rendered shorter than this many pixels get no label.
    pub min_height: f64,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridlineSettings {
    pub draw: bool,
    /// Value distance between gridlines; `<= 0` picks one automatically.
    pub interval: f64,
    pub color: String,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

/// Components that render one label per bar or per sub-series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelListSettings {
    pub draw: bool,
    pub text: Vec<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub class: String,
    #[serde(default, deserialize_with = "de_style")]
    pub style: Style,
}

const MAX_PRECISION: usize = 10;

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Style values may be given as numbers or bools; the surface only sees strings.
fn de_style<'de, D>(deserializer: D) -> Result<Style, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(k, v)| (k, scalar_to_string(v)))
        .collect())
}

fn de_rules<'de, D>(deserializer: D) -> Result<BTreeMap<String, Style>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, BTreeMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(class, style)| {
            let style = style
                .into_iter()
                .map(|(k, v)| (k, scalar_to_string(v)))
                .collect();
            (class, style)
        })
        .collect())
}

/// Decimal places: any finite number, rounded and clamped to `0..=10`.
fn de_precision<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(serde::de::Error::custom("precision must be finite"));
    }
    Ok(raw.round().clamp(0.0, MAX_PRECISION as f64) as usize)
}
