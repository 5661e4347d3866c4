//! Grid geometry derived from settings and normalized data.
//!
//! Everything here is pure. The one value that depends on the surface, the Y
//! axis tick spacing, is computed from a height the caller measured after a
//! first mount ([`ChartGeometry::with_measured_height`]).
//!
//! Tick spacing is rounded to whole pixels. Over many ticks this drifts from
//! the exact value position, which is accepted: fractional spacing renders
//! gridlines of uneven thickness.

use crate::data::NormalizedData;
use crate::options::{ComponentId, Settings};

/// First line of every bar column in the bars template.
pub const BARS_START: &str = "bars-start";
/// Last line of every bar column in the bars template.
pub const BARS_END: &str = "bars-end";
/// Bracket the whole plot region, gaps included.
pub const GRIDLINES_START: &str = "gridlines-start";
pub const GRIDLINES_END: &str = "gridlines-end";
/// Top line of the remainder segment in a stack template.
pub const REMAINDER: &str = "remainder";

/// Ticks aimed for when no gridline interval is configured.
const AUTO_TICKS: f64 = 10.0;

/// Outer grid columns, left to right.
pub const COLUMN_ORDER: [ComponentId; 3] = [
    ComponentId::YAxisTitle,
    ComponentId::YAxisLabels,
    ComponentId::Bars,
];

/// Outer grid rows, top to bottom.
pub const ROW_ORDER: [ComponentId; 4] = [
    ComponentId::Title,
    ComponentId::Bars,
    ComponentId::XAxisLabels,
    ComponentId::Legend,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Columns,
    Rows,
}

/// Grid line name opening a component's outer track.
pub fn line_name(id: ComponentId) -> &'static str {
    match id {
        ComponentId::Chart => "chart",
        ComponentId::Title => "title",
        ComponentId::YAxisTitle => "y-axis-title",
        ComponentId::YAxisLabels => "y-axis-labels",
        ComponentId::Bars => "bars",
        ComponentId::Values => "values",
        ComponentId::Gridlines => "gridlines",
        ComponentId::Legend => "legend",
        ComponentId::XAxisLabels => "x-axis-labels",
        ComponentId::Classes => "classes",
    }
}

/// Grid line name opening sub-series `index` in a stack template.
pub fn segment_line(index: usize) -> String {
    format!("segment-{index}")
}

/// Whether a component gets a node (and a track) for this data.
///
/// The legend additionally requires stacked input; bars are always drawn.
pub fn is_drawn(settings: &Settings, data: &NormalizedData, id: ComponentId) -> bool {
    match id {
        ComponentId::Chart => settings.chart.draw,
        ComponentId::Title => settings.title.draw,
        ComponentId::YAxisTitle => settings.y_axis_title.draw,
        ComponentId::YAxisLabels => settings.y_axis_labels.draw,
        ComponentId::Bars => true,
        ComponentId::Values => settings.values.draw,
        ComponentId::Gridlines => settings.gridlines.draw,
        ComponentId::Legend => settings.legend.draw && data.is_multi_series,
        ComponentId::XAxisLabels => settings.x_axis_labels.draw,
        ComponentId::Classes => false,
    }
}

fn track_size(settings: &Settings, id: ComponentId, axis: Axis) -> Option<&str> {
    let (width, height) = match id {
        ComponentId::Title => (&settings.title.width, &settings.title.height),
        ComponentId::YAxisTitle => (&settings.y_axis_title.width, &settings.y_axis_title.height),
        ComponentId::YAxisLabels => (&settings.y_axis_labels.width, &None),
        ComponentId::Bars => (&settings.bars.width, &settings.bars.height),
        ComponentId::Legend => (&settings.legend.width, &settings.legend.height),
        ComponentId::XAxisLabels => (&settings.x_axis_labels.width, &settings.x_axis_labels.height),
        _ => (&None, &None),
    };
    match axis {
        Axis::Columns => width.as_deref(),
        Axis::Rows => height.as_deref(),
    }
}

/// Concatenate the track sizes of the drawn components in `order`, each
/// preceded by its line name. Hidden components leave no empty track.
pub fn outer_track_template(
    settings: &Settings,
    data: &NormalizedData,
    order: &[ComponentId],
    axis: Axis,
) -> String {
    let mut parts: Vec<String> = order
        .iter()
        .filter(|id| is_drawn(settings, data, **id))
        .filter_map(|id| {
            track_size(settings, *id, axis).map(|size| format!("[{}] {size}", line_name(*id)))
        })
        .collect();
    parts.push("[end]".to_string());
    parts.join(" ")
}

/// Columns of the plot region: a leading gap, `series_count` equal slots
/// separated by the middle gap, and a trailing gap. Gaps are in bar widths.
pub fn bars_track_template(series_count: usize, gaps: [f64; 3]) -> String {
    let [lead, mid, trail] = gaps;
    let mut template = format!("[{GRIDLINES_START}] {}fr", weight(lead));
    for i in 0..series_count {
        if i > 0 {
            template.push_str(&format!(" [{BARS_END}] {}fr", weight(mid)));
        }
        template.push_str(&format!(" [{BARS_START}] 1fr"));
    }
    if series_count > 0 {
        template.push_str(&format!(" [{BARS_END}]"));
    }
    template.push_str(&format!(" {}fr [{GRIDLINES_END}]", weight(trail)));
    template
}

/// Rows of one bar, top to bottom: the remainder, then the sub-series from
/// last to first so the first value sits on the baseline.
///
/// Weights are percentages of `global_max`, so each row set sums to 100 and
/// relative sizes match the values.
pub fn stack_track_template(row: &[f64], global_max: f64) -> String {
    let share = |v: f64| {
        if global_max > 0.0 {
            v / global_max * 100.0
        } else {
            0.0
        }
    };
    let Some((remainder, values)) = row.split_last() else {
        return String::new();
    };
    let mut parts = vec![format!("[{REMAINDER}] {}fr", weight(share(*remainder)))];
    for (index, value) in values.iter().enumerate().rev() {
        parts.push(format!("[{}] {}fr", segment_line(index), weight(share(*value))));
    }
    parts.push("[baseline]".to_string());
    parts.join(" ")
}

fn weight(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Y axis tick layout in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTicks {
    pub tick_count: usize,
    /// Whole-pixel distance between consecutive ticks.
    pub pixel_interval: f64,
    /// Value distance between consecutive ticks.
    pub value_interval: f64,
}

/// Ticks for a plot `height_px` tall showing `0..=global_max`, one every
/// `value_interval`.
///
/// `None` when there is nothing to scale (`global_max <= 0`, empty data), the
/// interval or height is not positive, or ticks would be closer than a pixel.
pub fn compute_axis_ticks(height_px: f64, value_interval: f64, global_max: f64) -> Option<AxisTicks> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if !positive(height_px) || !positive(value_interval) || !positive(global_max) {
        return None;
    }
    let pixel_interval = (height_px * value_interval / global_max).round();
    if pixel_interval < 1.0 {
        return None;
    }
    let tick_count = (height_px / pixel_interval).floor() as usize + 1;
    Some(AxisTicks {
        tick_count,
        pixel_interval,
        value_interval,
    })
}

/// A 1/2/5 x 10^n step giving roughly [`AUTO_TICKS`] intervals up to `global_max`.
pub fn nice_interval(global_max: f64) -> f64 {
    if !(global_max.is_finite() && global_max > 0.0) {
        return 0.0;
    }
    let raw = global_max / AUTO_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Configured gridline interval, or an automatic one when unset (`<= 0`).
pub fn value_interval(settings: &Settings, data: &NormalizedData) -> f64 {
    if settings.gridlines.interval > 0.0 {
        settings.gridlines.interval
    } else {
        nice_interval(data.global_max)
    }
}

/// Computed layout for one render call. Kept apart from [`Settings`] so the
/// resolved options are never written back to.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub columns: String,
    pub rows: String,
    pub bars: String,
    /// One row template per bar.
    pub stacks: Vec<String>,
    pub value_interval: f64,
    pub global_max: f64,
    /// Filled in once the plot height is known.
    pub ticks: Option<AxisTicks>,
}

impl ChartGeometry {
    /// Everything that does not depend on a measurement.
    pub fn plan(settings: &Settings, data: &NormalizedData) -> Self {
        Self {
            columns: outer_track_template(settings, data, &COLUMN_ORDER, Axis::Columns),
            rows: outer_track_template(settings, data, &ROW_ORDER, Axis::Rows),
            bars: bars_track_template(data.series_count, settings.bars.gaps),
            stacks: data
                .matrix
                .iter()
                .map(|row| stack_track_template(row, data.global_max))
                .collect(),
            value_interval: value_interval(settings, data),
            global_max: data.global_max,
            ticks: None,
        }
    }

    /// Second phase: derive ticks from the measured plot height.
    pub fn with_measured_height(self, height_px: f64) -> Self {
        let ticks = compute_axis_ticks(height_px, self.value_interval, self.global_max);
        Self { ticks, ..self }
    }
}
