//! The render walk: stamps out the chart's node tree from resolved settings,
//! normalized data and computed geometry.
//!
//! Order of mounting:
//! 1. chart container (outer grid)
//! 2. title and Y axis title
//! 3. plot region with one stacked bar per series
//! 4. Y axis labels placeholder, measured to derive tick spacing
//! 5. value labels (skipped for zero values and segments too short to read)
//! 6. tick labels and gridlines
//! 7. legend (stacked input only) and X axis labels
//!
//! Finally the shared utility classes and per-series color classes are
//! registered as global rules.

pub mod axis;
pub mod bars;
pub mod format;
pub mod labels;

use crate::data::{NormalizedData, RawSeries, normalize};
use crate::error::{Error, Result};
use crate::layout::{ChartGeometry, is_drawn};
use crate::options::{self, ComponentId, Settings, Style};
use crate::path::Tree;
use crate::surface::{Node, NodeId, Surface};

/// Class carrying the palette color of palette slot `index`.
pub fn color_class(index: usize) -> String {
    format!("series-color-{index}")
}

/// Palette slot for a color index; cycles through a palette of `palette_len` colors.
pub fn palette_slot(color_index: usize, palette_len: usize) -> Option<usize> {
    (palette_len > 0).then(|| color_index % palette_len)
}

/// Translate `options`, normalize `data` and mount the chart under `mount`.
///
/// Returns the chart container. Unknown options are ignored; the only error
/// for well-formed input is a `mount` that is not on the surface.
pub fn render_bar_chart<S>(
    data: &RawSeries,
    options: &Tree,
    surface: &mut S,
    mount: NodeId,
) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let settings = options::settings_for(options)?;
    let normalized = normalize(data);
    render(&normalized, &settings, surface, mount)
}

/// Mount a chart for already-normalized data and resolved settings.
pub fn render<S>(
    data: &NormalizedData,
    settings: &Settings,
    surface: &mut S,
    mount: NodeId,
) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    if !surface.contains(mount) {
        return Err(Error::UnknownNode(mount));
    }
    let geometry = ChartGeometry::plan(settings, data);
    log::debug!(
        "rendering {} bar(s), {} sub-series, max {}",
        data.series_count,
        data.max_subseries_length,
        data.global_max
    );

    let mut container = Node::new()
        .class(&settings.chart.class)
        .styles(&settings.chart.style)
        .style("display", "grid")
        .style("grid-template-columns", geometry.columns.as_str())
        .style("grid-template-rows", geometry.rows.as_str());
    if !settings.chart.draw {
        container = container.style("display", "none");
        return surface.append(mount, container);
    }
    let chart = surface.append(mount, container)?;
    let drawn = |id| is_drawn(settings, data, id);
    let locale = format::map_locale(&settings.chart.locale);

    if drawn(ComponentId::Title) {
        labels::draw_title(surface, chart, settings)?;
    }
    if drawn(ComponentId::YAxisTitle) {
        axis::draw_axis_title(surface, chart, settings)?;
    }

    let plot = bars::draw_plot(surface, chart, settings, data, &geometry)?;

    // Phase one: mount the axis placeholder (or fall back to the plot region)
    // and measure how tall the value range is on screen.
    let axis_labels = if drawn(ComponentId::YAxisLabels) {
        Some(axis::mount_axis_placeholder(surface, chart, settings)?)
    } else {
        None
    };
    let proxy = axis_labels.unwrap_or(plot.region);
    let height = surface.measure(proxy)?.height;
    let geometry = geometry.with_measured_height(height);

    if drawn(ComponentId::Values) {
        bars::draw_values(surface, settings, data, &plot, locale)?;
    }

    // Phase two: everything positioned by tick spacing.
    match geometry.ticks {
        Some(ticks) => {
            if let Some(axis_labels) = axis_labels {
                axis::draw_tick_labels(surface, axis_labels, settings, &ticks, locale)?;
            }
            if drawn(ComponentId::Gridlines) {
                axis::draw_gridlines(surface, plot.region, settings, &ticks)?;
            }
        }
        None => log::debug!("no tick spacing for height {height}; skipping ticks and gridlines"),
    }

    if drawn(ComponentId::Legend) {
        labels::draw_legend(surface, chart, settings, data)?;
    }
    if drawn(ComponentId::XAxisLabels) {
        labels::draw_x_axis_labels(surface, chart, settings, data, &geometry)?;
    }

    apply_classes(surface, settings, data);
    Ok(chart)
}

/// Register the utility classes and one color class per palette slot in use.
fn apply_classes<S>(surface: &mut S, settings: &Settings, data: &NormalizedData)
where
    S: Surface + ?Sized,
{
    for (class, style) in &settings.classes {
        surface.add_rule(&format!(".{class}"), style);
    }

    let palette = &settings.bars.colors;
    if palette.is_empty() {
        log::warn!("bars.colors is empty; segments stay uncolored");
        return;
    }
    for index in 0..data.color_count() {
        if let Some(slot) = palette_slot(index, palette.len()) {
            let mut style = Style::new();
            style.insert("background-color".into(), palette[slot].clone());
            surface.add_rule(&format!(".{}", color_class(index)), &style);
        }
    }
}
