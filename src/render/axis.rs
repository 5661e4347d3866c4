//! Y axis: title, tick labels and gridlines.

use num_format::Locale;

use super::format::format_value;
use crate::error::Result;
use crate::layout::{AxisTicks, GRIDLINES_END, GRIDLINES_START, line_name};
use crate::options::{ComponentId, Settings};
use crate::surface::{Node, NodeId, Surface};

fn px(v: f64) -> String {
    format!("{v}px")
}

fn plot_row() -> String {
    format!("{} / span 1", line_name(ComponentId::Bars))
}

pub fn draw_axis_title<S>(surface: &mut S, chart: NodeId, settings: &Settings) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let title = &settings.y_axis_title;
    surface.append(
        chart,
        Node::new()
            .class(&title.class)
            .styles(&title.style)
            .style("grid-row", plot_row())
            .style(
                "grid-column",
                format!("{} / span 1", line_name(ComponentId::YAxisTitle)),
            )
            .style("writing-mode", "vertical-rl")
            .style("transform", "rotate(180deg)")
            .text(title.text.as_str()),
    )
}

/// Empty tick label column, mounted first so its height can be measured.
pub fn mount_axis_placeholder<S>(surface: &mut S, chart: NodeId, settings: &Settings) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let labels = &settings.y_axis_labels;
    surface.append(
        chart,
        Node::new()
            .class(&labels.class)
            .styles(&labels.style)
            .style("grid-row", plot_row())
            .style(
                "grid-column",
                format!("{} / span 1", line_name(ComponentId::YAxisLabels)),
            )
            .style("position", "relative"),
    )
}

/// One absolutely positioned label per tick, bottom to top.
///
/// Each label box is one tick interval tall and shifted down by half of it,
/// so its text is centered on the tick line.
pub fn draw_tick_labels<S>(
    surface: &mut S,
    axis: NodeId,
    settings: &Settings,
    ticks: &AxisTicks,
    locale: &Locale,
) -> Result<()>
where
    S: Surface + ?Sized,
{
    let precision = settings.y_axis_labels.precision;
    let shift = ticks.pixel_interval / 2.0;
    for tick in 0..ticks.tick_count {
        let value = tick as f64 * ticks.value_interval;
        let bottom = tick as f64 * ticks.pixel_interval - shift;
        surface.append(
            axis,
            Node::new()
                .class("y-axis-label align-center")
                .style("position", "absolute")
                .style("bottom", px(bottom))
                .style("height", px(ticks.pixel_interval))
                .style("justify-content", "flex-end")
                .style("padding-right", "4px")
                .attr("data-value", value.to_string())
                .text(format_value(value, precision, locale)),
        )?;
    }
    Ok(())
}

/// Gridline layer behind the bars: a repeating gradient with one line per tick.
pub fn draw_gridlines<S>(
    surface: &mut S,
    plot: NodeId,
    settings: &Settings,
    ticks: &AxisTicks,
) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let gridlines = &settings.gridlines;
    let color = gridlines.color.as_str();
    let gradient = format!(
        "repeating-linear-gradient(to top, {color} 0px, {color} 1px, transparent 1px, transparent {})",
        px(ticks.pixel_interval)
    );
    surface.append(
        plot,
        Node::new()
            .class(&gridlines.class)
            .styles(&gridlines.style)
            .style("grid-column", format!("{GRIDLINES_START} / {GRIDLINES_END}"))
            .style("grid-row", "1 / -1")
            .style("z-index", "0")
            .style("background-image", gradient)
            .attr("data-interval", ticks.pixel_interval.to_string())
            .attr("data-count", ticks.tick_count.to_string())
            .attr("data-color", color),
    )
}
