//! Title, legend and X axis category labels.

use super::color_class;
use crate::data::NormalizedData;
use crate::error::Result;
use crate::layout::{BARS_START, ChartGeometry, line_name};
use crate::options::{ComponentId, Settings};
use crate::surface::{Node, NodeId, Surface};

/// Label `index` from a user list, falling back to `fallback(index)`.
fn label_at(text: &[String], index: usize, fallback: impl Fn(usize) -> String) -> String {
    text.get(index).cloned().unwrap_or_else(|| fallback(index))
}

pub fn draw_title<S>(surface: &mut S, chart: NodeId, settings: &Settings) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let title = &settings.title;
    surface.append(
        chart,
        Node::new()
            .class(&title.class)
            .styles(&title.style)
            .style(
                "grid-row",
                format!("{} / span 1", line_name(ComponentId::Title)),
            )
            .style("grid-column", "1 / -1")
            .text(title.text.as_str()),
    )
}

/// One swatch + label per sub-series, in equal columns across the chart.
pub fn draw_legend<S>(
    surface: &mut S,
    chart: NodeId,
    settings: &Settings,
    data: &NormalizedData,
) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let legend = &settings.legend;
    let entries = data.max_subseries_length;
    let columns = vec!["1fr"; entries.max(1)].join(" ");
    let container = surface.append(
        chart,
        Node::new()
            .class(&legend.class)
            .styles(&legend.style)
            .style(
                "grid-row",
                format!("{} / span 1", line_name(ComponentId::Legend)),
            )
            .style("grid-column", "1 / -1")
            .style("display", "grid")
            .style("grid-template-columns", columns),
    )?;

    for subseries in 0..entries {
        let item = surface.append(
            container,
            Node::new()
                .class("legend-item")
                .style("grid-column", format!("{} / span 1", subseries + 1))
                .style("display", "grid")
                .style("grid-template-columns", "16px 1fr"),
        )?;
        surface.append(
            item,
            Node::new()
                .class("legend-swatch")
                .class(&color_class(subseries))
                .style("grid-column", "1 / span 1")
                .style("height", "12px"),
        )?;
        surface.append(
            item,
            Node::new()
                .class("legend-label align-top")
                .style("grid-column", "2 / span 1")
                .text(label_at(&legend.text, subseries, |i| format!("Series {}", i + 1))),
        )?;
    }
    Ok(container)
}

/// One category label per bar, on the same column grid as the plot region.
pub fn draw_x_axis_labels<S>(
    surface: &mut S,
    chart: NodeId,
    settings: &Settings,
    data: &NormalizedData,
    geometry: &ChartGeometry,
) -> Result<NodeId>
where
    S: Surface + ?Sized,
{
    let labels = &settings.x_axis_labels;
    let container = surface.append(
        chart,
        Node::new()
            .class(&labels.class)
            .styles(&labels.style)
            .style(
                "grid-row",
                format!("{} / span 1", line_name(ComponentId::XAxisLabels)),
            )
            .style(
                "grid-column",
                format!("{} / span 1", line_name(ComponentId::Bars)),
            )
            .style("display", "grid")
            .style("grid-template-columns", geometry.bars.as_str()),
    )?;

    for series in 0..data.series_count {
        surface.append(
            container,
            Node::new()
                .class("x-axis-label justify-middle align-top")
                .style("grid-column", format!("{BARS_START} {} / span 1", series + 1))
                .text(label_at(&labels.text, series, |i| (i + 1).to_string())),
        )?;
    }
    Ok(container)
}
