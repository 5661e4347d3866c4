//! Plot region, stacked bars and value labels.

use num_format::Locale;

use super::color_class;
use super::format::format_value;
use crate::data::NormalizedData;
use crate::error::Result;
use crate::layout::{BARS_START, ChartGeometry, REMAINDER, line_name, segment_line};
use crate::options::{ComponentId, Settings};
use crate::surface::{Node, NodeId, Surface};

/// Handles of the mounted plot region.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub region: NodeId,
    pub bars: Vec<NodeId>,
    /// `segments[series][subseries]`; remainder segments are not listed.
    pub segments: Vec<Vec<NodeId>>,
}

/// Mount the plot region and one stacked bar per series.
///
/// Each bar is a grid whose rows are the stack template; the remainder sits on
/// top as an unlabeled, uncolored filler.
pub fn draw_plot<S>(
    surface: &mut S,
    chart: NodeId,
    settings: &Settings,
    data: &NormalizedData,
    geometry: &ChartGeometry,
) -> Result<Plot>
where
    S: Surface + ?Sized,
{
    let track = format!("{} / span 1", line_name(ComponentId::Bars));
    let region = surface.append(
        chart,
        Node::new()
            .class(&settings.bars.class)
            .class("plot")
            .styles(&settings.bars.style)
            .style("grid-row", track.as_str())
            .style("grid-column", track.as_str())
            .style("display", "grid")
            .style("grid-template-columns", geometry.bars.as_str())
            .style("grid-template-rows", "1fr"),
    )?;

    let mut bars = Vec::with_capacity(data.series_count);
    let mut segments = Vec::with_capacity(data.series_count);
    for (series, stack) in geometry.stacks.iter().enumerate() {
        let bar = surface.append(
            region,
            Node::new()
                .class("bar")
                .attr("data-series", series.to_string())
                .style("grid-column", format!("{BARS_START} {} / span 1", series + 1))
                .style("grid-row", "1 / -1")
                .style("display", "grid")
                .style("grid-template-rows", stack.as_str())
                .style("z-index", "1"),
        )?;
        surface.append(
            bar,
            Node::new()
                .class("segment remainder")
                .style("grid-row", format!("{REMAINDER} / span 1")),
        )?;

        let mut row = Vec::with_capacity(data.max_subseries_length);
        for (subseries, value) in data.values(series).iter().enumerate() {
            let segment = surface.append(
                bar,
                Node::new()
                    .class("segment")
                    .class(&color_class(data.color_index(series, subseries)))
                    .attr("data-series", series.to_string())
                    .attr("data-subseries", subseries.to_string())
                    .attr("data-value", value.to_string())
                    .style("grid-row", format!("{} / span 1", segment_line(subseries))),
            )?;
            row.push(segment);
        }
        bars.push(bar);
        segments.push(row);
    }

    Ok(Plot {
        region,
        bars,
        segments,
    })
}

/// Label every non-zero segment that renders at least `values.minHeight` tall.
///
/// All segments are measured before the first label is mounted.
pub fn draw_values<S>(
    surface: &mut S,
    settings: &Settings,
    data: &NormalizedData,
    plot: &Plot,
    locale: &Locale,
) -> Result<()>
where
    S: Surface + ?Sized,
{
    let values = &settings.values;

    let mut measured = Vec::new();
    for (series, row) in plot.segments.iter().enumerate() {
        for (subseries, segment) in row.iter().enumerate() {
            let height = surface.measure(*segment)?.height;
            measured.push((series, subseries, *segment, height));
        }
    }

    for (series, subseries, segment, height) in measured {
        let value = data.values(series)[subseries];
        if value == 0.0 {
            continue;
        }
        if height < values.min_height {
            log::debug!(
                "value label {series}/{subseries} skipped: {height:.1}px < {}px",
                values.min_height
            );
            continue;
        }
        surface.append(
            segment,
            Node::new()
                .class(&values.class)
                .class(values.position.class())
                .styles(&values.style)
                .text(format_value(value, values.precision, locale)),
        )?;
    }
    Ok(())
}
