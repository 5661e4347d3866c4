//! Static SVG export of a [`Scene`], drawn through Plotters.

use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_svg::SVGBackend;

use super::color::{Rgba, parse_color};
use super::text::truncate_to_width;
use crate::surface::grid::parse_px;
use crate::surface::{NodeId, Rect, Scene};

const DEFAULT_FONT_PX: f64 = 12.0;
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Render the scene as an SVG document string.
///
/// Boxes with a `background-color` become filled rectangles, gridline layers
/// become horizontal lines, and text is placed according to the flex
/// alignment classes. Nodes are painted by `z-index`, then mount order.
pub fn to_svg(scene: &Scene) -> Result<String> {
    let root = scene.rect(scene.root())?;
    let size = (
        (root.width.ceil() as u32).max(1),
        (root.height.ceil() as u32).max(1),
    );

    let mut order: Vec<(i32, NodeId)> = scene
        .ids()
        .filter(|id| !hidden(scene, *id))
        .map(|id| (z_index(scene, id), id))
        .collect();
    // Stable: equal z keeps mount order.
    order.sort_by_key(|(z, _)| *z);

    let mut buf = String::new();
    {
        let area = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        area.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;
        for (_, id) in order {
            draw_node(&area, scene, id)?;
        }
        area.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(buf)
}

fn to_plotters(color: Rgba) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.a)
}

/// Nearest `style` value on the node or its ancestors.
fn inherited(scene: &Scene, id: NodeId, property: &str) -> Option<String> {
    let mut cursor = Some(id);
    while let Some(node) = cursor {
        if let Some(value) = scene.computed_style(node).get(property) {
            return Some(value.clone());
        }
        cursor = scene.parent(node);
    }
    None
}

fn hidden(scene: &Scene, id: NodeId) -> bool {
    let mut cursor = Some(id);
    while let Some(node) = cursor {
        if scene.computed_style(node).get("display").map(String::as_str) == Some("none") {
            return true;
        }
        cursor = scene.parent(node);
    }
    false
}

fn z_index(scene: &Scene, id: NodeId) -> i32 {
    inherited(scene, id, "z-index")
        .and_then(|z| z.trim().parse().ok())
        .unwrap_or(0)
}

fn corners(rect: &Rect) -> [(i32, i32); 2] {
    [
        (rect.x.round() as i32, rect.y.round() as i32),
        (
            (rect.x + rect.width).round() as i32,
            (rect.y + rect.height).round() as i32,
        ),
    ]
}

fn draw_node<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
    id: NodeId,
) -> Result<()> {
    let Some(node) = scene.node(id) else {
        return Ok(());
    };
    let rect = scene.rect(id)?;
    let style = scene.computed_style(id);

    if let Some(fill) = style.get("background-color").and_then(|c| parse_color(c)) {
        if fill.is_visible() && rect.width > 0.0 && rect.height > 0.0 {
            area.draw(&Rectangle::new(corners(&rect), to_plotters(fill).filled()))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    if let (Some(interval), Some(color)) = (
        node.attrs.get("data-interval").and_then(|v| v.parse::<f64>().ok()),
        node.attrs.get("data-color").and_then(|c| parse_color(c)),
    ) {
        let opacity = style
            .get("opacity")
            .and_then(|o| o.trim().parse::<f64>().ok())
            .unwrap_or(1.0);
        draw_gridlines(area, &rect, interval, to_plotters(color.with_opacity(opacity)))?;
    }

    if let Some(text) = node.text.as_deref().filter(|t| !t.trim().is_empty()) {
        draw_text(area, scene, id, &rect, text)?;
    }
    Ok(())
}

fn draw_gridlines<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    rect: &Rect,
    interval: f64,
    color: RGBAColor,
) -> Result<()> {
    if interval < 1.0 {
        return Ok(());
    }
    let [(x0, _), (x1, _)] = corners(rect);
    let bottom = rect.y + rect.height;
    let mut offset = 0.0;
    while offset <= rect.height {
        let y = (bottom - offset).round() as i32;
        area.draw(&PathElement::new(vec![(x0, y), (x1, y)], color.stroke_width(1)))
            .map_err(|e| anyhow!("{:?}", e))?;
        offset += interval;
    }
    Ok(())
}

fn draw_text<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scene: &Scene,
    id: NodeId,
    rect: &Rect,
    text: &str,
) -> Result<()> {
    let style = scene.computed_style(id);
    let font_px = inherited(scene, id, "font-size")
        .and_then(|v| parse_px(&v))
        .unwrap_or(DEFAULT_FONT_PX);
    let family = inherited(scene, id, "font-family").unwrap_or_else(|| DEFAULT_FONT_FAMILY.into());
    let color = inherited(scene, id, "color")
        .and_then(|c| parse_color(&c))
        .unwrap_or(Rgba::rgb(0, 0, 0));
    let color = to_plotters(color);
    let vertical = style.get("writing-mode").is_some_and(|m| m.starts_with("vertical"));

    let (h_pos, x) = match style.get("justify-content").map(String::as_str) {
        Some("center") => (HPos::Center, rect.x + rect.width / 2.0),
        Some("flex-end") => {
            let pad = style.get("padding-right").and_then(|p| parse_px(p)).unwrap_or(0.0);
            (HPos::Right, rect.x + rect.width - pad)
        }
        _ => (HPos::Left, rect.x),
    };
    let (v_pos, y) = match style.get("align-items").map(String::as_str) {
        Some("center") => (VPos::Center, rect.y + rect.height / 2.0),
        Some("flex-end") => (VPos::Bottom, rect.y + rect.height),
        _ => (VPos::Top, rect.y),
    };

    let mut text_style = TextStyle::from((FontFamily::from(family.as_str()), font_px)).color(&color);
    let (content, anchor) = if vertical {
        text_style = text_style.transform(FontTransform::Rotate270);
        (
            text.to_string(),
            (rect.x + rect.width / 2.0, rect.y + rect.height / 2.0),
        )
    } else {
        (truncate_to_width(text, font_px, rect.width), (x, y))
    };
    if content.is_empty() {
        return Ok(());
    }
    let text_style = if vertical {
        text_style.pos(Pos::new(HPos::Center, VPos::Center))
    } else {
        text_style.pos(Pos::new(h_pos, v_pos))
    };

    area.draw(&Text::new(
        content,
        (anchor.0.round() as i32, anchor.1.round() as i32),
        text_style,
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
