//! In-memory [`Surface`] with a minimal box/grid layout resolver.

use std::cell::RefCell;

use super::grid::{Placement, TrackList, parse_placement, parse_px, parse_template};
use super::{Node, NodeId, Rect, Size, Surface};
use crate::error::{Error, Result};
use crate::options::Style;

#[derive(Debug, Clone)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug)]
struct ResolvedGrid {
    columns: TrackList,
    rows: TrackList,
    column_lines: Vec<f64>,
    row_lines: Vec<f64>,
}

/// Arena-backed tree of styled boxes plus a global rule table.
///
/// Layout is computed lazily on the first [`measure`](Surface::measure) after
/// a mutation:
/// - the root has the fixed pixel size given to [`Scene::new`];
/// - children of a `display: grid` node are placed by `grid-column`/`grid-row`
///   (default: the whole grid) against `grid-template-columns`/`-rows`;
/// - `position: absolute` children are offset by `top`/`bottom`/`left`;
/// - any other child fills its parent;
/// - pixel `width`/`height` always override the computed size.
#[derive(Debug)]
pub struct Scene {
    slots: Vec<Slot>,
    rules: Vec<(String, Style)>,
    layout: RefCell<Option<Vec<Rect>>>,
}

impl Scene {
    /// Empty surface whose root box is `width` x `height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        let root = Node::new()
            .class("surface")
            .style("width", format!("{width}px"))
            .style("height", format!("{height}px"));
        Self {
            slots: vec![Slot {
                node: root,
                parent: None,
                children: Vec::new(),
            }],
            rules: Vec::new(),
            layout: RefCell::new(None),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).map(|slot| &slot.node)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.slots
            .get(id.0)
            .map(|slot| slot.children.as_slice())
            .unwrap_or(&[])
    }

    /// Global rules in registration order.
    pub fn rules(&self) -> &[(String, Style)] {
        &self.rules
    }

    /// All node ids in mount order (parents before children).
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.slots.len()).map(NodeId)
    }

    /// Nodes carrying `class`, in mount order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.ids()
            .filter(|id| self.slots[id.0].node.has_class(class))
            .collect()
    }

    /// Matching class rules (in registration order) overlaid by the inline style.
    pub fn computed_style(&self, id: NodeId) -> Style {
        let Some(node) = self.node(id) else {
            return Style::new();
        };
        let mut style = Style::new();
        for (selector, rule) in &self.rules {
            let matches = selector
                .strip_prefix('.')
                .is_some_and(|class| node.has_class(class));
            if matches {
                style.extend(rule.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        style.extend(node.style.iter().map(|(k, v)| (k.clone(), v.clone())));
        style
    }

    /// Rendered box of a node.
    pub fn rect(&self, id: NodeId) -> Result<Rect> {
        if !self.contains(id) {
            return Err(Error::UnknownNode(id));
        }
        if let Some(rects) = self.layout.borrow().as_ref() {
            return Ok(rects[id.0]);
        }
        let rects = self.compute_layout()?;
        let rect = rects[id.0];
        *self.layout.borrow_mut() = Some(rects);
        Ok(rect)
    }

    fn compute_layout(&self) -> Result<Vec<Rect>> {
        let mut rects = vec![Rect::default(); self.slots.len()];
        let mut grids: Vec<Option<ResolvedGrid>> = Vec::with_capacity(self.slots.len());

        for (idx, slot) in self.slots.iter().enumerate() {
            let style = self.computed_style(NodeId(idx));
            let rect = match slot.parent {
                None => Rect {
                    x: 0.0,
                    y: 0.0,
                    width: length(&style, "width").unwrap_or(0.0),
                    height: length(&style, "height").unwrap_or(0.0),
                },
                // Parents are always mounted before their children.
                Some(parent) => place(&style, rects[parent.0], grids[parent.0].as_ref())?,
            };
            rects[idx] = rect;
            grids.push(resolve_grid(&style, rect)?);
        }
        Ok(rects)
    }
}

fn length(style: &Style, property: &str) -> Option<f64> {
    style.get(property).and_then(|v| parse_px(v))
}

fn resolve_grid(style: &Style, rect: Rect) -> Result<Option<ResolvedGrid>> {
    if style.get("display").map(String::as_str) != Some("grid") {
        return Ok(None);
    }
    let columns = match style.get("grid-template-columns") {
        Some(template) => parse_template(template)?,
        None => TrackList::single(),
    };
    let rows = match style.get("grid-template-rows") {
        Some(template) => parse_template(template)?,
        None => TrackList::single(),
    };
    let column_lines = columns.resolve(rect.width);
    let row_lines = rows.resolve(rect.height);
    Ok(Some(ResolvedGrid {
        columns,
        rows,
        column_lines,
        row_lines,
    }))
}

fn placement(style: &Style, property: &str) -> Result<Placement> {
    match style.get(property) {
        Some(value) => parse_placement(value),
        None => Ok(Placement::full()),
    }
}

fn place(style: &Style, parent: Rect, grid: Option<&ResolvedGrid>) -> Result<Rect> {
    let width = length(style, "width");
    let height = length(style, "height");

    if style.get("position").map(String::as_str) == Some("absolute") {
        let left = length(style, "left").unwrap_or(0.0);
        let mut rect = Rect {
            x: parent.x + left,
            y: parent.y,
            width: width.unwrap_or((parent.width - left).max(0.0)),
            height: height.unwrap_or(parent.height),
        };
        match (length(style, "top"), length(style, "bottom")) {
            (Some(top), _) => {
                rect.y = parent.y + top;
                rect.height = height.unwrap_or((parent.height - top).max(0.0));
            }
            (None, Some(bottom)) => {
                rect.height = height.unwrap_or((parent.height - bottom).max(0.0));
                rect.y = parent.y + parent.height - bottom - rect.height;
            }
            (None, None) => {}
        }
        return Ok(rect);
    }

    let mut rect = parent;
    if let Some(grid) = grid {
        let columns = grid.columns.span_of(&placement(style, "grid-column")?);
        let rows = grid.rows.span_of(&placement(style, "grid-row")?);
        rect = match (columns, rows) {
            (Some((c0, c1)), Some((r0, r1))) => Rect {
                x: parent.x + grid.column_lines[c0],
                y: parent.y + grid.row_lines[r0],
                width: grid.column_lines[c1] - grid.column_lines[c0],
                height: grid.row_lines[r1] - grid.row_lines[r0],
            },
            _ => {
                log::debug!("grid item references missing lines; collapsing to zero size");
                Rect {
                    x: parent.x,
                    y: parent.y,
                    width: 0.0,
                    height: 0.0,
                }
            }
        };
    }
    if let Some(w) = width {
        rect.width = w;
    }
    if let Some(h) = height {
        rect.height = h;
    }
    Ok(rect)
}

impl Surface for Scene {
    fn append(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        if !self.contains(parent) {
            return Err(Error::UnknownNode(parent));
        }
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.slots[parent.0].children.push(id);
        *self.layout.get_mut() = None;
        Ok(id)
    }

    fn measure(&self, node: NodeId) -> Result<Size> {
        self.rect(node).map(|rect| rect.size())
    }

    fn add_rule(&mut self, selector: &str, style: &Style) {
        match self.rules.iter_mut().find(|(s, _)| s == selector) {
            Some((_, existing)) => {
                existing.extend(style.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
            None => self.rules.push((selector.to_string(), style.clone())),
        }
        *self.layout.get_mut() = None;
    }

    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.slots.len()
    }
}
