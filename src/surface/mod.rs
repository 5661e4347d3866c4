//! The drawing surface the chart is mounted on.
//!
//! The render walk only needs an append-only tree of styled boxes that can
//! report their rendered size. [`Surface`] is that seam; [`Scene`] is the
//! in-memory implementation used by the exporters and tests.

pub mod grid;
pub mod scene;

pub use scene::Scene;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::options::Style;

/// Handle to a mounted node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// Rendered size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Rendered box in pixels, relative to the surface origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// A styled box to mount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub classes: Vec<String>,
    pub style: Style,
    pub attrs: BTreeMap<String, String>,
    pub text: Option<String>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add space-separated class names.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.style.insert(property.to_string(), value.into());
        self
    }

    /// Merge a whole style map; later entries win.
    pub fn styles(mut self, style: &Style) -> Self {
        self.style
            .extend(style.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(name.to_string(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Append-only tree of styled boxes with measurable rendered size.
pub trait Surface {
    /// Mount `node` as the last child of `parent`.
    fn append(&mut self, parent: NodeId, node: Node) -> Result<NodeId>;

    /// Rendered size of a mounted node.
    fn measure(&self, node: NodeId) -> Result<Size>;

    /// Register a global style rule (e.g. `.series-color-0`). Re-registering a
    /// selector merges into the existing rule.
    fn add_rule(&mut self, selector: &str, style: &Style);

    fn contains(&self, node: NodeId) -> bool;
}
