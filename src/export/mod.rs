//! Static exports of a mounted [`Scene`](crate::surface::Scene): HTML and SVG.

pub mod color;
pub mod html;
pub mod svg;
pub mod text;

pub use html::{fragment, to_html};
pub use svg::to_svg;

use std::path::Path;

/// Output formats, picked from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Svg,
}

impl ExportFormat {
    /// `.svg` → SVG, `.html`/`.htm` → HTML, anything else → `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("svg") => Some(Self::Svg),
            Some("html") | Some("htm") => Some(Self::Html),
            _ => None,
        }
    }
}
