//! stackbar
//!
//! A small library for stacked bar charts built from styled boxes on a
//! CSS-grid-like surface. Pairs with the `stackbar` CLI.
//!
//! ### Features
//! - Flat (`"title.text"`) or nested option overrides, filtered through an
//!   allow-list and deep-merged over built-in defaults
//! - Single-series and ragged multi-series input, normalized to a padded matrix
//! - Grid templates for the chart, the bars and every stack, with Y axis ticks
//!   derived from the measured plot height
//! - In-memory [`Scene`] surface with HTML and SVG export
//!
//! ### Example
//! ```
//! use serde_json::json;
//! use stackbar::{RawSeries, Scene, Surface, render_bar_chart};
//!
//! let data = RawSeries::Multi(vec![vec![1.0, 2.0], vec![3.0]]);
//! let options = json!({ "title.text": "Quarterly", "values.precision": 1 });
//! let mut scene = Scene::new(600.0, 400.0);
//! let root = scene.root();
//! let chart = render_bar_chart(&data, options.as_object().unwrap(), &mut scene, root)?;
//! assert!(scene.contains(chart));
//! # Ok::<(), stackbar::Error>(())
//! ```

pub mod data;
pub mod error;
pub mod export;
pub mod layout;
pub mod options;
pub mod path;
pub mod render;
pub mod storage;
pub mod surface;

pub use data::{NormalizedData, RawSeries, normalize};
pub use error::{Error, Result};
pub use render::render_bar_chart;
pub use surface::scene::Scene;
pub use surface::{Node, NodeId, Surface};
