//! Option translation: dotted-key expansion, allow-list routing, and
//! resolution onto the default tree.
//!
//! ```
//! use serde_json::json;
//! use stackbar::options;
//!
//! let user = json!({ "title.text": "Sales", "bogus.key": 1 });
//! let settings = options::settings_for(user.as_object().unwrap())?;
//! assert_eq!(settings.title.text, "Sales");
//! # Ok::<(), stackbar::Error>(())
//! ```

pub mod allow_list;
pub mod defaults;
pub mod settings;
pub mod translate;

pub use allow_list::{
    ALLOW_LIST, AllowListEntry, ComponentId, OptionKind, ValueShape, classify, overlapping_pairs,
};
pub use defaults::defaults;
pub use settings::{Settings, Style, ValuePosition};
pub use translate::{STYLE_KEY, resolve, translate};

use crate::error::Result;
use crate::path::Tree;

/// Full pipeline with the default allow-list: translate, resolve onto the
/// shared defaults, and deserialize into typed settings.
pub fn settings_for(options: &Tree) -> Result<Settings> {
    let translated = translate(options, ALLOW_LIST);
    let resolved = resolve(&translated, defaults());
    Settings::from_tree(&resolved)
}
