//! Routing of user overrides through the allow-list, and resolution onto defaults.

use serde_json::Value;

use super::allow_list::{AllowListEntry, ComponentId, OptionKind, classify};
use crate::path::{Combiner, Tree, deep_merge, expand, set_path};

/// Sub-mapping names a caller may group style properties under.
const STYLE_BLOCKS: &[&str] = &["css", "style"];

/// Key the style namespace is stored under in translated and resolved trees.
pub const STYLE_KEY: &str = "style";

/// Expand `options` and keep only allow-listed leaves, routed into their namespace.
///
/// Accepts flat dotted keys, nested mappings, or a mix of both. Unknown
/// components, unlisted properties and values of the wrong shape are dropped.
pub fn translate(options: &Tree, table: &[AllowListEntry]) -> Tree {
    let expanded = expand(options);
    let mut out = Tree::new();

    for (component_key, properties) in &expanded {
        let Some(component) = ComponentId::from_key(component_key) else {
            log::debug!("dropping unknown component {component_key:?}");
            continue;
        };
        let Some(properties) = properties.as_object() else {
            log::debug!("dropping non-mapping value for component {component_key:?}");
            continue;
        };

        for (property, value) in properties {
            match value {
                Value::Object(block) if STYLE_BLOCKS.contains(&property.as_str()) => {
                    for (style_property, style_value) in block {
                        route(&mut out, table, component, style_property, style_value, true);
                    }
                }
                _ => route(&mut out, table, component, property, value, false),
            }
        }
    }
    out
}

fn route(
    out: &mut Tree,
    table: &[AllowListEntry],
    component: ComponentId,
    property: &str,
    value: &Value,
    in_style_block: bool,
) {
    let id = component.key();
    match classify(table, component, property) {
        None => log::debug!("dropping unlisted option {id}.{property}"),
        Some(entry) if in_style_block && entry.kind == OptionKind::Direct => {
            log::debug!("dropping {id}.{property}: not a style property");
        }
        Some(entry) if !entry.shape.accepts(value) => {
            log::warn!(
                "ignoring {id}.{property}: expected {:?}, got {value}",
                entry.shape
            );
        }
        Some(entry) => match entry.kind {
            OptionKind::Direct => set_path(out, &[id, property], value.clone()),
            OptionKind::Style => set_path(out, &[id, STYLE_KEY, property], value.clone()),
        },
    }
}

const COMBINERS: &[(&str, Combiner)] = &[("class", concat_classes)];

/// Merge `translated` onto `defaults` without touching either.
///
/// Class lists concatenate, style mappings merge key-wise, everything else
/// (text, label lists, palettes, scalars) is replaced by the override.
pub fn resolve(translated: &Tree, defaults: &Tree) -> Tree {
    deep_merge(defaults, translated, COMBINERS)
}

fn concat_classes(base: &Value, overlay: &Value) -> Value {
    let joined = [base, overlay]
        .iter()
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Value::String(joined)
}
