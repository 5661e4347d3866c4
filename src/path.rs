//! Path and merge helpers over `serde_json` trees, plus the small numeric folds
//! the data normalizer is built from.

use serde_json::{Map, Value};

/// A nested option mapping.
pub type Tree = Map<String, Value>;

/// Merges the base and override value of a key present in both operands.
pub type Combiner = fn(&Value, &Value) -> Value;

/// Expand dotted keys (`"bars.colors"`, `"title.css.color"`) into nested mappings.
///
/// Nested input is accepted as well: objects are descended and their keys are
/// expanded relative to the enclosing path, so `{"title": {"css.color": "red"}}`
/// and `{"title.css.color": "red"}` expand to the same tree. Only keys are split;
/// non-object values are stored as-is.
pub fn expand(options: &Tree) -> Tree {
    let mut out = Tree::new();
    expand_into(&mut out, &[], options);
    out
}

fn expand_into<'a>(out: &mut Tree, prefix: &[&'a str], options: &'a Tree) {
    for (key, value) in options {
        let mut path = prefix.to_vec();
        path.extend(key.split('.').filter(|segment| !segment.is_empty()));
        match value {
            Value::Object(inner) => expand_into(out, &path, inner),
            leaf => set_path(out, &path, leaf.clone()),
        }
    }
}

/// Set `value` at `path`, creating intermediate mappings as needed.
///
/// Only the final segment is overwritten. An intermediate segment holding a
/// scalar is replaced by a mapping, so the walk can never get stuck; for
/// conflicting input (`"a": 1` and `"a.b": 2`) the key seen last wins.
pub fn set_path(root: &mut Tree, path: &[&str], value: Value) {
    match path {
        [] => {}
        [last] => {
            root.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let child = root
                .entry(*head)
                .or_insert_with(|| Value::Object(Tree::new()));
            if !child.is_object() {
                *child = Value::Object(Tree::new());
            }
            if let Value::Object(map) = child {
                set_path(map, rest, value);
            }
        }
    }
}

/// Read the value at `path`, if every segment exists.
pub fn get_path<'a>(root: &'a Tree, path: &[&str]) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    let mut node = root;
    for segment in parents {
        node = node.get(*segment)?.as_object()?;
    }
    node.get(*last)
}

/// Pure recursive merge of `overlay` onto `base`.
///
/// For a key present in both operands, a combiner registered under that key
/// name decides the result; otherwise two mappings merge key-wise and any other
/// pair resolves to the overlay value. Keys present on one side only are copied.
pub fn deep_merge(base: &Tree, overlay: &Tree, combiners: &[(&str, Combiner)]) -> Tree {
    let mut out = base.clone();
    for (key, over) in overlay {
        let merged = match out.get(key) {
            Some(existing) => {
                if let Some((_, combine)) = combiners.iter().find(|(name, _)| name == key) {
                    combine(existing, over)
                } else if let (Value::Object(a), Value::Object(b)) = (existing, over) {
                    Value::Object(deep_merge(a, b, combiners))
                } else {
                    over.clone()
                }
            }
            None => over.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}

/// Sum of all values (0 for empty input).
pub fn sum(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, v| acc + v)
}

/// Largest value; `f64::NEG_INFINITY` for empty input ("no data").
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Length of the longest row (0 for no rows).
pub fn max_len<T>(rows: &[Vec<T>]) -> usize {
    rows.iter().map(Vec::len).fold(0, usize::max)
}

/// Copy of `values`, extended with `fill` up to `target` entries. Never truncates.
pub fn pad_right<T: Clone>(values: &[T], fill: T, target: usize) -> Vec<T> {
    let mut out = values.to_vec();
    if out.len() < target {
        out.resize(target, fill);
    }
    out
}
