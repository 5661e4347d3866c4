use serde_json::{Value, json};
use stackbar::path::{Tree, deep_merge, expand, get_path, max, max_len, pad_right, sum};

fn tree(v: Value) -> Tree {
    v.as_object().cloned().unwrap()
}

#[test]
fn flat_and_nested_keys_expand_alike() {
    let flat = tree(json!({ "title.css.color": "red", "title.text": "T" }));
    let nested = tree(json!({ "title": { "css.color": "red", "text": "T" } }));
    let expected = json!({ "title": { "css": { "color": "red" }, "text": "T" } });
    assert_eq!(Value::Object(expand(&flat)), expected);
    assert_eq!(Value::Object(expand(&nested)), expected);
}

#[test]
fn expand_does_not_split_values() {
    let t = tree(json!({ "title.text": "a.b.c" }));
    let out = expand(&t);
    assert_eq!(get_path(&out, &["title", "text"]), Some(&json!("a.b.c")));
}

#[test]
fn overlay_wins_and_mappings_merge() {
    let base = tree(json!({ "a": { "x": 1, "y": 2 }, "b": [1, 2], "c": "keep" }));
    let overlay = tree(json!({ "a": { "y": 3, "z": 4 }, "b": [9] }));
    let merged = deep_merge(&base, &overlay, &[]);
    assert_eq!(
        Value::Object(merged),
        json!({ "a": { "x": 1, "y": 3, "z": 4 }, "b": [9], "c": "keep" })
    );
}

#[test]
fn merge_leaves_operands_untouched() {
    let base = tree(json!({ "a": { "x": 1 } }));
    let overlay = tree(json!({ "a": { "x": 2 } }));
    let before = (base.clone(), overlay.clone());
    let _ = deep_merge(&base, &overlay, &[]);
    assert_eq!((base, overlay), before);
}

#[test]
fn combiner_applies_only_to_its_key() {
    fn join(a: &Value, b: &Value) -> Value {
        json!(format!("{} {}", a.as_str().unwrap(), b.as_str().unwrap()))
    }
    let base = tree(json!({ "t": { "class": "a", "text": "x" } }));
    let overlay = tree(json!({ "t": { "class": "b", "text": "y" } }));
    let merged = deep_merge(&base, &overlay, &[("class", join)]);
    assert_eq!(Value::Object(merged), json!({ "t": { "class": "a b", "text": "y" } }));
}

#[test]
fn numeric_folds() {
    assert_eq!(sum(&[1.0, 2.0, 3.5]), 6.5);
    assert_eq!(max(&[1.0, 7.0, 3.0]), 7.0);
    assert_eq!(max_len(&[vec![1], vec![1, 2, 3], vec![]]), 3);
}

#[test]
fn padding_never_truncates() {
    assert_eq!(pad_right(&[1, 2], 0, 4), vec![1, 2, 0, 0]);
    assert_eq!(pad_right(&[1, 2, 3], 0, 2), vec![1, 2, 3]);
}
