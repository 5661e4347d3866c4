//! Standalone HTML export of a [`Scene`].

use std::fmt::Write;

use crate::options::Style;
use crate::surface::{NodeId, Scene};

/// Escape text for HTML content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Characters that would end a declaration, a rule or the `<style>` element.
const CSS_BREAKERS: &[char] = &['<', '>', '{', '}', ';'];

fn is_plain_css(text: &str) -> bool {
    !text.contains(CSS_BREAKERS)
}

/// `property: value;` pairs. Declarations that could break out of their rule
/// are dropped.
fn declarations(style: &Style) -> String {
    style
        .iter()
        .filter(|(k, v)| {
            let plain = is_plain_css(k) && is_plain_css(v);
            if !plain {
                log::warn!("dropping style declaration {k:?}: {v:?}");
            }
            plain
        })
        .map(|(k, v)| format!("{k}: {v};"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the whole scene as an HTML document: global rules in one `<style>`
/// block, every node as a nested `<div>`.
pub fn to_html(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    out.push_str(".surface { position: relative; }\n");
    for (selector, style) in scene.rules() {
        if !is_plain_css(selector) {
            log::warn!("dropping style rule {selector:?}");
            continue;
        }
        let _ = writeln!(out, "{selector} {{ {} }}", declarations(style));
    }
    out.push_str("</style>\n</head>\n<body>\n");
    write_node(&mut out, scene, scene.root(), 0);
    out.push_str("</body>\n</html>\n");
    out
}

/// Render one subtree as an HTML fragment (no rules).
pub fn fragment(scene: &Scene, node: NodeId) -> String {
    let mut out = String::new();
    write_node(&mut out, scene, node, 0);
    out
}

fn write_node(out: &mut String, scene: &Scene, id: NodeId, depth: usize) {
    let Some(node) = scene.node(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}<div");
    if !node.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
    }
    if !node.style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape(&declarations(&node.style)));
    }
    for (name, value) in &node.attrs {
        let _ = write!(out, " {}=\"{}\"", escape(name), escape(value));
    }
    out.push('>');

    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    let children = scene.children(id);
    if children.is_empty() {
        out.push_str("</div>\n");
        return;
    }
    out.push('\n');
    for child in children {
        write_node(out, scene, *child, depth + 1);
    }
    let _ = writeln!(out, "{indent}</div>");
}
