//! HTML serializer for [`TreeNode`] trees.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::fmt::Write;

use crate::node::{TreeNode, is_void_element};
use crate::parser::DOCTYPE_ATTR;

/// Elements whose text is written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

/// Serialize a tree back to HTML.
pub struct HtmlSerializer;

impl HtmlSerializer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Serialize the content of the wrapper root produced by
    /// [`HtmlParser::parse`](crate::HtmlParser::parse).
    ///
    /// The root element itself is not written; its `text` and children are,
    /// preceded by the doctype of a parsed full document.
    #[must_use]
    pub fn serialize(&self, root: &TreeNode) -> String {
        let mut out = String::with_capacity(4096);
        if let Some(doctype) = root.attr(DOCTYPE_ATTR) {
            writeln!(out, "<!DOCTYPE {doctype}>").unwrap();
        }
        out.push_str(&escape_text(&root.text));
        for child in &root.children {
            serialize_node(child, &mut out);
        }
        out
    }

    /// Serialize a single element, including its own tag and tail.
    #[must_use]
    pub fn serialize_node(&self, node: &TreeNode) -> String {
        let mut out = String::new();
        serialize_node(node, &mut out);
        out
    }
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new()
    }
}

fn serialize_node(node: &TreeNode, out: &mut String) {
    out.push('<');
    out.push_str(&node.tag);
    for (key, value) in &node.attrs {
        write!(out, r#" {key}="{}""#, escape_attr(value)).unwrap();
    }

    if is_void_element(&node.tag) {
        out.push_str(" />");
    } else {
        out.push('>');
        if RAW_TEXT_ELEMENTS.contains(&node.tag.as_str()) {
            out.push_str(&node.text);
        } else {
            out.push_str(&escape_text(&node.text));
        }
        for child in &node.children {
            serialize_node(child, out);
        }
        write!(out, "</{}>", node.tag).unwrap();
    }

    out.push_str(&escape_text(&node.tail));
}

fn escape_text(text: &str) -> String {
    escape(text, false)
}

fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, in_attribute: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if in_attribute => result.push_str("&quot;"),
            '\u{00a0}' => result.push_str("&nbsp;"),
            _ => result.push(ch),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::HtmlParser;

    #[test]
    fn test_serialize_skips_wrapper() {
        let root = TreeNode::new("root").with_children(vec![TreeNode::new("p").with_text("Hello")]);
        assert_eq!(HtmlSerializer::new().serialize(&root), "<p>Hello</p>");
    }

    #[test]
    fn test_void_and_empty_elements() {
        let root = TreeNode::new("root").with_children(vec![
            TreeNode::new("hr").with_tail("\n"),
            TreeNode::new("div").with_attr("class", "glue-tabs__panel-body"),
        ]);

        assert_eq!(
            HtmlSerializer::new().serialize(&root),
            "<hr />\n<div class=\"glue-tabs__panel-body\"></div>"
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let root = TreeNode::new("root").with_children(vec![
            TreeNode::new("a")
                .with_attr("title", r#"say "hi""#)
                .with_text("a < b & c"),
        ]);

        assert_eq!(
            HtmlSerializer::new().serialize(&root),
            r#"<a title="say &quot;hi&quot;">a &lt; b &amp; c</a>"#
        );
    }

    #[test]
    fn test_parse_then_serialize_preserves_markup() {
        let html = "<h2 id=\"s1\">Foo</h2>\n<p>Some <code>code</code> here.</p>\n<hr />\n";
        let tree = HtmlParser::new().parse(html);
        assert_eq!(HtmlSerializer::new().serialize(&tree), html);
    }

    #[test]
    fn test_script_round_trip_is_verbatim() {
        let html = r#"<script>if (a < b && c) { x(); }</script><h2 id="s">S</h2>"#;
        let tree = HtmlParser::new().parse(html);
        assert_eq!(HtmlSerializer::new().serialize(&tree), html);
    }

    #[test]
    fn test_implied_paragraph_end_is_written() {
        let tree = HtmlParser::new().parse(r#"<p>a<h4 id="t">T</h4><p>1</p>"#);
        assert_eq!(
            HtmlSerializer::new().serialize(&tree),
            r#"<p>a</p><h4 id="t">T</h4><p>1</p>"#
        );
    }

    #[test]
    fn test_entities_are_decoded_not_reescaped() {
        let tree = HtmlParser::new().parse("<p>&hearts; &lambda; &amp;</p>");
        assert_eq!(
            HtmlSerializer::new().serialize(&tree),
            "<p>\u{2665} \u{03bb} &amp;</p>"
        );
    }

    #[test]
    fn test_full_document_round_trip() {
        let html = "<!DOCTYPE html>\n<html><head><title>T</title></head><body><p>x</p></body></html>";
        let tree = HtmlParser::new().parse(html);
        assert_eq!(HtmlSerializer::new().serialize(&tree), html);
    }

    #[test]
    fn test_serialize_node_includes_tail() {
        let node = TreeNode::new("p").with_text("x").with_tail(" y");
        assert_eq!(HtmlSerializer::new().serialize_node(&node), "<p>x</p> y");
    }
}
