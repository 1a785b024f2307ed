//! HTML parser building [`TreeNode`] trees from an `html5ever` parse.
//!
//! The input runs through the HTML5 tree-construction algorithm, so
//! rendered pages come out exactly as a browser would see them: raw text in
//! `<script>` and `<style>`, implied end tags, void elements without `/>`
//! and the full named character reference table.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::{QualName, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::node::TreeNode;

/// Tag of the synthetic element wrapping every parsed page.
pub const ROOT_TAG: &str = "root";

/// Attribute of the wrapper root holding the doctype name of a full document.
pub const DOCTYPE_ATTR: &str = "doctype";

/// Parse HTML pages and fragments into a [`TreeNode`] tree.
pub struct HtmlParser;

impl HtmlParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse an HTML string.
    ///
    /// The returned node is a synthetic [`ROOT_TAG`] element. For a full
    /// document (input starting with a doctype or `<html>`) its single child
    /// is the `html` element and the doctype name is kept in
    /// [`DOCTYPE_ATTR`]. For a fragment its children are the top-level
    /// elements of the input, and text before the first element is kept in
    /// the root's `text`.
    ///
    /// Parsing never fails: malformed markup is recovered the way browsers
    /// recover it. Comments are not kept.
    #[must_use]
    pub fn parse(&self, html: &str) -> TreeNode {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        let mut root = TreeNode::new(ROOT_TAG);
        let top = dom.document.children.borrow();

        if is_document(html) {
            for child in top.iter() {
                match &child.data {
                    NodeData::Doctype { name, .. } => root.set_attr(DOCTYPE_ATTR, name),
                    NodeData::Element { .. } => append_handle(&mut root, child),
                    _ => {}
                }
            }
        } else {
            // A fragment is wrapped in implied html/head/body elements; unwrap them.
            for html_element in top.iter().filter(|child| element_name(child).is_some()) {
                for child in html_element.children.borrow().iter() {
                    if matches!(element_name(child), Some("head" | "body")) {
                        append_children(&mut root, child);
                    } else {
                        append_handle(&mut root, child);
                    }
                }
            }
        }

        root
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the input is a complete document rather than a fragment.
fn is_document(html: &str) -> bool {
    let start = html.trim_start();
    let prefix = start.get(..9).unwrap_or(start).to_ascii_lowercase();
    prefix.starts_with("<!doctype") || prefix.starts_with("<html")
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn append_children(target: &mut TreeNode, handle: &Handle) {
    for child in handle.children.borrow().iter() {
        append_handle(target, child);
    }
}

/// Convert one DOM node and append it to `target`, as a child element or as
/// text following the last child.
fn append_handle(target: &mut TreeNode, handle: &Handle) {
    match &handle.data {
        NodeData::Text { contents } => target.append_text(&contents.borrow()),
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            let mut node = TreeNode::new(&name.local);
            for attr in attrs.borrow().iter() {
                node.set_attr(&attribute_name(&attr.name), &attr.value);
            }
            // <template> content lives in a separate document fragment.
            let template = template_contents.borrow();
            append_children(&mut node, template.as_ref().unwrap_or(handle));
            target.children.push(node);
        }
        _ => {}
    }
}

fn attribute_name(name: &QualName) -> String {
    match &name.prefix {
        Some(prefix) => format!("{prefix}:{}", name.local),
        None => name.local.to_string(),
    }
}
