//! Element tree with the text/tail model.
//!
//! Every element owns the text that precedes its first child (`text`) and
//! the text that follows its own closing tag (`tail`):
//!
//! ```html
//! <p>TEXT<strong>inner</strong>TAIL</p>
//! ```
//!
//! Here `p.text == "TEXT"`, `strong.text == "inner"` and
//! `strong.tail == "TAIL"`. Moving an element between parents moves its
//! tail with it.

use indexmap::IndexMap;

/// HTML void elements, which never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Check whether a tag names an HTML void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// A single element in a rendered document tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Lowercase tag name (`h2`, `p`, `div`, ...).
    pub tag: String,
    /// Attributes in source order.
    pub attrs: IndexMap<String, String>,
    /// Text before the first child.
    pub text: String,
    /// Text after the closing tag, before the next sibling.
    pub tail: String,
    /// Child elements in document order.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }

    /// Set an attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attrs.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Replace all attributes.
    #[must_use]
    pub fn with_attrs(mut self, attrs: IndexMap<String, String>) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_owned();
        self
    }

    #[must_use]
    pub fn with_tail(mut self, tail: &str) -> Self {
        self.tail = tail.to_owned();
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attrs.insert(key.to_owned(), value.to_owned());
    }

    /// The `id` attribute, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Iterate over the whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class unless it is already present.
    ///
    /// Returns `true` if the class was added.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        let value = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{} {class}", existing.trim()),
            _ => class.to_owned(),
        };
        self.set_attr("class", &value);
        true
    }

    /// Concatenated text of this element and its descendants (excluding own tail).
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Append text after the last child, or to `text` when there are no children.
    pub fn append_text(&mut self, text: &str) {
        if let Some(last) = self.children.last_mut() {
            last.tail.push_str(text);
        } else {
            self.text.push_str(text);
        }
    }

    /// Pre-order iterator over all descendants (not including `self`).
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Child-index path to the first descendant matching `pred`, in pre-order.
    pub fn find_path(&self, pred: &impl Fn(&TreeNode) -> bool) -> Option<Vec<usize>> {
        for (idx, child) in self.children.iter().enumerate() {
            if pred(child) {
                return Some(vec![idx]);
            }
            if let Some(mut path) = child.find_path(pred) {
                path.insert(0, idx);
                return Some(path);
            }
        }
        None
    }

    #[must_use]
    pub fn node_at(&self, path: &[usize]) -> Option<&TreeNode> {
        path.iter().try_fold(self, |node, &idx| node.children.get(idx))
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut TreeNode> {
        path.iter().try_fold(self, |node, &idx| node.children.get_mut(idx))
    }

    /// Detach the element at `path`.
    ///
    /// Its tail stays where it was: it is appended to the previous sibling's
    /// tail, or to the parent's text.
    pub fn remove_at(&mut self, path: &[usize]) -> Option<TreeNode> {
        let (&idx, parent_path) = path.split_last()?;
        let parent = self.node_at_mut(parent_path)?;
        if idx >= parent.children.len() {
            return None;
        }
        let mut removed = parent.children.remove(idx);
        let tail = std::mem::take(&mut removed.tail);
        match idx.checked_sub(1) {
            Some(prev) => parent.children[prev].tail.push_str(&tail),
            None => parent.text.push_str(&tail),
        }
        Some(removed)
    }

    /// Move the element at `from` next to the element at `to`.
    ///
    /// Both paths are taken in the tree before the move. Returns `false` and
    /// leaves the tree unchanged when either path is missing, `to` is the
    /// root, or `to` lies inside the moved element.
    pub fn move_node(&mut self, from: &[usize], to: &[usize], placement: Placement) -> bool {
        if from.is_empty()
            || to.is_empty()
            || to.starts_with(from)
            || self.node_at(from).is_none()
            || self.node_at(to).is_none()
        {
            return false;
        }

        // Removing `from` shifts later siblings on its level one to the left.
        let mut to = to.to_vec();
        let depth = from.len() - 1;
        if to.len() > depth && to[..depth] == from[..depth] && to[depth] > from[depth] {
            to[depth] -= 1;
        }

        let Some(mut node) = self.remove_at(from) else {
            return false;
        };
        let Some((&idx, parent_path)) = to.split_last() else {
            return false;
        };
        let Some(parent) = self.node_at_mut(parent_path) else {
            return false;
        };
        match placement {
            Placement::Before => parent.children.insert(idx, node),
            Placement::After => {
                let anchor_tail = std::mem::take(&mut parent.children[idx].tail);
                node.tail.push_str(&anchor_tail);
                parent.children.insert(idx + 1, node);
            }
        }
        true
    }

    /// Visit this element and all descendants mutably, in pre-order.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut TreeNode)) {
        visit(self);
        for child in &mut self.children {
            child.walk_mut(visit);
        }
    }
}

/// Where [`TreeNode::move_node`] puts the moved element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Immediately before the target.
    Before,
    /// Immediately after the target; the target's tail follows the moved element.
    After,
}

fn collect_text(node: &TreeNode, out: &mut String) {
    out.push_str(&node.text);
    for child in &node.children {
        collect_text(child, out);
        out.push_str(&child.tail);
    }
}

/// Pre-order descendant iterator, see [`TreeNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_content_includes_child_tails() {
        let strong = TreeNode::new("strong").with_text("Bold").with_tail(" text");
        let p = TreeNode::new("p")
            .with_text("Some ")
            .with_children(vec![strong])
            .with_tail("\n");

        assert_eq!(p.text_content(), "Some Bold text");
    }

    #[test]
    fn test_add_class_appends_once() {
        let mut p = TreeNode::new("p").with_attr("class", "lead");

        assert!(p.add_class("note"));
        assert!(!p.add_class("note"));
        assert_eq!(p.attr("class"), Some("lead note"));
    }

    #[test]
    fn test_add_class_without_existing_attribute() {
        let mut p = TreeNode::new("p");
        p.add_class("warning");
        assert_eq!(p.attr("class"), Some("warning"));
        assert!(p.has_class("warning"));
    }

    #[test]
    fn test_append_text_goes_to_last_child_tail() {
        let mut div = TreeNode::new("div").with_children(vec![TreeNode::new("p")]);
        div.append_text("after");
        assert_eq!(div.children[0].tail, "after");

        let mut empty = TreeNode::new("div");
        empty.append_text("inside");
        assert_eq!(empty.text, "inside");
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = TreeNode::new("root").with_children(vec![
            TreeNode::new("div").with_children(vec![TreeNode::new("h2"), TreeNode::new("p")]),
            TreeNode::new("hr"),
        ]);

        let tags: Vec<&str> = tree.descendants().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["div", "h2", "p", "hr"]);
    }

    fn sample() -> TreeNode {
        TreeNode::new("root").with_children(vec![
            TreeNode::new("div").with_attr("id", "main").with_children(vec![
                TreeNode::new("h1").with_text("Title").with_tail("\n"),
                TreeNode::new("p").with_text("body").with_tail("\n"),
            ]),
            TreeNode::new("aside")
                .with_attr("id", "banner")
                .with_text("Draft")
                .with_tail(" after banner"),
        ])
    }

    #[test]
    fn test_find_path_pre_order() {
        let root = sample();
        assert_eq!(root.find_path(&|n| n.tag == "p"), Some(vec![0, 1]));
        assert_eq!(root.find_path(&|n| n.id() == Some("banner")), Some(vec![1]));
        assert_eq!(root.find_path(&|n| n.tag == "table"), None);
        assert_eq!(root.node_at(&[0, 0]).map(|n| n.tag.as_str()), Some("h1"));
        assert!(root.node_at(&[0, 5]).is_none());
    }

    #[test]
    fn test_remove_at_keeps_tail_in_place() {
        let mut root = sample();
        let removed = root.remove_at(&[0, 1]).unwrap();

        assert_eq!(removed.text, "body");
        assert!(removed.tail.is_empty());
        assert_eq!(root.children[0].children[0].tail, "\n\n");
    }

    #[test]
    fn test_move_node_after_target() {
        let mut root = sample();
        assert!(root.move_node(&[1], &[0, 0], Placement::After));

        let main = &root.children[0];
        let tags: Vec<&str> = main.children.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["h1", "aside", "p"]);
        assert_eq!(main.children[0].tail, "");
        assert_eq!(main.children[1].tail, "\n");
        assert_eq!(root.children[0].tail, " after banner");
    }

    #[test]
    fn test_move_node_before_later_sibling() {
        let mut root = TreeNode::new("root").with_children(vec![
            TreeNode::new("table"),
            TreeNode::new("p"),
            TreeNode::new("nav"),
        ]);
        assert!(root.move_node(&[0], &[2], Placement::Before));

        let tags: Vec<&str> = root.children.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags, vec!["p", "table", "nav"]);
    }

    #[test]
    fn test_move_node_into_itself_is_refused() {
        let mut root = sample();
        let before = root.clone();

        assert!(!root.move_node(&[0], &[0, 1], Placement::After));
        assert!(!root.move_node(&[0], &[9], Placement::After));
        assert_eq!(root, before);
    }

    #[test]
    fn test_is_void_element() {
        assert!(is_void_element("hr"));
        assert!(is_void_element("br"));
        assert!(!is_void_element("div"));
    }
}
