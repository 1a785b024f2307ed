//! Node classification used to find Section and Tab boundaries.

use docpost_tree::TreeNode;

/// Heading level of an `h1`..`h6` element.
#[must_use]
pub fn heading_level(node: &TreeNode) -> Option<u8> {
    match node.tag.as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Whether the node is a thematic break (`<hr>`).
#[must_use]
pub fn is_rule(node: &TreeNode) -> bool {
    node.tag == "hr"
}

/// Whether the node is a heading of level `1..=max_level`.
///
/// Sections end at `is_boundary(node, 3)`, Tab runs at `is_boundary(node, 4)`
/// or a rule.
#[must_use]
pub fn is_boundary(node: &TreeNode, max_level: u8) -> bool {
    heading_level(node).is_some_and(|level| level <= max_level)
}
