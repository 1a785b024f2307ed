//! Callout boxes and spec directive emphasis.

use docpost_tree::TreeNode;

/// Callout labels and the class each one applies.
const CALLOUTS: &[(&str, &str)] = &[
    ("Important:", "important"),
    ("Note:", "note"),
    ("TL;DR:", "tldr"),
    ("Warning:", "warning"),
    ("Summary:", "summary"),
];

/// Bold phrases treated as spec directives.
const DIRECTIVES: &[&str] = &["may", "must", "must not", "should", "should not"];

/// Classes the parent of a `<strong>` inside a paragraph gets, one per label
/// the strong's text contains.
fn callout_classes(strong: &TreeNode) -> impl Iterator<Item = &'static str> {
    let text = strong.text_content();
    CALLOUTS
        .iter()
        .filter(move |(label, _)| text.contains(label))
        .map(|&(_, class)| class)
}

/// Mark parents of callout `<strong>` elements that sit inside a paragraph.
/// Returns the number of classes added.
pub(crate) fn mark_callouts(node: &mut TreeNode, in_paragraph: bool) -> usize {
    let in_paragraph = in_paragraph || node.tag == "p";
    let mut added = 0;

    if in_paragraph {
        let classes: Vec<&str> = node
            .children
            .iter()
            .filter(|child| child.tag == "strong")
            .flat_map(callout_classes)
            .collect();
        for class in classes {
            if node.add_class(class) {
                added += 1;
            }
        }
    }

    for child in &mut node.children {
        added += mark_callouts(child, in_paragraph);
    }
    added
}

/// Mark a `<strong>` whose entire text is a directive. Returns `true` if marked.
pub(crate) fn mark_directive(node: &mut TreeNode) -> bool {
    if node.tag != "strong" {
        return false;
    }
    let text = node.text_content();
    if !DIRECTIVES.contains(&text.as_str()) {
        return false;
    }
    let keyword = text.split(' ').next().unwrap_or_default();
    node.add_class("spec-directive");
    node.add_class(&format!("spec-{keyword}"));
    true
}
