//! Glue design-system classes.
//!
//! The markdown renderer cannot put classes on headings and tables, so the
//! stylesheet's headline and table styles are applied here instead.

use docpost_tree::TreeNode;

/// Container of the page's main content column.
const MAIN_COLUMN_CLASS: &str = "docs-component-main";
const AIP_MAIN_ID: &str = "aip-main";
/// Tables carrying this class opt out of table styling.
const NO_HEADER_CLASS: &str = "no-h";
const SEARCH_TITLE_CLASS: &str = "tipue_search_content_title";
const SEARCH_TITLE_CLASSES: &[&str] = &[
    "glue-headline",
    "glue-headline--headline-4",
    "glue-has-top-margin",
];

#[derive(Debug, Default, Clone, Copy)]
struct Scope {
    in_main_column: bool,
    in_aip_main: bool,
}

/// Apply Glue classes under `root`. Returns the number of elements changed.
pub(crate) fn apply(root: &mut TreeNode) -> usize {
    let mut changed = 0;
    visit(root, Scope::default(), &mut changed);
    changed
}

fn visit(node: &mut TreeNode, scope: Scope, changed: &mut usize) {
    let mut touched = false;

    if scope.in_main_column
        && let Some(level) = headline_level(&node.tag)
    {
        for class in headline_classes(level) {
            touched |= node.add_class(&class);
        }
    }
    if node.tag == "table" && !node.has_class(NO_HEADER_CLASS) {
        touched |= node.add_class("glue-table");
        if scope.in_aip_main {
            touched |= node.add_class("glue-table--datatable");
        }
    }
    if node.has_class(SEARCH_TITLE_CLASS) {
        for class in SEARCH_TITLE_CLASSES {
            touched |= node.add_class(class);
        }
    }
    if touched {
        *changed += 1;
    }

    let scope = Scope {
        in_main_column: scope.in_main_column || node.has_class(MAIN_COLUMN_CLASS),
        in_aip_main: scope.in_aip_main || node.id() == Some(AIP_MAIN_ID),
    };
    for child in &mut node.children {
        visit(child, scope, changed);
    }
}

/// Level of `h1` through `h5`; `h6` has no headline style.
fn headline_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        _ => None,
    }
}

/// Headline classes for a heading level. Each level uses the next smaller
/// headline size; levels 1-3 also get a bottom margin.
fn headline_classes(level: u8) -> Vec<String> {
    let mut classes = vec![
        "glue-headline".to_owned(),
        "glue-has-top-margin".to_owned(),
        format!("glue-headline--headline-{}", level + 1),
    ];
    if level <= 3 {
        classes.push("glue-has-bottom-margin".to_owned());
    }
    classes
}
