//! Layout fixes specific to AIP pages.

use docpost_tree::{Placement, TreeNode};

const STATE_BANNER_ID: &str = "aip-state-banner";
const MAIN_ID: &str = "aip-main";
const TOC_ID: &str = "aip-toc";
const SUMMARY_ID: &str = "aip-summary";
const SUMMARY_LABEL: &str = "AIP Summary";
/// First-column headers of the index page's listing tables.
const LISTING_LABELS: &[&str] = &["Number", "Block"];

/// Whether `table` has a header cell that is the first cell of its row and
/// whose text contains `label`.
fn has_leading_header(table: &TreeNode, label: &str) -> bool {
    table.descendants().any(|row| {
        row.children
            .first()
            .is_some_and(|cell| cell.tag == "th" && cell.text_content().contains(label))
    })
}

/// Move the state banner right after the first `h1` of the main column.
pub(crate) fn move_state_banner(root: &mut TreeNode) -> bool {
    let Some(banner) = root.find_path(&|n| n.id() == Some(STATE_BANNER_ID)) else {
        return false;
    };
    let Some(main) = root.find_path(&|n| n.id() == Some(MAIN_ID)) else {
        return false;
    };
    let Some(heading) = root
        .node_at(&main)
        .and_then(|main| main.find_path(&|n| n.tag == "h1"))
    else {
        return false;
    };

    let target = [main, heading].concat();
    root.move_node(&banner, &target, Placement::After)
}

/// Mark the index page's listing tables. Returns the number marked.
pub(crate) fn mark_listings(root: &mut TreeNode) -> usize {
    let mut marked = 0;
    root.walk_mut(&mut |node: &mut TreeNode| {
        if node.tag == "table"
            && LISTING_LABELS
                .iter()
                .any(|label| has_leading_header(node, label))
            && node.add_class("aip-listing")
        {
            marked += 1;
        }
    });
    marked
}

/// Identify the summary table, span its header over every column and move it
/// before the table of contents. Returns `true` if a summary was found.
pub(crate) fn place_summary(root: &mut TreeNode) -> bool {
    let is_summary = |n: &TreeNode| n.tag == "table" && has_leading_header(n, SUMMARY_LABEL);
    let Some(path) = root.find_path(&is_summary) else {
        return false;
    };
    let Some(table) = root.node_at_mut(&path) else {
        return false;
    };

    table.set_attr("id", SUMMARY_ID);
    table.add_class("no-h");
    span_first_header(table);

    if let Some(toc) = root.find_path(&|n| n.id() == Some(TOC_ID)) {
        root.move_node(&path, &toc, Placement::Before);
    }
    true
}

/// Make the first header cell span its whole row, dropping the cells after it.
fn span_first_header(table: &mut TreeNode) {
    let Some(row_path) = table.find_path(&|n| n.children.iter().any(|c| c.tag == "th")) else {
        return;
    };
    let Some(row) = table.node_at_mut(&row_path) else {
        return;
    };
    let Some(idx) = row.children.iter().position(|c| c.tag == "th") else {
        return;
    };

    let columns = row.children.len();
    let dropped: Vec<TreeNode> = row.children.drain(idx + 1..).collect();
    let header = &mut row.children[idx];
    header.set_attr("colspan", &columns.to_string());
    for cell in dropped {
        header.tail.push_str(&cell.tail);
    }
}
