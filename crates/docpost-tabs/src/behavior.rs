//! Hand-off of finished TabGroups to the interactive widget layer.

use docpost_tree::TreeNode;

/// Receives every TabGroup the tabifier produces.
///
/// The tabifier calls [`attach`](Self::attach) exactly once per TabGroup, in
/// document order, with the group's root container. What the implementation
/// does with it (wiring click and keyboard handling, registering the group
/// with a page script, collecting statistics) is its own business.
pub trait TabBehavior {
    fn attach(&mut self, group: &TreeNode);
}

/// Behavior that ignores every group.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBehavior;

impl TabBehavior for NoBehavior {
    fn attach(&mut self, _group: &TreeNode) {}
}

/// Behavior that records the tab ids of every group it is handed.
#[derive(Debug, Default, Clone)]
pub struct RecordBehavior {
    /// One entry per attached group: the `href` targets of its labels, without `#`.
    pub groups: Vec<Vec<String>>,
}

impl RecordBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TabBehavior for RecordBehavior {
    fn attach(&mut self, group: &TreeNode) {
        let tab_ids = group
            .descendants()
            .filter(|node| node.tag == "a" && node.attr("role") == Some("tab"))
            .filter_map(|a| a.attr("href"))
            .map(|href| href.trim_start_matches('#').to_owned())
            .collect();
        self.groups.push(tab_ids);
    }
}

impl<F: FnMut(&TreeNode)> TabBehavior for F {
    fn attach(&mut self, group: &TreeNode) {
        self(group);
    }
}
