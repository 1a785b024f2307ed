//! Section tabifier.
//!
//! Turns runs of level-4 headings under a level-2/3 heading into a tab
//! widget. Each sibling list is handled in two steps: a read-only planning
//! pass records, by index, which nodes form each Tab and where each
//! TabGroup goes; a rewrite pass then rebuilds the list front to back.

use std::collections::VecDeque;
use std::ops::Range;

use docpost_tree::TreeNode;

use crate::behavior::TabBehavior;
use crate::boundary::{heading_level, is_boundary, is_rule};
use crate::options::TabsOptions;

/// Counts of what a [`Tabifier::tabify`] run produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TabifyOutcome {
    /// TabGroups inserted.
    pub groups: usize,
    /// Tabs across all groups.
    pub tabs: usize,
}

/// Rewrites tabifiable Sections into TabGroups.
///
/// # Output HTML Structure
///
/// ```html
/// <div class="glue-tabs" data-tab-group="s1">
///   <ul class="glue-tabs__tablist" role="tablist">
///     <li class="glue-tabs__tab" role="presentation">
///       <a href="#t1" role="tab" aria-controls="tab-t1" aria-selected="true">A</a>
///     </li>
///   </ul>
///   <div class="glue-tabs__panels">
///     <div class="glue-tabs__panel" id="tab-t1" role="tabpanel">
///       <div class="glue-tabs__panel-title">A</div>
///       <div class="glue-tabs__panel-body" id="tab-t1-content"><!-- content --></div>
///     </div>
///   </div>
/// </div>
/// ```
pub struct Tabifier {
    options: TabsOptions,
    /// Warnings about degenerate Tabs collected during processing.
    warnings: Vec<String>,
}

/// One level-4 heading and the sibling indices it owns.
#[derive(Debug, PartialEq, Eq)]
struct TabPlan {
    heading: usize,
    content: Range<usize>,
    terminator: Option<usize>,
}

/// A tabifiable Section.
#[derive(Debug, PartialEq, Eq)]
struct GroupPlan {
    section_id: Option<String>,
    /// Index of the first level-4 heading; the TabGroup is emitted here.
    anchor: usize,
    tabs: Vec<TabPlan>,
}

/// A Tab detached from the tree, ready to be materialized.
struct Tab {
    id: String,
    title: String,
    /// Text that followed the heading's closing tag.
    lead: String,
    content: Vec<TreeNode>,
}

impl Tabifier {
    #[must_use]
    pub fn new(options: TabsOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
        }
    }

    /// Rewrite every tabifiable Section under `root`, in document order.
    ///
    /// Never fails: degenerate headings produce Tabs with empty ids or
    /// titles and a warning (see [`warnings`](Self::warnings)).
    pub fn tabify(&mut self, root: &mut TreeNode, behavior: &mut dyn TabBehavior) -> TabifyOutcome {
        let mut outcome = TabifyOutcome::default();
        self.process(root, behavior, &mut outcome);
        tracing::info!(
            groups = outcome.groups,
            tabs = outcome.tabs,
            "Tabified document"
        );
        outcome
    }

    /// Warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn process(
        &mut self,
        node: &mut TreeNode,
        behavior: &mut dyn TabBehavior,
        outcome: &mut TabifyOutcome,
    ) {
        let plans = plan_sections(&node.children);
        if plans.is_empty() {
            for child in &mut node.children {
                self.process(child, behavior, outcome);
            }
        } else {
            self.rewrite(node, plans, behavior, outcome);
        }
    }

    /// Rebuild `parent.children` according to `plans`, front to back.
    ///
    /// Every kept child and every new TabGroup is processed as it is moved
    /// into place, so `attach` sees groups in document order.
    fn rewrite(
        &mut self,
        parent: &mut TreeNode,
        plans: Vec<GroupPlan>,
        behavior: &mut dyn TabBehavior,
        outcome: &mut TabifyOutcome,
    ) {
        let mut slots: Vec<Option<TreeNode>> = std::mem::take(&mut parent.children)
            .into_iter()
            .map(Some)
            .collect();
        let mut plans = plans.into_iter().peekable();
        // Tails of discarded terminator rules, re-attached in place.
        let mut orphan_tails: VecDeque<(usize, String)> = VecDeque::new();
        let mut rebuilt = Vec::with_capacity(slots.len());

        for idx in 0..slots.len() {
            if let Some(plan) = plans.next_if(|plan| plan.anchor == idx)
                && let Some(mut group) =
                    self.build_group(&plan, &mut slots, &mut orphan_tails, outcome)
            {
                behavior.attach(&group);
                self.process(&mut group, behavior, outcome);
                rebuilt.push(group);
            }
            if let Some(mut child) = slots[idx].take() {
                self.process(&mut child, behavior, outcome);
                rebuilt.push(child);
            }
            if orphan_tails.front().is_some_and(|(at, _)| *at == idx)
                && let Some((_, tail)) = orphan_tails.pop_front()
            {
                match rebuilt.last_mut() {
                    Some(last) => last.tail.push_str(&tail),
                    None => parent.text.push_str(&tail),
                }
            }
        }

        parent.children = rebuilt;
    }

    /// Detach the Tabs of one Section from `slots` and build their TabGroup.
    fn build_group(
        &mut self,
        plan: &GroupPlan,
        slots: &mut [Option<TreeNode>],
        orphan_tails: &mut VecDeque<(usize, String)>,
        outcome: &mut TabifyOutcome,
    ) -> Option<TreeNode> {
        let mut tabs = Vec::with_capacity(plan.tabs.len());
        for tab in &plan.tabs {
            let Some(heading) = slots[tab.heading].take() else {
                continue;
            };
            let content = tab
                .content
                .clone()
                .filter_map(|idx| slots[idx].take())
                .collect();
            if let Some(idx) = tab.terminator
                && let Some(rule) = slots[idx].take()
                && !rule.tail.is_empty()
            {
                orphan_tails.push_back((idx, rule.tail));
            }
            tabs.push(self.detach_tab(heading, content));
        }
        if tabs.is_empty() {
            return None;
        }

        outcome.groups += 1;
        outcome.tabs += tabs.len();
        tracing::debug!(
            section = plan.section_id.as_deref().unwrap_or(""),
            tabs = tabs.len(),
            "Built tab group"
        );
        Some(self.materialize(plan.section_id.as_deref(), tabs))
    }

    fn detach_tab(&mut self, heading: TreeNode, content: Vec<TreeNode>) -> Tab {
        let title = heading.text_content().trim().to_owned();
        let id = heading.id().unwrap_or_default().to_owned();

        if id.is_empty() {
            let warning = format!("level-4 heading \"{title}\" has no id; tab link will be empty");
            tracing::warn!("{warning}");
            self.warnings.push(warning);
        }
        if title.is_empty() {
            let warning = format!("level-4 heading \"{id}\" has no title");
            tracing::warn!("{warning}");
            self.warnings.push(warning);
        }

        Tab {
            id,
            title,
            lead: heading.tail,
            content,
        }
    }

    /// Build the TabGroup container for a Section's Tabs.
    fn materialize(&self, section_id: Option<&str>, tabs: Vec<Tab>) -> TreeNode {
        let opts = &self.options;

        let mut labels = TreeNode::new("ul")
            .with_attr("class", &opts.element_class("tablist"))
            .with_attr("role", "tablist");
        let mut panels = TreeNode::new("div").with_attr("class", &opts.element_class("panels"));

        for (idx, tab) in tabs.into_iter().enumerate() {
            let link = TreeNode::new("a")
                .with_attr("href", &format!("#{}", tab.id))
                .with_attr("role", "tab")
                .with_attr("aria-controls", &opts.panel_id(&tab.id))
                .with_attr("aria-selected", if idx == 0 { "true" } else { "false" })
                .with_text(&tab.title);
            labels.children.push(
                TreeNode::new("li")
                    .with_attr("class", &opts.element_class("tab"))
                    .with_attr("role", "presentation")
                    .with_children(vec![link]),
            );

            let title = TreeNode::new("div")
                .with_attr("class", &opts.element_class("panel-title"))
                .with_text(&tab.title);
            let body = TreeNode::new("div")
                .with_attr("class", &opts.element_class("panel-body"))
                .with_attr("id", &opts.panel_body_id(&tab.id))
                .with_text(&tab.lead)
                .with_children(tab.content);
            panels.children.push(
                TreeNode::new("div")
                    .with_attr("class", &opts.element_class("panel"))
                    .with_attr("id", &opts.panel_id(&tab.id))
                    .with_attr("role", "tabpanel")
                    .with_children(vec![title, body]),
            );
        }

        let mut group = TreeNode::new("div").with_attr("class", opts.container_class());
        if let Some(section_id) = section_id {
            group.set_attr("data-tab-group", section_id);
        }
        group.with_children(vec![labels, panels])
    }
}

impl Default for Tabifier {
    fn default() -> Self {
        Self::new(TabsOptions::default())
    }
}

/// Find every tabifiable Section in a sibling list.
fn plan_sections(siblings: &[TreeNode]) -> Vec<GroupPlan> {
    let mut plans = Vec::new();
    let mut i = 0;

    while i < siblings.len() {
        if !matches!(heading_level(&siblings[i]), Some(2 | 3)) {
            i += 1;
            continue;
        }

        let end = next_index(siblings, i + 1, siblings.len(), |n| is_boundary(n, 3));
        match plan_group(siblings, i, end) {
            Some(plan) => plans.push(plan),
            None => tracing::debug!(
                section = siblings[i].id().unwrap_or(""),
                "No level-4 headings in section, skipping"
            ),
        }
        i = end;
    }

    plans
}

/// Plan the Tabs of the Section headed at `section` and ending before `end`.
fn plan_group(siblings: &[TreeNode], section: usize, end: usize) -> Option<GroupPlan> {
    let mut tabs = Vec::new();
    let mut k = section + 1;

    while k < end {
        if heading_level(&siblings[k]) != Some(4) {
            k += 1;
            continue;
        }

        let stop = next_index(siblings, k + 1, end, |n| is_boundary(n, 4) || is_rule(n));
        let terminator = (stop < end && is_rule(&siblings[stop])).then_some(stop);
        tabs.push(TabPlan {
            heading: k,
            content: k + 1..stop,
            terminator,
        });
        k = terminator.map_or(stop, |t| t + 1);
    }

    let anchor = tabs.first()?.heading;
    Some(GroupPlan {
        section_id: siblings[section].id().map(str::to_owned),
        anchor,
        tabs,
    })
}

/// Index of the first node in `from..to` matching `pred`, or `to`.
fn next_index(
    siblings: &[TreeNode],
    from: usize,
    to: usize,
    pred: impl Fn(&TreeNode) -> bool,
) -> usize {
    (from..to).find(|&j| pred(&siblings[j])).unwrap_or(to)
}
