//! Class and layout rules for rendered documentation pages.
//!
//! Markdown cannot attach classes to paragraphs, headings or tables, so pages
//! rely on conventions that are turned into markup after rendering:
//!
//! - **Callouts**: a paragraph containing `**Note:**` (or `Important:`,
//!   `TL;DR:`, `Warning:`, `Summary:`) is styled as a callout box.
//! - **Spec directives**: bold `**must**`, `**should not**` and friends are
//!   emphasized as RFC 2119 keywords.
//! - **Glue classes**: headings in the main column and tables get the
//!   design system's headline and table classes.
//! - **AIP layout**: the state banner moves under the page title, index
//!   listing tables are marked, and the summary table is spanned and moved
//!   before the table of contents.

mod aip;
mod callouts;
mod glue;

use docpost_tree::TreeNode;

/// Which rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)] // One switch per independent rule
pub struct AnnotateOptions {
    pub callouts: bool,
    pub directives: bool,
    pub glue: bool,
    pub aip: bool,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self {
            callouts: true,
            directives: true,
            glue: true,
            aip: true,
        }
    }
}

impl AnnotateOptions {
    /// Options with every rule switched off.
    #[must_use]
    pub fn none() -> Self {
        Self {
            callouts: false,
            directives: false,
            glue: false,
            aip: false,
        }
    }
}

/// What an annotation run changed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnnotateOutcome {
    /// Callout classes added.
    pub callouts: usize,
    /// Directive `<strong>` elements marked.
    pub directives: usize,
    /// Elements given Glue classes.
    pub glue: usize,
    /// Index listing tables marked.
    pub listings: usize,
    pub summary_placed: bool,
    pub banner_moved: bool,
}

/// Applies the enabled rules to a tree.
#[derive(Debug, Default)]
pub struct Annotator {
    options: AnnotateOptions,
}

impl Annotator {
    #[must_use]
    pub fn new(options: AnnotateOptions) -> Self {
        Self { options }
    }

    /// Annotate `root` and all its descendants in place.
    ///
    /// The AIP table rules run before the Glue pass so a summary table's
    /// `no-h` opt-out is honored.
    pub fn annotate(&self, root: &mut TreeNode) -> AnnotateOutcome {
        let mut outcome = AnnotateOutcome::default();

        if self.options.aip {
            outcome.summary_placed = aip::place_summary(root);
            outcome.listings = aip::mark_listings(root);
        }
        if self.options.glue {
            outcome.glue = glue::apply(root);
        }
        if self.options.callouts {
            outcome.callouts = callouts::mark_callouts(root, false);
        }
        if self.options.directives {
            root.walk_mut(&mut |node: &mut TreeNode| {
                if callouts::mark_directive(node) {
                    outcome.directives += 1;
                }
            });
        }
        if self.options.aip {
            outcome.banner_moved = aip::move_state_banner(root);
        }

        tracing::debug!(
            callouts = outcome.callouts,
            directives = outcome.directives,
            glue = outcome.glue,
            listings = outcome.listings,
            summary = outcome.summary_placed,
            banner = outcome.banner_moved,
            "Annotated document"
        );
        outcome
    }
}
