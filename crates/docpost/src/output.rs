//! Terminal reports for docpost commands.
//!
//! Everything is written to stderr so `docpost process` can stream the page
//! itself to stdout.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use docpost_annotate::AnnotateOutcome;
use docpost_tabs::TabifyOutcome;

use crate::commands::InspectReport;
use crate::pipeline::PageReport;

/// Writes styled command reports to stderr.
pub(crate) struct Reporter {
    term: Term,
    page: Style,
    done: Style,
    warning: Style,
    failure: Style,
    muted: Style,
}

impl Reporter {
    /// Reporter writing to the process's stderr.
    #[must_use]
    pub(crate) fn stderr() -> Self {
        Self {
            term: Term::stderr(),
            page: Style::new().cyan().bold(),
            done: Style::new().green(),
            warning: Style::new().yellow(),
            failure: Style::new().red(),
            muted: Style::new().dim(),
        }
    }

    /// Report a processed page written to `destination`, with what changed.
    pub(crate) fn page_written(&self, destination: &Path, report: &PageReport) {
        self.warnings(&report.warnings);
        self.line(self.done.apply_to(format!("Wrote {}", destination.display())));
        self.line(format!("  {}", describe_tabs(&report.tabified)));
        self.line(format!("  {}", describe_annotations(&report.annotated)));
    }

    /// List the tab groups found on `page`.
    pub(crate) fn inspection(&self, page: &Path, report: &InspectReport) {
        self.line(self.page.apply_to(page.display()));
        if report.groups.is_empty() {
            self.line(self.muted.apply_to("  no tabifiable sections"));
        }
        for (idx, tabs) in report.groups.iter().enumerate() {
            self.line(format!("  group {}: {}", idx + 1, tabs.join(", ")));
        }
        self.warnings(&report.warnings);
    }

    /// Degenerate tabs reported by the tabifier.
    pub(crate) fn warnings(&self, warnings: &[String]) {
        for warning in warnings {
            self.line(self.warning.apply_to(format!("warning: {warning}")));
        }
    }

    /// Report the error that ended a command.
    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(self.failure.apply_to(format!("Error: {err}")));
    }

    fn line(&self, text: impl Display) {
        let _ = self.term.write_line(&text.to_string());
    }
}

/// `"1 tab group, 3 tabs"`.
fn describe_tabs(outcome: &TabifyOutcome) -> String {
    format!(
        "{}, {}",
        count(outcome.groups, "tab group"),
        count(outcome.tabs, "tab")
    )
}

/// Comma-separated list of the annotations that changed something.
fn describe_annotations(outcome: &AnnotateOutcome) -> String {
    let mut parts = Vec::new();
    for (n, noun) in [
        (outcome.callouts, "callout"),
        (outcome.directives, "directive"),
        (outcome.glue, "styled element"),
        (outcome.listings, "listing table"),
    ] {
        if n > 0 {
            parts.push(count(n, noun));
        }
    }
    if outcome.summary_placed {
        parts.push("summary placed".to_owned());
    }
    if outcome.banner_moved {
        parts.push("banner moved".to_owned());
    }

    if parts.is_empty() {
        "no annotations".to_owned()
    } else {
        parts.join(", ")
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
