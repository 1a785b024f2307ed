//! Page post-processing pipeline shared by the commands.

use docpost_annotate::{AnnotateOutcome, Annotator};
use docpost_config::Config;
use docpost_tabs::{TabBehavior, Tabifier, TabifyOutcome};
use docpost_tree::{HtmlParser, HtmlSerializer};

/// What processing a page did.
#[derive(Debug, Default)]
pub(crate) struct PageReport {
    pub(crate) annotated: AnnotateOutcome,
    pub(crate) tabified: TabifyOutcome,
    pub(crate) warnings: Vec<String>,
}

/// Parse `html`, apply the enabled passes and serialize the result.
///
/// Annotation runs before tabifying so callouts inside tab content are
/// classed the same way as anywhere else.
pub(crate) fn process_page(
    html: &str,
    config: &Config,
    behavior: &mut dyn TabBehavior,
) -> (String, PageReport) {
    let mut tree = HtmlParser::new().parse(html);
    let annotated = Annotator::new(config.annotate.options()).annotate(&mut tree);
    let mut report = PageReport {
        annotated,
        ..PageReport::default()
    };

    if config.tabs.enabled {
        let mut tabifier = Tabifier::new(config.tabs.options());
        report.tabified = tabifier.tabify(&mut tree, behavior);
        report.warnings = tabifier.warnings().to_vec();
    } else {
        tracing::debug!("Tabifier disabled");
    }

    (HtmlSerializer::new().serialize(&tree), report)
}
