//! `docpost inspect` command implementation.

use std::path::PathBuf;

use clap::Args;
use docpost_config::Config;
use docpost_tabs::RecordBehavior;

use crate::error::CliError;
use crate::output::Reporter;
use crate::pipeline::process_page;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Rendered HTML page (or fragment) to inspect.
    input: PathBuf,

    /// Path to configuration file (default: auto-discover docpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Tab groups a page would get, as tab ids per group in document order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct InspectReport {
    pub(crate) groups: Vec<Vec<String>>,
    pub(crate) warnings: Vec<String>,
}

impl InspectArgs {
    /// List the tab groups processing would create, without writing anything.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let report = self.inspect()?;
        Reporter::stderr().inspection(&self.input, &report);
        Ok(())
    }

    fn inspect(&self) -> Result<InspectReport, CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let html = std::fs::read_to_string(&self.input)?;

        let mut behavior = RecordBehavior::new();
        let (_, page) = process_page(&html, &config, &mut behavior);

        Ok(InspectReport {
            groups: behavior.groups,
            warnings: page.warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE: &str = "<h2 id=\"s\">S</h2>\n<h4 id=\"a\">A</h4>\n<p>one</p>\n\
                        <h4 id=\"b\">B</h4>\n<p>two</p>\n\
                        <h3 id=\"t\">T</h3>\n<h4>Untitled</h4>\n<p>three</p>\n";

    fn setup(config: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), PAGE).unwrap();
        std::fs::write(dir.path().join("docpost.toml"), config).unwrap();
        dir
    }

    fn args(dir: &Path) -> InspectArgs {
        InspectArgs {
            input: dir.join("page.html"),
            config: Some(dir.join("docpost.toml")),
        }
    }

    #[test]
    fn test_inspect_lists_groups_in_document_order() {
        let dir = setup("");
        let report = args(dir.path()).inspect().unwrap();

        assert_eq!(
            report.groups,
            vec![
                vec!["a".to_owned(), "b".to_owned()],
                vec![String::new()],
            ]
        );
    }

    #[test]
    fn test_inspect_reports_untitled_anchor_warning() {
        let dir = setup("");
        let report = args(dir.path()).inspect().unwrap();

        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_inspect_honors_disabled_tabs() {
        let dir = setup("[tabs]\nenabled = false\n");
        let report = args(dir.path()).inspect().unwrap();

        assert_eq!(report, InspectReport::default());
    }

    #[test]
    fn test_inspect_missing_input() {
        let dir = setup("");
        let mut args = args(dir.path());
        args.input = dir.path().join("missing.html");

        let err = args.inspect().unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
