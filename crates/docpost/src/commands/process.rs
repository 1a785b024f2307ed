//! `docpost process` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docpost_config::{CliSettings, Config};
use docpost_tabs::NoBehavior;

use crate::error::CliError;
use crate::output::Reporter;
use crate::pipeline::process_page;

/// Arguments for the process command.
#[derive(Args)]
pub(crate) struct ProcessArgs {
    /// Rendered HTML page (or fragment) to process.
    input: PathBuf,

    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docpost.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not turn level-4 heading runs into tabs.
    #[arg(long)]
    no_tabs: bool,

    /// Do not apply callout and directive classes.
    #[arg(long)]
    no_annotate: bool,

    /// Block class of the generated tab widgets (overrides config).
    #[arg(long, env = "DOCPOST_CLASS_PREFIX")]
    class_prefix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ProcessArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        self.run(&mut stdout)
    }

    /// Process the page, writing it to the output file or else to `stdout`.
    fn run(self, stdout: &mut impl Write) -> Result<(), CliError> {
        let reporter = Reporter::stderr();

        let cli_settings = CliSettings {
            tabs_enabled: self.no_tabs.then_some(false),
            annotate_enabled: self.no_annotate.then_some(false),
            class_prefix: self.class_prefix.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let html = std::fs::read_to_string(&self.input)?;
        let (processed, report) = process_page(&html, &config, &mut NoBehavior);

        match &self.output {
            Some(path) => {
                std::fs::write(path, processed)?;
                reporter.page_written(path, &report);
            }
            None => {
                reporter.warnings(&report.warnings);
                stdout.write_all(processed.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: &std::path::Path, no_tabs: bool) -> ProcessArgs {
        ProcessArgs {
            input: dir.join("page.html"),
            output: Some(dir.join("out.html")),
            config: Some(dir.join("docpost.toml")),
            no_tabs,
            no_annotate: false,
            class_prefix: None,
            verbose: false,
        }
    }

    fn setup() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("page.html"),
            "<h2 id=\"s\">S</h2>\n<h4 id=\"a\">A</h4>\n<p>one</p>\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("docpost.toml"),
            "[tabs]\nclass_prefix = \"docs-tabs\"\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_process_writes_output_file() {
        let dir = setup();
        args(dir.path(), false).run(&mut Vec::new()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains(r#"<div class="docs-tabs" data-tab-group="s">"#));
        assert!(html.contains(r##"<a href="#a" role="tab""##));
    }

    #[test]
    fn test_process_no_tabs() {
        let dir = setup();
        args(dir.path(), true).run(&mut Vec::new()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(!html.contains("docs-tabs"));
        assert!(html.contains(r#"<h4 id="a">A</h4>"#));
    }

    #[test]
    fn test_process_missing_config() {
        let dir = setup();
        let mut args = args(dir.path(), false);
        args.config = Some(dir.path().join("missing.toml"));

        let err = args.run(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_process_without_output_writes_to_stdout() {
        let dir = setup();
        let mut args = args(dir.path(), false);
        args.output = None;

        let mut stdout = Vec::new();
        args.run(&mut stdout).unwrap();

        let html = String::from_utf8(stdout).unwrap();
        assert!(html.starts_with(r#"<h2 id="s">S</h2>"#));
        assert!(html.contains(r#"<div class="docs-tabs" data-tab-group="s">"#));
        assert!(!dir.path().join("out.html").exists());
    }

    #[test]
    fn test_process_class_prefix_overrides_config() {
        let dir = setup();
        let mut args = args(dir.path(), false);
        args.class_prefix = Some("cli-tabs".to_owned());
        args.run(&mut Vec::new()).unwrap();

        let html = std::fs::read_to_string(dir.path().join("out.html")).unwrap();
        assert!(html.contains(r#"<div class="cli-tabs" data-tab-group="s">"#));
    }
}
