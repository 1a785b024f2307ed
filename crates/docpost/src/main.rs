//! docpost CLI - rendered documentation page post-processor.
//!
//! Provides commands for:
//! - `process`: Annotate and tabify a rendered page
//! - `inspect`: List the tab groups a page would get

mod commands;
mod error;
mod output;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InspectArgs, ProcessArgs};
use output::Reporter;

/// docpost - rendered documentation page post-processor.
#[derive(Parser)]
#[command(name = "docpost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate and tabify a rendered page.
    Process(ProcessArgs),
    /// List the tab groups a page would get.
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Process(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Inspect(args) => args.execute(),
    };

    if let Err(err) = result {
        Reporter::stderr().error(&err);
        std::process::exit(1);
    }
}
