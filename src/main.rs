// src/main.rs
// =============================================================================
// This is the entry point of the check-links CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr only, so stdout stays a clean report)
// 3. Load the document, check its links, print the report
// 4. Exit with 0 when the run completes, 2 when something went wrong
//
// Invalid links do NOT change the exit code: the report is the result.
//
// Logging: set `RUST_LOG=check_links=debug` to see each link's rule on stderr.
// =============================================================================

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use check_links::{check_links, report, Document};
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG overrides; otherwise only warnings and errors are shown
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("check_links=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let document = match Document::load(&cli.mdfilename) {
        Ok(document) => document,
        Err(e) if e.is_not_found() => {
            return Err(e).context("document not found (pass the full path to the .md file)");
        }
        Err(e) => return Err(e).context("could not load document"),
    };

    info!(
        path = ?document.path(),
        base_dir = %document.base_dir().display(),
        "loaded document"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let reported = report(check_links(&document), &cli.report_config(), &mut out)
        .context("failed to write report")?;
    out.flush().context("failed to write report")?;

    info!(reported, "done");
    Ok(())
}
