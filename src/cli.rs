// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below IS the CLI definition, and clap
// generates the parsing, --help and --version from it.
//
//   check-links /full/path/to/README.md        # invalid links only
//   check-links -v /full/path/to/README.md     # every link with its result
// =============================================================================

use std::path::PathBuf;

use check_links::ReportConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "check-links",
    version,
    about = "Check that every link in a Markdown file points somewhere real",
    long_about = "check-links renders a Markdown file and checks each link in it. \
                  Web links are trusted, #anchors must match an <a name=...> in the document, \
                  and file links must exist relative to the document's directory."
)]
pub struct Cli {
    /// Full path to the .md file you would like to check links in
    pub mdfilename: PathBuf,

    /// Print all links with results; otherwise only invalid links are printed
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The reporting options carried by the parsed flags
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            verbose: self.verbose,
        }
    }
}
