// src/lib.rs
// =============================================================================
// check-links as a library.
//
// The binary in main.rs is a thin wrapper: parse arguments, load the
// document, check its links, print the report. Everything it calls lives
// here so tests can drive the same code without spawning a process.
//
//   let document = Document::load("README.md")?;
//   report(check_links(&document), &ReportConfig { verbose: true }, &mut stdout)?;
// =============================================================================

pub mod checker;
pub mod error;
pub mod report;

pub use checker::{check_links, classify, Document, LinkCheck, LinkKind, Verdict};
pub use error::CheckError;
pub use report::{report, ReportConfig};
