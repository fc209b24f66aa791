// src/report.rs
// =============================================================================
// This module prints the results.
//
// Output is one line per reported link, tab separated:
//   INVALID	nofile.md
//   VALID	http://example.com
//
// Without --verbose only INVALID lines are printed. There is no summary:
// the output is meant to be read by people and piped through grep/cut.
// =============================================================================

use std::io::{self, Write};

use crate::checker::LinkCheck;

/// How the report is filtered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Print valid links too, not just invalid ones
    pub verbose: bool,
}

impl ReportConfig {
    // Invalid links are always shown, valid ones only in verbose mode
    fn includes(&self, check: &LinkCheck<'_>) -> bool {
        self.verbose || !check.verdict.is_valid()
    }
}

// Writes the report, one line per shown link
//
// Parameters:
//   checks: the link results, in the order they should be printed
//   config: which results to show
//   out: where to write (stdout in main.rs, a Vec<u8> in tests)
//
// Returns: how many lines were written, or the first write error
//
// Example output with config.verbose = true:
//   VALID	http://example.com
//   INVALID	nofile.md
pub fn report<'a, W: Write>(
    checks: impl IntoIterator<Item = LinkCheck<'a>>,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<usize> {
    let mut written = 0;
    for check in checks {
        if config.includes(&check) {
            writeln!(out, "{}\t{}", check.verdict.label(), check.link)?;
            written += 1;
        }
    }
    Ok(written)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why take `&mut W` where W: Write instead of printing with println!?
//    - Write is a trait: stdout, files and Vec<u8> all implement it
//    - main.rs passes a locked stdout, tests pass a Vec<u8> and read it back
//    - println! would panic on a closed pipe; writeln! returns an error instead
//
// 2. What is `impl IntoIterator<Item = LinkCheck<'a>>`?
//    - Accepts anything we can loop over that yields LinkCheck values
//    - A Vec works, and so does the lazy iterator from check_links()
//    - With the lazy iterator, each link is checked right before it is printed
// -----------------------------------------------------------------------------
