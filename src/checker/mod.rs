// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Loads a Markdown file and renders it to an HTML tree
// - html: Pulls links and named anchors out of that tree
// - rules: Decides whether each link is valid
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `checker::check_links()` instead of reaching into
// submodules.
// =============================================================================

mod html;
mod markdown;
mod rules;

pub use markdown::Document;
pub use rules::{check_links, classify, LinkCheck, LinkKind, Verdict};
