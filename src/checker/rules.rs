// src/checker/rules.rs
// =============================================================================
// This module decides whether a link is valid.
//
// The rules are tried in order, first match wins:
// 1. http...  -> always valid, nothing is fetched
// 2. #name    -> valid if the document has <a name="name">
// 3. /path    -> valid if <base_dir>/path exists
// 4. anything -> valid if <base_dir>/anything exists
//
// Web links are trusted on purpose: the tool checks the local structure of a
// documentation tree and never touches the network.
//
// Rust concepts:
// - Enums: LinkKind and Verdict name every possible outcome
// - Iterators: check_links() is lazy, each link is checked when pulled
// - Cow<str>: a link is borrowed from the document unless decoding changed it
// =============================================================================

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use super::markdown::Document;

/// Which rule a link is judged by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Starts with `http`
    External,
    /// Starts with `#`
    Anchor,
    /// Starts with `/`, resolved against the base directory rather than `/`
    RootRelative,
    /// Everything else
    Relative,
}

impl LinkKind {
    // Picks the rule for a link by looking at its prefix
    //
    // Examples:
    //   "https://example.com" -> External
    //   "#intro"              -> Anchor
    //   "/LICENSE"            -> RootRelative
    //   "docs/guide.md"       -> Relative
    //   "mailto:me@x.org"     -> Relative (no special case for other schemes)
    pub fn of(link: &str) -> Self {
        if link.starts_with("http") {
            LinkKind::External
        } else if link.starts_with('#') {
            LinkKind::Anchor
        } else if link.starts_with('/') {
            LinkKind::RootRelative
        } else {
            LinkKind::Relative
        }
    }
}

/// Outcome of checking one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
}

impl Verdict {
    /// The label printed in front of the link
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::Invalid => "INVALID",
        }
    }

    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Verdict::Valid
        } else {
            Verdict::Invalid
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Represents the result of checking a single link
//
// `link` is the target as the author wrote it in the Markdown, which is
// also what gets printed in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck<'a> {
    pub link: Cow<'a, str>,
    pub kind: LinkKind,
    pub verdict: Verdict,
}

// Checks every link in a document
//
// Parameters:
//   document: the loaded document (borrowed, the results borrow from it)
//
// Returns: a lazy iterator of LinkCheck, one per link, in document order.
//   Duplicates are kept: a link written twice is checked and reported twice.
pub fn check_links(document: &Document) -> impl Iterator<Item = LinkCheck<'_>> + '_ {
    document.links().map(move |link| {
        let kind = LinkKind::of(&link);
        let verdict = classify(document, &link);
        LinkCheck { link, kind, verdict }
    })
}

// Applies the matching rule to one link
//
// Parameters:
//   document: supplies the base directory and the named anchors
//   link: the link target, already decoded
//
// Returns: Verdict::Valid or Verdict::Invalid. This never fails: anything
//   that matches no other rule is checked as a relative path.
//
// Example, for a document in /docs that contains <a name="intro">:
//   "#intro"        -> Valid
//   "/setup.md"     -> Valid if /docs/setup.md exists
//   "guide.md#top"  -> Valid only if a file literally named "guide.md#top" exists
pub fn classify(document: &Document, link: &str) -> Verdict {
    let kind = LinkKind::of(link);
    let verdict = match kind {
        LinkKind::External => Verdict::Valid,
        LinkKind::Anchor => document.has_anchor(&link[1..]).into(),
        // Path::join would replace the base with an absolute path, so the
        // leading '/' is dropped first
        LinkKind::RootRelative => document.base_dir().join(&link[1..]).exists().into(),
        LinkKind::Relative => document.base_dir().join(link).exists().into(),
    };

    debug!(link, ?kind, %verdict, "classified link");
    verdict
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is `&link[1..]` safe to slice?
//    - String slicing panics if the index is not on a character boundary
//    - We only slice after checking the first char is '#' or '/'
//    - Both are 1 byte long in UTF-8, so index 1 is always a boundary
//
// 2. What does `.into()` do on a bool here?
//    - We implemented From<bool> for Verdict
//    - That gives bool an Into<Verdict> for free
//    - `path.exists().into()` turns true/false into Valid/Invalid
//
// 3. What is Cow<'a, str>?
//    - "Clone on write": either a borrowed &str or an owned String
//    - Most hrefs need no decoding and stay borrowed from the document
//    - An href like "my%20notes.md" decodes to a new owned String
//
// 4. Why `move` in the check_links closure?
//    - The closure keeps using `document` after check_links returns
//    - `move` copies the &Document reference into the closure
//    - The '_ in the return type ties the iterator to that borrow
// -----------------------------------------------------------------------------
