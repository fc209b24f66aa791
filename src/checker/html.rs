// src/checker/html.rs
// =============================================================================
// This module walks the rendered HTML tree.
//
// Two questions are asked of the tree:
// - Which links does it contain? (every <a href="..."> in document order)
// - Does it contain a named anchor? (an <a name="..."> for #fragment links)
//
// We use the `scraper` crate, built on html5ever, for the parsed tree.
// Instead of a CSS selector we walk the descendants directly: the walk is
// depth-first in source order, which is exactly the order links appear.
//
// The Markdown renderer percent-encodes link targets when it writes the
// href ("my notes.md" becomes "my%20notes.md"), so every href is decoded
// back to the target the author wrote before anyone looks at it.
// =============================================================================

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Html};

// Yields the decoded href of every <a> element, skipping empty ones
//
// Example:
//   <p><a href="a.md">A</a> <a href="">empty</a> <a href="my%20notes.md">n</a></p>
//   yields "a.md", "my notes.md"
pub fn extract_links(document: &Html) -> impl Iterator<Item = Cow<'_, str>> + '_ {
    anchor_elements(document)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(decode_href)
}

// True if any <a> element has a `name` attribute equal to `name`
pub fn has_named_anchor(document: &Html, name: &str) -> bool {
    anchor_elements(document).any(|element| element.value().attr("name") == Some(name))
}

fn anchor_elements(document: &Html) -> impl Iterator<Item = ElementRef<'_>> + '_ {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
}

// Undoes percent-encoding; an href that doesn't decode to UTF-8 is kept as is
fn decode_href(href: &str) -> Cow<'_, str> {
    percent_decode_str(href)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(href))
}
