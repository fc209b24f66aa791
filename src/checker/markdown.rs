// src/checker/markdown.rs
// =============================================================================
// This module loads the Markdown document we are going to check.
//
// Loading happens in three steps:
// 1. Read the whole file into a String
// 2. Render the Markdown to HTML with `pulldown-cmark` (CommonMark rules,
//    raw HTML such as <a name="..."></a> passes straight through)
// 3. Parse that HTML into a tree with `scraper` so we can walk it
//
// The directory containing the document is the "base directory": every
// relative link is resolved against it.
// =============================================================================

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{html, Parser};
use scraper::Html;
use tracing::debug;

use super::html::{extract_links, has_named_anchor};
use crate::error::CheckError;

/// A rendered Markdown document plus the directory its links are relative to.
///
/// Built once and never modified, so `links()` can be called as often as
/// needed and always yields the same sequence.
#[derive(Debug)]
pub struct Document {
    path: Option<PathBuf>,
    base_dir: PathBuf,
    tree: Html,
}

impl Document {
    /// Reads and renders the Markdown file at `path`.
    ///
    /// A relative `path` is made absolute against the current directory
    /// first. Symlinks are not resolved.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CheckError> {
        let path = path.as_ref();
        let path = std::path::absolute(path).map_err(|source| CheckError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;

        let source = fs::read_to_string(&path).map_err(|source| CheckError::Read {
            path: path.clone(),
            source,
        })?;

        // A file at the filesystem root has no parent component
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        debug!(path = %path.display(), bytes = source.len(), "read document");

        let mut document = Self::from_markdown(&source, base_dir);
        document.path = Some(path);
        Ok(document)
    }

    /// Builds a document from Markdown already in memory.
    ///
    /// Links are resolved against `base_dir`. There is no file behind it,
    /// so `path()` is `None`.
    pub fn from_markdown(source: &str, base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let rendered = render_markdown(source);
        Self {
            path: None,
            base_dir,
            tree: Html::parse_document(&rendered),
        }
    }

    /// Absolute path of the source document, if it was loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory that relative links are resolved against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Every non-empty `href` in the rendered document, in document order,
    /// percent-decoded back to the target as written in the Markdown
    pub fn links(&self) -> impl Iterator<Item = Cow<'_, str>> + '_ {
        extract_links(&self.tree)
    }

    /// True if some `<a>` element carries `name="<name>"`
    pub fn has_anchor(&self, name: &str) -> bool {
        has_named_anchor(&self.tree, name)
    }
}

// Renders Markdown to an HTML string
//
// Example input:
//   "See [Rust](https://www.rust-lang.org)"
//
// Example output:
//   "<p>See <a href=\"https://www.rust-lang.org\">Rust</a></p>\n"
fn render_markdown(markdown: &str) -> String {
    // The parser is a streaming iterator of events (start tag, text, end tag, ...)
    // push_html consumes it and appends the HTML to our buffer
    let parser = Parser::new(markdown);
    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `impl AsRef<Path>`?
//    - A parameter type that accepts anything cheaply viewable as a Path
//    - &str, String, &Path and PathBuf all qualify
//    - Callers don't have to convert before calling load()
//
// 2. Why map_err with a closure?
//    - fs::read_to_string returns io::Error, which doesn't say WHICH file
//    - We wrap it in CheckError::Read together with the path
//    - The ? operator then returns early with our richer error
//
// 3. Why keep the parsed Html instead of the String?
//    - Both link extraction and anchor lookup need the tree
//    - Parsing once and storing it avoids doing the work twice
// -----------------------------------------------------------------------------
