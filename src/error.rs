// src/error.rs
// =============================================================================
// Error types for loading a document.
//
// Only the loader can fail: classification and reporting are total over
// any link string. main.rs wraps these in anyhow::Error at the boundary.
// =============================================================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the document to check
#[derive(Debug, Error)]
pub enum CheckError {
    /// The document is missing, unreadable, or not valid UTF-8
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A relative path could not be made absolute
    #[error("cannot resolve {} to an absolute path", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    /// True when the document itself does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            CheckError::Read { source, .. } => source.kind() == io::ErrorKind::NotFound,
            CheckError::Resolve { .. } => false,
        }
    }
}
