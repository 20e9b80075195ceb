//! Prompt document error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Reasons a prompt document could not be loaded
///
/// A missing document is not an error; it simply yields an empty table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read prompt document {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Unreadable { path, .. } => path,
        }
    }

    /// Underlying I/O error kind
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            LoadError::Unreadable { source, .. } => source.kind(),
        }
    }
}
