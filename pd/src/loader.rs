//! Prompt Extractor
//!
//! Reads a prompt document once and answers lookups from the resulting table.
//! Construction never fails: a missing document yields an empty table, and an
//! unreadable one yields an empty table plus a warning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::category::Category;
use crate::error::LoadError;
use crate::extract::Rule;
use crate::table::PromptTable;

/// How the document behind an extractor was obtained
#[derive(Debug)]
pub enum LoadStatus {
    /// The document was read and scanned
    Loaded,
    /// No document exists at the path
    Missing,
    /// The document exists but could not be read
    Failed(LoadError),
}

/// Extracted prompts from a single prompt document
#[derive(Debug)]
pub struct PromptExtractor {
    /// Path the document was read from
    path: PathBuf,
    /// Extracted prompts, fixed after construction
    table: PromptTable,
    /// Outcome of reading the document
    status: LoadStatus,
}

impl PromptExtractor {
    /// Load and scan the document at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        debug!(?path, "PromptExtractor::new: called");

        let (table, status) = match read_document(&path) {
            Ok(Some(document)) => {
                let table = PromptTable::from_document(&document);
                info!("Loaded {} of 4 prompts from {}", table.len(), path.display());
                (table, LoadStatus::Loaded)
            }
            Ok(None) => {
                debug!(?path, "PromptExtractor::new: no document, using empty table");
                (PromptTable::empty(), LoadStatus::Missing)
            }
            Err(e) => {
                warn!("{}", e);
                (PromptTable::empty(), LoadStatus::Failed(e))
            }
        };

        Self { path, table, status }
    }

    /// Scan document text that is already in memory
    pub fn from_document(document: &str) -> Self {
        debug!(document_len = document.len(), "PromptExtractor::from_document: called");
        Self {
            path: PathBuf::new(),
            table: PromptTable::from_document(document),
            status: LoadStatus::Loaded,
        }
    }

    /// Prompt for `category`, or `fallback` when it is absent or not a known category
    pub fn get<'a>(&'a self, category: &str, fallback: &'a str) -> &'a str {
        match category.parse::<Category>() {
            Ok(category) => self.get_or(category, fallback),
            Err(e) => {
                debug!(%e, "PromptExtractor::get: using fallback");
                fallback
            }
        }
    }

    /// Whether `category` names a known category with a prompt
    pub fn has(&self, category: &str) -> bool {
        category.parse::<Category>().is_ok_and(|c| self.table.has(c))
    }

    /// Availability of every category in table order
    pub fn list_available(&self) -> [(Category, bool); 4] {
        self.table.availability()
    }

    /// Typed lookup
    pub fn prompt(&self, category: Category) -> Option<&str> {
        self.table.get(category)
    }

    /// Typed lookup with a fallback
    pub fn get_or<'a>(&'a self, category: Category, fallback: &'a str) -> &'a str {
        self.table.get(category).unwrap_or(fallback)
    }

    /// Rule that produced the prompt for `category`
    pub fn rule(&self, category: Category) -> Option<Rule> {
        self.table.rule(category)
    }

    /// Extracted prompts
    pub fn table(&self) -> &PromptTable {
        &self.table
    }

    /// Path the document was read from (empty for in-memory documents)
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outcome of reading the document
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// The read failure recorded during construction, if any
    pub fn warning(&self) -> Option<&LoadError> {
        match &self.status {
            LoadStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Read the whole document; `Ok(None)` when nothing exists at `path`
fn read_document(path: &Path) -> Result<Option<String>, LoadError> {
    debug!(?path, "read_document: called");
    match fs::read_to_string(path) {
        Ok(document) => Ok(Some(document)),
        Err(e) if e.kind() == io::ErrorKind::NotFound || !path.exists() => {
            debug!(?path, kind = ?e.kind(), "read_document: document does not exist");
            Ok(None)
        }
        Err(source) => Err(LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
