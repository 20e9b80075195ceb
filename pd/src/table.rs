//! Prompt table
//!
//! The result of one load: a slot per category, each either holding an
//! extracted prompt or explicitly empty.

use tracing::debug;

use crate::category::Category;
use crate::extract::{self, Extraction, Rule};

/// Extracted prompts, one slot per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptTable {
    pub correction: Option<Extraction>,
    pub translation: Option<Extraction>,
    pub completion: Option<Extraction>,
    pub explanation: Option<Extraction>,
}

impl PromptTable {
    /// A table with every slot empty
    pub fn empty() -> Self {
        Self::default()
    }

    /// Run every category's extraction rules against `document`
    pub fn from_document(document: &str) -> Self {
        debug!(document_len = document.len(), "PromptTable::from_document: called");
        Self {
            correction: extract::extract(document, Category::Correction),
            translation: extract::extract(document, Category::Translation),
            completion: extract::extract(document, Category::Completion),
            explanation: extract::extract(document, Category::Explanation),
        }
    }

    fn slot(&self, category: Category) -> Option<&Extraction> {
        match category {
            Category::Correction => self.correction.as_ref(),
            Category::Translation => self.translation.as_ref(),
            Category::Completion => self.completion.as_ref(),
            Category::Explanation => self.explanation.as_ref(),
        }
    }

    /// Prompt text for `category`, if one was extracted
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category).map(|e| e.value.as_str())
    }

    /// Rule that produced the prompt for `category`
    pub fn rule(&self, category: Category) -> Option<Rule> {
        self.slot(category).map(|e| e.rule)
    }

    /// Whether `category` has a prompt
    pub fn has(&self, category: Category) -> bool {
        self.slot(category).is_some()
    }

    /// Availability of every category, in table order
    pub fn availability(&self) -> [(Category, bool); 4] {
        Category::ALL.map(|c| (c, self.has(c)))
    }

    /// Number of categories with a prompt
    pub fn len(&self) -> usize {
        Category::ALL.iter().filter(|c| self.has(**c)).count()
    }

    /// True when no category has a prompt
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
