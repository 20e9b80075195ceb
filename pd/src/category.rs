//! Prompt categories
//!
//! The closed set of prompt kinds a prompt document can customize, together
//! with the markers used to find each one.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

/// One of the four prompt kinds recognized in a prompt document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Fixing a failed shell command
    Correction,
    /// Turning a natural-language request into a shell command
    Translation,
    /// Completing a partially typed command
    Completion,
    /// Explaining what a command does
    Explanation,
}

/// Returned when a string does not name a known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown prompt category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in table order
    pub const ALL: [Category; 4] = [
        Category::Correction,
        Category::Translation,
        Category::Completion,
        Category::Explanation,
    ];

    /// Short identifier, e.g. `correction`
    pub fn name(&self) -> &'static str {
        match self {
            Self::Correction => "correction",
            Self::Translation => "translation",
            Self::Completion => "completion",
            Self::Explanation => "explanation",
        }
    }

    /// Long identifier used by older prompt tooling, e.g. `correction_system_prompt`
    pub fn key(&self) -> &'static str {
        match self {
            Self::Correction => "correction_system_prompt",
            Self::Translation => "translation_system_prompt",
            Self::Completion => "completion_system_prompt",
            Self::Explanation => "explanation_system_prompt",
        }
    }

    /// Section heading marker anchoring the primary rule
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Correction => "🔧 command-correction prompt",
            Self::Translation => "🌐 natural-language-to-command prompt",
            Self::Completion => "🔍 intelligent-completion prompt",
            Self::Explanation => "📖 command-explanation prompt",
        }
    }

    /// Plain keyword anchoring the fallback rule
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Correction => "command-correction",
            Self::Translation => "natural-language",
            Self::Completion => "intelligent-completion",
            Self::Explanation => "command-explanation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "Category::from_str: called");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s || c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
