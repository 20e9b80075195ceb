//! Section extraction
//!
//! Each category is located with the same two-tier algorithm:
//!
//! 1. Primary: the section heading, then (anywhere after it) the
//!    `**Current Configuration**:` marker followed only by whitespace and a fence.
//! 2. Fallback: the category keyword, then the next fence after it.
//!
//! The first rule to match wins. Matching is case-sensitive and may span lines.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::category::Category;
use crate::fence::{self, FENCE};

/// Marker text introducing the active value of a section
pub const CURRENT_CONFIGURATION: &str = "**Current Configuration**:";

static CURRENT_CONFIGURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*Current Configuration\*\*:\s*```").expect("Invalid current configuration regex")
});

/// Which rule produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Heading + current configuration marker + fence
    Primary,
    /// Keyword + next fence
    Fallback,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// A value found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Trimmed fence interior
    pub value: String,
    /// Rule that matched
    pub rule: Rule,
}

/// Extract the value for `category` from `document`
pub fn extract(document: &str, category: Category) -> Option<Extraction> {
    debug!(%category, document_len = document.len(), "extract: called");
    extract_section(document, category.heading(), category.keyword())
}

/// Extract a section value given its heading marker and fallback keyword
pub fn extract_section(document: &str, heading: &str, keyword: &str) -> Option<Extraction> {
    if let Some(value) = primary(document, heading) {
        debug!(%heading, "extract_section: primary rule matched");
        return Some(Extraction {
            value,
            rule: Rule::Primary,
        });
    }

    if let Some(value) = fallback(document, keyword) {
        debug!(%keyword, "extract_section: fallback rule matched");
        return Some(Extraction {
            value,
            rule: Rule::Fallback,
        });
    }

    debug!(%heading, %keyword, "extract_section: no rule matched");
    None
}

fn primary(document: &str, heading: &str) -> Option<String> {
    if heading.is_empty() {
        return None;
    }
    let start = document.find(heading)? + heading.len();

    // The first marker-and-fence after the heading wins, even when the fence is blank.
    let m = CURRENT_CONFIGURATION_REGEX.find_at(document, start)?;
    let block = fence::fence_at(document, m.end() - FENCE.len())?;
    Some(block.trimmed().to_string())
}

fn fallback(document: &str, keyword: &str) -> Option<String> {
    if keyword.is_empty() {
        return None;
    }
    let start = document.find(keyword)? + keyword.len();

    let block = fence::find_fence(document, start)?;
    Some(block.trimmed().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(heading: &str, body: &str) -> String {
        format!("## {heading}\n\nSome description.\n\n{CURRENT_CONFIGURATION}\n\n```\n{body}\n```\n")
    }

    #[test]
    fn test_primary_rule() {
        let doc = section(Category::Correction.heading(), "Rule A\nRule B");
        let found = extract(&doc, Category::Correction).unwrap();
        assert_eq!(found.value, "Rule A\nRule B");
        assert_eq!(found.rule, Rule::Primary);
    }

    #[test]
    fn test_primary_rule_every_category() {
        let doc: String = Category::ALL
            .iter()
            .map(|c| section(c.heading(), &format!("value for {c}")))
            .collect();
        for category in Category::ALL {
            let found = extract(&doc, category).unwrap();
            assert_eq!(found.value, format!("value for {category}"));
            assert_eq!(found.rule, Rule::Primary);
        }
    }

    #[test]
    fn test_fallback_rule() {
        let doc = "Use natural-language here\n\n```\nT1\n```\n";
        let found = extract(doc, Category::Translation).unwrap();
        assert_eq!(found.value, "T1");
        assert_eq!(found.rule, Rule::Fallback);
    }

    #[test]
    fn test_fallback_when_marker_removed() {
        let doc = format!("## {}\n\n```\nedited by hand\n```\n", Category::Explanation.heading());
        let found = extract(&doc, Category::Explanation).unwrap();
        assert_eq!(found.value, "edited by hand");
        assert_eq!(found.rule, Rule::Fallback);
    }

    #[test]
    fn test_primary_preferred_over_earlier_keyword() {
        let doc = format!(
            "intelligent-completion notes\n```\nexample\n```\n{}",
            section(Category::Completion.heading(), "the real one")
        );
        let found = extract(&doc, Category::Completion).unwrap();
        assert_eq!(found.value, "the real one");
        assert_eq!(found.rule, Rule::Primary);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(extract("", Category::Completion), None);
        assert_eq!(extract("nothing relevant\n```\ncode\n```", Category::Completion), None);
    }

    #[test]
    fn test_keyword_without_fence() {
        assert_eq!(extract("command-correction but no block", Category::Correction), None);
    }

    #[test]
    fn test_case_sensitive() {
        let doc = "NATURAL-LANGUAGE\n```\nT1\n```";
        assert_eq!(extract(doc, Category::Translation), None);
    }

    #[test]
    fn test_marker_split_across_lines() {
        let doc = format!(
            "{}\n\n\n{CURRENT_CONFIGURATION}\n\n\n\n```\nspread out\n```",
            Category::Correction.heading()
        );
        let found = extract(&doc, Category::Correction).unwrap();
        assert_eq!(found.value, "spread out");
        assert_eq!(found.rule, Rule::Primary);
    }

    #[test]
    fn test_text_between_marker_and_fence_skips_primary() {
        // The fence must follow the marker directly; otherwise fall back on the keyword.
        let doc = format!(
            "{}\n{CURRENT_CONFIGURATION}\nsee below\n```\nbody\n```",
            Category::Correction.heading()
        );
        let found = extract(&doc, Category::Correction).unwrap();
        assert_eq!(found.value, "body");
        assert_eq!(found.rule, Rule::Fallback);
    }

    #[test]
    fn test_marker_before_heading_ignored() {
        let doc = format!(
            "{CURRENT_CONFIGURATION}\n```\nwrong\n```\n{}\n{CURRENT_CONFIGURATION}\n```\nright\n```",
            Category::Correction.heading()
        );
        assert_eq!(extract(&doc, Category::Correction).unwrap().value, "right");
    }

    #[test]
    fn test_internal_formatting_preserved() {
        let body = "\n\n  first line\n\n    indented\nlast  \n\n";
        let doc = section(Category::Explanation.heading(), body);
        let found = extract(&doc, Category::Explanation).unwrap();
        assert_eq!(found.value, "first line\n\n    indented\nlast");
    }

    #[test]
    fn test_blank_fence_is_empty_value() {
        let doc = format!(
            "{}\n{CURRENT_CONFIGURATION}\n```\n\n\n```\n{}\n{CURRENT_CONFIGURATION}\n```\nTranslate carefully.\n```",
            Category::Correction.heading(),
            Category::Translation.heading()
        );
        let found = extract(&doc, Category::Correction).unwrap();
        assert_eq!(found.value, "");
        assert_eq!(found.rule, Rule::Primary);
        assert_eq!(extract(&doc, Category::Translation).unwrap().value, "Translate carefully.");
    }

    #[test]
    fn test_blank_fence_after_keyword_is_empty_value() {
        let doc = "command-correction\n```\n   \n```\nlater\n```\nother\n```";
        let found = extract(doc, Category::Correction).unwrap();
        assert_eq!(found.value, "");
        assert_eq!(found.rule, Rule::Fallback);
    }

    #[test]
    fn test_independent_rules_per_category() {
        let doc = format!(
            "{}\ncommand-explanation\n```\nexplain\n```\n",
            section(Category::Correction.heading(), "correct")
        );
        let correction = extract(&doc, Category::Correction).unwrap();
        let explanation = extract(&doc, Category::Explanation).unwrap();
        assert_eq!(correction.rule, Rule::Primary);
        assert_eq!(explanation.rule, Rule::Fallback);
        assert_eq!(explanation.value, "explain");
    }

    #[test]
    fn test_extract_section_custom_markers() {
        let doc = "# Custom\n**Current Configuration**: ```x```";
        let found = extract_section(doc, "# Custom", "unused").unwrap();
        assert_eq!(found.value, "x");
        assert_eq!(extract_section(doc, "", ""), None);
    }
}
