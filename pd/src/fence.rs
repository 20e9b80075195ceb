//! Fenced block scanning
//!
//! A fence opens with a triple backtick and closes at the next triple
//! backtick. There is no escaping and no nesting: the first closing delimiter
//! ends the block.

/// Fence delimiter
pub const FENCE: &str = "```";

/// A fenced block located inside a larger text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence<'a> {
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset just past the closing delimiter
    pub end: usize,
    /// Everything between the delimiters, untrimmed
    pub interior: &'a str,
}

impl<'a> Fence<'a> {
    /// Interior with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &'a str {
        self.interior.trim()
    }
}

/// Find the first complete fence starting at or after `from`
///
/// Returns `None` when `from` is past the end of `text` or not on a char
/// boundary, when no opening delimiter follows, or when the opening delimiter
/// is never closed.
pub fn find_fence(text: &str, from: usize) -> Option<Fence<'_>> {
    let open = from + text.get(from..)?.find(FENCE)?;
    fence_at(text, open)
}

/// Read the fence whose opening delimiter sits exactly at `open`
pub fn fence_at(text: &str, open: usize) -> Option<Fence<'_>> {
    if !text.get(open..)?.starts_with(FENCE) {
        return None;
    }
    let body = open + FENCE.len();
    let close = body + text[body..].find(FENCE)?;
    Some(Fence {
        start: open,
        end: close + FENCE.len(),
        interior: &text[body..close],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_simple_fence() {
        let text = "before\n```\nhello\n```\nafter";
        let fence = find_fence(text, 0).unwrap();
        assert_eq!(fence.interior, "\nhello\n");
        assert_eq!(fence.trimmed(), "hello");
        assert_eq!(&text[fence.start..fence.end], "```\nhello\n```");
    }

    #[test]
    fn test_first_closing_delimiter_wins() {
        let text = "```one``` ```two```";
        let fence = find_fence(text, 0).unwrap();
        assert_eq!(fence.interior, "one");

        let next = find_fence(text, fence.end).unwrap();
        assert_eq!(next.interior, "two");
    }

    #[test]
    fn test_single_backticks_stay_inside() {
        let text = "```\nrun `ls -la` first\n```";
        assert_eq!(find_fence(text, 0).unwrap().trimmed(), "run `ls -la` first");
    }

    #[test]
    fn test_unclosed_fence() {
        assert_eq!(find_fence("```\nnever closed", 0), None);
    }

    #[test]
    fn test_no_fence() {
        assert_eq!(find_fence("plain text", 0), None);
        assert_eq!(find_fence("", 0), None);
    }

    #[test]
    fn test_from_past_end() {
        assert_eq!(find_fence("```a```", 100), None);
    }

    #[test]
    fn test_from_inside_multibyte_char() {
        let text = "🔧```a```";
        assert_eq!(find_fence(text, 1), None);
        assert_eq!(find_fence(text, 0).unwrap().interior, "a");
    }

    #[test]
    fn test_fence_at_requires_delimiter() {
        let text = "x```a```";
        assert_eq!(fence_at(text, 0), None);
        assert_eq!(fence_at(text, 1).unwrap().interior, "a");
    }

    #[test]
    fn test_empty_interior() {
        let fence = find_fence("``````", 0).unwrap();
        assert_eq!(fence.interior, "");
        assert_eq!(fence.end, 6);
    }
}
