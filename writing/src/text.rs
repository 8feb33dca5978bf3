//! Word budget utilities.
//!
//! A "word" is a run of non-whitespace characters. Every buffer mutation in
//! the editor goes through these helpers so the displayed word count can
//! never drift from the buffer content.

use thiserror::Error;

/// Text bounded to a word budget, with its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limited {
    pub text: String,
    pub count: usize,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Clipboard is empty. Copy some text first!")]
pub struct EmptyClipboard;

pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Cap `s` at `max_words` words.
///
/// Under the budget the text comes back unchanged. Over it, the first
/// `max_words` words are rejoined with single spaces; truncation never
/// splits inside a word.
pub fn limit_to_max_words(s: &str, max_words: usize) -> Limited {
    let words: Vec<&str> = s.split_whitespace().collect();

    if words.len() > max_words {
        return Limited {
            text: words[..max_words].join(" "),
            count: max_words,
        };
    }

    Limited {
        text: s.to_string(),
        count: words.len(),
    }
}

/// Merge clipboard text onto the existing buffer and apply the word budget.
pub fn merge_clipboard(
    existing: &str,
    clipboard: &str,
    max_words: usize,
) -> Result<Limited, EmptyClipboard> {
    if clipboard.is_empty() {
        return Err(EmptyClipboard);
    }

    let combined = if existing.is_empty() {
        clipboard.to_string()
    } else {
        format!("{existing} {clipboard}")
    };

    Ok(limit_to_max_words(&combined, max_words))
}
