//! Attribution-aware smart truncation.
//!
//! Fits post content plus its attribution footer under a character budget.
//! The content is shortened, never the attribution: whole sentences first,
//! whole words when not even one sentence fits, always ending in `...`.
//! Lengths are counted in characters, not bytes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Character budget for a post including its attribution.
pub const MAX_CHARS: usize = 3000;

/// Reserved for the `"\n\n"` separator (plus slack) between content and attribution.
pub const SEPARATOR_RESERVE: usize = 4;

pub const ELLIPSIS: &str = "...";

/// A run of non-terminators followed by one or more terminators.
static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruncationResult {
    pub truncated_content: String,
    pub is_truncated: bool,
    pub total_length: usize,
}

/// Shortens `content` so that content, separator and attribution fit in `max_chars`.
///
/// When the room left for content is smaller than the ellipsis itself, the
/// content is dropped entirely. If the attribution alone is over budget,
/// `total_length` reports the real, over-budget total.
pub fn smart_truncate_post(content: &str, attribution: &str, max_chars: usize) -> TruncationResult {
    let attribution_len = attribution.chars().count();
    let finish = |truncated_content: String, is_truncated: bool| {
        let total_length = truncated_content.chars().count() + attribution_len + SEPARATOR_RESERVE;
        TruncationResult {
            truncated_content,
            is_truncated,
            total_length,
        }
    };

    if content.is_empty() {
        return finish(String::new(), false);
    }

    let available = max_chars.saturating_sub(attribution_len + SEPARATOR_RESERVE);
    if content.chars().count() <= available {
        return finish(content.to_string(), false);
    }

    if available < ELLIPSIS.len() {
        return finish(String::new(), true);
    }

    // Room left for whole units once the ellipsis is accounted for.
    let budget = available - ELLIPSIS.len();
    let mut body = by_sentences(content, budget);
    if body.is_empty() {
        body = by_words(content, budget);
    }
    body.push_str(ELLIPSIS);

    finish(body, true)
}

/// Greedily keeps whole sentences, in order, while they fit in `budget`.
fn by_sentences(content: &str, budget: usize) -> String {
    let mut kept = String::new();
    let mut kept_len = 0;

    for sentence in SENTENCE.find_iter(content).map(|m| m.as_str()) {
        let len = sentence.chars().count();
        if kept_len + len > budget {
            break;
        }
        kept.push_str(sentence);
        kept_len += len;
    }

    kept.trim_end().to_string()
}

/// Greedily keeps whitespace-delimited words, joined by single spaces.
fn by_words(content: &str, budget: usize) -> String {
    let mut kept = String::new();
    let mut kept_len = 0;

    for word in content.split_whitespace() {
        let sep = usize::from(!kept.is_empty());
        let len = word.chars().count();
        if kept_len + sep + len > budget {
            break;
        }
        if sep == 1 {
            kept.push(' ');
        }
        kept.push_str(word);
        kept_len += sep + len;
    }

    kept
}
