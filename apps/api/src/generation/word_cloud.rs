//! Word frequency extraction for the word-cloud panel.

use std::collections::HashMap;

use crate::models::post::WordCloudItem;

/// Number of terms returned.
pub const TOP_WORDS: usize = 20;

/// Tokens at or below this length are ignored.
const MIN_WORD_CHARS: usize = 3;

const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "were", "said", "each",
    "which", "their", "time", "more", "very", "what", "know", "just", "first", "into", "over",
    "think", "also", "your", "work", "life", "only", "new", "years", "way", "may", "say", "come",
    "its", "now", "find", "long", "down", "day", "did", "get", "has", "him", "his", "how", "man",
    "old", "see", "two", "who", "boy", "let", "put", "she", "too", "use",
];

/// Top terms by frequency, most frequent first. Ties keep first-seen order.
pub fn generate_word_cloud(text: &str) -> Vec<WordCloudItem> {
    // Word characters are ASCII letters, digits and underscore; everything else splits.
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for word in normalized
        .split_whitespace()
        .filter(|w| w.len() > MIN_WORD_CHARS && !STOP_WORDS.contains(w))
    {
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    let mut items: Vec<WordCloudItem> = order
        .into_iter()
        .map(|word| WordCloudItem {
            word: word.to_string(),
            count: counts[word],
        })
        .collect();

    // Stable sort preserves first-seen order among equal counts.
    items.sort_by(|a, b| b.count.cmp(&a.count));
    items.truncate(TOP_WORDS);
    items
}
