//! Source attribution: publication name resolution and the footer appended to posts.

use url::Url;

/// Returned when the article URL cannot be parsed.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Known domains and their display names. Lookups use the hostname without `www.`.
const PUBLICATIONS: &[(&str, &str)] = &[
    ("hbr.org", "Harvard Business Review"),
    ("techcrunch.com", "TechCrunch"),
    ("medium.com", "Medium"),
    ("forbes.com", "Forbes"),
    ("bloomberg.com", "Bloomberg"),
    ("reuters.com", "Reuters"),
    ("wsj.com", "The Wall Street Journal"),
    ("nytimes.com", "The New York Times"),
    ("washingtonpost.com", "The Washington Post"),
    ("theguardian.com", "The Guardian"),
    ("cnn.com", "CNN"),
    ("bbc.com", "BBC"),
    ("npr.org", "NPR"),
    ("economist.com", "The Economist"),
    ("ft.com", "Financial Times"),
    ("linkedin.com", "LinkedIn"),
    ("github.com", "GitHub"),
    ("stackoverflow.com", "Stack Overflow"),
    ("dev.to", "Dev.to"),
    ("hashnode.dev", "Hashnode"),
    ("substack.com", "Substack"),
];

/// Resolves a human-readable publication name for an article URL.
///
/// Unmapped hosts fall back to their second-level label with the first letter
/// capitalized (`example.com` → `Example`).
pub fn extract_publication_name(url: &str) -> String {
    let host = match Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string)) {
        Some(host) => host.to_ascii_lowercase(),
        None => return UNKNOWN_SOURCE.to_string(),
    };
    let host = host.strip_prefix("www.").unwrap_or(&host);

    if let Some((_, name)) = PUBLICATIONS.iter().find(|(domain, _)| *domain == host) {
        return name.to_string();
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    let label = match labels.len() {
        0 => return UNKNOWN_SOURCE.to_string(),
        1 => labels[0],
        n => labels[n - 2],
    };
    capitalize(label)
}

/// Two-line footer: `Source: <publication>` followed by the raw URL.
pub fn attribution_text(url: &str) -> String {
    format!("Source: {}\n{}", extract_publication_name(url), url)
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
