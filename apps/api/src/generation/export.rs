//! Plain-text renderings of posts: clipboard text and export files.

use chrono::{DateTime, Utc};

use crate::models::post::{GeneratedPost, SavedPost};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Content plus the attribution block when attribution is enabled.
pub fn clipboard_text(post: &GeneratedPost) -> String {
    match attribution_block(post) {
        Some(attribution) => format!("{}\n\n{}", post.content, attribution),
        None => post.content.clone(),
    }
}

/// Export document: header, body, optional attribution block, source line.
pub fn export_text(post: &GeneratedPost) -> String {
    let mut doc = format!(
        "LinkedIn Post - Generated {}\n\n{}",
        post.timestamp.format(TIMESTAMP_FORMAT),
        post.content
    );

    if let Some(attribution) = attribution_block(post) {
        doc.push_str("\n\n");
        doc.push_str(attribution);
    }

    push_source_line(&mut doc, post.url.as_deref());
    doc
}

/// Export document for a saved draft or favorite: `label` names the shelf
/// ("Draft", "Favorite"). Saved exports carry no attribution block.
pub fn saved_export_text(label: &str, post: &SavedPost) -> String {
    let mut doc = format!(
        "LinkedIn {label} - {}\n\n{}",
        post.timestamp.format(TIMESTAMP_FORMAT),
        post.content
    );
    push_source_line(&mut doc, post.url.as_deref());
    doc
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    file_name("post", now)
}

/// `linkedin-draft-<millis>.txt` and friends.
pub fn saved_export_file_name(label: &str, now: DateTime<Utc>) -> String {
    file_name(&label.to_lowercase(), now)
}

fn file_name(stem: &str, now: DateTime<Utc>) -> String {
    format!("linkedin-{stem}-{}.txt", now.timestamp_millis())
}

/// Blank line, then `Source: <url>` or nothing.
fn push_source_line(doc: &mut String, url: Option<&str>) {
    doc.push_str("\n\n");
    if let Some(url) = url {
        doc.push_str("Source: ");
        doc.push_str(url);
    }
}

fn attribution_block(post: &GeneratedPost) -> Option<&str> {
    post.attribution_text
        .as_deref()
        .filter(|text| post.include_attribution && !text.is_empty())
}
