use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the display title derived from a post's content.
pub const TITLE_CHARS: usize = 50;

/// The current generation result. Held in the post session, never persisted directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPost {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub url: Option<String>,
    #[serde(default)]
    pub include_attribution: bool,
    pub attribution_text: Option<String>,
    #[serde(default)]
    pub is_truncated: bool,
}

/// A post persisted to either the drafts or the favorites list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPost {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub include_attribution: bool,
    #[serde(default)]
    pub attribution_text: Option<String>,
    #[serde(default)]
    pub is_truncated: bool,
}

impl SavedPost {
    /// Snapshots a generated post under a fresh id and timestamp.
    pub fn from_post(post: &GeneratedPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: post.content.clone(),
            timestamp: Utc::now(),
            url: post.url.clone(),
            title: title_for(&post.content),
            include_attribution: post.include_attribution,
            attribution_text: post.attribution_text.clone(),
            is_truncated: post.is_truncated,
        }
    }

    /// Restores the saved post as the current generation result.
    pub fn to_post(&self) -> GeneratedPost {
        GeneratedPost {
            id: self.id,
            content: self.content.clone(),
            timestamp: self.timestamp,
            url: self.url.clone(),
            include_attribution: self.include_attribution,
            attribution_text: self.attribution_text.clone(),
            is_truncated: self.is_truncated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentUrl {
    pub url: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordCloudItem {
    pub word: String,
    pub count: usize,
}

/// First `TITLE_CHARS` characters of the content, with `...` when cut.
pub fn title_for(content: &str) -> String {
    if content.chars().count() > TITLE_CHARS {
        let head: String = content.chars().take(TITLE_CHARS).collect();
        format!("{head}...")
    } else {
        content.to_string()
    }
}
