//! The post session: the current generation result and its attribution toggle.
//!
//! The untruncated source text is kept beside the post so toggling attribution
//! can re-apply (or undo) truncation without another workflow call.

use chrono::Utc;
use uuid::Uuid;

use crate::generation::attribution::attribution_text;
use crate::generation::truncation::{smart_truncate_post, MAX_CHARS};
use crate::models::post::GeneratedPost;

#[derive(Debug)]
pub struct PostSession {
    current: Option<GeneratedPost>,
    source_content: String,
    include_attribution: bool,
}

impl Default for PostSession {
    fn default() -> Self {
        Self {
            current: None,
            source_content: String::new(),
            include_attribution: true,
        }
    }
}

impl PostSession {
    pub fn current(&self) -> Option<&GeneratedPost> {
        self.current.as_ref()
    }

    pub fn include_attribution(&self) -> bool {
        self.include_attribution
    }

    /// Installs freshly generated content as the current post.
    pub fn replace(&mut self, content: String, url: Option<String>) -> GeneratedPost {
        let post = compose_post(
            Uuid::new_v4(),
            &content,
            url,
            self.include_attribution,
        );
        self.source_content = content;
        self.current = Some(post.clone());
        post
    }

    /// Makes a previously saved post current, adopting its attribution setting.
    pub fn load(&mut self, post: GeneratedPost) -> GeneratedPost {
        self.include_attribution = post.include_attribution;
        self.source_content = post.content.clone();
        self.current = Some(post.clone());
        post
    }

    /// Replaces the text after a manual edit. The edit becomes the new source text.
    pub fn update_content(&mut self, content: String) -> Option<GeneratedPost> {
        let post = self.current.as_mut()?;
        post.content = content.clone();
        post.is_truncated = false;
        self.source_content = content;
        Some(post.clone())
    }

    /// Turns attribution on or off and re-fits the current post.
    pub fn set_attribution(&mut self, include: bool) -> Option<GeneratedPost> {
        self.include_attribution = include;
        let post = self.current.as_ref()?;
        let mut refit = compose_post(post.id, &self.source_content, post.url.clone(), include);
        refit.timestamp = post.timestamp;
        self.current = Some(refit.clone());
        Some(refit)
    }
}

/// Builds a post from generated text, fitting it around the attribution when enabled.
pub fn compose_post(
    id: Uuid,
    content: &str,
    url: Option<String>,
    include_attribution: bool,
) -> GeneratedPost {
    let attribution = url.as_deref().map(attribution_text);

    let (content, is_truncated) = match (&attribution, include_attribution) {
        (Some(attribution), true) => {
            let fitted = smart_truncate_post(content, attribution, MAX_CHARS);
            (fitted.truncated_content, fitted.is_truncated)
        }
        _ => (content.to_string(), false),
    };

    GeneratedPost {
        id,
        content,
        timestamp: Utc::now(),
        url,
        include_attribution,
        attribution_text: attribution,
        is_truncated,
    }
}
