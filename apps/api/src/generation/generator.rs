//! Post generation: orchestrates a single generation or variation request.
//!
//! Flow: validate URL → workflow call → attribution + truncation → session →
//!       recent URLs + daily counter → notification.

use chrono::Local;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::validation::validate_url;
use crate::models::post::GeneratedPost;
use crate::state::AppState;
use crate::storage::{daily_counter, recent_urls};
use crate::workflow_client::prompts::variation_prompt;

const GENERATE_ACTION: &str = "Failed to generate post";
const VARIATION_ACTION: &str = "Failed to generate variation";

/// Generates a post for an article URL and makes it the current post.
pub async fn generate_post(state: &AppState, url: &str) -> Result<GeneratedPost, AppError> {
    let url = validate_url(url)?;
    let generator = state.generator()?;

    info!("Generating post for {url}");
    let content = match generator.generate(url).await {
        Ok(content) => content,
        Err(e) => return Err(report_failure(state, AppError::upstream(GENERATE_ACTION, e))),
    };

    let post = state
        .session
        .lock()
        .await
        .replace(content, Some(url.to_string()));

    let recorded_url = url.to_string();
    let today = state
        .with_store(move |store| {
            recent_urls::add_recent_url(store, &recorded_url)?;
            daily_counter::increment_posts_today(store, Local::now().date_naive())
        })
        .await?;
    info!(
        "Generated post {} ({} chars, truncated={}); {today} today",
        post.id,
        post.content.chars().count(),
        post.is_truncated
    );

    state
        .notifications
        .success("LinkedIn post generated successfully!");
    Ok(post)
}

/// Asks the workflow for a different take on the current post, keeping its URL.
pub async fn generate_variation(state: &AppState) -> Result<GeneratedPost, AppError> {
    let (content, url) = {
        let session = state.session.lock().await;
        let current = session.current().ok_or_else(|| {
            AppError::Validation("Generate a post before requesting a variation".to_string())
        })?;
        (current.content.clone(), current.url.clone())
    };
    let generator = state.generator()?;

    info!("Generating variation");
    let variation = match generator.generate(&variation_prompt(&content)).await {
        Ok(text) => text,
        Err(e) => return Err(report_failure(state, AppError::upstream(VARIATION_ACTION, e))),
    };

    let post = state.session.lock().await.replace(variation, url);
    state.notifications.success("New variation generated!");
    Ok(post)
}

fn report_failure(state: &AppState, err: AppError) -> AppError {
    warn!("{err}");
    state.notifications.error(err.user_message());
    err
}
