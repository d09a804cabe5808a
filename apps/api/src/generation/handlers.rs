//! Axum route handlers for post generation, the current post, and saved posts.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::attribution::{attribution_text, extract_publication_name};
use crate::generation::export::{
    clipboard_text, export_file_name, export_text, saved_export_file_name, saved_export_text,
};
use crate::generation::generator::{generate_post, generate_variation};
use crate::generation::word_cloud::generate_word_cloud;
use crate::models::post::{GeneratedPost, SavedPost, WordCloudItem};
use crate::state::AppState;
use crate::storage::shelves::{self, Shelf};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AttributionToggle {
    pub include_attribution: bool,
}

#[derive(Debug, Deserialize)]
pub struct WordCloudRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AttributionRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AttributionResponse {
    pub publication: String,
    pub attribution_text: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentPostResponse {
    pub post: Option<GeneratedPost>,
    pub include_attribution: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/posts/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GeneratedPost>, AppError> {
    Ok(Json(generate_post(&state, &req.url).await?))
}

/// POST /api/v1/posts/variation
pub async fn handle_variation(
    State(state): State<AppState>,
) -> Result<Json<GeneratedPost>, AppError> {
    Ok(Json(generate_variation(&state).await?))
}

// ────────────────────────────────────────────────────────────────────────────
// Current post
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/posts/current
pub async fn handle_current(State(state): State<AppState>) -> Json<CurrentPostResponse> {
    let session = state.session.lock().await;
    Json(CurrentPostResponse {
        post: session.current().cloned(),
        include_attribution: session.include_attribution(),
    })
}

/// PUT /api/v1/posts/current/content
pub async fn handle_update_content(
    State(state): State<AppState>,
    Json(req): Json<UpdateContentRequest>,
) -> Result<Json<GeneratedPost>, AppError> {
    let post = state
        .session
        .lock()
        .await
        .update_content(req.content)
        .ok_or_else(no_current_post)?;
    Ok(Json(post))
}

/// PUT /api/v1/posts/current/attribution
pub async fn handle_set_attribution(
    State(state): State<AppState>,
    Json(req): Json<AttributionToggle>,
) -> Json<CurrentPostResponse> {
    let mut session = state.session.lock().await;
    let post = session.set_attribution(req.include_attribution);
    Json(CurrentPostResponse {
        post,
        include_attribution: session.include_attribution(),
    })
}

/// GET /api/v1/posts/current/word-cloud
pub async fn handle_current_word_cloud(
    State(state): State<AppState>,
) -> Result<Json<Vec<WordCloudItem>>, AppError> {
    let post = current_post(&state).await?;
    Ok(Json(generate_word_cloud(&post.content)))
}

/// GET /api/v1/posts/current/text
///
/// The text a user would copy to the clipboard.
pub async fn handle_clipboard_text(State(state): State<AppState>) -> Result<String, AppError> {
    let post = current_post(&state).await?;
    state.notifications.success("Copied to clipboard!");
    Ok(clipboard_text(&post))
}

/// GET /api/v1/posts/current/export
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let post = current_post(&state).await?;
    state.notifications.success("Post exported successfully!");
    Ok(text_attachment(export_file_name(Utc::now()), export_text(&post)))
}

// ────────────────────────────────────────────────────────────────────────────
// Stateless helpers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/word-cloud
pub async fn handle_word_cloud(Json(req): Json<WordCloudRequest>) -> Json<Vec<WordCloudItem>> {
    Json(generate_word_cloud(&req.text))
}

/// POST /api/v1/attribution
pub async fn handle_attribution(Json(req): Json<AttributionRequest>) -> Json<AttributionResponse> {
    Json(AttributionResponse {
        publication: extract_publication_name(&req.url),
        attribution_text: attribution_text(&req.url),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Drafts and favorites
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/drafts
pub async fn handle_list_drafts(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedPost>>, AppError> {
    list_saved(&state, Shelf::Drafts).await
}

/// POST /api/v1/drafts
pub async fn handle_save_draft(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SavedPost>), AppError> {
    save_current(&state, Shelf::Drafts, "Draft saved successfully!").await
}

/// POST /api/v1/drafts/:id/load
pub async fn handle_load_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GeneratedPost>, AppError> {
    load_saved(&state, Shelf::Drafts, id).await
}

/// GET /api/v1/drafts/:id/text
pub async fn handle_draft_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    saved_text(&state, Shelf::Drafts, id).await
}

/// GET /api/v1/drafts/:id/export
pub async fn handle_export_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    export_saved(&state, Shelf::Drafts, id).await
}

/// DELETE /api/v1/drafts/:id
pub async fn handle_delete_draft(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_saved(&state, Shelf::Drafts, id).await
}

/// GET /api/v1/favorites
pub async fn handle_list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedPost>>, AppError> {
    list_saved(&state, Shelf::Favorites).await
}

/// POST /api/v1/favorites
pub async fn handle_add_favorite(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SavedPost>), AppError> {
    save_current(&state, Shelf::Favorites, "Added to favorites!").await
}

/// POST /api/v1/favorites/:id/load
pub async fn handle_load_favorite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GeneratedPost>, AppError> {
    load_saved(&state, Shelf::Favorites, id).await
}

/// GET /api/v1/favorites/:id/text
pub async fn handle_favorite_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<String, AppError> {
    saved_text(&state, Shelf::Favorites, id).await
}

/// GET /api/v1/favorites/:id/export
pub async fn handle_export_favorite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    export_saved(&state, Shelf::Favorites, id).await
}

/// DELETE /api/v1/favorites/:id
pub async fn handle_delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    delete_saved(&state, Shelf::Favorites, id).await
}

async fn list_saved(state: &AppState, shelf: Shelf) -> Result<Json<Vec<SavedPost>>, AppError> {
    let posts = state
        .with_store(move |store| shelves::list(store, shelf))
        .await?;
    Ok(Json(posts))
}

async fn save_current(
    state: &AppState,
    shelf: Shelf,
    message: &str,
) -> Result<(StatusCode, Json<SavedPost>), AppError> {
    let post = current_post(state).await?;
    let saved = state
        .with_store(move |store| shelves::save(store, shelf, &post))
        .await?;
    state.notifications.success(message);
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn find_saved(state: &AppState, shelf: Shelf, id: Uuid) -> Result<SavedPost, AppError> {
    state
        .with_store(move |store| shelves::find(store, shelf, id))
        .await?
        .ok_or_else(|| saved_not_found(shelf, id))
}

async fn load_saved(
    state: &AppState,
    shelf: Shelf,
    id: Uuid,
) -> Result<Json<GeneratedPost>, AppError> {
    let saved = find_saved(state, shelf, id).await?;
    let post = state.session.lock().await.load(saved.to_post());
    state
        .notifications
        .success(format!("{} loaded successfully!", shelf.label()));
    Ok(Json(post))
}

/// Saved posts copy as their bare content.
async fn saved_text(state: &AppState, shelf: Shelf, id: Uuid) -> Result<String, AppError> {
    let saved = find_saved(state, shelf, id).await?;
    state
        .notifications
        .success(format!("{} copied to clipboard!", shelf.label()));
    Ok(saved.content)
}

async fn export_saved(
    state: &AppState,
    shelf: Shelf,
    id: Uuid,
) -> Result<impl IntoResponse, AppError> {
    let saved = find_saved(state, shelf, id).await?;
    let label = shelf.label();
    state
        .notifications
        .success(format!("{label} exported successfully!"));
    Ok(text_attachment(
        saved_export_file_name(label, Utc::now()),
        saved_export_text(label, &saved),
    ))
}

async fn delete_saved(state: &AppState, shelf: Shelf, id: Uuid) -> Result<StatusCode, AppError> {
    let removed = state
        .with_store(move |store| shelves::delete(store, shelf, id))
        .await?;
    if !removed {
        return Err(saved_not_found(shelf, id));
    }

    let message = match shelf {
        Shelf::Drafts => "Draft deleted successfully!",
        Shelf::Favorites => "Favorite removed successfully!",
    };
    state.notifications.success(message);
    Ok(StatusCode::NO_CONTENT)
}

fn saved_not_found(shelf: Shelf, id: Uuid) -> AppError {
    AppError::NotFound(format!("{} {id} not found", shelf.label()))
}

/// A `text/plain` download named `file_name`.
fn text_attachment(file_name: String, body: String) -> impl IntoResponse {
    let disposition = format!("attachment; filename=\"{file_name}\"");
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
}

async fn current_post(state: &AppState) -> Result<GeneratedPost, AppError> {
    state
        .session
        .lock()
        .await
        .current()
        .cloned()
        .ok_or_else(no_current_post)
}

fn no_current_post() -> AppError {
    AppError::NotFound("No post has been generated yet".to_string())
}
