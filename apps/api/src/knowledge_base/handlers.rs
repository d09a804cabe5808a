use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::knowledge_base;
use crate::models::knowledge::{KnowledgeBaseItem, KnowledgeBaseUpdate, NewKnowledgeBaseItem};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// GET /api/v1/knowledge-base
pub async fn handle_list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<KnowledgeBaseItem>>, AppError> {
    let mut items = state.with_store(knowledge_base::list).await?;
    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        items = knowledge_base::by_category(&items, category);
    }
    if let Some(query) = params.q.as_deref().filter(|q| !q.trim().is_empty()) {
        items = knowledge_base::search(&items, query.trim());
    }
    Ok(Json(items))
}

/// POST /api/v1/knowledge-base
pub async fn handle_add(
    State(state): State<AppState>,
    Json(req): Json<NewKnowledgeBaseItem>,
) -> Result<(StatusCode, Json<KnowledgeBaseItem>), AppError> {
    let item = state
        .with_store(move |store| knowledge_base::add(store, req))
        .await
        .map_err(|e| report_rejection(&state, e))?;
    state.notifications.success("Link added to knowledge base!");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/knowledge-base/categories
pub async fn handle_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let items = state.with_store(knowledge_base::list).await?;
    Ok(Json(knowledge_base::categories(&items)))
}

/// GET /api/v1/knowledge-base/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<KnowledgeBaseItem>, AppError> {
    state
        .with_store(move |store| knowledge_base::get(store, id))
        .await?
        .map(Json)
        .ok_or_else(|| item_not_found(id))
}

/// PATCH /api/v1/knowledge-base/:id
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<KnowledgeBaseUpdate>,
) -> Result<Json<KnowledgeBaseItem>, AppError> {
    let item = state
        .with_store(move |store| knowledge_base::update(store, id, req))
        .await
        .map_err(|e| report_rejection(&state, e))?;
    state.notifications.success("Link updated successfully!");
    Ok(Json(item))
}

/// DELETE /api/v1/knowledge-base/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .with_store(move |store| knowledge_base::delete(store, id))
        .await?;
    if !removed {
        return Err(item_not_found(id));
    }
    state.notifications.success("Link deleted successfully!");
    Ok(StatusCode::NO_CONTENT)
}

/// Validation failures are also shown to the user as an error notification.
fn report_rejection(state: &AppState, err: AppError) -> AppError {
    if let AppError::Validation(message) = &err {
        state.notifications.error(message.clone());
    }
    err
}

fn item_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Knowledge base item {id} not found"))
}
