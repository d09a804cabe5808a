//! Handlers for the side panels: stats, recent URLs, theme, notifications, tips.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::post::RecentUrl;
use crate::notifications::Notification;
use crate::state::AppState;
use crate::stats::{collect_stats, Stats};
use crate::storage::{recent_urls, theme};
use crate::tips::{TipCategory, TIPS};

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemePreference {
    pub dark_mode: bool,
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<Stats>, AppError> {
    let today = Local::now().date_naive();
    let stats = state
        .with_store(move |store| collect_stats(store, today))
        .await?;
    Ok(Json(stats))
}

/// GET /api/v1/recent-urls
pub async fn handle_recent_urls(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentUrl>>, AppError> {
    Ok(Json(state.with_store(recent_urls::list_recent_urls).await?))
}

/// GET /api/v1/preferences/theme
pub async fn handle_get_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemePreference>, AppError> {
    let dark_mode = state.with_store(theme::dark_mode).await?;
    Ok(Json(ThemePreference { dark_mode }))
}

/// PUT /api/v1/preferences/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<ThemePreference>,
) -> Result<Json<ThemePreference>, AppError> {
    let dark_mode = req.dark_mode;
    state
        .with_store(move |store| theme::set_dark_mode(store, dark_mode))
        .await?;
    Ok(Json(req))
}

/// POST /api/v1/preferences/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemePreference>, AppError> {
    let dark_mode = state.with_store(theme::toggle_dark_mode).await?;
    Ok(Json(ThemePreference { dark_mode }))
}

/// GET /api/v1/notifications
pub async fn handle_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.notifications.active(Utc::now()))
}

/// DELETE /api/v1/notifications/:id
pub async fn handle_dismiss_notification(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.notifications.dismiss(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Notification {id} not found")))
    }
}

/// GET /api/v1/tips
pub async fn handle_tips() -> Json<&'static [TipCategory]> {
    Json(TIPS)
}
