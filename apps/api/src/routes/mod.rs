pub mod dashboard;
pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::generation::handlers as posts;
use crate::knowledge_base::handlers as kb;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation and the current post
        .route("/api/v1/posts/generate", post(posts::handle_generate))
        .route("/api/v1/posts/variation", post(posts::handle_variation))
        .route("/api/v1/posts/current", get(posts::handle_current))
        .route(
            "/api/v1/posts/current/content",
            put(posts::handle_update_content),
        )
        .route(
            "/api/v1/posts/current/attribution",
            put(posts::handle_set_attribution),
        )
        .route(
            "/api/v1/posts/current/word-cloud",
            get(posts::handle_current_word_cloud),
        )
        .route("/api/v1/posts/current/text", get(posts::handle_clipboard_text))
        .route("/api/v1/posts/current/export", get(posts::handle_export))
        .route("/api/v1/word-cloud", post(posts::handle_word_cloud))
        .route("/api/v1/attribution", post(posts::handle_attribution))
        // Saved posts
        .route(
            "/api/v1/drafts",
            get(posts::handle_list_drafts).post(posts::handle_save_draft),
        )
        .route("/api/v1/drafts/:id", axum::routing::delete(posts::handle_delete_draft))
        .route("/api/v1/drafts/:id/load", post(posts::handle_load_draft))
        .route("/api/v1/drafts/:id/text", get(posts::handle_draft_text))
        .route("/api/v1/drafts/:id/export", get(posts::handle_export_draft))
        .route(
            "/api/v1/favorites",
            get(posts::handle_list_favorites).post(posts::handle_add_favorite),
        )
        .route(
            "/api/v1/favorites/:id",
            axum::routing::delete(posts::handle_delete_favorite),
        )
        .route("/api/v1/favorites/:id/load", post(posts::handle_load_favorite))
        .route("/api/v1/favorites/:id/text", get(posts::handle_favorite_text))
        .route(
            "/api/v1/favorites/:id/export",
            get(posts::handle_export_favorite),
        )
        // Knowledge base
        .route("/api/v1/knowledge-base", get(kb::handle_list).post(kb::handle_add))
        .route(
            "/api/v1/knowledge-base/categories",
            get(kb::handle_categories),
        )
        .route(
            "/api/v1/knowledge-base/:id",
            get(kb::handle_get)
                .patch(kb::handle_update)
                .delete(kb::handle_delete),
        )
        // Side panels
        .route("/api/v1/recent-urls", get(dashboard::handle_recent_urls))
        .route("/api/v1/stats", get(dashboard::handle_stats))
        .route(
            "/api/v1/preferences/theme",
            get(dashboard::handle_get_theme).put(dashboard::handle_set_theme),
        )
        .route(
            "/api/v1/preferences/theme/toggle",
            post(dashboard::handle_toggle_theme),
        )
        .route("/api/v1/notifications", get(dashboard::handle_notifications))
        .route(
            "/api/v1/notifications/:id",
            axum::routing::delete(dashboard::handle_dismiss_notification),
        )
        .route("/api/v1/tips", get(dashboard::handle_tips))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::storage::JsonStore;
    use crate::workflow_client::{ContentGenerator, WorkflowError};

    struct FixedGenerator(&'static str);

    #[async_trait]
    impl ContentGenerator for FixedGenerator {
        async fn generate(&self, _input: &str) -> Result<String, WorkflowError> {
            Ok(self.0.to_string())
        }
    }

    fn app(generator: Option<Arc<dyn ContentGenerator>>) -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        (dir, build_router(AppState::new(store, generator)))
    }

    fn configured() -> (TempDir, Router) {
        app(Some(Arc::new(FixedGenerator(
            "Data beats opinion. Data drives insight. Insight drives change.",
        ))))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let (_dir, router) = app(None);
        let (status, body) = send(&router, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["workflow_configured"], false);
    }

    #[tokio::test]
    async fn test_generate_without_configuration() {
        let (_dir, router) = app(None);
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://hbr.org/a"})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_rejects_malformed_url() {
        let (_dir, router) = configured();
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "not a url"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please enter a valid URL format");
    }

    #[tokio::test]
    async fn test_generate_then_work_with_current_post() {
        let (_dir, router) = configured();

        let (status, post) = send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://www.hbr.org/article"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            post["attribution_text"],
            "Source: Harvard Business Review\nhttps://www.hbr.org/article"
        );

        let (_, cloud) = send(&router, Method::GET, "/api/v1/posts/current/word-cloud", None).await;
        assert_eq!(cloud[0], json!({"word": "data", "count": 2}));
        assert_eq!(cloud[1], json!({"word": "drives", "count": 2}));
        assert_eq!(cloud[2], json!({"word": "insight", "count": 2}));

        let (_, text) = send(&router, Method::GET, "/api/v1/posts/current/text", None).await;
        assert!(text
            .as_str()
            .unwrap()
            .ends_with("\n\nSource: Harvard Business Review\nhttps://www.hbr.org/article"));

        let (_, off) = send(
            &router,
            Method::PUT,
            "/api/v1/posts/current/attribution",
            Some(json!({"include_attribution": false})),
        )
        .await;
        assert_eq!(off["include_attribution"], false);

        let (_, recents) = send(&router, Method::GET, "/api/v1/recent-urls", None).await;
        assert_eq!(recents[0]["url"], "https://www.hbr.org/article");

        let (_, stats) = send(&router, Method::GET, "/api/v1/stats", None).await;
        assert_eq!(stats["posts_today"], 1);
    }

    #[tokio::test]
    async fn test_draft_lifecycle() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://techcrunch.com/x"})),
        )
        .await;

        let (status, draft) = send(&router, Method::POST, "/api/v1/drafts", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = draft["id"].as_str().unwrap().to_string();

        send(
            &router,
            Method::PUT,
            "/api/v1/posts/current/content",
            Some(json!({"content": "Edited"})),
        )
        .await;

        let (status, loaded) =
            send(&router, Method::POST, &format!("/api/v1/drafts/{id}/load"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(loaded["content"], draft["content"]);

        let (status, _) = send(&router, Method::DELETE, &format!("/api/v1/drafts/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&router, Method::DELETE, &format!("/api/v1/drafts/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    fn messages(notes: &Value) -> Vec<&str> {
        notes
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["message"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_saved_post_actions_push_notifications() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://hbr.org/a"})),
        )
        .await;

        let (_, draft) = send(&router, Method::POST, "/api/v1/drafts", None).await;
        let draft_id = draft["id"].as_str().unwrap().to_string();
        send(&router, Method::POST, &format!("/api/v1/drafts/{draft_id}/load"), None).await;
        send(&router, Method::DELETE, &format!("/api/v1/drafts/{draft_id}"), None).await;

        let (_, favorite) = send(&router, Method::POST, "/api/v1/favorites", None).await;
        let favorite_id = favorite["id"].as_str().unwrap().to_string();
        send(
            &router,
            Method::POST,
            &format!("/api/v1/favorites/{favorite_id}/load"),
            None,
        )
        .await;
        send(
            &router,
            Method::DELETE,
            &format!("/api/v1/favorites/{favorite_id}"),
            None,
        )
        .await;

        let (_, notes) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(
            messages(&notes),
            vec![
                "LinkedIn post generated successfully!",
                "Draft saved successfully!",
                "Draft loaded successfully!",
                "Draft deleted successfully!",
                "Added to favorites!",
                "Favorite loaded successfully!",
                "Favorite removed successfully!",
            ]
        );
    }

    #[tokio::test]
    async fn test_saved_post_copy_and_export() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://hbr.org/a"})),
        )
        .await;
        let (_, draft) = send(&router, Method::POST, "/api/v1/drafts", None).await;
        let id = draft["id"].as_str().unwrap().to_string();

        let (status, text) =
            send(&router, Method::GET, &format!("/api/v1/drafts/{id}/text"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(text, draft["content"]);

        let request = Request::builder()
            .uri(format!("/api/v1/drafts/{id}/export"))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()["content-disposition"].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"linkedin-draft-"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.starts_with("LinkedIn Draft - "));
        assert!(body.ends_with("\n\nSource: https://hbr.org/a"));

        let (status, _) = send(
            &router,
            Method::GET,
            &format!("/api/v1/favorites/{id}/export"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, notes) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        let notes = messages(&notes);
        assert!(notes.contains(&"Draft copied to clipboard!"));
        assert!(notes.contains(&"Draft exported successfully!"));
    }

    #[tokio::test]
    async fn test_favorite_export_file_name() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://hbr.org/a"})),
        )
        .await;
        let (_, favorite) = send(&router, Method::POST, "/api/v1/favorites", None).await;
        let id = favorite["id"].as_str().unwrap();

        let request = Request::builder()
            .uri(format!("/api/v1/favorites/{id}/export"))
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        let disposition = response.headers()["content-disposition"].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"linkedin-favorite-"));
    }

    #[tokio::test]
    async fn test_saving_without_post_is_not_found() {
        let (_dir, router) = configured();
        let (status, _) = send(&router, Method::POST, "/api/v1/favorites", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_export_is_text_attachment() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://example.com/a"})),
        )
        .await;

        let request = Request::builder()
            .uri("/api/v1/posts/current/export")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response.headers()["content-disposition"].to_str().unwrap();
        assert!(disposition.starts_with("attachment; filename=\"linkedin-post-"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("LinkedIn Post - Generated "));
        assert!(text.ends_with("\n\nSource: https://example.com/a"));
    }

    #[tokio::test]
    async fn test_knowledge_base_crud() {
        let (_dir, router) = app(None);
        let (status, item) = send(
            &router,
            Method::POST,
            "/api/v1/knowledge-base",
            Some(json!({
                "url": "https://hbr.org/teams",
                "title": "Remote Teams",
                "category": "Leadership",
                "tags": ["remote"]
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = item["id"].as_str().unwrap().to_string();

        let (_, found) = send(&router, Method::GET, "/api/v1/knowledge-base?q=remote", None).await;
        assert_eq!(found.as_array().unwrap().len(), 1);

        let (_, updated) = send(
            &router,
            Method::PATCH,
            &format!("/api/v1/knowledge-base/{id}"),
            Some(json!({"description": "Async habits"})),
        )
        .await;
        assert_eq!(updated["description"], "Async habits");
        assert_eq!(updated["title"], "Remote Teams");

        let (_, categories) =
            send(&router, Method::GET, "/api/v1/knowledge-base/categories", None).await;
        assert_eq!(categories, json!(["Leadership"]));

        let (status, _) = send(
            &router,
            Method::DELETE,
            &format!("/api/v1/knowledge-base/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, notes) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(
            messages(&notes),
            vec![
                "Link added to knowledge base!",
                "Link updated successfully!",
                "Link deleted successfully!",
            ]
        );
    }

    #[tokio::test]
    async fn test_knowledge_base_patch_null_clears_field() {
        let (_dir, router) = app(None);
        let (_, item) = send(
            &router,
            Method::POST,
            "/api/v1/knowledge-base",
            Some(json!({
                "url": "https://hbr.org/teams",
                "title": "Remote Teams",
                "description": "Async habits",
                "category": "Leadership"
            })),
        )
        .await;
        let id = item["id"].as_str().unwrap();

        let (status, updated) = send(
            &router,
            Method::PATCH,
            &format!("/api/v1/knowledge-base/{id}"),
            Some(json!({"description": null})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["description"], Value::Null);
        assert_eq!(updated["category"], "Leadership");
    }

    #[tokio::test]
    async fn test_knowledge_base_missing_title_message() {
        let (_dir, router) = app(None);
        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/knowledge-base",
            Some(json!({"url": "https://hbr.org/teams", "title": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Please provide both URL and title");

        let (_, notes) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(notes[0]["type"], "error");
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let (_dir, router) = app(None);
        let (_, theme) = send(&router, Method::POST, "/api/v1/preferences/theme/toggle", None).await;
        assert_eq!(theme["dark_mode"], true);
        let (_, theme) = send(&router, Method::GET, "/api/v1/preferences/theme", None).await;
        assert_eq!(theme["dark_mode"], true);
    }

    #[tokio::test]
    async fn test_notifications_follow_actions() {
        let (_dir, router) = configured();
        send(
            &router,
            Method::POST,
            "/api/v1/posts/generate",
            Some(json!({"url": "https://hbr.org/a"})),
        )
        .await;

        let (_, notes) = send(&router, Method::GET, "/api/v1/notifications", None).await;
        assert_eq!(notes[0]["message"], "LinkedIn post generated successfully!");
        assert_eq!(notes[0]["type"], "success");
    }
}
