use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::storage::StoreError;
use crate::workflow_client::WorkflowError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as a human-readable message; nothing here is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Workflow API is not configured. Please check your environment variables.")]
    Configuration,

    #[error("{action}: {source}")]
    Upstream {
        action: &'static str,
        #[source]
        source: WorkflowError,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Wraps a workflow failure with the user action that triggered it.
    pub fn upstream(action: &'static str, source: WorkflowError) -> Self {
        AppError::Upstream { action, source }
    }

    /// The message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            AppError::Configuration => self.to_string(),
            AppError::Upstream {
                source: WorkflowError::Connection(_),
                ..
            } => "Connection failed: the generation workflow could not be reached. \
                  Check your network and that the endpoint is accessible."
                .to_string(),
            AppError::Upstream { .. } => self.to_string(),
            AppError::Storage(_) => "A storage error occurred".to_string(),
            AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AppError::Configuration => (StatusCode::SERVICE_UNAVAILABLE, "CONFIGURATION_ERROR"),
            AppError::Upstream { source, .. } => {
                tracing::warn!("Workflow error: {source}");
                match source {
                    WorkflowError::Connection(_) => (StatusCode::BAD_GATEWAY, "CONNECTION_ERROR"),
                    WorkflowError::Api { .. } | WorkflowError::InvalidResponse(_) => {
                        (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
                    }
                    WorkflowError::GatewayTimeout => {
                        (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT")
                    }
                    WorkflowError::EmptyContent => (StatusCode::BAD_GATEWAY, "NO_CONTENT"),
                }
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.user_message()
            }
        }));

        (status, body).into_response()
    }
}
