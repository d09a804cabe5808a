//! Workflow client: the single point of entry for the external generation workflow.
//!
//! No other module calls the workflow endpoint directly. Handlers and the
//! generation pipeline depend on the `ContentGenerator` trait so tests can swap
//! in a stub.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod extract;
pub mod prompts;

const OUTPUT_TYPE: &str = "chat";
const INPUT_TYPE: &str = "chat";

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Connection failed: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("The generation workflow timed out (HTTP 504). The article may be too long or the service is busy; please try again.")]
    GatewayTimeout,

    #[error("Invalid workflow response: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("No content generated. Please check the workflow response format.")]
    EmptyContent,
}

/// Anything that can turn a prompt (or article URL) into generated text.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, input: &str) -> Result<String, WorkflowError>;
}

#[derive(Debug, Serialize)]
struct WorkflowRequest<'a> {
    input_value: &'a str,
    output_type: &'a str,
    input_type: &'a str,
    session_id: &'a str,
}

/// HTTP client for the fixed generation workflow endpoint.
#[derive(Clone)]
pub struct WorkflowClient {
    client: Client,
    endpoint: String,
    token: String,
    session_id: String,
}

impl WorkflowClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Result<Self, WorkflowError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: endpoint.into(),
            token: token.into(),
            session_id: session_id.into(),
        })
    }

    /// Posts one request and returns the raw JSON body.
    /// There is no retry: a failed call is surfaced and the user retries manually.
    async fn run(&self, input: &str) -> Result<serde_json::Value, WorkflowError> {
        let request_body = WorkflowRequest {
            input_value: input,
            output_type: OUTPUT_TYPE,
            input_type: INPUT_TYPE,
            session_id: &self.session_id,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header("accept", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 504 {
            warn!("Workflow endpoint timed out (504)");
            return Err(WorkflowError::GatewayTimeout);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Workflow endpoint returned {}: {}", status, body);
            let message = if body.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body
            };
            return Err(WorkflowError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(WorkflowError::InvalidResponse)
    }
}

#[async_trait]
impl ContentGenerator for WorkflowClient {
    async fn generate(&self, input: &str) -> Result<String, WorkflowError> {
        let body = self.run(input).await?;

        match extract::extract_text(&body) {
            Some(text) => {
                debug!("Workflow call succeeded: {} chars", text.chars().count());
                Ok(text.to_string())
            }
            None => {
                debug!("Unexpected workflow response structure: {body}");
                Err(WorkflowError::EmptyContent)
            }
        }
    }
}
