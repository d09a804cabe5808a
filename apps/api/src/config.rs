use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_SESSION_ID: &str = "user_1";
const DEFAULT_DATA_DIR: &str = "./data";

/// Application configuration loaded from environment variables.
///
/// The workflow endpoint and token are optional at startup: the service still
/// serves drafts, favorites and the knowledge base without them, and generation
/// requests report a configuration error instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub workflow_url: Option<String>,
    pub workflow_token: Option<String>,
    pub workflow_session_id: String,
    pub data_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            workflow_url: optional_env("WORKFLOW_URL"),
            workflow_token: optional_env("WORKFLOW_TOKEN"),
            workflow_session_id: optional_env("WORKFLOW_SESSION_ID")
                .unwrap_or_else(|| DEFAULT_SESSION_ID.to_string()),
            data_dir: optional_env("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the endpoint and token only when both are present.
    pub fn workflow_credentials(&self) -> Option<(&str, &str)> {
        match (self.workflow_url.as_deref(), self.workflow_token.as_deref()) {
            (Some(url), Some(token)) => Some((url, token)),
            _ => None,
        }
    }
}

/// Reads a variable, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
