mod config;
mod errors;
mod generation;
mod knowledge_base;
mod models;
mod notifications;
mod routes;
mod state;
mod stats;
mod storage;
mod tips;
mod workflow_client;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::JsonStore;
use crate::workflow_client::{ContentGenerator, WorkflowClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Linkpost API v{}", env!("CARGO_PKG_VERSION"));

    let store = JsonStore::open(&config.data_dir)?;

    let generator: Option<Arc<dyn ContentGenerator>> = match config.workflow_credentials() {
        Some((endpoint, token)) => {
            let client = WorkflowClient::new(endpoint, token, config.workflow_session_id.clone())?;
            info!("Workflow client initialized ({endpoint})");
            Some(Arc::new(client))
        }
        None => {
            warn!("WORKFLOW_URL or WORKFLOW_TOKEN not set; generation is disabled");
            None
        }
    };

    let state = AppState::new(store, generator);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
