use std::sync::Arc;

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::generation::session::PostSession;
use crate::notifications::NotificationCenter;
use crate::storage::JsonStore;
use crate::workflow_client::ContentGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    /// `None` when the workflow endpoint or token is not configured.
    pub generator: Option<Arc<dyn ContentGenerator>>,
    pub session: Arc<Mutex<PostSession>>,
    pub notifications: Arc<NotificationCenter>,
}

impl AppState {
    pub fn new(store: JsonStore, generator: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self {
            store: Arc::new(store),
            generator,
            session: Arc::new(Mutex::new(PostSession::default())),
            notifications: Arc::new(NotificationCenter::new()),
        }
    }

    /// The configured generator, or a configuration error.
    pub fn generator(&self) -> Result<Arc<dyn ContentGenerator>, AppError> {
        self.generator.clone().ok_or(AppError::Configuration)
    }

    /// Runs a store operation on the blocking pool.
    ///
    /// Store calls do file I/O under a std mutex and must stay off the async executor.
    pub async fn with_store<F, T, E>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&JsonStore) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Into<AppError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("store task failed: {e}")))?
            .map_err(Into::into)
    }
}
