pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::AppConfig;
use store::TaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// The task collection — the only stateful component.
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}

impl AppContext {
    /// Construct the context with a fresh, empty store.
    ///
    /// Built once at startup and handed to the REST server; tests build their
    /// own to get an isolated collection.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(TaskStore::new()),
            started_at: std::time::Instant::now(),
        }
    }
}
