use launchpad_core::context::{AppConfig, AppConfigExt, BackgroundTasks};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the CLI application.
/// This is a lightweight container - logic lives in the core types.
#[derive(Clone)]
pub struct CliContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
        }
    }

    /// Stop everything before the process exits.
    pub async fn shutdown(&self) {
        self.tasks.lock().await.abort_all();
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}
