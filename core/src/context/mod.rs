mod background_tasks;
mod config;
mod error;

pub use background_tasks::BackgroundTasks;
pub use config::{
    AppConfig, AppConfigExt, DEFAULT_STORAGE_KEY, DEFAULT_TARGET, LaunchConfig, SignupConfig,
};
pub use error::ConfigError;
