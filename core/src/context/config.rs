//! Application configuration
//!
//! This module re-exports shared types from launchpad-types and provides
//! persistence for AppConfig.

pub use launchpad_types::{AppConfig, DEFAULT_STORAGE_KEY, DEFAULT_TARGET, LaunchConfig, SignupConfig};

use super::ConfigError;

const APP_NAME: &str = "launchpad";
const CONFIG_NAME: &str = "config";

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn path() -> Option<std::path::PathBuf>;
}

impl AppConfigExt for AppConfig {
    /// Load from disk, falling back to defaults if the file is unreadable
    fn load() -> Self {
        Self::try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            Self::default()
        })
    }

    fn try_load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn path() -> Option<std::path::PathBuf> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).ok()
    }
}
