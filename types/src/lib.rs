//! Shared configuration types for launchpad
//!
//! This crate contains serializable configuration types that are shared between
//! the countdown/signup core (launchpad-core) and the interactive CLI.

use serde::{Deserialize, Serialize};

/// Launch moment used when no config file exists (7:00 PM IST).
pub const DEFAULT_TARGET: &str = "2025-12-21T19:00:00+05:30";

/// Storage key the subscriber list lives under.
pub const DEFAULT_STORAGE_KEY: &str = "guestogram_emails";

// ─────────────────────────────────────────────────────────────────────────────
// Launch (countdown) Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Target instant as `YYYY-MM-DDTHH:mm:ss±HH:mm`
    #[serde(default = "default_target")]
    pub target: String,
    /// Milliseconds between ticks
    #[serde(default = "default_cadence_ms")]
    pub cadence_ms: u64,
    /// Title shown while the countdown is running
    #[serde(default = "default_counting_title")]
    pub counting_title: String,
    /// Title shown once the target has been reached
    #[serde(default = "default_launched_title")]
    pub launched_title: String,
}

fn default_target() -> String {
    DEFAULT_TARGET.to_string()
}

fn default_cadence_ms() -> u64 {
    1000
}

fn default_counting_title() -> String {
    "Launching In".to_string()
}

fn default_launched_title() -> String {
    "We're Live!".to_string()
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            cadence_ms: default_cadence_ms(),
            counting_title: default_counting_title(),
            launched_title: default_launched_title(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Signup (email capture) Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupConfig {
    /// Local key-value store file. None = platform config dir.
    #[serde(default)]
    pub storage_path: Option<String>,
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Artificial delay before a simulated submission resolves
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,
    /// Chance (0.0 - 1.0) that a simulated submission succeeds
    #[serde(default = "default_success_rate")]
    pub success_rate: f64,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_submit_delay_ms() -> u64 {
    1500
}

fn default_success_rate() -> f64 {
    0.9
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            storage_path: None,
            storage_key: default_storage_key(),
            submit_delay_ms: default_submit_delay_ms(),
            success_rate: default_success_rate(),
        }
    }
}

impl SignupConfig {
    /// Success rate clamped into a valid probability. NaN counts as never.
    pub fn clamped_success_rate(&self) -> f64 {
        if self.success_rate.is_nan() {
            0.0
        } else {
            self.success_rate.clamp(0.0, 1.0)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub launch: LaunchConfig,
    #[serde(default)]
    pub signup: SignupConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.launch.target, DEFAULT_TARGET);
        assert_eq!(config.launch.cadence_ms, 1000);
        assert_eq!(config.signup.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [launch]
            target = "2030-01-01T00:00:00+00:00"
            "#,
        )
        .unwrap();
        assert_eq!(config.launch.target, "2030-01-01T00:00:00+00:00");
        assert_eq!(config.launch.launched_title, "We're Live!");
        assert_eq!(config.signup.submit_delay_ms, 1500);
    }

    #[test]
    fn success_rate_is_clamped() {
        let mut signup = SignupConfig::default();
        signup.success_rate = 1.7;
        assert_eq!(signup.clamped_success_rate(), 1.0);
        signup.success_rate = -0.2;
        assert_eq!(signup.clamped_success_rate(), 0.0);
        signup.success_rate = f64::NAN;
        assert_eq!(signup.clamped_success_rate(), 0.0);
    }
}
