//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `emon.toml` in the working directory (or the file named by
//! `EMON_CONFIG`). Every field has a sensible default so the file is
//! optional. Environment variables take precedence over file values.

use std::time::Duration;

use emon_domain::error::ValidationError;
use emon_domain::form::REQUIRED_FIELDS_MESSAGE;
use emon_domain::toast::{ToastKind, ToastTimings};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Toast dismissal timings.
    pub toast: ToastTimings,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Scenario replayed by the preview.
    pub preview: PreviewConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Preview playback configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Granularity at which the page is sampled, in milliseconds.
    pub step_ms: u64,
    /// Toasts to show, and optionally when to close them by hand.
    pub scenario: Vec<ScenarioEntry>,
}

/// One toast of the preview scenario.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioEntry {
    /// When to show the toast, in milliseconds from the start.
    pub at_ms: u64,
    /// Message to show.
    pub message: String,
    /// Toast kind; unknown names fall back to `info`.
    #[serde(default)]
    pub kind: ToastKind,
    /// When to click its close button, if ever.
    #[serde(default)]
    pub close_at_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("EMON_CONFIG").unwrap_or_else(|_| "emon.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EMON_AUTO_DISMISS_MS") {
            if let Ok(ms) = val.parse() {
                self.toast.auto_dismiss_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("EMON_EXIT_ANIMATION_MS") {
            if let Ok(ms) = val.parse() {
                self.toast.exit_animation_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("EMON_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.toast.validate()?;
        if self.preview.step_ms == 0 {
            return Err(ConfigError::Validation(
                "preview step must be non-zero".to_string(),
            ));
        }
        for entry in &self.preview.scenario {
            if entry.close_at_ms.is_some_and(|close| close < entry.at_ms) {
                return Err(ConfigError::Validation(format!(
                    "toast {:?} is closed before it is shown",
                    entry.message
                )));
            }
        }
        Ok(())
    }
}

impl PreviewConfig {
    /// Sampling step as a duration.
    #[must_use]
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "emon_preview=info,emon_app=debug".to_string(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            step_ms: 100,
            scenario: vec![
                ScenarioEntry {
                    at_ms: 0,
                    message: "Saved".to_string(),
                    kind: ToastKind::Success,
                    close_at_ms: Some(1500),
                },
                ScenarioEntry {
                    at_ms: 500,
                    message: REQUIRED_FIELDS_MESSAGE.to_string(),
                    kind: ToastKind::Error,
                    close_at_ms: None,
                },
            ],
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Toast timings rejected by the domain.
    #[error("invalid toast timings")]
    Toast(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
