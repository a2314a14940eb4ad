//! Logging configuration.
//!
//! The terminal belongs to the UI, so log output always goes to a file.
//! The filter comes from the `DRAGBOARD_LOG` environment variable when set,
//! otherwise from the configured level.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "DRAGBOARD_LOG";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in the `level` field.
const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Where and how much to log.
///
/// # Examples
///
/// ```
/// use dragboard_config::LoggingConfig;
///
/// let logging = LoggingConfig::default();
/// assert_eq!(logging.level, "info");
/// assert!(logging.file.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level to record.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file location. Defaults to the user cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Validates the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a known `tracing` level.
    pub fn validate(&self) -> Result<()> {
        if LEVELS.contains(&self.level.to_ascii_lowercase().as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }

    /// Returns the filter directive to install, preferring the environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::LoggingConfig;
    ///
    /// let logging = LoggingConfig { level: "debug".to_string(), file: None };
    /// assert_eq!(logging.filter_directive_from(None), "debug");
    /// assert_eq!(logging.filter_directive_from(Some("warn".to_string())), "warn");
    /// ```
    #[must_use]
    pub fn filter_directive_from(&self, env: Option<String>) -> String {
        env.filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| self.level.to_ascii_lowercase())
    }

    /// Returns the filter directive, reading [`LOG_ENV_VAR`].
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.filter_directive_from(std::env::var(LOG_ENV_VAR).ok())
    }

    /// Returns the log file path, falling back to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no file is configured and the cache directory
    /// cannot be determined.
    pub fn resolve_file(&self) -> Result<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => crate::persistence::Locations::from_env().log_path(),
        }
    }
}
