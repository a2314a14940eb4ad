//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the dragboard application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::FormRules;
use crate::logging::LoggingConfig;
use crate::persistence::{Locations, read_config, write_config};

/// The main configuration struct for the dragboard application.
///
/// # Examples
///
/// ```
/// use dragboard_config::{Config, FormRules, LoggingConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.form, FormRules::default());
///
/// // Create a custom config
/// let config = Config {
///     form: FormRules { people_max: 10, ..Default::default() },
///     logging: LoggingConfig::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rules applied to the new-project form.
    #[serde(default)]
    pub form: FormRules,

    /// Log level and destination.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new configuration with built-in defaults.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./dragboard.json5` or `./dragboard.json`
    /// 2. User: `~/.config/dragboard/config.json5` or `~/.config/dragboard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragboard_config::Config;
    ///
    /// # async fn example() -> dragboard_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("People must be below {}", config.form.people_max);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        Self::load_with(&Locations::from_env())
    }

    /// Loads the first config file found under `locations`, or defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read, parsed, or
    /// validated.
    pub fn load_with(locations: &Locations) -> Result<Self> {
        match locations.find_config() {
            Some(path) => read_config(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragboard_config::Config;
    ///
    /// # fn example() -> dragboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        read_config(path.as_ref())
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config(path.as_ref(), self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the form rules or the log level are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::{Config, FormRules};
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.form = FormRules { people_min: 5, people_max: 2, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.form.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
