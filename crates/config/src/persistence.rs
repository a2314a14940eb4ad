//! Where dragboard keeps its files, and how the config file is read and written.
//!
//! [`Locations`] holds the three base directories the board cares about:
//! the working directory (project-local config), the user config directory
//! and the user cache directory (log file). Everything else is a path under
//! one of them:
//!
//! | File | Path |
//! |------|------|
//! | local config | `./dragboard.json5`, then `./dragboard.json` |
//! | user config | `<config_dir>/dragboard/config.json5`, then `config.json` |
//! | log | `<cache_dir>/dragboard/dragboard.log` |
//!
//! The config file is read as JSON5, which also accepts plain JSON, and is
//! validated before it is handed out. It is written back as pretty JSON
//! since `serde_json5` cannot serialize.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Config,
    error::{ConfigError, Result},
};

const LOCAL_CONFIG_NAMES: [&str; 2] = ["dragboard.json5", "dragboard.json"];
const USER_CONFIG_NAMES: [&str; 2] = ["config.json5", "config.json"];
const APP_DIR: &str = "dragboard";
const LOG_FILE_NAME: &str = "dragboard.log";

/// Base directories used to resolve dragboard's files.
///
/// Missing directories (no home, for instance) are `None`; lookups then
/// skip them or fail with [`ConfigError::NoDirectory`].
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dragboard_config::persistence::Locations;
///
/// let locations = Locations {
///     working_dir: Some("/work".into()),
///     config_dir: Some("/home/me/.config".into()),
///     cache_dir: None,
/// };
/// assert_eq!(
///     locations.user_config_path().unwrap(),
///     Path::new("/home/me/.config/dragboard/config.json5")
/// );
/// assert!(locations.log_path().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    /// Directory searched for a project-local config file.
    pub working_dir: Option<PathBuf>,
    /// Platform config directory, e.g. `~/.config`.
    pub config_dir: Option<PathBuf>,
    /// Platform cache directory, e.g. `~/.cache`.
    pub cache_dir: Option<PathBuf>,
}

impl Locations {
    /// Resolves the locations of the current process and user.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            working_dir: std::env::current_dir().ok(),
            config_dir: dirs::config_dir(),
            cache_dir: dirs::cache_dir(),
        }
    }

    /// Returns every config file candidate, highest priority first.
    #[must_use]
    pub fn config_candidates(&self) -> Vec<PathBuf> {
        let local = self
            .working_dir
            .iter()
            .flat_map(|dir| LOCAL_CONFIG_NAMES.map(|name| dir.join(name)));
        let user = self
            .config_dir
            .iter()
            .flat_map(|dir| USER_CONFIG_NAMES.map(|name| dir.join(APP_DIR).join(name)));
        local.chain(user).collect()
    }

    /// Returns the first config file candidate that exists.
    #[must_use]
    pub fn find_config(&self) -> Option<PathBuf> {
        self.config_candidates().into_iter().find(|path| path.is_file())
    }

    /// Returns where `--write-default-config` puts the config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDirectory`] if there is no config directory.
    pub fn user_config_path(&self) -> Result<PathBuf> {
        self.config_dir
            .as_ref()
            .map(|dir| dir.join(APP_DIR).join(USER_CONFIG_NAMES[0]))
            .ok_or(ConfigError::NoDirectory("config"))
    }

    /// Returns the default log file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDirectory`] if there is no cache directory.
    pub fn log_path(&self) -> Result<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join(APP_DIR).join(LOG_FILE_NAME))
            .ok_or(ConfigError::NoDirectory("cache"))
    }
}

/// Reads, parses and validates the config file at `path`.
///
/// Keys left out of the file take their defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// [`ConfigError::Parse`] if it is not valid JSON5 for a [`Config`], and
/// the validation error if its form rules or log level are rejected.
pub fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: Config = serde_json5::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}

/// Writes `config` to `path` as pretty JSON, creating missing directories.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the directory or file cannot be written.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let mut text = serde_json::to_string_pretty(config)?;
    text.push('\n');
    fs::write(path, text).map_err(io_error)
}
