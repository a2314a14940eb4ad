//! Errors returned while locating, reading, validating or writing the board
//! configuration.

use std::{io, path::PathBuf};

/// Why a configuration could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file or its directory could not be read or written.
    #[error("cannot access {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The config file is not JSON5 describing a board config.
    #[error("{path} is not a valid dragboard config: {source}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json5::Error,
    },

    /// The config could not be encoded for writing.
    #[error("cannot encode config: {0}")]
    Encode(#[from] serde_json::Error),

    /// The form rules leave no valid people count.
    #[error("invalid form rules: {reason}")]
    InvalidFormRules {
        /// What is wrong with the rules.
        reason: String,
    },

    /// The log level is not one `tracing` understands.
    #[error("invalid log level {0:?}: expected one of trace, debug, info, warn, error, off")]
    InvalidLogLevel(String),

    /// The platform has no directory of the named kind (`config`, `cache`).
    #[error("no {0} directory on this system")]
    NoDirectory(&'static str),
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
