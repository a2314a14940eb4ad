//! Configuration management for the dragboard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from JSON5 files with built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`form`]: Validation rules for the new-project form
//! - [`logging`]: Log level and log file location
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Environment variable `DRAGBOARD_LOG` (log filter only)
//! 2. Local config (`./dragboard.json5` or `./dragboard.json`)
//! 3. User config (`~/.config/dragboard/config.json5` or `~/.config/dragboard/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   form: {
//!     // descriptions must be longer than this many characters
//!     description_min_length: 5,
//!     // people count must be in [people_min, people_max)
//!     people_min: 1,
//!     people_max: 5,
//!   },
//!   logging: { level: "debug", file: "/tmp/dragboard.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use dragboard_config::Config;
//!
//! # async fn example() -> dragboard_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Logging at {}", config.logging.level);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use form::FormRules;
pub use logging::{LOG_ENV_VAR, LoggingConfig};
