//! File-based tracing setup.
//!
//! The board owns the terminal, so log lines go to a file instead of
//! stderr. The filter comes from `DRAGBOARD_LOG` or the configured level.

use std::{fs, path::Path, sync::Mutex};

use anyhow::Context;
use dragboard_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `path`.
///
/// Parent directories are created as needed and the file is appended to.
pub fn init(logging: &LoggingConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(logging.filter_directive())
        .context("invalid log filter directive")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}
