//! dragboard - A terminal project board.
//!
//! This is the main binary that loads the configuration, sets up logging
//! and launches the TUI application.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dragboard_config::{Config, persistence::Locations};
use dragboard_protocol::ProjectStore;
use dragboard_tui::{App, terminal};
use tracing::info;

#[derive(Parser)]
#[command(name = "dragboard", version, about = "A terminal project board with drag-and-drop status columns")]
struct Cli {
    /// Configuration file to use instead of the default locations
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write the default configuration to the user config directory and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.write_default_config {
        let path = Locations::from_env().user_config_path()?;
        Config::default()
            .save_to(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().await.context("failed to load config")?,
    };

    let log_path = match cli.log_file {
        Some(path) => path,
        None => config.logging.resolve_file()?,
    };
    logging::init(&config.logging, &log_path)?;
    info!(log = %log_path.display(), "dragboard starting");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(ProjectStore::shared(), &config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
