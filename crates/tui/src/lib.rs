//! Terminal UI for the dragboard application.
//!
//! This crate provides a Ratatui-based project board: a form for adding
//! projects and one column per project status, with cards that can be
//! dragged between columns by mouse or keyboard.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`component`]: Mounting of views into their host
//! - [`views`]: The new-project form, the list columns and their cards
//! - [`dnd`]: Drag payloads and the drag in progress
//! - [`state`]: Focus, selection and overlay state
//! - [`layout`]: Screen regions and hit-testing geometry
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use dragboard_protocol::ProjectStore;
//! use dragboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(ProjectStore::shared());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod component;
pub mod dnd;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod views;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus};
