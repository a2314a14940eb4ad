//! Shared protocol types for the dragboard application.
//!
//! This crate defines the core types used across all dragboard components:
//! projects and their statuses, the project store, field validation, and
//! the messages the terminal UI dispatches.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`project`]: Project identifiers, statuses, and the `Project` struct
//! - [`store`]: The `ProjectStore` state container and its listeners
//! - [`validation`]: Field descriptors and the `validate` function
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Creating and moving projects:
//!
//! ```
//! use dragboard_protocol::{ProjectStatus, ProjectStore, filter_by_status};
//!
//! let store = ProjectStore::shared();
//!
//! let id = store.borrow_mut().add_project("Build shed", "Weekend project", 3);
//! store.borrow_mut().move_project(id, ProjectStatus::Finished);
//!
//! let finished = filter_by_status(store.borrow().projects(), ProjectStatus::Finished);
//! assert_eq!(finished.len(), 1);
//! ```

pub mod error;
pub mod message;
pub mod project;
pub mod store;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use project::{Project, ProjectId, ProjectStatus, parse_project_id};
pub use store::{Listener, ProjectStore, SharedStore, filter_by_status};
pub use validation::{FieldValue, Validatable, validate};
