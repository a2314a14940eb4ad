//! Drag-and-drop plumbing.
//!
//! A drag carries its payload in a [`DataTransfer`], keyed by media type,
//! from the drag source (a project card) to the drop target (a project
//! list). [`DragSession`] tracks one drag from pick-up to release.

use dragboard_protocol::{ProjectId, ProjectStatus};

/// Media type of the project id payload.
pub const TEXT_PLAIN: &str = "text/plain";

/// Operations a drag source allows on drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    /// Nothing set yet.
    #[default]
    None,
    /// The dragged item moves to the target.
    Move,
}

/// Payload carried by a drag, as an ordered map of media type to data.
///
/// # Examples
///
/// ```
/// use dragboard_tui::dnd::{DataTransfer, TEXT_PLAIN};
///
/// let mut transfer = DataTransfer::new();
/// transfer.set_data(TEXT_PLAIN, "42");
/// assert_eq!(transfer.get_data(TEXT_PLAIN), Some("42"));
/// assert_eq!(transfer.types().next(), Some(TEXT_PLAIN));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataTransfer {
    entries: Vec<(String, String)>,
    /// Effect allowed by the drag source.
    pub effect_allowed: DropEffect,
}

impl DataTransfer {
    /// Creates an empty transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `format`, replacing any previous value.
    pub fn set_data(&mut self, format: &str, data: impl Into<String>) {
        let data = data.into();
        match self.entries.iter_mut().find(|(key, _)| key == format) {
            Some((_, value)) => *value = data,
            None => self.entries.push((format.to_string(), data)),
        }
    }

    /// Returns the data stored under `format`.
    #[must_use]
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == format)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the media types in the order they were first set.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Removes all data.
    pub fn clear_data(&mut self) {
        self.entries.clear();
    }
}

/// A drag in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    /// The project being dragged.
    pub source: ProjectId,
    /// The list the drag started from.
    pub from: ProjectStatus,
    /// The payload handed to drop targets.
    pub transfer: DataTransfer,
    /// The list currently under the drag, if it accepted the drag.
    pub over: Option<ProjectStatus>,
}

impl DragSession {
    /// Starts a session for a card picked up from `from`.
    #[must_use]
    pub fn new(source: ProjectId, from: ProjectStatus, transfer: DataTransfer) -> Self {
        Self {
            source,
            from,
            transfer,
            over: None,
        }
    }
}
