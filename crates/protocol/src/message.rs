//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the form, the board, and drag sessions.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection (or an ongoing drag) to the left list.
    NavigateLeft,
    /// Move selection (or an ongoing drag) to the right list.
    NavigateRight,
    /// Move selection up within the current list.
    NavigateUp,
    /// Move selection down within the current list.
    NavigateDown,
    /// Pick up the selected card, or drop the card being dragged.
    Select,
    /// Escape: cancel a drag, leave the form, or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Jump to the form to enter a new project.
    NewProject,
    /// Move focus to the next form field (or between form and board).
    FocusNext,
    /// Move focus to the previous form field (or between form and board).
    FocusPrev,
    /// Type a character into the focused form field.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused form field.
    Backspace,
    /// Submit the form.
    Submit,
    /// Left mouse button pressed at coordinates (column, row).
    MouseDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Mouse moved with the left button held at coordinates (column, row).
    MouseDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left mouse button released at coordinates (column, row).
    MouseUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits the form.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::Message;
    ///
    /// assert!(Message::Input { ch: 'a' }.is_form_edit());
    /// assert!(Message::Submit.is_form_edit());
    /// assert!(!Message::Quit.is_form_edit());
    /// ```
    #[must_use]
    pub fn is_form_edit(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Backspace | Self::Submit)
    }

    /// Returns `true` if this message comes from the mouse.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown { .. } | Self::MouseDrag { .. } | Self::MouseUp { .. }
        )
    }
}
