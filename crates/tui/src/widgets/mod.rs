//! Widget components for the dragboard TUI.
//!
//! This module provides reusable rendering functions for the board UI,
//! organized into focused submodules for each visual component.
//!
//! # Overview
//!
//! Each widget is a pure function that renders its inputs to a buffer.
//! Views decide what to show; widgets decide how it looks.
//!
//! # Modules
//!
//! - [`card`]: Renders a project card
//! - [`column`]: Renders the frame of a list column
//! - [`form`]: Renders the new-project form
//! - [`alert`]: Renders the blocking alert
//! - [`help`]: Renders the keybinding overlay
//!
//! # Example
//!
//! ```
//! use dragboard_protocol::Project;
//! use dragboard_tui::widgets::{CardStyle, render_column_frame, render_project_card};
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let area = Rect::new(0, 0, 30, 12);
//! let mut buf = Buffer::empty(area);
//!
//! render_column_frame("ACTIVE PROJECTS", 1, true, false, area, &mut buf);
//! let project = Project::new("Example", "A sample project", 2);
//! render_project_card(&project, CardStyle::Selected, Rect::new(1, 1, 28, 5), &mut buf);
//! ```

pub mod alert;
pub mod card;
pub mod column;
pub mod form;
pub mod help;

use ratatui::layout::Rect;

// Re-export primary rendering functions for convenience
pub use alert::{INVALID_INPUT_ALERT, render_alert};
pub use card::{CardStyle, render_project_card};
pub use column::{render_column_frame, render_empty_placeholder};
pub use form::{FormLine, render_form};
pub use help::render_help_overlay;

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}
