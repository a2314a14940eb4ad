//! Test helpers shared by the rendering tests.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Converts a [`Buffer`] to one line of text per row.
///
/// Trailing spaces are trimmed from each row so snapshots stay readable.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        for x in buf.area.left()..buf.area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Creates a terminal over an in-memory backend of the given size.
pub(crate) fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("test backend never fails")
}

/// Returns an area of the given size at the origin.
#[must_use]
pub(crate) fn area(width: u16, height: u16) -> Rect {
    Rect::new(0, 0, width, height)
}
