//! List column rendering widget.
//!
//! Draws the frame of a project list: heading with card count, and a border
//! that lights up while the list is focused or accepting a drop. Cards are
//! drawn inside by the list view itself.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Renders the frame of a list column.
///
/// # Layout
///
/// ```text
/// ╭ ACTIVE PROJECTS (2) ─────╮
/// │                          │  <- cards go here
/// ╰──────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use dragboard_tui::widgets::render_column_frame;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 30, 12);
/// let mut buf = Buffer::empty(area);
///
/// render_column_frame("ACTIVE PROJECTS", 0, true, false, area, &mut buf);
/// ```
pub fn render_column_frame(
    heading: &str,
    count: usize,
    focused: bool,
    droppable: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_color = if droppable {
        Color::Yellow
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let title_style = if focused || droppable {
        Style::default()
            .fg(border_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {heading} ({count}) "), title_style))
        .borders(Borders::ALL)
        .border_type(if droppable {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(Style::default().fg(border_color));

    block.render(area, buf);
}

/// Renders a placeholder message for empty lists.
pub fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No projects",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .alignment(Alignment::Center)
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn heading_shows_count() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_column_frame("FINISHED PROJECTS", 3, false, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("FINISHED PROJECTS (3)"));
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("╭"));
    }

    #[test]
    fn droppable_column_is_highlighted() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        render_column_frame("ACTIVE PROJECTS", 0, false, true, area, &mut buf);

        let corner = buf.cell((0, 0)).expect("cell should exist");
        assert_eq!(corner.symbol(), "┏");
        assert_eq!(corner.fg, Color::Yellow);
    }

    #[test]
    fn placeholder_text() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        render_empty_placeholder(area, &mut buf);
        assert!(buffer_to_string(&buf).contains("No projects"));
    }
}
