//! Blocking alert overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// Text shown when the form is submitted with invalid values.
pub const INVALID_INPUT_ALERT: &str = "Invalid input, please try again!";

/// Hint shown under the alert text.
const DISMISS_HINT: &str = "Press any key to continue";

/// Height of the alert: borders, message, blank line, hint.
const ALERT_HEIGHT: u16 = 5;

/// Renders a centered alert box on top of the existing content.
///
/// # Examples
///
/// ```
/// use dragboard_tui::widgets::{INVALID_INPUT_ALERT, render_alert};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_alert(INVALID_INPUT_ALERT, area, &mut buf);
/// ```
pub fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
    let text_width = message.chars().count().max(DISMISS_HINT.len());
    let width = u16::try_from(text_width + 4).unwrap_or(u16::MAX);
    let popup_area = centered_rect(width, ALERT_HEIGHT, area);

    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            DISMISS_HINT,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .render(popup_area, buf);
}
