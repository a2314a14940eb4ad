//! New-project form rendering widget.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Width reserved for field labels.
const LABEL_WIDTH: usize = 13;

/// Width of the focus marker column.
const MARKER_WIDTH: usize = 1;

const ELLIPSIS: char = '…';

/// Fits `value` into `room` columns.
///
/// A focused value keeps its end (and leaves a column for the cursor), so
/// typing scrolls it to the left. Other values keep their start.
fn visible_value(value: &str, room: usize, focused: bool) -> Cow<'_, str> {
    let room = if focused { room.saturating_sub(1) } else { room };
    let len = value.chars().count();
    if len <= room {
        return Cow::Borrowed(value);
    }

    let keep = room.saturating_sub(1);
    let clipped: String = if focused {
        std::iter::once(ELLIPSIS)
            .chain(value.chars().skip(len - keep))
            .collect()
    } else {
        value.chars().take(keep).chain(std::iter::once(ELLIPSIS)).collect()
    };
    Cow::Owned(clipped)
}

/// One row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLine<'a> {
    /// Field label.
    pub label: &'a str,
    /// Current text.
    pub value: &'a str,
    /// Whether the cursor is in this field.
    pub focused: bool,
}

/// Renders the form: one row per field, the focused one with a cursor.
///
/// # Layout
///
/// ```text
/// ╭ New Project ─────────────────────────╮
/// │ Title        Build shed_             │
/// │ Description  Weekend project         │
/// │ People       3                       │
/// ╰─────────────────── Enter: add project╯
/// ```
pub fn render_form(lines: &[FormLine<'_>], active: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if active { Color::Cyan } else { Color::DarkGray };
    let label_style = Style::default().fg(Color::Yellow);
    let value_style = Style::default().fg(Color::White);
    let cursor_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::SLOW_BLINK);

    let inner_width = usize::from(area.width.saturating_sub(2));
    let room = inner_width.saturating_sub(MARKER_WIDTH + LABEL_WIDTH);

    let rows: Vec<Line<'_>> = lines
        .iter()
        .map(|line| {
            let marker = if line.focused { "›" } else { " " };
            let mut spans = vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:<LABEL_WIDTH$}", line.label), label_style),
                Span::styled(visible_value(line.value, room, line.focused), value_style),
            ];
            if line.focused {
                spans.push(Span::styled("_", cursor_style));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " New Project ",
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(
            Line::from(Span::styled(
                " Enter: add project ",
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    Paragraph::new(rows).block(block).render(area, buf);
}
