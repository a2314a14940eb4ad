//! Project card rendering widget.

use dragboard_protocol::Project;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// How a card is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Not selected.
    #[default]
    Normal,
    /// Selected in the focused list.
    Selected,
    /// Picked up by an ongoing drag.
    Lifted,
}

impl CardStyle {
    /// Returns the border color for this style.
    #[must_use]
    pub const fn border_color(self) -> Color {
        match self {
            Self::Normal => Color::DarkGray,
            Self::Selected => Color::Cyan,
            Self::Lifted => Color::Yellow,
        }
    }
}

/// Renders a project card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌────────────────────┐
/// │Build shed          │
/// │3 persons assigned  │
/// │Weekend project     │
/// └────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use dragboard_protocol::Project;
/// use dragboard_tui::widgets::{CardStyle, render_project_card};
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let project = Project::new("Build shed", "Weekend project", 3);
/// let area = Rect::new(0, 0, 24, 5);
/// let mut buf = Buffer::empty(area);
///
/// render_project_card(&project, CardStyle::Normal, area, &mut buf);
/// ```
pub fn render_project_card(project: &Project, style: CardStyle, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let title_style = match style {
        CardStyle::Normal => Style::default().fg(Color::White),
        CardStyle::Selected | CardStyle::Lifted => Style::default()
            .fg(style.border_color())
            .add_modifier(Modifier::BOLD),
    };
    let people_style = Style::default().fg(Color::Green);
    let desc_style = if style == CardStyle::Normal {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let content = vec![
        Line::from(Span::styled(truncate_string(&project.title, inner_width), title_style)),
        Line::from(Span::styled(
            truncate_string(&project.assigned_label(), inner_width),
            people_style,
        )),
        Line::from(Span::styled(
            truncate_string(&project.description, inner_width),
            desc_style,
        )),
    ];

    let border_type = if style == CardStyle::Lifted {
        BorderType::Double
    } else {
        BorderType::Plain
    };

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(style.border_color())),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }

    #[test]
    fn long_description_is_truncated() {
        let project = Project::new("Shed", "A description far too long for the card", 2);
        let area = Rect::new(0, 0, 16, 5);
        let mut buf = Buffer::empty(area);

        render_project_card(&project, CardStyle::Normal, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("A descripti..."));
        assert!(content.contains("2 persons"));
    }

    #[test]
    fn lifted_card_uses_double_border() {
        let project = Project::new("Shed", "Weekend project", 2);
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        render_project_card(&project, CardStyle::Lifted, area, &mut buf);

        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some("╔"));
    }

    #[test]
    fn render_handles_small_area() {
        let project = Project::new("Shed", "Weekend project", 2);
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);

        // Should not panic with tiny area
        render_project_card(&project, CardStyle::Selected, area, &mut buf);
    }
}
