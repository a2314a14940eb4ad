//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing both go through [`Regions::compute`] so a
//! click always lands on what was drawn.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the new-project form: three fields plus borders.
pub const FORM_HEIGHT: u16 = 5;

/// Height of each project card in rows.
///
/// This includes the border (2 rows) and content (title, people, description).
pub const ITEM_CARD_HEIGHT: u16 = 5;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The form
/// needs its full band and each list must fit at least one card.
pub const MIN_HEIGHT: u16 = FORM_HEIGHT + ITEM_CARD_HEIGHT + 2;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// Two list columns of twenty characters each.
pub const MIN_WIDTH: u16 = 40;

/// Screen regions of one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    /// Header bar, hidden in compact mode.
    pub header: Option<Rect>,
    /// The new-project form band.
    pub form: Rect,
    /// One column per list, left to right.
    pub columns: Vec<Rect>,
}

impl Regions {
    /// Splits `area` into header, form and `column_count` list columns.
    ///
    /// Returns `None` when the area is below the minimum size.
    #[must_use]
    pub fn compute(area: Rect, column_count: usize) -> Option<Self> {
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH || column_count == 0 {
            return None;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        let header_height = if show_header { HEADER_HEIGHT } else { 0 };

        let [header, form, board] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        let count = u32::try_from(column_count).unwrap_or(u32::MAX);
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count); column_count])
            .split(board)
            .to_vec();

        Some(Self {
            header: show_header.then_some(header),
            form,
            columns,
        })
    }
}

/// Returns the area inside a bordered block.
#[must_use]
pub fn inner(area: Rect) -> Rect {
    area.inner(Margin::new(1, 1))
}

/// Returns how many cards fit in a list of the given inner height.
#[must_use]
pub fn visible_cards(inner_height: u16) -> usize {
    usize::from((inner_height / ITEM_CARD_HEIGHT).max(1))
}

/// Calculates the scroll offset that keeps the selected card visible.
#[must_use]
pub fn scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };

    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    if selected < visible / 2 {
        0
    } else {
        (selected.saturating_sub(visible / 2)).min(max_offset)
    }
}

/// Returns the rectangle of the card in visible slot `slot`.
#[must_use]
pub fn card_rect(inner: Rect, slot: usize) -> Rect {
    let top = u16::try_from(slot)
        .unwrap_or(u16::MAX)
        .saturating_mul(ITEM_CARD_HEIGHT);
    let y = inner.y.saturating_add(top);
    let height = ITEM_CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
    Rect { y, height, ..inner }
}

/// Returns the index of the card under `row`, if any.
#[must_use]
pub fn card_index_at(inner: Rect, row: u16, offset: usize, len: usize) -> Option<usize> {
    if row < inner.y || row >= inner.bottom() {
        return None;
    }
    let slot = usize::from((row - inner.y) / ITEM_CARD_HEIGHT);
    if slot >= visible_cards(inner.height) {
        return None;
    }
    let index = offset + slot;
    (index < len).then_some(index)
}
