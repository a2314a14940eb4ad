//! Application state management.
//!
//! This module defines the UI state of the board: which area has focus,
//! which card is selected, and which overlay is showing. Project data lives
//! in the store, so navigation takes the current list lengths as input.

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the new-project form.
    #[default]
    Form,
    /// Focus is on the project lists.
    Board,
}

/// The application state.
///
/// # Examples
///
/// ```
/// use dragboard_tui::{AppState, Focus};
///
/// let mut state = AppState::new();
/// assert_eq!(state.focus, Focus::Form);
///
/// state.navigate_down(&[2, 0]);
/// assert_eq!(state.selected_item, Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Current focus area.
    pub focus: Focus,
    /// Index of the currently selected list.
    pub selected_list: usize,
    /// Index of the selected card within the current list, if any.
    pub selected_item: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Text of the blocking alert, if one is showing.
    pub alert: Option<String>,
}

impl AppState {
    /// Creates a new state with focus on the form and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Shows a blocking alert.
    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    /// Dismisses the alert if one is showing.
    ///
    /// Returns `true` if an alert was dismissed.
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    /// Returns `true` if an overlay is blocking the board.
    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.alert.is_some()
    }

    /// Moves the list selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self, lens: &[usize]) {
        if lens.is_empty() {
            return;
        }
        self.selected_list = if self.selected_list > 0 {
            self.selected_list - 1
        } else {
            lens.len() - 1
        };
        self.clamp_selection(lens);
    }

    /// Moves the list selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self, lens: &[usize]) {
        if lens.is_empty() {
            return;
        }
        self.selected_list = (self.selected_list + 1) % lens.len();
        self.clamp_selection(lens);
    }

    /// Moves the card selection up, wrapping to the previous list's last card.
    pub fn navigate_up(&mut self, lens: &[usize]) {
        if lens.iter().all(|&len| len == 0) {
            self.selected_item = None;
            return;
        }

        match self.selected_item {
            Some(idx) if idx > 0 => self.selected_item = Some(idx - 1),
            Some(_) => {
                self.selected_list = self.prev_non_empty(lens);
                self.selected_item = Some(lens[self.selected_list] - 1);
            }
            None if self.current_len(lens) > 0 => {
                self.selected_item = Some(self.current_len(lens) - 1);
            }
            None => {
                self.selected_list = self.prev_non_empty(lens);
                self.selected_item = Some(lens[self.selected_list] - 1);
            }
        }
    }

    /// Moves the card selection down, wrapping to the next list's first card.
    pub fn navigate_down(&mut self, lens: &[usize]) {
        if lens.iter().all(|&len| len == 0) {
            self.selected_item = None;
            return;
        }

        let len = self.current_len(lens);
        match self.selected_item {
            Some(idx) if idx + 1 < len => self.selected_item = Some(idx + 1),
            None if len > 0 => self.selected_item = Some(0),
            _ => {
                self.selected_list = self.next_non_empty(lens);
                self.selected_item = Some(0);
            }
        }
    }

    /// Keeps the selection within bounds after the lists changed.
    pub fn clamp_selection(&mut self, lens: &[usize]) {
        if self.selected_list >= lens.len() {
            self.selected_list = 0;
        }
        let len = self.current_len(lens);
        self.selected_item = match self.selected_item {
            _ if len == 0 => None,
            Some(idx) => Some(idx.min(len - 1)),
            None => None,
        };
    }

    /// Clears the card selection.
    pub fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Selects a card directly.
    pub fn select(&mut self, list: usize, item: Option<usize>) {
        self.selected_list = list;
        self.selected_item = item;
    }

    fn current_len(&self, lens: &[usize]) -> usize {
        lens.get(self.selected_list).copied().unwrap_or(0)
    }

    fn next_non_empty(&self, lens: &[usize]) -> usize {
        (1..=lens.len())
            .map(|step| (self.selected_list + step) % lens.len())
            .find(|&idx| lens[idx] > 0)
            .unwrap_or(self.selected_list)
    }

    fn prev_non_empty(&self, lens: &[usize]) -> usize {
        (1..=lens.len())
            .map(|step| (self.selected_list + lens.len() * 2 - step) % lens.len())
            .find(|&idx| lens[idx] > 0)
            .unwrap_or(self.selected_list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_state_focuses_form() {
        let state = AppState::new();
        assert_eq!(state.focus, Focus::Form);
        assert_eq!(state.selected_list, 0);
        assert_eq!(state.selected_item, None);
        assert!(!state.overlay_visible());
    }

    #[test]
    fn horizontal_navigation_wraps() {
        let mut state = AppState::new();
        let lens = [1, 1];

        state.navigate_left(&lens);
        assert_eq!(state.selected_list, 1);
        state.navigate_right(&lens);
        assert_eq!(state.selected_list, 0);
    }

    #[test]
    fn horizontal_navigation_clamps_item() {
        let mut state = AppState::new();
        state.select(0, Some(2));

        state.navigate_right(&[3, 1]);
        assert_eq!(state.selected_item, Some(0));

        state.navigate_left(&[0, 1]);
        assert_eq!(state.selected_item, None);
    }

    #[test]
    fn down_wraps_into_next_list() {
        let mut state = AppState::new();
        let lens = [2, 1];

        state.navigate_down(&lens);
        assert_eq!((state.selected_list, state.selected_item), (0, Some(0)));
        state.navigate_down(&lens);
        assert_eq!((state.selected_list, state.selected_item), (0, Some(1)));
        state.navigate_down(&lens);
        assert_eq!((state.selected_list, state.selected_item), (1, Some(0)));
        state.navigate_down(&lens);
        assert_eq!((state.selected_list, state.selected_item), (0, Some(0)));
    }

    #[test]
    fn up_wraps_into_previous_list() {
        let mut state = AppState::new();
        let lens = [2, 3];

        state.navigate_up(&lens);
        assert_eq!((state.selected_list, state.selected_item), (0, Some(1)));
        state.navigate_up(&lens);
        state.navigate_up(&lens);
        assert_eq!((state.selected_list, state.selected_item), (1, Some(2)));
    }

    #[test]
    fn vertical_navigation_skips_empty_lists() {
        let mut state = AppState::new();
        let lens = [0, 2];

        state.navigate_down(&lens);
        assert_eq!((state.selected_list, state.selected_item), (1, Some(0)));

        state.navigate_up(&lens);
        assert_eq!((state.selected_list, state.selected_item), (1, Some(1)));
    }

    #[test]
    fn vertical_navigation_on_empty_board() {
        let mut state = AppState::new();
        state.navigate_down(&[0, 0]);
        assert_eq!(state.selected_item, None);
        state.navigate_up(&[0, 0]);
        assert_eq!(state.selected_item, None);
    }

    #[test]
    fn alert_and_help_are_dismissable() {
        let mut state = AppState::new();
        state.show_alert("nope");
        assert!(state.overlay_visible());
        assert!(state.dismiss_alert());
        assert!(!state.dismiss_alert());

        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.dismiss_help());
    }

    fn arb_nav() -> impl Strategy<Value = u8> {
        0u8..4
    }

    proptest! {
        #[test]
        fn selection_stays_in_bounds(
            active in 0usize..5,
            finished in 0usize..5,
            moves in prop::collection::vec(arb_nav(), 0..40),
        ) {
            let lens = [active, finished];
            let mut state = AppState::new();
            for step in moves {
                match step {
                    0 => state.navigate_left(&lens),
                    1 => state.navigate_right(&lens),
                    2 => state.navigate_up(&lens),
                    _ => state.navigate_down(&lens),
                }
                prop_assert!(state.selected_list < lens.len());
                if let Some(item) = state.selected_item {
                    prop_assert!(item < lens[state.selected_list]);
                }
            }
        }
    }
}
