//! Main application struct and run loop.
//!
//! This module provides the `App` struct which mounts the views, routes
//! messages to them, runs drag sessions and renders each frame.

use std::rc::Rc;

use dragboard_config::Config;
use dragboard_protocol::{Message, ProjectStatus, SharedStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info, trace, warn};

use crate::{
    AppState, Focus,
    component::{Component, Host},
    dnd::{DataTransfer, DragSession},
    event::{event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, Regions, card_index_at, inner, scroll_offset, visible_cards},
    terminal::AppTerminal,
    views::{APP_HOST, FormField, ProjectInput, ProjectList},
    widgets::{INVALID_INPUT_ALERT, render_alert, render_help_overlay},
};

/// The main application struct.
///
/// Owns the mounted views and the UI state, and provides the main event loop.
#[derive(Debug)]
pub struct App {
    store: SharedStore,
    root: Host,
    input: ProjectInput,
    lists: Vec<ProjectList>,
    state: AppState,
    drag: Option<DragSession>,
    /// Card under the last mouse press, the candidate for a pointer drag.
    press: Option<(usize, usize)>,
    /// Whether the current drag follows the pointer.
    pointer_drag: bool,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
}

impl App {
    /// Creates a new application over the given store with default rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::ProjectStore;
    /// use dragboard_tui::App;
    ///
    /// let app = App::new(ProjectStore::shared());
    /// assert_eq!(app.root().children(), ["user-input", "active-projects", "finished-projects"]);
    /// ```
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self::with_config(store, &Config::default())
    }

    /// Creates a new application over the given store and configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_config::{Config, FormRules};
    /// use dragboard_protocol::ProjectStore;
    /// use dragboard_tui::App;
    ///
    /// let config = Config {
    ///     form: FormRules { people_max: 20, ..Default::default() },
    ///     ..Default::default()
    /// };
    /// let app = App::with_config(ProjectStore::shared(), &config);
    /// assert_eq!(app.input().rules().people_max, 20);
    /// ```
    #[must_use]
    pub fn with_config(store: SharedStore, config: &Config) -> Self {
        let mut root = Host::new(APP_HOST);

        let input = ProjectInput::new(Rc::clone(&store), config.form);
        input.mount().attach_to(&mut root);

        let mut lists: Vec<ProjectList> = ProjectStatus::all()
            .into_iter()
            .map(|status| ProjectList::new(status, Rc::clone(&store)))
            .collect();
        for list in &lists {
            list.mount().attach_to(&mut root);
        }
        // Columns are laid out in host order.
        lists.sort_by_key(|list| root.position_of(list.element_id()));

        Self {
            store,
            root,
            input,
            lists,
            state: AppState::new(),
            drag: None,
            press: None,
            pointer_drag: false,
            should_quit: false,
            last_area: Rect::default(),
        }
    }

    /// Returns the shared project store.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Returns the root host the views are mounted into.
    #[must_use]
    pub fn root(&self) -> &Host {
        &self.root
    }

    /// Returns the new-project form.
    #[must_use]
    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    /// Returns the list columns in display order.
    #[must_use]
    pub fn lists(&self) -> &[ProjectList] {
        &self.lists
    }

    /// Returns the list showing `status`.
    #[must_use]
    pub fn list(&self, status: ProjectStatus) -> Option<&ProjectList> {
        self.lists.iter().find(|list| list.status() == status)
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the drag in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// While an overlay (alert or help) is showing, any key or click only
    /// dismisses it. `Quit` always works.
    pub fn update(&mut self, msg: Message) {
        trace!(?msg, "update");

        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.overlay_visible() {
            if !matches!(msg, Message::MouseDrag { .. } | Message::MouseUp { .. })
                && !self.state.dismiss_alert()
            {
                self.state.dismiss_help();
            }
            return;
        }

        match msg {
            Message::MouseDown { column, row } => self.mouse_down(column, row),
            Message::MouseDrag { column, row } => self.mouse_drag(column, row),
            Message::MouseUp { column, row } => self.mouse_up(column, row),
            msg if self.state.focus == Focus::Form => self.update_form(msg),
            msg => self.update_board(msg),
        }
    }

    fn update_form(&mut self, msg: Message) {
        match msg {
            Message::Input { ch } => self.input.input_char(ch),
            Message::Backspace => self.input.backspace(),
            Message::Submit => self.submit_form(),
            Message::NavigateDown => self.input.focus_next_wrapping(),
            Message::NavigateUp => self.input.focus_prev_wrapping(),
            Message::FocusNext => match self.input.focused().next() {
                Some(field) => self.input.focus(field),
                None => self.focus_board(),
            },
            Message::FocusPrev => match self.input.focused().prev() {
                Some(field) => self.input.focus(field),
                None => self.focus_board(),
            },
            Message::Escape => self.focus_board(),
            _ => {}
        }
    }

    fn update_board(&mut self, msg: Message) {
        if self.drag.is_some() {
            self.update_keyboard_drag(msg);
            return;
        }

        let lens = self.list_lens();
        match msg {
            Message::Escape => self.state.clear_selection(),
            Message::NavigateLeft => self.state.navigate_left(&lens),
            Message::NavigateRight => self.state.navigate_right(&lens),
            Message::NavigateUp => self.state.navigate_up(&lens),
            Message::NavigateDown => self.state.navigate_down(&lens),
            Message::Select => self.begin_keyboard_drag(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NewProject | Message::FocusNext => self.focus_form(FormField::Title),
            Message::FocusPrev => self.focus_form(FormField::People),
            _ => {}
        }
    }

    /// Handles keys while a card is being carried: left and right move the
    /// drag between lists, select drops, escape cancels.
    fn update_keyboard_drag(&mut self, msg: Message) {
        let lens = self.list_lens();
        match msg {
            Message::NavigateLeft => {
                self.state.navigate_left(&lens);
                self.drag_hover(Some(self.state.selected_list));
            }
            Message::NavigateRight => {
                self.state.navigate_right(&lens);
                self.drag_hover(Some(self.state.selected_list));
            }
            Message::Select => self.finish_drag(),
            Message::Escape => self.cancel_drag(),
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        match self.input.submit() {
            Ok(Some(id)) => {
                debug!(%id, "form submitted");
                self.state.clamp_selection(&self.list_lens());
            }
            Ok(None) => warn!("form has no submit handler"),
            Err(err) => {
                info!(%err, "rejected new project");
                self.state.show_alert(INVALID_INPUT_ALERT);
            }
        }
    }

    fn focus_form(&mut self, field: FormField) {
        self.state.focus = Focus::Form;
        self.input.focus(field);
    }

    fn focus_board(&mut self) {
        self.state.focus = Focus::Board;
        self.state.clamp_selection(&self.list_lens());
    }

    fn list_lens(&self) -> Vec<usize> {
        self.lists.iter().map(ProjectList::len).collect()
    }

    fn begin_keyboard_drag(&mut self) {
        let Some(item) = self.state.selected_item else {
            return;
        };
        let list = self.state.selected_list;
        if self.start_drag(list, item) {
            self.pointer_drag = false;
            self.drag_hover(Some(list));
        }
    }

    /// Picks up the card at `item` in list `list`.
    fn start_drag(&mut self, list: usize, item: usize) -> bool {
        let Some(source_list) = self.lists.get(list) else {
            return false;
        };
        let mut transfer = DataTransfer::new();
        let Some(source) = source_list.drag_start(item, &mut transfer) else {
            return false;
        };
        self.drag = Some(DragSession::new(source, source_list.status(), transfer));
        true
    }

    /// Moves the drag over list `target`, firing leave and over handlers.
    fn drag_hover(&mut self, target: Option<usize>) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let target_status = target.and_then(|idx| self.lists.get(idx)).map(ProjectList::status);
        if session.over.is_some() && session.over == target_status {
            return;
        }

        if let Some(current) = session.over.take()
            && let Some(list) = self.lists.iter_mut().find(|l| l.status() == current)
        {
            list.drag_leave_handler();
        }

        if let Some(list) = target.and_then(|idx| self.lists.get_mut(idx))
            && list.drag_over_handler(&session.transfer)
        {
            session.over = Some(list.status());
        }
    }

    /// Drops the carried card on the list under the drag, if any.
    fn finish_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.pointer_drag = false;

        let target = session
            .over
            .and_then(|status| self.lists.iter().position(|l| l.status() == status));
        let moved = match target {
            Some(idx) => self.lists[idx].drop_handler(&session.transfer),
            None => false,
        };
        self.end_drag(&session);

        match target {
            Some(idx) if moved => {
                info!(id = %session.source, to = %self.lists[idx].status(), "project moved");
                self.state.focus = Focus::Board;
                self.state
                    .select(idx, self.lists[idx].position_of(session.source));
            }
            _ => self.state.clamp_selection(&self.list_lens()),
        }
    }

    /// Abandons the carried card where it was.
    fn cancel_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.pointer_drag = false;
        if let Some(list) = session
            .over
            .and_then(|status| self.lists.iter_mut().find(|l| l.status() == status))
        {
            list.drag_leave_handler();
        }
        self.end_drag(&session);
        self.state.clamp_selection(&self.list_lens());
    }

    fn end_drag(&self, session: &DragSession) {
        if !self.lists.iter().any(|list| list.drag_end(session.source)) {
            debug!(id = %session.source, "dragged card is no longer shown");
        }
    }

    fn mouse_down(&mut self, column: u16, row: u16) {
        if self.drag.is_some() {
            return;
        }
        let Some(regions) = Regions::compute(self.last_area, self.lists.len()) else {
            return;
        };
        let pos = Position::new(column, row);

        if regions.form.contains(pos) {
            let field_row = row.saturating_sub(regions.form.y + 1);
            let field = FormField::from_index(usize::from(field_row))
                .unwrap_or_else(|| self.input.focused());
            self.focus_form(field);
            return;
        }

        if let Some((list, item)) = self.hit_test(&regions, pos) {
            self.state.focus = Focus::Board;
            self.state.select(list, item);
            self.press = item.map(|item| (list, item));
        }
    }

    fn mouse_drag(&mut self, column: u16, row: u16) {
        if self.drag.is_none() {
            let Some((list, item)) = self.press.take() else {
                return;
            };
            if !self.start_drag(list, item) {
                return;
            }
            self.pointer_drag = true;
        } else if !self.pointer_drag {
            return;
        }

        let target = self.column_at(Position::new(column, row));
        self.drag_hover(target);
    }

    fn mouse_up(&mut self, column: u16, row: u16) {
        self.press = None;
        if self.drag.is_none() || !self.pointer_drag {
            return;
        }
        let target = self.column_at(Position::new(column, row));
        self.drag_hover(target);
        self.finish_drag();
    }

    fn column_at(&self, pos: Position) -> Option<usize> {
        Regions::compute(self.last_area, self.lists.len())?
            .columns
            .iter()
            .position(|column| column.contains(pos))
    }

    /// Returns the list under `pos` and the card under it, if any.
    fn hit_test(&self, regions: &Regions, pos: Position) -> Option<(usize, Option<usize>)> {
        let idx = regions.columns.iter().position(|c| c.contains(pos))?;
        let list = &self.lists[idx];
        let inner = inner(regions.columns[idx]);
        let offset = scroll_offset(list.selected(), list.len(), visible_cards(inner.height));
        Some((idx, card_index_at(inner, pos.y, offset, list.len())))
    }

    /// Pushes focus, selection and drag highlights into the views.
    fn sync_highlights(&mut self) {
        let board_focused = self.state.focus == Focus::Board;
        self.input.set_active(!board_focused);

        for (idx, list) in self.lists.iter_mut().enumerate() {
            let focused = board_focused && idx == self.state.selected_list;
            match &self.drag {
                Some(session) if list.status() == session.from => {
                    let lifted = list.position_of(session.source);
                    list.set_selection(focused, lifted, true);
                }
                Some(_) => list.set_selection(focused, None, false),
                None => {
                    let selected = (idx == self.state.selected_list)
                        .then_some(self.state.selected_item)
                        .flatten();
                    list.set_selection(focused, selected, false);
                }
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum size only a "terminal too small" message is shown;
    /// in compact height the header is hidden.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        let Some(regions) = Regions::compute(area, self.lists.len()) else {
            self.render_terminal_too_small(frame, area);
            return;
        };

        if let Some(header) = regions.header {
            self.render_header(frame, header);
        }

        self.sync_highlights();

        let buf = frame.buffer_mut();
        self.input.render_content(regions.form, buf);
        for (list, column) in self.lists.iter().zip(&regions.columns) {
            list.render_content(*column, buf);
        }

        if let Some(message) = &self.state.alert {
            render_alert(message, area, buf);
        } else if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            y: area.y + vertical_offset,
            height: area.height.saturating_sub(vertical_offset),
            ..area
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, drag status and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, status_area, help_area] = Layout::horizontal([
            Constraint::Length(26),
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "dragboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Project Board", Style::default().fg(Color::White)),
        ]));
        frame.render_widget(title, title_area);

        if let Some(session) = &self.drag {
            let target = session
                .over
                .map_or("nowhere", |status| status.display_name());
            let status = Paragraph::new(Line::from(vec![
                Span::styled("Moving to ", Style::default().fg(Color::DarkGray)),
                Span::styled(target, Style::default().fg(Color::Yellow)),
            ]))
            .alignment(Alignment::Center);
            frame.render_widget(status, status_area);
        }

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dragboard_protocol::ProjectStore;
    /// use dragboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(ProjectStore::shared());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!("board started");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.focus)
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        info!(projects = self.store.borrow().len(), "board closed");
        Ok(())
    }
}
