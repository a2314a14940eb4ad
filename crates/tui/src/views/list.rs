//! A list of projects sharing one status. It is the drop target of the board.

use std::cell::RefCell;
use std::rc::Rc;

use dragboard_protocol::{
    Project, ProjectId, ProjectStatus, SharedStore, filter_by_status, parse_project_id,
};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::{
    component::{Component, Host, InsertPosition, Mount},
    dnd::{DataTransfer, TEXT_PLAIN},
    layout::{card_rect, inner, scroll_offset, visible_cards},
    views::{APP_HOST, PROJECT_LIST_TEMPLATE, ProjectItem},
    widgets::{CardStyle, render_column_frame, render_empty_placeholder},
};

/// The cards currently shown by a list, rebuilt on every store change.
#[derive(Debug)]
struct ListContent {
    host: Host,
    items: Vec<ProjectItem>,
}

impl ListContent {
    fn rebuild(&mut self, projects: Vec<Project>) {
        self.host.clear();
        self.items.clear();
        for project in projects {
            let item = ProjectItem::new(project, self.host.id());
            item.mount().attach_to(&mut self.host);
            self.items.push(item);
        }
    }
}

/// One column of the board, showing the projects with its status.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{ProjectStatus, ProjectStore};
/// use dragboard_tui::views::ProjectList;
///
/// let store = ProjectStore::shared();
/// let finished = ProjectList::new(ProjectStatus::Finished, store.clone());
///
/// let id = store.borrow_mut().add_project("Build shed", "Weekend project", 3);
/// assert!(finished.is_empty());
///
/// store.borrow_mut().move_project(id, ProjectStatus::Finished);
/// assert_eq!(finished.project_ids(), vec![id]);
/// ```
#[derive(Debug)]
pub struct ProjectList {
    mount: Mount,
    status: ProjectStatus,
    store: SharedStore,
    content: Rc<RefCell<ListContent>>,
    droppable: bool,
    focused: bool,
    selected: Option<usize>,
}

impl ProjectList {
    /// Creates a list for `status` and subscribes it to the store.
    #[must_use]
    pub fn new(status: ProjectStatus, store: SharedStore) -> Self {
        let content = ListContent {
            host: Host::new(format!("{}-list", status.list_id())),
            items: Vec::new(),
        };
        let mut list = Self {
            mount: Mount::new(
                PROJECT_LIST_TEMPLATE,
                APP_HOST,
                InsertPosition::BeforeEnd,
                Some(status.list_id()),
            ),
            status,
            store,
            content: Rc::new(RefCell::new(content)),
            droppable: false,
            focused: false,
            selected: None,
        };
        list.configure();
        list
    }

    /// Returns the status this list shows.
    #[must_use]
    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.borrow().items.len()
    }

    /// Returns `true` if the list shows no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.borrow().items.is_empty()
    }

    /// Returns the ids of the shown projects, in order.
    #[must_use]
    pub fn project_ids(&self) -> Vec<ProjectId> {
        self.content
            .borrow()
            .items
            .iter()
            .map(ProjectItem::project_id)
            .collect()
    }

    /// Returns a copy of the project at `index`.
    #[must_use]
    pub fn project(&self, index: usize) -> Option<Project> {
        self.content
            .borrow()
            .items
            .get(index)
            .map(|item| item.project().clone())
    }

    /// Returns the position of a project in this list.
    #[must_use]
    pub fn position_of(&self, id: ProjectId) -> Option<usize> {
        self.content
            .borrow()
            .items
            .iter()
            .position(|item| item.project_id() == id)
    }

    /// Returns the element ids mounted in the list host, in order.
    #[must_use]
    pub fn children(&self) -> Vec<String> {
        self.content.borrow().host.children().to_vec()
    }

    /// Returns `true` while an accepted drag hovers over the list.
    #[must_use]
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Returns the selected card index used for the last render.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Sets the highlight for the next render.
    pub fn set_selection(&mut self, focused: bool, selected: Option<usize>, lifted: bool) {
        self.focused = focused;
        self.selected = selected;
        for (index, item) in self.content.borrow_mut().items.iter_mut().enumerate() {
            item.style = match selected {
                Some(sel) if sel == index && lifted => CardStyle::Lifted,
                Some(sel) if sel == index && focused => CardStyle::Selected,
                _ => CardStyle::Normal,
            };
        }
    }

    /// Starts a drag from the card at `index`, filling `transfer`.
    ///
    /// Returns the id of the dragged project.
    pub fn drag_start(&self, index: usize, transfer: &mut DataTransfer) -> Option<ProjectId> {
        let content = self.content.borrow();
        let item = content.items.get(index).filter(|item| item.is_draggable())?;
        item.drag_start_handler(transfer);
        Some(item.project_id())
    }

    /// Ends a drag on the card showing `id`. Returns `false` if no card here
    /// shows that project.
    pub fn drag_end(&self, id: ProjectId) -> bool {
        let content = self.content.borrow();
        match content.items.iter().find(|item| item.project_id() == id) {
            Some(item) => {
                item.drag_end_handler();
                true
            }
            None => false,
        }
    }

    /// Accepts a drag whose first payload type is plain text.
    ///
    /// Returns `true` if the drag was accepted; the list is then droppable.
    pub fn drag_over_handler(&mut self, transfer: &DataTransfer) -> bool {
        if transfer.types().next() == Some(TEXT_PLAIN) {
            self.droppable = true;
            true
        } else {
            false
        }
    }

    /// Clears the droppable marker.
    pub fn drag_leave_handler(&mut self) {
        self.droppable = false;
    }

    /// Moves the dragged project to this list's status.
    ///
    /// Returns `true` if the store changed. Malformed payloads and unknown
    /// ids are ignored.
    pub fn drop_handler(&mut self, transfer: &DataTransfer) -> bool {
        self.droppable = false;

        let Some(payload) = transfer.get_data(TEXT_PLAIN) else {
            debug!(list = self.status.list_id(), "drop without a text payload");
            return false;
        };

        match parse_project_id(payload) {
            Ok(id) => self.store.borrow_mut().move_project(id, self.status),
            Err(err) => {
                debug!(list = self.status.list_id(), %err, "ignoring drop");
                false
            }
        }
    }
}

impl Component for ProjectList {
    fn mount(&self) -> &Mount {
        &self.mount
    }

    fn configure(&mut self) {
        let content = Rc::clone(&self.content);
        let status = self.status;
        self.store.borrow_mut().add_listener(move |projects| {
            let relevant = filter_by_status(&projects, status);
            content.borrow_mut().rebuild(relevant);
        });
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let content = self.content.borrow();
        render_column_frame(
            self.status.heading(),
            content.items.len(),
            self.focused,
            self.droppable,
            area,
            buf,
        );

        let inner = inner(area);
        if content.items.is_empty() {
            render_empty_placeholder(inner, buf);
            return;
        }

        let visible = visible_cards(inner.height);
        let offset = scroll_offset(self.selected, content.items.len(), visible);
        for (slot, item) in content.items.iter().skip(offset).take(visible).enumerate() {
            item.render_content(card_rect(inner, slot), buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_protocol::ProjectStore;

    fn text_transfer(payload: &str) -> DataTransfer {
        let mut transfer = DataTransfer::new();
        transfer.set_data(TEXT_PLAIN, payload);
        transfer
    }

    #[test]
    fn list_is_mounted_with_its_status_id() {
        let list = ProjectList::new(ProjectStatus::Active, ProjectStore::shared());
        assert_eq!(list.element_id(), "active-projects");
        assert_eq!(list.mount().template(), PROJECT_LIST_TEMPLATE);
        assert_eq!(list.mount().host(), APP_HOST);
    }

    #[test]
    fn rebuilds_from_snapshot_in_order() {
        let store = ProjectStore::shared();
        let list = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));

        let a = store.borrow_mut().add_project("A", "first one", 1);
        let b = store.borrow_mut().add_project("B", "second one", 2);

        assert_eq!(list.project_ids(), vec![a, b]);
        assert_eq!(list.children(), vec![a.to_string(), b.to_string()]);
    }

    #[test]
    fn list_only_shows_its_status() {
        let store = ProjectStore::shared();
        let active = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        let finished = ProjectList::new(ProjectStatus::Finished, Rc::clone(&store));

        let id = store.borrow_mut().add_project("A", "first one", 1);
        assert_eq!(active.len(), 1);
        assert!(finished.is_empty());

        store.borrow_mut().move_project(id, ProjectStatus::Finished);
        assert!(active.is_empty());
        assert_eq!(finished.project_ids(), vec![id]);
        assert_eq!(finished.children(), vec![id.to_string()]);
    }

    #[test]
    fn drag_over_accepts_plain_text_first() {
        let mut list = ProjectList::new(ProjectStatus::Finished, ProjectStore::shared());
        assert!(list.drag_over_handler(&text_transfer("x")));
        assert!(list.is_droppable());

        list.drag_leave_handler();
        assert!(!list.is_droppable());
    }

    #[test]
    fn drag_over_rejects_other_types() {
        let mut list = ProjectList::new(ProjectStatus::Finished, ProjectStore::shared());

        let mut transfer = DataTransfer::new();
        transfer.set_data("text/uri-list", "https://example.com");
        transfer.set_data(TEXT_PLAIN, "x");
        assert!(!list.drag_over_handler(&transfer));
        assert!(!list.drag_over_handler(&DataTransfer::new()));
        assert!(!list.is_droppable());
    }

    #[test]
    fn drop_moves_project_and_clears_marker() {
        let store = ProjectStore::shared();
        let mut finished = ProjectList::new(ProjectStatus::Finished, Rc::clone(&store));
        let id = store.borrow_mut().add_project("A", "first one", 1);

        let transfer = text_transfer(&id.to_string());
        assert!(finished.drag_over_handler(&transfer));
        assert!(finished.drop_handler(&transfer));

        assert!(!finished.is_droppable());
        assert_eq!(store.borrow().get(id).unwrap().status, ProjectStatus::Finished);
        assert_eq!(finished.project_ids(), vec![id]);
    }

    #[test]
    fn drop_on_same_status_is_a_no_op() {
        let store = ProjectStore::shared();
        let mut active = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        let id = store.borrow_mut().add_project("A", "first one", 1);

        assert!(!active.drop_handler(&text_transfer(&id.to_string())));
        assert_eq!(active.project_ids(), vec![id]);
    }

    #[test]
    fn drop_ignores_garbage_and_unknown_ids() {
        let store = ProjectStore::shared();
        let mut finished = ProjectList::new(ProjectStatus::Finished, Rc::clone(&store));
        store.borrow_mut().add_project("A", "first one", 1);

        assert!(!finished.drop_handler(&text_transfer("not-an-id")));
        assert!(!finished.drop_handler(&text_transfer(&ProjectId::new_v4().to_string())));
        assert!(!finished.drop_handler(&DataTransfer::new()));
        assert!(finished.is_empty());
    }

    #[test]
    fn drag_start_fills_transfer() {
        let store = ProjectStore::shared();
        let active = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        let id = store.borrow_mut().add_project("A", "first one", 1);

        let mut transfer = DataTransfer::new();
        assert_eq!(active.drag_start(0, &mut transfer), Some(id));
        assert_eq!(transfer.get_data(TEXT_PLAIN), Some(id.to_string().as_str()));
        assert_eq!(active.drag_start(1, &mut transfer), None);
        assert!(active.drag_end(id));
    }

    #[test]
    fn selection_styles_cards() {
        let store = ProjectStore::shared();
        let mut active = ProjectList::new(ProjectStatus::Active, Rc::clone(&store));
        store.borrow_mut().add_project("A", "first one", 1);
        store.borrow_mut().add_project("B", "second one", 2);

        active.set_selection(true, Some(1), false);
        let styles: Vec<_> = active.content.borrow().items.iter().map(|i| i.style).collect();
        assert_eq!(styles, vec![CardStyle::Normal, CardStyle::Selected]);

        active.set_selection(true, Some(0), true);
        let styles: Vec<_> = active.content.borrow().items.iter().map(|i| i.style).collect();
        assert_eq!(styles, vec![CardStyle::Lifted, CardStyle::Normal]);
    }
}
