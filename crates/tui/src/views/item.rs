//! A single project card.

use dragboard_protocol::{Project, ProjectId};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use crate::{
    component::{Component, InsertPosition, Mount},
    dnd::{DataTransfer, DropEffect, TEXT_PLAIN},
    views::SINGLE_PROJECT_TEMPLATE,
    widgets::{CardStyle, render_project_card},
};

/// A card showing one project. It is the drag source of the board.
#[derive(Debug, Clone)]
pub struct ProjectItem {
    mount: Mount,
    project: Project,
    draggable: bool,
    pub(crate) style: CardStyle,
}

impl ProjectItem {
    /// Creates a configured card for `project`, to be mounted at the end of
    /// the list host `host_id`.
    #[must_use]
    pub fn new(project: Project, host_id: &str) -> Self {
        let mount = Mount::new(
            SINGLE_PROJECT_TEMPLATE,
            host_id,
            InsertPosition::BeforeEnd,
            Some(project.id.to_string()),
        );
        let mut item = Self {
            mount,
            project,
            draggable: false,
            style: CardStyle::Normal,
        };
        item.configure();
        item
    }

    /// Returns the project shown by this card.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the id of the project shown by this card.
    #[must_use]
    pub fn project_id(&self) -> ProjectId {
        self.project.id
    }

    /// Returns `true` once the card accepts drags.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Puts the project id on the transfer and allows a move.
    pub fn drag_start_handler(&self, transfer: &mut DataTransfer) {
        transfer.set_data(TEXT_PLAIN, self.project.id.to_string());
        transfer.effect_allowed = DropEffect::Move;
        debug!(id = %self.project.id, "drag started");
    }

    /// Observes the end of a drag. No state changes.
    pub fn drag_end_handler(&self) {
        debug!(id = %self.project.id, "drag ended");
    }
}

impl Component for ProjectItem {
    fn mount(&self) -> &Mount {
        &self.mount
    }

    fn configure(&mut self) {
        self.draggable = true;
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        render_project_card(&self.project, self.style, area, buf);
    }
}
