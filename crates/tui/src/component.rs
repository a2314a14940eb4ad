//! Templated view base.
//!
//! Every view on the board is a [`Component`]: it is built from a named
//! template, mounted into a [`Host`] at the start or the end of the host's
//! children, and renders its content into the region the host assigns it.
//!
//! # Example
//!
//! ```
//! use dragboard_tui::component::{Host, InsertPosition, Mount};
//!
//! let mut app = Host::new("app");
//! Mount::new("project-list", "app", InsertPosition::BeforeEnd, Some("active-projects"))
//!     .attach_to(&mut app);
//! Mount::new("project-input", "app", InsertPosition::AfterBegin, Some("user-input"))
//!     .attach_to(&mut app);
//!
//! assert_eq!(app.children(), ["user-input", "active-projects"]);
//! ```

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::warn;

/// Where a mounted element lands among its host's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPosition {
    /// Before the first existing child.
    AfterBegin,
    /// After the last existing child.
    #[default]
    BeforeEnd,
}

/// An ordered container of element ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    id: String,
    children: Vec<String>,
}

impl Host {
    /// Creates an empty host with the given element id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// Returns the element id of the host itself.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Inserts a child element at the requested end.
    pub fn attach(&mut self, element_id: impl Into<String>, position: InsertPosition) {
        let element_id = element_id.into();
        match position {
            InsertPosition::AfterBegin => self.children.insert(0, element_id),
            InsertPosition::BeforeEnd => self.children.push(element_id),
        }
    }

    /// Removes every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Returns the child element ids in order.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns the index of a child element, if present.
    #[must_use]
    pub fn position_of(&self, element_id: &str) -> Option<usize> {
        self.children.iter().position(|child| child == element_id)
    }

    /// Returns the number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if the host has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Describes how a component is instantiated from its template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    template: &'static str,
    host: String,
    position: InsertPosition,
    new_id: Option<String>,
}

impl Mount {
    /// Creates a mount description.
    ///
    /// When `new_id` is `None` the element keeps the template name as its id.
    #[must_use]
    pub fn new(
        template: &'static str,
        host: impl Into<String>,
        position: InsertPosition,
        new_id: Option<impl Into<String>>,
    ) -> Self {
        Self {
            template,
            host: host.into(),
            position,
            new_id: new_id.map(Into::into),
        }
    }

    /// Returns the template this element is cloned from.
    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Returns the id of the host this element belongs in.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the insert position.
    #[must_use]
    pub fn position(&self) -> InsertPosition {
        self.position
    }

    /// Returns the id of the mounted element.
    #[must_use]
    pub fn element_id(&self) -> &str {
        self.new_id.as_deref().unwrap_or(self.template)
    }

    /// Inserts the element into `host`.
    ///
    /// Returns `false` and leaves the host untouched when `host` is not the
    /// one this element was declared for.
    pub fn attach_to(&self, host: &mut Host) -> bool {
        if host.id() != self.host {
            warn!(
                element = self.element_id(),
                expected = %self.host,
                found = host.id(),
                "refusing to mount into the wrong host"
            );
            return false;
        }
        host.attach(self.element_id(), self.position);
        true
    }
}

/// A view built from a template and mounted into a host.
pub trait Component {
    /// Returns how this component is mounted.
    fn mount(&self) -> &Mount;

    /// Returns the id of the mounted element.
    fn element_id(&self) -> &str {
        self.mount().element_id()
    }

    /// Attaches listeners and subscribes to state.
    ///
    /// Called once, right after construction.
    fn configure(&mut self);

    /// Populates the region assigned to this component.
    fn render_content(&self, area: Rect, buf: &mut Buffer);
}
