//! The project store.
//!
//! [`ProjectStore`] owns every project of the session and notifies its
//! listeners synchronously whenever the set of projects changes. Views never
//! mutate projects directly: they receive owned snapshots through their
//! listener and call back into the store to request changes.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::project::{Project, ProjectId, ProjectStatus};

/// A callback invoked with a snapshot of all projects after every change.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// A handle to a store shared by the views of a single UI thread.
pub type SharedStore = Rc<RefCell<ProjectStore>>;

/// Holds the ordered sequence of projects and the registered listeners.
///
/// The store is constructed explicitly and handed to each view at
/// construction time.
///
/// Listeners must not call back into the store while being notified.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use dragboard_protocol::{ProjectStatus, ProjectStore};
///
/// let mut store = ProjectStore::new();
/// let seen = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&seen);
/// store.add_listener(move |projects| counter.set(projects.len()));
///
/// let id = store.add_project("Build shed", "Weekend project", 3);
/// assert_eq!(seen.get(), 1);
///
/// assert!(store.move_project(id, ProjectStatus::Finished));
/// assert_eq!(store.get(id).unwrap().status, ProjectStatus::Finished);
/// ```
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in a [`SharedStore`] handle.
    #[must_use]
    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a callback invoked on every future change.
    ///
    /// Listeners live as long as the store; there is no unregistration.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// The caller is responsible for validating the values first.
    ///
    /// Returns the identifier of the new project.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        debug!(%id, title = %project.title, people, "project added");
        self.projects.push(project);
        self.notify();
        id
    }

    /// Transitions a project to a new status.
    ///
    /// Returns `true` if the project was found and its status changed. An
    /// unknown id or an unchanged status is a no-op and notifies nobody.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) -> bool {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            debug!(%id, "move ignored: unknown project");
            return false;
        };

        if project.status == new_status {
            debug!(%id, status = %new_status, "move ignored: status unchanged");
            return false;
        }

        debug!(%id, from = %project.status, to = %new_status, "project moved");
        project.status = new_status;
        self.notify();
        true
    }

    /// Returns all projects in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns a project by id, if present.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Returns the number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if no project has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}

impl fmt::Debug for ProjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Returns the projects of a snapshot that have the given status, in order.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Project, ProjectStatus, filter_by_status};
///
/// let mut done = Project::new("Done", "Already finished", 1);
/// done.status = ProjectStatus::Finished;
/// let snapshot = vec![Project::new("Open", "Still going", 2), done];
///
/// let finished = filter_by_status(&snapshot, ProjectStatus::Finished);
/// assert_eq!(finished.len(), 1);
/// assert_eq!(finished[0].title, "Done");
/// ```
#[must_use]
pub fn filter_by_status(projects: &[Project], status: ProjectStatus) -> Vec<Project> {
    projects
        .iter()
        .filter(|p| p.has_status(status))
        .cloned()
        .collect()
}
