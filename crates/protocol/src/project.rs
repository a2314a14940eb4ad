//! Project-related types for the board.
//!
//! This module defines the project identifier, the two lifecycle statuses a
//! project can occupy, and the project structure itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a project.
///
/// Uses UUID v4 for globally unique identification. On the drag channel the
/// identifier travels as its hyphenated string form.
pub type ProjectId = uuid::Uuid;

/// Parses a project identifier from a drag payload.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidProjectId`] if the payload is not a UUID.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{ProjectId, parse_project_id};
///
/// let id = ProjectId::new_v4();
/// assert_eq!(parse_project_id(&id.to_string()).unwrap(), id);
/// assert!(parse_project_id("not-an-id").is_err());
/// ```
pub fn parse_project_id(payload: &str) -> Result<ProjectId> {
    ProjectId::parse_str(payload.trim()).map_err(|source| ProtocolError::InvalidProjectId {
        payload: payload.to_string(),
        source,
    })
}

/// The lifecycle status of a project.
///
/// The board shows one column per status, in the order returned by
/// [`ProjectStatus::all`].
///
/// # Examples
///
/// ```
/// use dragboard_protocol::ProjectStatus;
///
/// let status = ProjectStatus::default();
/// assert_eq!(status, ProjectStatus::Active);
/// assert_eq!(status.heading(), "ACTIVE PROJECTS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work that is still going on.
    #[default]
    Active,
    /// Work that is done.
    Finished,
}

impl ProjectStatus {
    /// Returns all statuses in column order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Active, Self::Finished]
    }

    /// Returns a human-readable display name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::Active.display_name(), "Active");
    /// assert_eq!(ProjectStatus::Finished.display_name(), "Finished");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Finished => "Finished",
        }
    }

    /// Returns the lowercase tag used in element ids and config files.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Returns the heading shown above the status column.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE PROJECTS",
            Self::Finished => "FINISHED PROJECTS",
        }
    }

    /// Returns the element id of the list mounted for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::Finished.list_id(), "finished-projects");
    /// ```
    #[must_use]
    pub const fn list_id(self) -> &'static str {
        match self {
            Self::Active => "active-projects",
            Self::Finished => "finished-projects",
        }
    }

    /// Returns the column index of this status (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Active => 0,
            Self::Finished => 1,
        }
    }

    /// Creates a `ProjectStatus` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::ProjectStatus;
    ///
    /// assert_eq!(ProjectStatus::from_index(1), Some(ProjectStatus::Finished));
    /// assert_eq!(ProjectStatus::from_index(2), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Active),
            1 => Some(Self::Finished),
            _ => None,
        }
    }

    /// Returns the other status.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ProjectStatus {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(ProtocolError::UnknownStatus(s.to_string())),
        }
    }
}

/// A project on the board.
///
/// Projects are created by the [`ProjectStore`](crate::ProjectStore) and only
/// ever change status afterwards.
///
/// # Examples
///
/// ```
/// use dragboard_protocol::{Project, ProjectStatus};
///
/// let project = Project::new("Build shed", "Weekend project", 3);
/// assert_eq!(project.status, ProjectStatus::Active);
/// assert_eq!(project.assigned_label(), "3 persons assigned");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    pub id: ProjectId,
    /// Short name of the project.
    pub title: String,
    /// What the project is about.
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    /// Current lifecycle status.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a fresh identifier.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self::with_id(ProjectId::new_v4(), title, description, people)
    }

    /// Creates a new active project with a specific identifier.
    #[must_use]
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns the pluralized person count.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragboard_protocol::Project;
    ///
    /// assert_eq!(Project::new("A", "B", 1).persons(), "1 person");
    /// assert_eq!(Project::new("A", "B", 4).persons(), "4 persons");
    /// ```
    #[must_use]
    pub fn persons(&self) -> String {
        if self.people == 1 {
            "1 person".to_string()
        } else {
            format!("{} persons", self.people)
        }
    }

    /// Returns the person count label shown on the project card.
    #[must_use]
    pub fn assigned_label(&self) -> String {
        format!("{} assigned", self.persons())
    }

    /// Returns `true` if the project currently has the given status.
    #[must_use]
    pub fn has_status(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
