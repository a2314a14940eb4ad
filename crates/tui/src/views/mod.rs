//! The board's views.
//!
//! - [`ProjectInput`]: the new-project form, mounted at the start of the app
//! - [`ProjectList`]: one column per status, mounted at the end of the app
//! - [`ProjectItem`]: one draggable card per project, inside its list

pub mod input;
pub mod item;
pub mod list;

pub use input::{FormField, InvalidInput, ProjectInput, SubmitHandler};
pub use item::ProjectItem;
pub use list::ProjectList;

/// Id of the root host every top-level view is mounted into.
pub const APP_HOST: &str = "app";

/// Template of the new-project form.
pub const PROJECT_INPUT_TEMPLATE: &str = "project-input";

/// Template of a project list column.
pub const PROJECT_LIST_TEMPLATE: &str = "project-list";

/// Template of a project card.
pub const SINGLE_PROJECT_TEMPLATE: &str = "single-project";

/// Element id of the mounted form.
pub const USER_INPUT_ID: &str = "user-input";
