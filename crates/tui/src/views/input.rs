//! The new-project form.

use std::fmt;
use std::rc::Rc;

use dragboard_config::FormRules;
use dragboard_protocol::{FieldValue, ProjectId, SharedStore, Validatable, validate};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, info};

use crate::{
    component::{Component, InsertPosition, Mount},
    views::{APP_HOST, PROJECT_INPUT_TEMPLATE, USER_INPUT_ID},
    widgets::{FormLine, render_form},
};

/// The fields of the form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Project title.
    #[default]
    Title,
    /// Project description.
    Description,
    /// Number of people assigned.
    People,
}

impl FormField {
    /// Returns all fields in focus order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Title, Self::Description, Self::People]
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }

    /// Returns the field at `index` in focus order.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Title),
            1 => Some(Self::Description),
            2 => Some(Self::People),
            _ => None,
        }
    }

    /// Returns the next field, or `None` after the last one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Title => Some(Self::Description),
            Self::Description => Some(Self::People),
            Self::People => None,
        }
    }

    /// Returns the previous field, or `None` before the first one.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Title => None,
            Self::Description => Some(Self::Title),
            Self::People => Some(Self::Description),
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_ascii_lowercase())
    }
}

/// The form was submitted with a value that fails its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid input in the {field} field")]
pub struct InvalidInput {
    /// The first field that failed validation.
    pub field: FormField,
}

/// Receives validated form values and returns the new project's id.
pub type SubmitHandler = Box<dyn FnMut(String, String, u32) -> ProjectId>;

/// The form used to create projects.
///
/// # Examples
///
/// ```
/// use dragboard_config::FormRules;
/// use dragboard_protocol::ProjectStore;
/// use dragboard_tui::views::{FormField, ProjectInput};
///
/// let store = ProjectStore::shared();
/// let mut input = ProjectInput::new(store.clone(), FormRules::default());
///
/// input.set_value(FormField::Title, "Build shed");
/// input.set_value(FormField::Description, "Weekend project");
/// input.set_value(FormField::People, "3");
///
/// let id = input.submit().unwrap().unwrap();
/// assert_eq!(store.borrow().get(id).unwrap().people, 3);
/// assert_eq!(input.value(FormField::Title), "");
/// ```
pub struct ProjectInput {
    mount: Mount,
    store: SharedStore,
    rules: FormRules,
    title: String,
    description: String,
    people: String,
    focused: FormField,
    active: bool,
    on_submit: Option<SubmitHandler>,
}

impl ProjectInput {
    /// Creates the form and wires submission to the store.
    #[must_use]
    pub fn new(store: SharedStore, rules: FormRules) -> Self {
        let mut input = Self {
            mount: Mount::new(
                PROJECT_INPUT_TEMPLATE,
                APP_HOST,
                InsertPosition::AfterBegin,
                Some(USER_INPUT_ID),
            ),
            store,
            rules,
            title: String::new(),
            description: String::new(),
            people: String::new(),
            focused: FormField::default(),
            active: false,
            on_submit: None,
        };
        input.configure();
        input
    }

    /// Returns the rules applied on submit.
    #[must_use]
    pub fn rules(&self) -> FormRules {
        self.rules
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focused(&self) -> FormField {
        self.focused
    }

    /// Focuses a field.
    pub fn focus(&mut self, field: FormField) {
        self.focused = field;
    }

    /// Marks the form as holding keyboard focus for the next render.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Returns the current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::People => &self.people,
        }
    }

    /// Replaces the text of a field.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Types a character into the focused field.
    ///
    /// The people field only takes digits.
    pub fn input_char(&mut self, ch: char) {
        if ch.is_control() || (self.focused == FormField::People && !ch.is_ascii_digit()) {
            return;
        }
        self.value_mut(self.focused).push(ch);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.value_mut(self.focused).pop();
    }

    /// Cycles focus to the next field, wrapping around.
    pub fn focus_next_wrapping(&mut self) {
        self.focused = self.focused.next().unwrap_or(FormField::Title);
    }

    /// Cycles focus to the previous field, wrapping around.
    pub fn focus_prev_wrapping(&mut self) {
        self.focused = self.focused.prev().unwrap_or(FormField::People);
    }

    /// Empties every field.
    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }

    /// Reads and validates the three fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the first field that fails its rules.
    pub fn gather_user_input(&self) -> Result<(String, String, u32), InvalidInput> {
        let people = FieldValue::parse_number(&self.people);
        let people_count = match people {
            FieldValue::Number(n) => n,
            FieldValue::Text(_) => f64::NAN,
        };

        let checks = [
            (FormField::Title, Validatable::text(self.title.as_str()).required()),
            (
                FormField::Description,
                Validatable::text(self.description.as_str())
                    .required()
                    .min_length(self.rules.description_min_length),
            ),
            (
                FormField::People,
                Validatable::new(people)
                    .required()
                    .min(f64::from(self.rules.people_min))
                    .max(f64::from(self.rules.people_max)),
            ),
        ];

        if let Some((field, _)) = checks.iter().find(|(_, check)| !validate(check)) {
            return Err(InvalidInput { field: *field });
        }

        // Saturating; NaN only gets here when no bound is configured.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let people = people_count as u32;
        Ok((self.title.clone(), self.description.clone(), people))
    }

    /// Validates the form and hands the values to the submit handler.
    ///
    /// On success the fields are cleared and the new project's id is
    /// returned; `Ok(None)` means no handler is wired. On failure the fields
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if any field fails its rules.
    pub fn submit(&mut self) -> Result<Option<ProjectId>, InvalidInput> {
        let (title, description, people) = self.gather_user_input().inspect_err(|err| {
            debug!(%err, "form rejected");
        })?;

        let Some(handler) = self.on_submit.as_mut() else {
            return Ok(None);
        };
        let id = handler(title, description, people);
        info!(%id, "project created");
        self.clear_inputs();
        Ok(Some(id))
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::People => &mut self.people,
        }
    }
}

impl fmt::Debug for ProjectInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectInput")
            .field("mount", &self.mount)
            .field("rules", &self.rules)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("people", &self.people)
            .field("focused", &self.focused)
            .field("active", &self.active)
            .field("wired", &self.on_submit.is_some())
            .finish_non_exhaustive()
    }
}

impl Component for ProjectInput {
    fn mount(&self) -> &Mount {
        &self.mount
    }

    fn configure(&mut self) {
        let store = Rc::clone(&self.store);
        self.on_submit = Some(Box::new(move |title, description, people| {
            store.borrow_mut().add_project(title, description, people)
        }));
    }

    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        let lines = FormField::all().map(|field| FormLine {
            label: field.label(),
            value: self.value(field),
            focused: self.active && self.focused == field,
        });
        render_form(&lines, self.active, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragboard_protocol::{ProjectStatus, ProjectStore};

    fn filled(store: &SharedStore, title: &str, description: &str, people: &str) -> ProjectInput {
        let mut input = ProjectInput::new(Rc::clone(store), FormRules::default());
        input.set_value(FormField::Title, title);
        input.set_value(FormField::Description, description);
        input.set_value(FormField::People, people);
        input
    }

    #[test]
    fn input_is_mounted_at_start_of_app() {
        let input = ProjectInput::new(ProjectStore::shared(), FormRules::default());
        assert_eq!(input.element_id(), USER_INPUT_ID);
        assert_eq!(input.mount().position(), InsertPosition::AfterBegin);
        assert_eq!(input.mount().template(), PROJECT_INPUT_TEMPLATE);
    }

    #[test]
    fn valid_submission_adds_active_project_and_clears() {
        let store = ProjectStore::shared();
        let mut input = filled(&store, "Build shed", "Weekend project", "3");

        let id = input.submit().unwrap().unwrap();

        let store = store.borrow();
        let project = store.get(id).unwrap();
        assert_eq!(project.title, "Build shed");
        assert_eq!(project.description, "Weekend project");
        assert_eq!(project.people, 3);
        assert_eq!(project.status, ProjectStatus::Active);
        for field in FormField::all() {
            assert_eq!(input.value(field), "");
        }
    }

    #[test]
    fn empty_title_is_rejected_and_fields_kept() {
        let store = ProjectStore::shared();
        let mut input = filled(&store, "   ", "Weekend project", "3");

        assert_eq!(
            input.submit(),
            Err(InvalidInput {
                field: FormField::Title
            })
        );
        assert!(store.borrow().is_empty());
        assert_eq!(input.value(FormField::Description), "Weekend project");
    }

    #[test]
    fn short_description_is_rejected() {
        let store = ProjectStore::shared();
        let mut input = filled(&store, "Shed", "Tiny", "3");
        assert_eq!(input.submit().unwrap_err().field, FormField::Description);

        // Exactly five characters is still too short.
        input.set_value(FormField::Description, "Fives");
        assert_eq!(input.submit().unwrap_err().field, FormField::Description);

        input.set_value(FormField::Description, "Sixsix");
        assert!(input.submit().is_ok());
    }

    #[test]
    fn people_bounds_are_half_open() {
        let store = ProjectStore::shared();
        for (people, ok) in [("0", false), ("1", true), ("4", true), ("5", false), ("", false)] {
            let mut input = filled(&store, "Shed", "Weekend project", people);
            assert_eq!(input.submit().is_ok(), ok, "people = {people:?}");
        }
    }

    #[test]
    fn unparsable_people_is_rejected() {
        let store = ProjectStore::shared();
        let mut input = filled(&store, "Shed", "Weekend project", "three");
        assert_eq!(input.submit().unwrap_err().field, FormField::People);
    }

    #[test]
    fn custom_rules_apply() {
        let store = ProjectStore::shared();
        let rules = FormRules {
            description_min_length: 0,
            people_min: 2,
            people_max: 10,
        };
        let mut input = ProjectInput::new(Rc::clone(&store), rules);
        input.set_value(FormField::Title, "Barn");
        input.set_value(FormField::Description, "x");
        input.set_value(FormField::People, "9");

        assert!(input.submit().is_ok());
    }

    #[test]
    fn people_field_takes_digits_only() {
        let mut input = ProjectInput::new(ProjectStore::shared(), FormRules::default());
        input.focus(FormField::People);
        for ch in "1a2 -3".chars() {
            input.input_char(ch);
        }
        assert_eq!(input.value(FormField::People), "123");

        input.backspace();
        assert_eq!(input.value(FormField::People), "12");
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut input = ProjectInput::new(ProjectStore::shared(), FormRules::default());
        input.focus_prev_wrapping();
        assert_eq!(input.focused(), FormField::People);
        input.focus_next_wrapping();
        assert_eq!(input.focused(), FormField::Title);
    }

    #[test]
    fn invalid_input_names_field() {
        let err = InvalidInput {
            field: FormField::People,
        };
        assert_eq!(err.to_string(), "invalid input in the people field");
    }
}
