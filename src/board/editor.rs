//! Task editor form state.
//!
//! The form keeps raw text for every field while the user types and only
//! validates on submit, so a half-typed date never reaches the controller.

use crate::task::{
    domain::{DueDate, Task, TaskFields, TaskId, TaskPatch, TaskPriority, TaskStatus},
    services::TaskSubmission,
};
use thiserror::Error;

/// Validation failures reported by [`TaskEditorForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The title is empty or whitespace.
    #[error("title is required")]
    MissingTitle,
    /// The due date is empty.
    #[error("due date is required")]
    MissingDate,
    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Editable fields in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorField {
    /// Title text.
    #[default]
    Title,
    /// Description text.
    Description,
    /// Due date text.
    Date,
    /// Status selector.
    Status,
    /// Priority selector.
    Priority,
}

impl EditorField {
    /// Every field in tab order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Date,
        Self::Status,
        Self::Priority,
    ];

    /// Returns the field label shown in the form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Date => "Due date",
            Self::Status => "Status",
            Self::Priority => "Priority",
        }
    }

    /// Returns the following field, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Date,
            Self::Date => Self::Status,
            Self::Status => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    /// Returns the preceding field, wrapping to the last.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Description => Self::Title,
            Self::Date => Self::Description,
            Self::Status => Self::Date,
            Self::Priority => Self::Status,
        }
    }

    /// Returns `true` for free-text fields.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Description | Self::Date)
    }
}

/// Local state of the create/edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEditorForm {
    editing: Option<TaskId>,
    title: String,
    description: String,
    date: String,
    status: TaskStatus,
    priority: TaskPriority,
    focus: EditorField,
}

impl TaskEditorForm {
    /// Creates an empty form for a new task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form seeded from an existing task.
    #[must_use]
    pub fn for_task(task: &Task) -> Self {
        Self {
            editing: Some(task.id().clone()),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            date: task.date().to_string(),
            status: task.status(),
            priority: task.priority(),
            focus: EditorField::default(),
        }
    }

    /// Seeds from the controller's selected task, or starts empty.
    #[must_use]
    pub fn from_selected(selected: Option<&Task>) -> Self {
        selected.map_or_else(Self::new, Self::for_task)
    }

    /// Returns the task being edited, `None` in create mode.
    #[must_use]
    pub const fn editing(&self) -> Option<&TaskId> {
        self.editing.as_ref()
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the raw due date text.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the selected priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> EditorField {
        self.focus
    }

    /// Replaces the title text.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replaces the description text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Replaces the due date text.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    /// Selects a status.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Selects a priority.
    pub const fn set_priority(&mut self, priority: TaskPriority) {
        self.priority = priority;
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Appends a character to the focused text field.
    pub fn insert_char(&mut self, ch: char) {
        if let Some(text) = self.focused_text() {
            text.push(ch);
        }
    }

    /// Removes the last character of the focused text field.
    pub fn delete_char(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Advances the focused selector to its next choice.
    pub const fn cycle_choice(&mut self) {
        match self.focus {
            EditorField::Status => self.status = self.status.next(),
            EditorField::Priority => self.priority = self.priority.next(),
            EditorField::Title | EditorField::Description | EditorField::Date => {}
        }
    }

    /// Validates the form and builds what the controller should persist.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the title is blank or the due date is
    /// missing or malformed.
    pub fn submit(&self) -> Result<TaskSubmission, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        let raw_date = self.date.trim();
        if raw_date.is_empty() {
            return Err(FormError::MissingDate);
        }
        let date =
            DueDate::parse(raw_date).map_err(|_| FormError::InvalidDate(raw_date.to_owned()))?;

        let fields = TaskFields::new(self.title.clone(), date)
            .with_description(self.description.clone())
            .with_status(self.status)
            .with_priority(self.priority);
        Ok(match &self.editing {
            Some(id) => TaskSubmission::Update {
                id: id.clone(),
                patch: TaskPatch::from(fields),
            },
            None => TaskSubmission::Create(fields),
        })
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            EditorField::Title => Some(&mut self.title),
            EditorField::Description => Some(&mut self.description),
            EditorField::Date => Some(&mut self.date),
            EditorField::Status | EditorField::Priority => None,
        }
    }
}
