//! Task document types.

use super::{DueDate, TaskId, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

/// The five editable fields of a task document.
///
/// This is the shape written to the store on create; it carries no
/// identifier because the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    /// Short task title.
    pub title: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Due date.
    pub date: DueDate,
    /// Board column.
    #[serde(default)]
    pub status: TaskStatus,
    /// Display priority.
    #[serde(default)]
    pub priority: TaskPriority,
}

impl TaskFields {
    /// Creates fields with an empty description, `TODO` status, and
    /// `Medium` priority.
    #[must_use]
    pub fn new(title: impl Into<String>, date: DueDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }
}

/// A partial set of task fields for a merge-style update.
///
/// Only the fields that are `Some` overwrite the stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    /// Replacement title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DueDate>,
    /// Replacement status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Replacement priority.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub fn with_date(mut self, date: DueDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the replacement status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the replacement priority.
    #[must_use]
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns `true` when the patch carries no field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.priority.is_none()
    }
}

impl From<TaskFields> for TaskPatch {
    fn from(fields: TaskFields) -> Self {
        Self {
            title: Some(fields.title),
            description: Some(fields.description),
            date: Some(fields.date),
            status: Some(fields.status),
            priority: Some(fields.priority),
        }
    }
}

/// A persisted task: store identifier plus its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    #[serde(flatten)]
    fields: TaskFields,
}

impl Task {
    /// Attaches a store identifier to task fields.
    #[must_use]
    pub const fn new(id: TaskId, fields: TaskFields) -> Self {
        Self { id, fields }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns all editable fields.
    #[must_use]
    pub const fn fields(&self) -> &TaskFields {
        &self.fields
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.fields.description
    }

    /// Returns the due date.
    #[must_use]
    pub const fn date(&self) -> DueDate {
        self.fields.date
    }

    /// Returns the board column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.fields.status
    }

    /// Returns the display priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.fields.priority
    }

    /// Merges the fields present in `patch` into this task.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.fields.title.clone_from(title);
        }
        if let Some(description) = &patch.description {
            self.fields.description.clone_from(description);
        }
        if let Some(date) = patch.date {
            self.fields.date = date;
        }
        if let Some(status) = patch.status {
            self.fields.status = status;
        }
        if let Some(priority) = patch.priority {
            self.fields.priority = priority;
        }
    }

    /// Splits the task into its identifier and fields.
    #[must_use]
    pub fn into_parts(self) -> (TaskId, TaskFields) {
        (self.id, self.fields)
    }
}
