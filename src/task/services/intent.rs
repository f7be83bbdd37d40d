//! Commands flowing from the board view into the controller.

use crate::task::domain::{TaskFields, TaskId, TaskPatch, TaskStatus};

/// A user intent raised by a card, a column, or the board header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardIntent {
    /// Move a card within its column. Indices are positions in the column's
    /// display order at the time of the hover.
    Reorder {
        /// Column the drag happens in.
        status: TaskStatus,
        /// Current position of the dragged card.
        from: usize,
        /// Position of the hovered card.
        to: usize,
    },
    /// Move a task to another column.
    ChangeStatus {
        /// Task to move.
        id: TaskId,
        /// Target column.
        status: TaskStatus,
    },
    /// Open the editor for an existing task.
    Edit(TaskId),
    /// Delete a task.
    Delete(TaskId),
    /// Open the editor for a new task.
    Create,
}

/// What the editor form asks the controller to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSubmission {
    /// Store a new task.
    Create(TaskFields),
    /// Overwrite fields of an existing task.
    Update {
        /// Task being edited.
        id: TaskId,
        /// Fields taken from the form.
        patch: TaskPatch,
    },
}
