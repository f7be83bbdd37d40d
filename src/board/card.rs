//! A task card: drag source, hover target, and per-card actions.

use super::dnd::{DragItem, DragSource, DropOutcome, DropTarget};
use crate::task::{
    domain::{Task, TaskStatus},
    services::BoardIntent,
};

/// A rendered task at a display position within its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCard<'a> {
    task: &'a Task,
    index: usize,
}

impl<'a> TaskCard<'a> {
    /// Wraps a task shown at `index` in its column.
    #[must_use]
    pub const fn new(task: &'a Task, index: usize) -> Self {
        Self { task, index }
    }

    /// Returns the task behind the card.
    #[must_use]
    pub const fn task(&self) -> &'a Task {
        self.task
    }

    /// Returns the card's display position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Edit action.
    #[must_use]
    pub fn edit(&self) -> BoardIntent {
        BoardIntent::Edit(self.task.id().clone())
    }

    /// Delete action.
    #[must_use]
    pub fn delete(&self) -> BoardIntent {
        BoardIntent::Delete(self.task.id().clone())
    }

    /// Status selector: moves the task to `status`.
    #[must_use]
    pub fn select_status(&self, status: TaskStatus) -> BoardIntent {
        BoardIntent::ChangeStatus {
            id: self.task.id().clone(),
            status,
        }
    }

    /// Status selector shortcut: moves the task to the next column.
    #[must_use]
    pub fn cycle_status(&self) -> BoardIntent {
        self.select_status(self.task.status().next())
    }
}

impl DragSource for TaskCard<'_> {
    fn drag_item(&self) -> DragItem {
        DragItem {
            id: self.task.id().clone(),
            status: self.task.status(),
            index: self.index,
        }
    }
}

impl DropTarget for TaskCard<'_> {
    fn hover(&self, item: &mut DragItem) -> Option<BoardIntent> {
        // Cross-column hovers are resolved by the column on drop.
        if item.index == self.index || item.status != self.task.status() {
            return None;
        }
        let intent = BoardIntent::Reorder {
            status: item.status,
            from: item.index,
            to: self.index,
        };
        item.index = self.index;
        Some(intent)
    }

    fn drop_item(&self, _item: &DragItem, _consumed: bool) -> DropOutcome {
        DropOutcome::Pass
    }
}
