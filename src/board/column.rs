//! Column-level drop target.

use super::dnd::{DragItem, DropOutcome, DropTarget};
use crate::task::{domain::TaskStatus, services::BoardIntent};

/// The drop zone covering a whole status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDropZone {
    status: TaskStatus,
}

impl ColumnDropZone {
    /// Creates the drop zone for `status`.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }

    /// Returns the column's status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }
}

impl DropTarget for ColumnDropZone {
    fn drop_item(&self, item: &DragItem, consumed: bool) -> DropOutcome {
        if consumed {
            return DropOutcome::Handled(None);
        }
        // Dropping into the card's own column still issues the update.
        DropOutcome::Handled(Some(BoardIntent::ChangeStatus {
            id: item.id.clone(),
            status: self.status,
        }))
    }
}
