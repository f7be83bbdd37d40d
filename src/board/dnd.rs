//! Drag-and-drop protocol between cards and columns.
//!
//! A drag starts from a [`DragSource`] and carries a [`DragItem`]. While the
//! pointer (or keyboard cursor) moves, every [`DropTarget`] it passes gets a
//! hover; when the item is released, the drop is delivered to the stack of
//! targets under it, innermost first, until one handles it.

use crate::task::{
    domain::{TaskId, TaskStatus},
    services::BoardIntent,
};

/// Payload carried by a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragItem {
    /// Task being dragged.
    pub id: TaskId,
    /// Column the card was picked up from.
    pub status: TaskStatus,
    /// Display position of the card within its column; updated as hovers
    /// reorder the column.
    pub index: usize,
}

/// Something that can be picked up.
pub trait DragSource {
    /// Returns the item a drag starting here carries.
    fn drag_item(&self) -> DragItem;
}

/// Result of delivering a drop to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The target does not handle drops; the drop bubbles outward.
    Pass,
    /// The target handled the drop, possibly raising an intent.
    Handled(Option<BoardIntent>),
}

/// Something a dragged item can hover over and be dropped on.
pub trait DropTarget {
    /// Reacts to the item passing over this target. Targets may update the
    /// item's tracked index.
    fn hover(&self, _item: &mut DragItem) -> Option<BoardIntent> {
        None
    }

    /// Reacts to the item being released over this target. `consumed` is
    /// `true` when a nested target already handled the drop.
    fn drop_item(&self, item: &DragItem, consumed: bool) -> DropOutcome;
}

/// An in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    item: DragItem,
    consumed: bool,
}

impl DragSession {
    /// Starts dragging from `source`.
    #[must_use]
    pub fn begin(source: &impl DragSource) -> Self {
        Self {
            item: source.drag_item(),
            consumed: false,
        }
    }

    /// Returns the item being dragged.
    #[must_use]
    pub const fn item(&self) -> &DragItem {
        &self.item
    }

    /// Returns `true` once a drop target has handled the drop.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Moves the drag over `target`.
    pub fn hover(&mut self, target: &impl DropTarget) -> Option<BoardIntent> {
        target.hover(&mut self.item)
    }

    /// Releases the item over a stack of targets ordered innermost first.
    ///
    /// Delivery stops at the first target that handles the drop. A session
    /// whose drop was already handled passes `consumed` on to later targets.
    pub fn drop_on(&mut self, targets: &[&dyn DropTarget]) -> Option<BoardIntent> {
        for target in targets {
            match target.drop_item(&self.item, self.consumed) {
                DropOutcome::Pass => {}
                DropOutcome::Handled(intent) => {
                    self.consumed = true;
                    return intent;
                }
            }
        }
        None
    }
}
