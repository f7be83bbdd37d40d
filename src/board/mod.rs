//! Toolkit-independent board presentation.
//!
//! The board is a pure projection of the controller's task list: three
//! status columns, each ordered by priority. Cards and columns speak a small
//! drag-and-drop protocol and translate user gestures into
//! [`BoardIntent`](crate::task::services::BoardIntent)s; the editor form
//! turns typed field values into a
//! [`TaskSubmission`](crate::task::services::TaskSubmission).

pub mod card;
pub mod column;
pub mod dnd;
pub mod editor;
pub mod view;

#[cfg(test)]
mod tests;

pub use card::TaskCard;
pub use column::ColumnDropZone;
pub use dnd::{DragItem, DragSession, DragSource, DropOutcome, DropTarget};
pub use editor::{EditorField, FormError, TaskEditorForm};
pub use view::{BoardColumn, BoardView};
