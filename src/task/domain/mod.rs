//! Domain model for the task board.
//!
//! A task is a flat document of five fields addressed by a store-assigned
//! identifier. Everything here is free of infrastructure concerns; the
//! repository port and its adapters live outside the domain boundary.

mod error;
mod ids;
mod ordering;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::{DueDate, TaskId};
pub use ordering::{column_positions, sort_by_priority};
pub use status::{TaskPriority, TaskStatus};
pub use task::{Task, TaskFields, TaskPatch};
