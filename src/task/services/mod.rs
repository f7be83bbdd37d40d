//! Application services for the task board.

mod controller;
mod intent;
mod notice;

pub use controller::{BoardController, BoardError, BoardResult};
pub use intent::{BoardIntent, TaskSubmission};
pub use notice::Notice;
