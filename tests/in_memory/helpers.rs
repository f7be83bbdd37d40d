//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DueDate, TaskFields, TaskPriority, TaskStatus},
    services::BoardController,
};

/// Controller type used by the in-memory tests.
pub type TestController = BoardController<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh shared in-memory store for each test.
#[fixture]
pub fn repo() -> Arc<InMemoryTaskRepository> {
    Arc::new(InMemoryTaskRepository::new())
}

/// Builds a controller over `repo`.
pub fn controller_for(repo: &Arc<InMemoryTaskRepository>) -> TestController {
    BoardController::new(Arc::clone(repo), Arc::new(DefaultClock))
}

/// Builds task fields due on a fixed date.
///
/// # Errors
///
/// Returns an error if the fixed date fails to parse.
pub fn task_fields(
    title: &str,
    status: TaskStatus,
    priority: TaskPriority,
) -> Result<TaskFields, eyre::Report> {
    Ok(TaskFields::new(title, DueDate::parse("2024-07-15")?)
        .with_status(status)
        .with_priority(priority))
}
