//! Shared world state for board interaction BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId},
    services::BoardController,
};

/// Controller type used by the BDD world.
pub type TestController = BoardController<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for board interaction behaviour tests.
pub struct BoardWorld {
    pub repository: Arc<InMemoryTaskRepository>,
    pub controller: TestController,
}

impl BoardWorld {
    /// Creates a world with an empty store and board.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        let controller = BoardController::new(Arc::clone(&repository), Arc::new(DefaultClock));
        Self {
            repository,
            controller,
        }
    }

    /// Finds a task on the board by title.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has the title.
    pub fn task_titled(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.controller
            .tasks()
            .iter()
            .find(|task| task.title() == title)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' on the board"))
    }

    /// Returns the identifier of the task with `title`.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has the title.
    pub fn id_of(&self, title: &str) -> Result<TaskId, eyre::Report> {
        Ok(self.task_titled(title)?.id().clone())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
