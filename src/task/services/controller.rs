//! Board state controller.
//!
//! The controller owns the in-memory task list, which is the single source
//! of truth for rendering. Every mutation goes through one of its
//! operations, and each operation applies its local change only after the
//! corresponding repository call has succeeded.

use super::{BoardIntent, Notice, TaskSubmission};
use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskPatch, TaskStatus, column_positions},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Seconds a failure notice stays visible unless configured otherwise.
const DEFAULT_NOTICE_TTL_SECS: i64 = 5;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Repository operation failed; the in-memory list was left unchanged.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task in the in-memory list has the identifier.
    #[error("unknown task: {0}")]
    UnknownTask(TaskId),
}

/// Result type for board controller operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Application state controller for the task board.
pub struct BoardController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    tasks: Vec<Task>,
    editor_open: bool,
    selected_task: Option<Task>,
    notice: Option<Notice>,
    notice_ttl: TimeDelta,
}

impl<R, C> BoardController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a controller with an empty task list and a closed editor.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            tasks: Vec::new(),
            editor_open: false,
            selected_task: None,
            notice: None,
            notice_ttl: TimeDelta::seconds(DEFAULT_NOTICE_TTL_SECS),
        }
    }

    /// Sets how long failure notices stay visible.
    #[must_use]
    pub fn with_notice_ttl(mut self, ttl: TimeDelta) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Returns the in-memory task list in backing order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Finds a task in the in-memory list.
    #[must_use]
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` while the editor is open.
    #[must_use]
    pub const fn is_editor_open(&self) -> bool {
        self.editor_open
    }

    /// Returns the task being edited, or `None` when the editor creates a
    /// new task or is closed.
    #[must_use]
    pub const fn selected_task(&self) -> Option<&Task> {
        self.selected_task.as_ref()
    }

    /// Returns the latest failure notice while it is still active.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        let now = self.clock.utc();
        self.notice
            .as_ref()
            .filter(|notice| notice.is_active(now, self.notice_ttl))
    }

    /// Clears the current failure notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replaces the in-memory list with every task in the store.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the store cannot be listed;
    /// the current list is kept.
    pub async fn load(&mut self) -> BoardResult<usize> {
        match self.repository.list_all().await {
            Ok(tasks) => {
                self.tasks = tasks;
                tracing::debug!(count = self.tasks.len(), "task list loaded");
                Ok(self.tasks.len())
            }
            Err(err) => Err(self.record_failure("load tasks", err)),
        }
    }

    /// Stores a new task and appends it to the list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the store rejects the task;
    /// nothing is appended.
    pub async fn create(&mut self, fields: TaskFields) -> BoardResult<TaskId> {
        match self.repository.create(&fields).await {
            Ok(id) => {
                tracing::debug!(task_id = %id, "task created");
                self.tasks.push(Task::new(id.clone(), fields));
                Ok(id)
            }
            Err(err) => Err(self.record_failure("create task", err)),
        }
    }

    /// Overwrites task fields in the store, then merges them locally.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the store rejects the update;
    /// the local task is left unchanged.
    pub async fn update(&mut self, id: &TaskId, patch: TaskPatch) -> BoardResult<()> {
        if let Err(err) = self.repository.replace_fields(id, &patch).await {
            return Err(self.record_failure("update task", err));
        }
        tracing::debug!(task_id = %id, "task updated");
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) {
            task.apply(&patch);
        }
        Ok(())
    }

    /// Deletes a task from the store, then from the list.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the store rejects the delete;
    /// the task stays in the list.
    pub async fn remove(&mut self, id: &TaskId) -> BoardResult<()> {
        if let Err(err) = self.repository.remove(id).await {
            return Err(self.record_failure("delete task", err));
        }
        tracing::debug!(task_id = %id, "task deleted");
        self.tasks.retain(|task| task.id() != id);
        Ok(())
    }

    /// Moves a task to another column.
    ///
    /// The whole current document is sent with the new status, not only the
    /// status field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] without contacting the store when
    /// the task is not in the list, or [`BoardError::Repository`] when the
    /// update fails.
    pub async fn change_status(&mut self, id: &TaskId, status: TaskStatus) -> BoardResult<()> {
        let Some(current) = self.find(id) else {
            tracing::warn!(task_id = %id, "status change for unknown task ignored");
            return Err(BoardError::UnknownTask(id.clone()));
        };
        let patch = TaskPatch::from(current.fields().clone().with_status(status));
        self.update(id, patch).await
    }

    /// Splices the backing list: removes the task at `from` and reinserts
    /// it at `to`.
    ///
    /// Returns `false` and leaves the list alone when either index is out of
    /// range or both are equal. The new order is not persisted.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.tasks.len() || to >= self.tasks.len() {
            return false;
        }
        let moved = self.tasks.remove(from);
        self.tasks.insert(to, moved);
        true
    }

    /// Reorders using positions within `status`'s column display order.
    ///
    /// The column positions are resolved to backing-list positions of the
    /// same tasks before splicing, so the visible effect survives the
    /// priority sort whenever the two tasks share a priority.
    pub fn reorder_in_column(&mut self, status: TaskStatus, from: usize, to: usize) -> bool {
        let positions = column_positions(&self.tasks, status);
        let (Some(&from_position), Some(&to_position)) = (positions.get(from), positions.get(to))
        else {
            return false;
        };
        self.reorder(from_position, to_position)
    }

    /// Opens the editor for an existing task, or for a new one when `id` is
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownTask`] when `id` is not in the list; the
    /// editor stays closed.
    pub fn open_editor(&mut self, id: Option<&TaskId>) -> BoardResult<()> {
        let selected = match id {
            Some(task_id) => Some(
                self.find(task_id)
                    .cloned()
                    .ok_or_else(|| BoardError::UnknownTask(task_id.clone()))?,
            ),
            None => None,
        };
        self.selected_task = selected;
        self.editor_open = true;
        Ok(())
    }

    /// Closes the editor and clears the selected task.
    pub fn close_editor(&mut self) {
        self.editor_open = false;
        self.selected_task = None;
    }

    /// Persists an editor submission and closes the editor.
    ///
    /// The editor closes whether or not the store accepted the change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Repository`] when the store rejects the change.
    pub async fn submit(&mut self, submission: TaskSubmission) -> BoardResult<()> {
        let outcome = match submission {
            TaskSubmission::Create(fields) => self.create(fields).await.map(|_| ()),
            TaskSubmission::Update { id, patch } => self.update(&id, patch).await,
        };
        self.close_editor();
        outcome
    }

    /// Applies an intent raised by the board view.
    ///
    /// # Errors
    ///
    /// Propagates the error of the operation the intent maps to.
    pub async fn dispatch(&mut self, intent: BoardIntent) -> BoardResult<()> {
        match intent {
            BoardIntent::Reorder { status, from, to } => {
                if self.reorder_in_column(status, from, to) {
                    tracing::trace!(%status, from, to, "column reordered");
                }
                Ok(())
            }
            BoardIntent::ChangeStatus { id, status } => self.change_status(&id, status).await,
            BoardIntent::Edit(id) => self.open_editor(Some(&id)),
            BoardIntent::Delete(id) => self.remove(&id).await,
            BoardIntent::Create => self.open_editor(None),
        }
    }

    fn record_failure(&mut self, operation: &str, err: TaskRepositoryError) -> BoardError {
        tracing::error!(error = %err, "failed to {operation}");
        self.notice = Some(Notice::new(
            format!("Could not {operation}: {err}"),
            self.clock.utc(),
        ));
        BoardError::Repository(err)
    }
}
