//! Repository port for the task document collection.

use crate::task::domain::{Task, TaskFields, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task document store contract.
///
/// Each operation is a single round trip. Implementations apply no retries
/// and no ordering beyond a stable listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task document and returns the identifier the store
    /// assigned to it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the store rejects the write.
    async fn create(&self, fields: &TaskFields) -> TaskRepositoryResult<TaskId>;

    /// Overwrites the fields present in `patch`, leaving the rest of the
    /// document untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no document has the
    /// identifier.
    async fn replace_fields(&self, id: &TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()>;

    /// Deletes a task document. Deleting an absent document succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the store rejects the delete.
    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<()>;

    /// Returns every task document with its identifier attached.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the store cannot be read or a
    /// document does not decode as a task.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// No task document has the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The store could not be reached.
    #[error("task store unavailable: {0}")]
    Unavailable(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
