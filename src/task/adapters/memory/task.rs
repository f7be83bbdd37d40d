//! In-memory document collection for tasks.
//!
//! Documents are kept as JSON objects so that field merges behave like a
//! schemaless document store: a patch overwrites only the keys it carries.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

type Document = Map<String, Value>;

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    documents: HashMap<TaskId, Document>,
    insertion_order: Vec<TaskId>,
    unavailable: bool,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates a store outage: while set, every operation fails with
    /// [`TaskRepositoryError::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn set_unavailable(&self, unavailable: bool) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.unavailable = unavailable;
        Ok(())
    }

    /// Returns the number of stored documents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn len(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.documents.len())
    }

    /// Returns `true` when the collection holds no documents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the state lock is
    /// poisoned.
    pub fn is_empty(&self) -> TaskRepositoryResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn ensure_available(state: &InMemoryTaskState) -> TaskRepositoryResult<()> {
    if state.unavailable {
        return Err(TaskRepositoryError::Unavailable(
            "in-memory store is offline".to_owned(),
        ));
    }
    Ok(())
}

/// Serializes a value that must encode as a JSON object.
fn to_document(value: &impl serde::Serialize) -> TaskRepositoryResult<Document> {
    match serde_json::to_value(value).map_err(TaskRepositoryError::persistence)? {
        Value::Object(document) => Ok(document),
        other => Err(TaskRepositoryError::persistence(std::io::Error::other(
            format!("expected a JSON object document, got {other}"),
        ))),
    }
}

fn document_to_task(id: &TaskId, document: &Document) -> TaskRepositoryResult<Task> {
    let fields = serde_json::from_value::<TaskFields>(Value::Object(document.clone()))
        .map_err(TaskRepositoryError::persistence)?;
    Ok(Task::new(id.clone(), fields))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, fields: &TaskFields) -> TaskRepositoryResult<TaskId> {
        let document = to_document(fields)?;
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        ensure_available(&state)?;

        let id = TaskId::new(Uuid::new_v4().simple().to_string())
            .map_err(TaskRepositoryError::persistence)?;
        state.documents.insert(id.clone(), document);
        state.insertion_order.push(id.clone());
        Ok(id)
    }

    async fn replace_fields(&self, id: &TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        let changes = to_document(patch)?;
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        ensure_available(&state)?;

        let document = state
            .documents
            .get_mut(id)
            .ok_or_else(|| TaskRepositoryError::NotFound(id.clone()))?;
        document.extend(changes);
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        ensure_available(&state)?;

        if state.documents.remove(id).is_some() {
            state.insertion_order.retain(|existing| existing != id);
        }
        Ok(())
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        ensure_available(&state)?;

        state
            .insertion_order
            .iter()
            .filter_map(|id| state.documents.get(id).map(|document| (id, document)))
            .map(|(id, document)| document_to_task(id, document))
            .collect()
    }
}
