//! `PostgreSQL` repository implementation for the task document collection.

use super::{
    models::{NewTaskDocumentRow, TaskDocumentRow},
    schema::tasks,
};
use crate::task::{
    domain::{Task, TaskFields, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// Schema bundled with the crate; every statement is idempotent.
const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-19-000000_create_tasks/up.sql");

/// `PostgreSQL`-backed task repository storing each task as a JSONB document.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `tasks` table and its index when they are missing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError`] when the database is unreachable or
    /// rejects the schema statements.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TASKS_SQL)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(|err| TaskRepositoryError::Unavailable(err.to_string()))?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, fields: &TaskFields) -> TaskRepositoryResult<TaskId> {
        let new_row = NewTaskDocumentRow {
            id: Uuid::new_v4(),
            document: serde_json::to_value(fields).map_err(TaskRepositoryError::persistence)?,
        };
        let id = TaskId::new(new_row.id.to_string()).map_err(TaskRepositoryError::persistence)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await?;
        Ok(id)
    }

    async fn replace_fields(&self, id: &TaskId, patch: &TaskPatch) -> TaskRepositoryResult<()> {
        let Some(document_id) = parse_document_id(id) else {
            return Err(TaskRepositoryError::NotFound(id.clone()));
        };
        let changes = serde_json::to_value(patch).map_err(TaskRepositoryError::persistence)?;
        let missing_id = id.clone();

        self.run_blocking(move |connection| {
            let updated = diesel::sql_query(concat!(
                "UPDATE tasks SET document = document || $1, updated_at = now() ",
                "WHERE id = $2",
            ))
            .bind::<diesel::sql_types::Jsonb, _>(changes)
            .bind::<diesel::sql_types::Uuid, _>(document_id)
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;

            if updated == 0 {
                return Err(TaskRepositoryError::NotFound(missing_id));
            }
            Ok(())
        })
        .await
    }

    async fn remove(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        // A non-UUID identifier cannot name a stored document.
        let Some(document_id) = parse_document_id(id) else {
            return Ok(());
        };

        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.find(document_id))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskDocumentRow::as_select())
                .load::<TaskDocumentRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }
}

fn parse_document_id(id: &TaskId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn row_to_task(row: TaskDocumentRow) -> TaskRepositoryResult<Task> {
    let TaskDocumentRow { id, document } = row;
    let task_id = TaskId::new(id.to_string()).map_err(TaskRepositoryError::persistence)?;
    let fields =
        serde_json::from_value::<TaskFields>(document).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::new(task_id, fields))
}
