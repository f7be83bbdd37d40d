//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use taskboard::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{DueDate, TaskFields, TaskId},
    ports::TaskRepository,
};

/// Environment variable naming the test database.
pub const TEST_DATABASE_URL_ENV: &str = "TASKBOARD_TEST_DATABASE_URL";

/// Connects to the test database and ensures the schema exists.
///
/// Returns `None` when no test database is configured.
///
/// # Errors
///
/// Returns an error if the pool cannot be built or the schema cannot be
/// applied.
pub async fn setup_repository() -> Result<Option<PostgresTaskRepository>, eyre::Report> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL_ENV) else {
        return Ok(None);
    };
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(2)
            .build(ConnectionManager::<PgConnection>::new(url))
    })
    .await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.ensure_schema().await?;
    Ok(Some(repository))
}

/// Builds fields with a title unique to the test run.
///
/// # Errors
///
/// Returns an error if the fixed date fails to parse.
pub fn unique_fields(prefix: &str) -> Result<TaskFields, eyre::Report> {
    Ok(TaskFields::new(
        format!("{prefix}-{}", uuid::Uuid::new_v4()),
        DueDate::parse("2024-12-24")?,
    ))
}

/// Deletes the documents a test created.
///
/// # Errors
///
/// Returns an error if a delete fails.
pub async fn cleanup(
    repository: &PostgresTaskRepository,
    ids: &[TaskId],
) -> Result<(), eyre::Report> {
    for id in ids {
        repository.remove(id).await?;
    }
    Ok(())
}
