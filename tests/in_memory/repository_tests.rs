//! In-memory store semantics: identifiers, merges, deletes, listing.

use std::sync::Arc;

use super::helpers::{repo, task_fields};
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskId, TaskPatch, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_distinct_identifiers(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let fields = task_fields("twin", TaskStatus::Todo, TaskPriority::Medium)?;

    let first = repo.create(&fields).await?;
    let second = repo.create(&fields).await?;

    eyre::ensure!(first != second, "identifiers must differ");
    eyre::ensure!(repo.len()? == 2, "both documents stored");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_preserves_insertion_order(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let mut created = Vec::new();
    for title in ["one", "two", "three"] {
        created.push(
            repo.create(&task_fields(title, TaskStatus::Todo, TaskPriority::Low)?)
                .await?,
        );
    }

    let listed: Vec<TaskId> = repo
        .list_all()
        .await?
        .iter()
        .map(|task| task.id().clone())
        .collect();

    assert_eq!(listed, created);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replace_fields_merges_only_given_keys(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let fields = task_fields("merge", TaskStatus::Todo, TaskPriority::High)?
        .with_description("keep me");
    let id = repo.create(&fields).await?;

    repo.replace_fields(&id, &TaskPatch::new().with_status(TaskStatus::Completed))
        .await?;

    let stored = repo.list_all().await?;
    let task = stored
        .first()
        .ok_or_else(|| eyre::eyre!("expected one stored task"))?;
    assert_eq!(task.status(), TaskStatus::Completed);
    assert_eq!(task.description(), "keep me");
    assert_eq!(task.priority(), TaskPriority::High);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replace_fields_on_missing_document_is_not_found(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let missing = TaskId::new("absent")?;

    let result = repo
        .replace_fields(&missing, &TaskPatch::new().with_title("x"))
        .await;

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_is_idempotent(repo: Arc<InMemoryTaskRepository>) -> Result<(), eyre::Report> {
    let id = repo
        .create(&task_fields("gone", TaskStatus::Todo, TaskPriority::Medium)?)
        .await?;

    repo.remove(&id).await?;
    repo.remove(&id).await?;

    eyre::ensure!(repo.is_empty()?, "store should be empty");
    eyre::ensure!(repo.list_all().await?.is_empty(), "listing should be empty");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn outage_fails_every_operation(repo: Arc<InMemoryTaskRepository>) -> Result<(), eyre::Report> {
    let id = repo
        .create(&task_fields("offline", TaskStatus::Todo, TaskPriority::Medium)?)
        .await?;
    repo.set_unavailable(true)?;

    let fields = task_fields("late", TaskStatus::Todo, TaskPriority::Medium)?;
    assert!(matches!(
        repo.create(&fields).await,
        Err(TaskRepositoryError::Unavailable(_))
    ));
    assert!(matches!(
        repo.replace_fields(&id, &TaskPatch::new().with_title("y")).await,
        Err(TaskRepositoryError::Unavailable(_))
    ));
    assert!(matches!(
        repo.remove(&id).await,
        Err(TaskRepositoryError::Unavailable(_))
    ));
    assert!(matches!(
        repo.list_all().await,
        Err(TaskRepositoryError::Unavailable(_))
    ));

    repo.set_unavailable(false)?;
    eyre::ensure!(repo.list_all().await?.len() == 1, "data survives the outage");
    Ok(())
}
