//! Board controller workflows against the in-memory store.

use std::sync::Arc;

use super::helpers::{controller_for, repo, task_fields};
use rstest::rstest;
use taskboard::{
    board::{BoardView, ColumnDropZone, DragSession, TaskCard},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskPatch, TaskPriority, TaskStatus},
        ports::TaskRepository,
        services::BoardError,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_round_trips_through_the_store(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let fields = task_fields("Write report", TaskStatus::Todo, TaskPriority::High)?
        .with_description("outline first");
    let mut controller = controller_for(&repo);

    let id = controller.create(fields.clone()).await?;

    let mut fresh = controller_for(&repo);
    fresh.load().await?;
    let loaded = fresh
        .find(&id)
        .ok_or_else(|| eyre::eyre!("task {id} missing after reload"))?;
    assert_eq!(loaded.fields(), &fields);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_is_persisted(repo: Arc<InMemoryTaskRepository>) -> Result<(), eyre::Report> {
    let mut controller = controller_for(&repo);
    let id = controller
        .create(task_fields("move", TaskStatus::Todo, TaskPriority::Medium)?)
        .await?;

    controller.change_status(&id, TaskStatus::InProgress).await?;

    let stored = repo.list_all().await?;
    assert_eq!(
        stored.first().map(Task::status),
        Some(TaskStatus::InProgress)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_task_deleted_elsewhere_reports_not_found(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let mut controller = controller_for(&repo);
    let id = controller
        .create(task_fields("stale", TaskStatus::Todo, TaskPriority::Medium)?)
        .await?;
    repo.remove(&id).await?;

    let result = controller
        .update(&id, TaskPatch::new().with_title("fresh"))
        .await;

    assert!(matches!(result, Err(BoardError::Repository(_))));
    assert_eq!(controller.find(&id).map(Task::title), Some("stale"));
    assert!(controller.notice().is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dragging_a_card_onto_a_column_moves_it(
    repo: Arc<InMemoryTaskRepository>,
) -> Result<(), eyre::Report> {
    let mut controller = controller_for(&repo);
    let id = controller
        .create(task_fields("drag", TaskStatus::Todo, TaskPriority::Medium)?)
        .await?;

    let intent = {
        let view = BoardView::build(controller.tasks());
        let task = view
            .column(TaskStatus::Todo)
            .card(0)
            .ok_or_else(|| eyre::eyre!("card missing"))?;
        let mut session = DragSession::begin(&TaskCard::new(task, 0));
        session.drop_on(&[&ColumnDropZone::new(TaskStatus::Completed)])
    }
    .ok_or_else(|| eyre::eyre!("drop raised no intent"))?;
    controller.dispatch(intent).await?;

    let view = BoardView::build(controller.tasks());
    assert_eq!(view.locate(&id), Some((TaskStatus::Completed, 0)));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn local_reorder_is_not_persisted(repo: Arc<InMemoryTaskRepository>) -> Result<(), eyre::Report> {
    let mut controller = controller_for(&repo);
    for title in ["first", "second"] {
        controller
            .create(task_fields(title, TaskStatus::Todo, TaskPriority::Medium)?)
            .await?;
    }

    eyre::ensure!(
        controller.reorder_in_column(TaskStatus::Todo, 0, 1),
        "reorder should apply"
    );
    controller.load().await?;

    let titles: Vec<&str> = controller.tasks().iter().map(Task::title).collect();
    assert_eq!(titles, vec!["first", "second"]);
    Ok(())
}
