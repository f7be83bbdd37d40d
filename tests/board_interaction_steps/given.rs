//! Given steps for board interaction BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::domain::{DueDate, TaskFields, TaskPriority, TaskStatus};

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let loaded = run_async(world.controller.load()).wrap_err("load empty board")?;
    eyre::ensure!(loaded == 0, "expected an empty store, found {loaded} tasks");
    Ok(())
}

#[given(r#"a task "{title}" in "{status}" with priority "{priority}""#)]
fn task_on_board(
    world: &mut BoardWorld,
    title: String,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let fields = TaskFields::new(title, DueDate::parse("2024-05-01")?)
        .with_status(TaskStatus::try_from(status.as_str())?)
        .with_priority(TaskPriority::try_from(priority.as_str())?);
    run_async(world.controller.create(fields)).wrap_err("seed task")?;
    Ok(())
}

#[given("the task store is offline")]
fn store_offline(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.repository.set_unavailable(true)?;
    Ok(())
}
