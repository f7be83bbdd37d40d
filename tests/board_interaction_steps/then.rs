//! Then steps for board interaction BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::{
    board::BoardView,
    task::{domain::TaskStatus, ports::TaskRepository},
};

#[then(r#"the "{status}" column lists "{titles}""#)]
fn column_lists(world: &BoardWorld, status: String, titles: String) -> Result<(), eyre::Report> {
    let column_status = TaskStatus::try_from(status.as_str())?;
    let expected: Vec<&str> = titles.split(',').map(str::trim).collect();

    let view = BoardView::build(world.controller.tasks());
    let shown: Vec<&str> = view
        .column(column_status)
        .cards()
        .iter()
        .map(|task| task.title())
        .collect();

    eyre::ensure!(
        shown == expected,
        "expected {column_status} column {expected:?}, found {shown:?}"
    );
    Ok(())
}

#[then("the store holds {count:usize} task")]
fn store_holds_one(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    store_holds(world, count)
}

#[then("the store holds {count:usize} tasks")]
fn store_holds_many(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    store_holds(world, count)
}

fn store_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let stored = world.repository.len()?;
    eyre::ensure!(stored == count, "expected {count} stored tasks, found {stored}");
    Ok(())
}

#[then(r#"the stored status of "{title}" is "{status}""#)]
fn stored_status(world: &BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())?;
    let id = world.id_of(&title)?;
    let stored = run_async(world.repository.list_all())?;
    let task = stored
        .iter()
        .find(|task| task.id() == &id)
        .ok_or_else(|| eyre::eyre!("task '{title}' not in the store"))?;
    eyre::ensure!(
        task.status() == expected,
        "expected stored status {expected}, found {}",
        task.status()
    );
    Ok(())
}

#[then("the board shows {count:usize} task")]
fn board_shows_one(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    board_shows(world, count)
}

#[then("the board shows {count:usize} tasks")]
fn board_shows_many(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    board_shows(world, count)
}

fn board_shows(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.controller.tasks().len();
    eyre::ensure!(shown == count, "expected {count} tasks on the board, found {shown}");
    Ok(())
}

#[then(r#"a notice mentions "{text}""#)]
fn notice_mentions(world: &BoardWorld, text: String) -> Result<(), eyre::Report> {
    let notice = world
        .controller
        .notice()
        .ok_or_else(|| eyre::eyre!("no active notice"))?;
    eyre::ensure!(
        notice.message().contains(&text),
        "notice '{}' does not mention '{text}'",
        notice.message()
    );
    Ok(())
}
