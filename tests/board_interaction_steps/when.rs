//! When steps for board interaction BDD scenarios.

use super::world::{BoardWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::{
    board::{BoardView, ColumnDropZone, DragSession, TaskCard, TaskEditorForm},
    task::domain::{TaskPriority, TaskStatus},
};

#[when(r#"I create a task titled "{title}" due "{date}" with priority "{priority}""#)]
fn create_task(
    world: &mut BoardWorld,
    title: String,
    date: String,
    priority: String,
) -> Result<(), eyre::Report> {
    world.controller.open_editor(None)?;
    let mut form = TaskEditorForm::from_selected(world.controller.selected_task());
    form.set_title(title);
    form.set_date(date);
    form.set_priority(TaskPriority::try_from(priority.as_str())?);
    let submission = form.submit()?;
    // Store failures surface as a notice; the Then steps check the outcome.
    let _outcome = run_async(world.controller.submit(submission));
    Ok(())
}

#[when(r#"I drag "{title}" onto the "{status}" column"#)]
fn drag_onto_column(world: &mut BoardWorld, title: String, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())?;
    let id = world.id_of(&title)?;
    let intent = {
        let view = BoardView::build(world.controller.tasks());
        let (column, index) = view
            .locate(&id)
            .ok_or_else(|| eyre::eyre!("task '{title}' not on the board"))?;
        let task = view
            .column(column)
            .card(index)
            .ok_or_else(|| eyre::eyre!("card for '{title}' missing"))?;
        let mut session = DragSession::begin(&TaskCard::new(task, index));
        session.drop_on(&[&ColumnDropZone::new(target)])
    };
    let intent = intent.ok_or_else(|| eyre::eyre!("drop raised no intent"))?;
    run_async(world.controller.dispatch(intent))?;
    Ok(())
}

#[when(r#"I drag "{dragged}" over "{hovered}""#)]
fn drag_over(world: &mut BoardWorld, dragged: String, hovered: String) -> Result<(), eyre::Report> {
    let dragged_id = world.id_of(&dragged)?;
    let hovered_id = world.id_of(&hovered)?;
    let intent = {
        let view = BoardView::build(world.controller.tasks());
        let (status, from) = view
            .locate(&dragged_id)
            .ok_or_else(|| eyre::eyre!("task '{dragged}' not on the board"))?;
        let (_, to) = view
            .locate(&hovered_id)
            .ok_or_else(|| eyre::eyre!("task '{hovered}' not on the board"))?;
        let column = view.column(status);
        let source = column
            .card(from)
            .ok_or_else(|| eyre::eyre!("card for '{dragged}' missing"))?;
        let target = column
            .card(to)
            .ok_or_else(|| eyre::eyre!("card for '{hovered}' missing"))?;
        let mut session = DragSession::begin(&TaskCard::new(source, from));
        session.hover(&TaskCard::new(target, to))
    };
    let intent = intent.ok_or_else(|| eyre::eyre!("hover raised no intent"))?;
    run_async(world.controller.dispatch(intent))?;
    Ok(())
}

#[when(r#"I delete "{title}""#)]
fn delete_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.id_of(&title)?;
    let intent = {
        let view = BoardView::build(world.controller.tasks());
        let (status, index) = view
            .locate(&id)
            .ok_or_else(|| eyre::eyre!("task '{title}' not on the board"))?;
        let task = view
            .column(status)
            .card(index)
            .ok_or_else(|| eyre::eyre!("card for '{title}' missing"))?;
        TaskCard::new(task, index).delete()
    };
    run_async(world.controller.dispatch(intent))?;
    Ok(())
}
