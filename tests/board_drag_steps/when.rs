//! When steps for board drag BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use kalenote::board::domain::{DropTarget, TaskId};
use rstest_bdd_macros::when;

fn drag_onto(
    world: &mut BoardWorld,
    task_id: TaskId,
    target: &DropTarget,
) -> Result<(), eyre::Report> {
    world
        .store
        .begin_transition(task_id)
        .wrap_err("start drag")?;
    let outcome = run_async(world.store.resolve_transition(task_id, target))
        .wrap_err("release drag")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#""{content}" is dragged onto the "{column}" column"#)]
fn dragged_onto_column(
    world: &mut BoardWorld,
    content: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    drag_onto(world, task_id, &DropTarget::from_element_id(&column))
}

#[when(r#""{content}" is dragged onto the task "{sibling}""#)]
fn dragged_onto_task(
    world: &mut BoardWorld,
    content: String,
    sibling: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    let sibling_id = world.task_id(&sibling)?;
    drag_onto(
        world,
        task_id,
        &DropTarget::from_element_id(&sibling_id.to_string()),
    )
}

#[when(r#""{content}" is dragged outside the board"#)]
fn dragged_outside(world: &mut BoardWorld, content: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    drag_onto(world, task_id, &DropTarget::Nothing)
}

#[when("the over-budget move is confirmed")]
fn confirm_move(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let outcome = run_async(world.store.confirm_pending_transition())
        .wrap_err("confirm held move")?;
    eyre::ensure!(outcome.value().is_some(), "confirmed task vanished");
    Ok(())
}

#[when("the over-budget move is cancelled")]
fn cancel_move(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .store
        .cancel_pending_transition()
        .wrap_err("cancel held move")?;
    Ok(())
}
