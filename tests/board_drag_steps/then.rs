//! Then steps for board drag BDD scenarios.

use super::world::BoardWorld;
use kalenote::board::{domain::Status, services::TransitionOutcome};
use rstest_bdd_macros::then;

#[then(r#""{content}" is in the "{column}" column"#)]
fn task_in_column(world: &BoardWorld, content: String, column: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(column.as_str())
        .map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))?;
    let task_id = world.task_id(&content)?;
    let visible = world
        .store
        .column(expected)
        .iter()
        .any(|task| task.id() == task_id);

    if !visible {
        return Err(eyre::eyre!("{content:?} is not in the {expected} column"));
    }
    Ok(())
}

#[then("the move awaits confirmation with {hours:u32} hours over budget")]
fn move_awaits_confirmation(world: &BoardWorld, hours: u32) -> Result<(), eyre::Report> {
    let Some(TransitionOutcome::AwaitingConfirmation(pending)) = world.last_outcome.as_ref()
    else {
        return Err(eyre::eyre!(
            "expected a held move, got {:?}",
            world.last_outcome
        ));
    };
    eyre::ensure!(
        pending.exceeded_hours() == hours,
        "expected {hours} hours over budget, got {}",
        pending.exceeded_hours()
    );
    eyre::ensure!(
        world.store.drag_state().pending() == Some(pending),
        "store does not hold the move"
    );
    Ok(())
}

#[then("no move is pending")]
fn no_move_pending(world: &BoardWorld) -> Result<(), eyre::Report> {
    if let Some(pending) = world.store.drag_state().pending() {
        return Err(eyre::eyre!("unexpected held move {pending:?}"));
    }
    Ok(())
}

#[then("the drag is cancelled")]
fn drag_cancelled(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_outcome, Some(TransitionOutcome::Cancelled)) {
        return Err(eyre::eyre!(
            "expected a cancelled drag, got {:?}",
            world.last_outcome
        ));
    }
    Ok(())
}

#[then(r#"the record store shows "{content}" in "{column}""#)]
fn record_store_shows(
    world: &BoardWorld,
    content: String,
    column: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    let record = world
        .persistence
        .task_record(task_id.value())?
        .ok_or_else(|| eyre::eyre!("{content:?} missing from the record store"))?;

    eyre::ensure!(
        record.status == column,
        "record store has {content:?} in {}, expected {column}",
        record.status
    );
    Ok(())
}
