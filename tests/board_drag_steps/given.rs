//! Given steps for board drag BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use kalenote::board::domain::{SettingsPatch, Status, TaskDraft};
use rstest_bdd_macros::given;

#[given("a board with {hours:u32} available hours")]
fn board_with_hours(world: &mut BoardWorld, hours: u32) -> Result<(), eyre::Report> {
    let outcome = run_async(
        world
            .store
            .update_settings(&SettingsPatch::new().with_available_time(i64::from(hours))),
    )
    .wrap_err("apply available hours")?;
    eyre::ensure!(outcome.remote().is_synced(), "settings did not sync");
    Ok(())
}

#[given(r#"a "{status}" task "{content}" estimated at {minutes:u32} minutes"#)]
fn estimated_task(
    world: &mut BoardWorld,
    status: String,
    content: String,
    minutes: u32,
) -> Result<(), eyre::Report> {
    let column = Status::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let draft = TaskDraft::new(content)
        .wrap_err("build scenario task")?
        .with_status(column)
        .with_time_duration(minutes);
    let outcome = run_async(world.store.add_task(draft));
    eyre::ensure!(outcome.remote().is_synced(), "task did not sync");
    Ok(())
}
