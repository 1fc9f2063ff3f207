//! In-memory integration tests for the board store.

use super::helpers::{draft, persistence, store_over};
use chrono::NaiveDate;
use kalenote::board::{
    adapters::memory::InMemoryBoardPersistence,
    domain::{
        DropTarget, PresetDraft, Priority, SettingsPatch, Status, TagSet, TaskPatch,
        TimeMode,
    },
    services::TransitionOutcome,
};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_survives_a_reload(
    persistence: Arc<InMemoryBoardPersistence>,
) -> Result<(), eyre::Report> {
    let mut store = store_over(&persistence);
    let report_task = store
        .add_task(draft("Finish report", Status::Todo, Priority::High, "work, urgent")?)
        .await
        .into_value();
    let milk = store
        .add_task(draft("Buy milk", Status::Inbox, Priority::Normal, "home")?)
        .await;
    let done = store
        .update_task(report_task.id(), &TaskPatch::new().with_status(Status::Done))
        .await;
    let settings = store
        .update_settings(&SettingsPatch::new().with_time_mode(TimeMode::Weekly))
        .await?;
    eyre::ensure!(
        milk.remote().is_synced() && done.remote().is_synced() && settings.remote().is_synced(),
        "every mutation should reach the record store"
    );

    let mut reloaded = store_over(&persistence);
    let report = reloaded.load().await;

    eyre::ensure!(report.is_complete(), "reload should be complete: {report:?}");
    eyre::ensure!(report.tasks_loaded == 2, "expected two tasks");
    let restored = reloaded
        .task(report_task.id())
        .ok_or_else(|| eyre::eyre!("report task missing after reload"))?;
    eyre::ensure!(restored.status() == Status::Done, "status not persisted");
    eyre::ensure!(restored.completed_at().is_some(), "completion not persisted");
    eyre::ensure!(
        restored.tags() == &TagSet::parse_list("urgent, work"),
        "tags not persisted"
    );
    eyre::ensure!(
        reloaded.settings().time_mode() == TimeMode::Weekly,
        "settings not persisted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_a_column_reaches_the_record_store(
    persistence: Arc<InMemoryBoardPersistence>,
) -> Result<(), eyre::Report> {
    let mut store = store_over(&persistence);
    for (content, status) in [
        ("Shipped", Status::Done),
        ("Filed", Status::Done),
        ("Drafting", Status::Doing),
    ] {
        let added = store
            .add_task(draft(content, status, Priority::Normal, "")?)
            .await;
        eyre::ensure!(added.remote().is_synced(), "add should sync");
    }

    let outcome = store.clear_column(Status::Done).await;

    eyre::ensure!(*outcome.value() == 2, "expected two removals");
    eyre::ensure!(outcome.remote().is_synced(), "clear should sync");
    eyre::ensure!(persistence.task_count()? == 1, "record store not cleared");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn confirmed_overrun_is_persisted(
    persistence: Arc<InMemoryBoardPersistence>,
) -> Result<(), eyre::Report> {
    let mut store = store_over(&persistence);
    let budget = store
        .update_settings(&SettingsPatch::new().with_available_time(2))
        .await?;
    eyre::ensure!(budget.value().capacity_minutes() == 120, "budget not applied");
    let long_build = draft("Long build", Status::Doing, Priority::Normal, "")?;
    let running = store.add_task(long_build.with_time_duration(100)).await;
    eyre::ensure!(running.remote().is_synced(), "add should sync");
    let code_review = draft("Code review", Status::Todo, Priority::Medium, "")?;
    let moving = store
        .add_task(code_review.with_time_duration(30))
        .await
        .into_value();

    store.begin_transition(moving.id())?;
    let outcome = store
        .resolve_transition(moving.id(), &DropTarget::from_element_id("doing"))
        .await?;
    let TransitionOutcome::AwaitingConfirmation(pending) = outcome else {
        return Err(eyre::eyre!("expected the move to be held"));
    };
    eyre::ensure!(pending.exceeded_hours() == 1, "expected a one hour overrun");

    let confirmed = store.confirm_pending_transition().await?;

    eyre::ensure!(confirmed.remote().is_synced(), "confirm should sync");
    let record = persistence
        .task_record(moving.id().value())?
        .ok_or_else(|| eyre::eyre!("moved task missing from the record store"))?;
    eyre::ensure!(record.status == "doing", "status not persisted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn presets_persist_and_schedule(
    persistence: Arc<InMemoryBoardPersistence>,
) -> Result<(), eyre::Report> {
    let mut store = store_over(&persistence);
    let preset = store
        .add_calendar_preset(
            PresetDraft::new("Team sync")?
                .with_default_tags(TagSet::parse_list("work"))
                .with_default_priority(Priority::Medium),
        )
        .await
        .into_value();
    let date = NaiveDate::from_ymd_opt(2024, 6, 3)
        .ok_or_else(|| eyre::eyre!("invalid test date"))?;

    let scheduled = store
        .add_task_from_preset(preset.id(), date)
        .await?
        .into_value();

    let mut reloaded = store_over(&persistence);
    let report = reloaded.load().await;
    eyre::ensure!(report.presets_loaded == 1, "preset not persisted");
    let due = reloaded.tasks_due_on(date);
    eyre::ensure!(due.len() == 1, "expected one task due on the date");
    eyre::ensure!(
        due.first().map(|task| task.id()) == Some(scheduled.id()),
        "wrong task scheduled"
    );
    eyre::ensure!(
        scheduled.content() == "Team sync - 2024-06-03",
        "unexpected content {}",
        scheduled.content()
    );

    let deleted = reloaded.delete_calendar_preset(preset.id()).await;
    eyre::ensure!(*deleted.value(), "preset should be deleted");
    eyre::ensure!(reloaded.presets().is_empty(), "preset still listed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_column_release_leaves_the_row_alone(
    persistence: Arc<InMemoryBoardPersistence>,
) -> Result<(), eyre::Report> {
    let mut store = store_over(&persistence);
    let created = store
        .add_task(draft("Sketch", Status::Todo, Priority::Normal, "")?)
        .await
        .into_value();
    let before = persistence.task_record(created.id().value())?;

    store.begin_transition(created.id())?;
    let outcome = store
        .resolve_transition(created.id(), &DropTarget::from_element_id("todo"))
        .await?;

    eyre::ensure!(
        matches!(outcome, TransitionOutcome::Unchanged),
        "expected no change, got {outcome:?}"
    );
    eyre::ensure!(
        persistence.task_record(created.id().value())? == before,
        "row should be untouched"
    );
    Ok(())
}
