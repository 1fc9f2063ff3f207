//! Drop-target resolution and drag state machine tests.

use super::support::{task, timed_task};
use crate::board::domain::{
    DragState, DropTarget, PendingTransition, Priority, Settings, Status, Task, TaskId, TimeMode,
    TransitionError, TransitionPlan, plan_transition,
};
use rstest::{fixture, rstest};

#[fixture]
fn board() -> Vec<Task> {
    vec![
        task(1, "Triage mail", Status::Inbox, Priority::Normal),
        task(2, "Draft slides", Status::Todo, Priority::Medium),
        timed_task(3, Status::Doing, 90),
        task(4, "Ship release", Status::Done, Priority::High),
    ]
}

#[rstest]
#[case("inbox", DropTarget::Column(Status::Inbox))]
#[case("doing", DropTarget::Column(Status::Doing))]
#[case("42", DropTarget::Task(TaskId::new(42)))]
#[case("sidebar", DropTarget::Unknown("sidebar".to_owned()))]
fn element_ids_are_classified(#[case] raw: &str, #[case] expected: DropTarget) {
    assert_eq!(DropTarget::from_element_id(raw), expected);
}

#[rstest]
#[case(DropTarget::Column(Status::Done), Some(Status::Done))]
#[case(DropTarget::Task(TaskId::new(3)), Some(Status::Doing))]
#[case(DropTarget::Task(TaskId::new(99)), None)]
#[case(DropTarget::Unknown("sidebar".to_owned()), None)]
#[case(DropTarget::Nothing, None)]
fn targets_resolve_to_columns(
    board: Vec<Task>,
    #[case] target: DropTarget,
    #[case] expected: Option<Status>,
) {
    assert_eq!(target.resolve(&board), expected);
}

#[rstest]
fn release_over_own_column_is_unchanged(board: Vec<Task>) {
    let dragged = board.get(1).expect("todo task");

    let plan = plan_transition(
        dragged,
        &DropTarget::Column(Status::Todo),
        &board,
        &Settings::default(),
    );

    assert_eq!(plan, TransitionPlan::Unchanged);
}

#[rstest]
fn release_over_sibling_adopts_its_column(board: Vec<Task>) {
    let dragged = board.first().expect("inbox task");

    let plan = plan_transition(
        dragged,
        &DropTarget::Task(TaskId::new(4)),
        &board,
        &Settings::default(),
    );

    assert_eq!(plan, TransitionPlan::Commit(Status::Done));
}

#[rstest]
fn release_over_nothing_cancels(board: Vec<Task>) {
    let dragged = board.first().expect("inbox task");

    let plan = plan_transition(dragged, &DropTarget::Nothing, &board, &Settings::default());

    assert_eq!(plan, TransitionPlan::Cancel);
}

#[rstest]
fn over_budget_release_is_held(mut board: Vec<Task>) {
    let moving = timed_task(5, Status::Todo, 45);
    board.push(moving.clone());
    let settings = Settings::new("cool-blues", TimeMode::Daily, 2).expect("valid settings");

    let TransitionPlan::Hold(pending) =
        plan_transition(&moving, &DropTarget::Column(Status::Doing), &board, &settings)
    else {
        panic!("expected the move to be held");
    };

    assert_eq!(pending.task_id, TaskId::new(5));
    assert_eq!(pending.from, Status::Todo);
    assert_eq!(pending.to, Status::Doing);
    assert_eq!(pending.exceeded_hours(), 1);
}

#[test]
fn drag_state_walks_through_hold_and_confirm() {
    let mut state = DragState::default();
    let id = TaskId::new(7);

    state.begin(id).expect("idle drag can start");
    assert_eq!(state.dragged_task(), Some(id));
    state.release(id).expect("dragged task can be released");
    assert_eq!(state, DragState::Idle);

    state.hold(sample_pending(id));
    assert!(state.pending().is_some());
    assert_eq!(state.take_pending(), Ok(sample_pending(id)));
    assert_eq!(state, DragState::Idle);
}

#[test]
fn new_drag_is_refused_while_a_decision_is_pending() {
    let mut state = DragState::PendingAdmission(sample_pending(TaskId::new(7)));

    assert_eq!(
        state.begin(TaskId::new(8)),
        Err(TransitionError::AwaitingDecision(TaskId::new(7)))
    );
    assert_eq!(
        state.release(TaskId::new(7)),
        Err(TransitionError::AwaitingDecision(TaskId::new(7)))
    );
}

#[test]
fn releasing_a_task_that_is_not_dragged_is_refused() {
    let mut state = DragState::Dragging {
        task_id: TaskId::new(1),
    };

    assert_eq!(
        state.release(TaskId::new(2)),
        Err(TransitionError::NotDragging(TaskId::new(2)))
    );
    assert_eq!(state.dragged_task(), Some(TaskId::new(1)));
}

#[test]
fn cancel_drag_only_affects_active_drags() {
    let mut idle = DragState::Idle;
    let mut dragging = DragState::Dragging {
        task_id: TaskId::new(1),
    };
    let mut pending = DragState::PendingAdmission(sample_pending(TaskId::new(1)));

    assert!(!idle.cancel_drag());
    assert!(dragging.cancel_drag());
    assert_eq!(dragging, DragState::Idle);
    assert!(!pending.cancel_drag());
    assert!(pending.pending().is_some());
}

#[test]
fn taking_pending_without_a_hold_fails() {
    let mut state = DragState::Idle;

    assert_eq!(
        state.take_pending(),
        Err(TransitionError::NoPendingTransition)
    );
}

fn sample_pending(task_id: TaskId) -> PendingTransition {
    let tasks = vec![
        timed_task(99, Status::Doing, 120),
        timed_task(task_id.value(), Status::Todo, 60),
    ];
    let moving = tasks.get(1).expect("moving task");
    let settings = Settings::new("cool-blues", TimeMode::Daily, 2).expect("valid settings");
    match plan_transition(moving, &DropTarget::Column(Status::Doing), &tasks, &settings) {
        TransitionPlan::Hold(pending) => pending,
        other => panic!("expected a held move, got {other:?}"),
    }
}
