// tests/reorder_engine.rs

use taskboard::engine::{DragFault, DragOutcome, DragPhase};
use taskboard::store::TaskPatch;
use taskboard::types::TargetId;
use taskboard_test_utils::{board_with, init_tracing, order};

#[test]
fn cross_column_hover_inserts_before_hovered_task() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);

    assert_eq!(board.drag_start("2").outcome, DragOutcome::Started);
    let step = board.drag_over("2", TargetId::task("5"));

    assert_eq!(step.outcome, DragOutcome::Moved);
    assert_eq!(step.phase, DragPhase::Dragging);
    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);
    assert_eq!(board.task("2").map(|t| t.column_id.as_str()), Some("B"));
}

#[test]
fn same_column_hover_array_moves() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3", "4"])]);

    board.drag_start("1");
    board.drag_over("1", TargetId::task("3"));

    assert_eq!(order(&board, "A"), ["2", "3", "1", "4"]);
}

#[test]
fn same_column_hover_upwards_array_moves() {
    let mut board = board_with(&[("A", &["1", "2", "3", "4"])]);

    board.drag_start("4");
    board.drag_over("4", TargetId::task("2"));

    assert_eq!(order(&board, "A"), ["1", "4", "2", "3"]);
}

#[test]
fn drop_on_empty_column_canvas_moves_task() {
    init_tracing();
    let mut board = board_with(&[("A", &["6", "7", "8"]), ("C", &[])]);

    board.drag_start("7");
    assert_eq!(
        board.drag_over("7", TargetId::column("C")).outcome,
        DragOutcome::Moved
    );
    let end = board.drag_end("7", Some(TargetId::column("C")));

    assert_eq!(end.outcome, DragOutcome::Committed);
    assert_eq!(end.phase, DragPhase::Committing);
    assert_eq!(board.phase(), DragPhase::Idle);
    assert_eq!(order(&board, "C"), ["7"]);
    assert_eq!(order(&board, "A"), ["6", "8"]);
}

#[test]
fn drop_on_column_without_prior_hover_applies_once() {
    let mut board = board_with(&[("A", &["1", "2"]), ("B", &["3"])]);

    board.drag_start("1");
    board.drag_end("1", Some(TargetId::column("B")));

    assert_eq!(order(&board, "A"), ["2"]);
    assert_eq!(order(&board, "B"), ["3", "1"]);
}

#[test]
fn hovering_own_column_canvas_is_noop() {
    let mut board = board_with(&[("A", &["1", "2"]), ("B", &["3"])]);

    board.drag_start("1");
    let step = board.drag_over("1", TargetId::column("A"));

    assert_eq!(step.outcome, DragOutcome::Unchanged);
    assert_eq!(order(&board, "A"), ["1", "2"]);
}

#[test]
fn hovering_self_is_noop() {
    let mut board = board_with(&[("A", &["1", "2"])]);
    let before = board.store().revision();

    board.drag_start("1");
    let step = board.drag_over("1", TargetId::task("1"));

    assert_eq!(step.outcome, DragOutcome::Unchanged);
    assert_eq!(board.store().revision(), before);
}

#[test]
fn repeated_hover_without_state_change_is_idempotent() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3", "4"])]);

    board.drag_start("1");
    board.drag_over("1", TargetId::task("3"));
    let after_once = order(&board, "A");
    let revision = board.store().revision();

    let step = board.drag_over("1", TargetId::task("3"));

    assert_eq!(step.outcome, DragOutcome::Unchanged);
    assert_eq!(order(&board, "A"), after_once);
    assert_eq!(board.store().revision(), revision);
}

#[test]
fn editing_another_task_between_hovers_keeps_hover_idempotent() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3", "4"])]);

    board.drag_start("1");
    board.drag_over("1", TargetId::task("3"));
    assert_eq!(order(&board, "A"), ["2", "3", "1", "4"]);

    let order_revision = board.store().order_revision();
    board
        .edit_task(
            "4",
            TaskPatch {
                title: Some("Renamed".into()),
                ..TaskPatch::default()
            },
        )
        .expect("edit");
    assert_eq!(board.store().order_revision(), order_revision);

    let step = board.drag_over("1", TargetId::task("3"));

    assert_eq!(step.outcome, DragOutcome::Unchanged);
    assert_eq!(order(&board, "A"), ["2", "3", "1", "4"]);
}

#[test]
fn reordering_elsewhere_between_hovers_rearms_hover() {
    let mut board = board_with(&[("A", &["1", "2", "3", "4"])]);

    board.drag_start("1");
    board.drag_over("1", TargetId::task("3"));
    board.delete_task("4").expect("delete");

    let step = board.drag_over("1", TargetId::task("3"));

    assert_eq!(step.outcome, DragOutcome::Moved);
    assert_eq!(order(&board, "A"), ["2", "1", "3"]);
}

#[test]
fn repeated_cross_column_hover_is_idempotent() {
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);

    board.drag_start("2");
    board.drag_over("2", TargetId::task("5"));
    board.drag_over("2", TargetId::task("5"));

    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);
}

#[test]
fn cancel_immediately_after_start_restores_position() {
    let mut board = board_with(&[("A", &["1", "2", "3"])]);

    board.drag_start("2");
    let end = board.drag_end("2", None);

    assert_eq!(end.outcome, DragOutcome::Reverted);
    assert_eq!(board.store().position_of("2"), Some(("A", 1)));
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
}

#[test]
fn drop_step_reports_committing_then_engine_settles_idle() {
    let mut board = board_with(&[("A", &["1", "2", "3"])]);

    board.drag_start("2");
    board.drag_over("2", TargetId::task("3"));
    let cancel = board.drag_end("2", None);

    assert_eq!(cancel.outcome, DragOutcome::Reverted);
    assert_eq!(cancel.phase, DragPhase::Committing);
    assert_eq!(board.phase(), DragPhase::Idle);
    assert!(board.active_task().is_none());

    // A stray end after the drop is not a second commit.
    let stray = board.drag_end("2", None);
    assert!(matches!(stray.outcome, DragOutcome::Ignored(_)));
    assert_eq!(stray.phase, DragPhase::Idle);

    // The engine accepts the next drag right away.
    assert_eq!(board.drag_start("3").outcome, DragOutcome::Started);
}

#[test]
fn cancel_after_cross_column_hover_reverts_to_origin() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);

    board.drag_start("2");
    board.drag_over("2", TargetId::task("4"));
    board.drag_over("2", TargetId::column("B"));
    let end = board.drag_end("2", None);

    assert_eq!(end.outcome, DragOutcome::Reverted);
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
    assert_eq!(order(&board, "B"), ["4", "5"]);
    assert_eq!(board.task("2").map(|t| t.column_id.as_str()), Some("A"));
}

#[test]
fn revert_clamps_index_when_origin_column_shrank() {
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4"])]);

    board.drag_start("3");
    board.drag_over("3", TargetId::column("B"));
    board.delete_task("1").expect("delete");
    board.delete_task("2").expect("delete");
    board.drag_end("3", None);

    assert_eq!(order(&board, "A"), ["3"]);
    assert_eq!(order(&board, "B"), ["4"]);
}

#[test]
fn deleting_dragged_task_aborts_without_panicking() {
    init_tracing();
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);

    board.drag_start("2");
    board.drag_over("2", TargetId::task("5"));
    board.delete_task("2").expect("delete");

    assert_eq!(board.phase(), DragPhase::Idle);
    let over = board.drag_over("2", TargetId::task("4"));
    let end = board.drag_end("2", Some(TargetId::task("4")));

    assert!(matches!(over.outcome, DragOutcome::Ignored(_)));
    assert!(matches!(end.outcome, DragOutcome::Ignored(_)));
    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["4", "5"]);
    assert!(board.task("2").is_none());
}

#[test]
fn deleting_other_task_mid_drag_keeps_session() {
    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);

    board.drag_start("2");
    board.delete_task("5").expect("delete");
    board.drag_over("2", TargetId::task("4"));
    board.drag_end("2", Some(TargetId::task("4")));

    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["2", "4"]);
}

#[test]
fn unknown_target_is_ignored_and_drag_continues() {
    let mut board = board_with(&[("A", &["1", "2"])]);

    board.drag_start("1");
    let step = board.drag_over("1", TargetId::task("nope"));
    assert_eq!(step.outcome, DragOutcome::Ignored(DragFault::InvalidTarget));
    assert_eq!(step.phase, DragPhase::Dragging);

    let step = board.drag_over("1", TargetId::column("nowhere"));
    assert_eq!(step.outcome, DragOutcome::Ignored(DragFault::InvalidTarget));

    board.drag_over("1", TargetId::task("2"));
    assert_eq!(order(&board, "A"), ["2", "1"]);
}

#[test]
fn drop_on_unknown_target_keeps_live_order() {
    let mut board = board_with(&[("A", &["1", "2", "3"])]);

    board.drag_start("1");
    board.drag_over("1", TargetId::task("3"));
    let end = board.drag_end("1", Some(TargetId::task("ghost")));

    assert_eq!(end.outcome, DragOutcome::Committed);
    assert_eq!(order(&board, "A"), ["2", "3", "1"]);
}

#[test]
fn events_without_session_are_ignored() {
    let mut board = board_with(&[("A", &["1", "2"])]);

    let over = board.drag_over("1", TargetId::task("2"));
    let end = board.drag_end("1", None);

    assert!(matches!(over.outcome, DragOutcome::Ignored(_)));
    assert!(matches!(end.outcome, DragOutcome::Ignored(_)));
    assert_eq!(order(&board, "A"), ["1", "2"]);
}

#[test]
fn second_start_during_drag_is_ignored() {
    let mut board = board_with(&[("A", &["1", "2"])]);

    board.drag_start("1");
    let second = board.drag_start("2");

    assert_eq!(second.outcome, DragOutcome::Ignored(DragFault::InvalidTarget));
    assert_eq!(board.active_task(), Some("1"));
}

#[test]
fn events_for_other_task_do_not_touch_session() {
    let mut board = board_with(&[("A", &["1", "2", "3"])]);

    board.drag_start("1");
    board.drag_over("2", TargetId::task("3"));
    board.drag_end("2", None);

    assert_eq!(board.active_task(), Some("1"));
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
}

#[test]
fn listeners_see_every_drag_mutation() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut board = board_with(&[("A", &["1", "2", "3"]), ("B", &["4", "5"])]);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _unsubscribe = board.subscribe(move |snap| {
        sink.borrow_mut().push(snap.get("B").map(<[String]>::to_vec));
    });

    board.drag_start("2");
    board.drag_over("2", TargetId::task("5"));
    board.drag_end("2", None);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].as_deref(), Some(&["4".to_string(), "2".into(), "5".into()][..]));
    assert_eq!(seen[1].as_deref(), Some(&["4".to_string(), "5".into()][..]));
}
