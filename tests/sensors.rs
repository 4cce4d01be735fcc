// tests/sensors.rs

use taskboard::board::Board;
use taskboard::collision::Point;
use taskboard::engine::{DragOutcome, DragPhase, EngineStep};
use taskboard::layout::GridLayout;
use taskboard::sensor::{Key, PointerInput};
use taskboard::types::TargetId;
use taskboard_test_utils::{init_tracing, order, BoardBuilder};

/// Default grid: column A at x=0, column B at x=256; cards are 224x64 with
/// rows starting at y=40, 112, 184.
fn laid_out_board() -> Board {
    BoardBuilder::new()
        .with_column_tasks("A", &["1", "2", "3"])
        .with_column_tasks("B", &["4", "5"])
        .with_default_layout()
        .build()
}

fn outcomes(steps: &[EngineStep]) -> Vec<DragOutcome> {
    steps.iter().map(|s| s.outcome).collect()
}

#[test]
fn layout_measures_every_card_and_column() {
    let board = laid_out_board();
    let layout = GridLayout::default();

    assert_eq!(board.droppables().len(), 7);
    assert_eq!(board.droppables().task_at(Point::new(100.0, 140.0)), Some("2"));
    assert_eq!(
        board
            .droppables()
            .rect_of(&TargetId::task("5")),
        Some(layout.card_rect(1, 1))
    );
}

#[test]
fn mouse_drag_across_columns_commits_on_release() {
    init_tracing();
    let mut board = laid_out_board();

    assert!(board.handle_pointer(&PointerInput::down(100.0, 140.0)).is_empty());
    // Below the activation distance.
    assert!(board.handle_pointer(&PointerInput::move_to(104.0, 140.0)).is_empty());
    assert_eq!(board.phase(), DragPhase::Idle);

    let steps = board.handle_pointer(&PointerInput::move_to(356.0, 140.0));
    assert_eq!(outcomes(&steps), [DragOutcome::Started, DragOutcome::Moved]);
    assert_eq!(board.active_task(), Some("2"));
    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);

    let steps = board.handle_pointer(&PointerInput::up(356.0, 140.0));
    assert_eq!(outcomes(&steps), [DragOutcome::Committed]);
    assert_eq!(board.phase(), DragPhase::Idle);
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);
}

#[test]
fn mouse_click_without_travel_is_not_a_drag() {
    let mut board = laid_out_board();
    let before = board.store().revision();

    board.handle_pointer(&PointerInput::down(100.0, 60.0));
    board.handle_pointer(&PointerInput::move_to(102.0, 61.0));
    let steps = board.handle_pointer(&PointerInput::up(102.0, 61.0));

    assert!(steps.is_empty());
    assert_eq!(board.phase(), DragPhase::Idle);
    assert_eq!(board.store().revision(), before);
}

#[test]
fn press_outside_any_card_is_ignored() {
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(600.0, 600.0));
    let steps = board.handle_pointer(&PointerInput::move_to(700.0, 700.0));

    assert!(steps.is_empty());
    assert_eq!(board.phase(), DragPhase::Idle);
}

#[test]
fn release_outside_every_droppable_reverts() {
    init_tracing();
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(100.0, 140.0));
    board.handle_pointer(&PointerInput::move_to(356.0, 140.0));
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);

    // Far from every target: no over event, the live order stays.
    let steps = board.handle_pointer(&PointerInput::move_to(2000.0, 2000.0));
    assert!(steps.is_empty());

    let steps = board.handle_pointer(&PointerInput::up(2000.0, 2000.0));
    assert_eq!(outcomes(&steps), [DragOutcome::Reverted]);
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
    assert_eq!(order(&board, "B"), ["4", "5"]);
}

#[test]
fn escape_cancels_pointer_drag() {
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(100.0, 140.0));
    board.handle_pointer(&PointerInput::move_to(356.0, 140.0));
    let steps = board.handle_key(Key::Escape);

    assert_eq!(outcomes(&steps), [DragOutcome::Reverted]);
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);

    // The pointer sensor is idle again; the release is a no-op.
    assert!(board.handle_pointer(&PointerInput::up(356.0, 140.0)).is_empty());
}

#[test]
fn touch_hold_activates_after_delay() {
    init_tracing();
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(100.0, 140.0).touch().at(0));
    let steps = board.handle_pointer(&PointerInput::move_to(103.0, 140.0).touch().at(100));
    assert!(steps.is_empty());

    assert!(board.tick(200).is_empty());
    let steps = board.tick(300);
    assert_eq!(steps.first().map(|s| s.outcome), Some(DragOutcome::Started));
    assert_eq!(board.phase(), DragPhase::Dragging);

    board.handle_pointer(&PointerInput::move_to(359.0, 140.0).touch().at(350));
    assert_eq!(order(&board, "B"), ["4", "2", "5"]);

    let steps = board.handle_pointer(&PointerInput::up(359.0, 140.0).touch().at(400));
    assert_eq!(outcomes(&steps), [DragOutcome::Committed]);
}

#[test]
fn touch_moving_before_delay_is_a_scroll() {
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(100.0, 140.0).touch().at(0));
    board.handle_pointer(&PointerInput::move_to(100.0, 200.0).touch().at(50));

    assert!(board.tick(400).is_empty());
    assert!(board
        .handle_pointer(&PointerInput::move_to(356.0, 140.0).touch().at(450))
        .is_empty());
    assert_eq!(board.phase(), DragPhase::Idle);
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
}

#[test]
fn keyboard_pick_up_move_and_drop() {
    init_tracing();
    let mut board = laid_out_board();

    board.focus(Some("1".into()));
    let steps = board.handle_key(Key::Space);
    assert_eq!(outcomes(&steps), [DragOutcome::Started]);

    let steps = board.handle_key(Key::Right);
    assert_eq!(outcomes(&steps), [DragOutcome::Moved]);
    assert_eq!(order(&board, "A"), ["2", "3"]);
    assert_eq!(order(&board, "B"), ["1", "4", "5"]);

    let steps = board.handle_key(Key::Enter);
    assert_eq!(outcomes(&steps), [DragOutcome::Committed]);
    assert_eq!(board.phase(), DragPhase::Idle);
    assert_eq!(order(&board, "B"), ["1", "4", "5"]);
}

#[test]
fn keyboard_cancel_reverts() {
    let mut board = laid_out_board();

    board.focus(Some("1".into()));
    board.handle_key(Key::Enter);
    board.handle_key(Key::Right);
    let steps = board.handle_key(Key::Escape);

    assert_eq!(outcomes(&steps), [DragOutcome::Reverted]);
    assert_eq!(order(&board, "A"), ["1", "2", "3"]);
    assert_eq!(order(&board, "B"), ["4", "5"]);
}

#[test]
fn keyboard_without_focus_does_nothing() {
    let mut board = laid_out_board();

    assert!(board.handle_key(Key::Space).is_empty());
    assert!(board.handle_key(Key::Right).is_empty());
    assert_eq!(board.phase(), DragPhase::Idle);
}

#[test]
fn pointer_is_ignored_during_keyboard_drag() {
    let mut board = laid_out_board();

    board.focus(Some("3".into()));
    board.handle_key(Key::Space);
    board.handle_pointer(&PointerInput::down(100.0, 60.0));
    let steps = board.handle_pointer(&PointerInput::move_to(356.0, 60.0));

    assert!(steps.is_empty());
    assert_eq!(board.active_task(), Some("3"));
}

#[test]
fn deleting_card_mid_pointer_drag_resets_sensor() {
    let mut board = laid_out_board();

    board.handle_pointer(&PointerInput::down(100.0, 140.0));
    board.handle_pointer(&PointerInput::move_to(356.0, 140.0));
    board.delete_task("2").expect("delete");

    assert_eq!(board.phase(), DragPhase::Idle);
    assert!(board.handle_pointer(&PointerInput::up(356.0, 140.0)).is_empty());
    assert_eq!(order(&board, "A"), ["1", "3"]);
    assert_eq!(order(&board, "B"), ["4", "5"]);
}

#[test]
fn key_names_parse() {
    assert_eq!("Escape".parse::<Key>(), Ok(Key::Escape));
    assert_eq!("esc".parse::<Key>(), Ok(Key::Escape));
    assert_eq!("ArrowLeft".parse::<Key>(), Ok(Key::Left));
    assert_eq!("x".parse::<Key>(), Ok(Key::Char('x')));
    assert!("hyper".parse::<Key>().is_err());
}
