// tests/runtime_replay.rs

use std::error::Error;

use tokio::sync::mpsc;

use taskboard::engine::{BoardCommand, BoardRuntime, DragEvent};
use taskboard::sensor::{Key, PointerInput};
use taskboard::store::{NewTask, TaskPatch};
use taskboard::types::TargetId;
use taskboard_test_utils::{init_tracing, with_timeout, BoardBuilder};

type TestResult = Result<(), Box<dyn Error>>;

fn runtime_board() -> taskboard::board::Board {
    BoardBuilder::new()
        .with_column_tasks("A", &["1", "2", "3"])
        .with_column_tasks("B", &["4", "5"])
        .with_default_layout()
        .build()
}

#[tokio::test]
async fn pointer_commands_drive_a_full_drag() -> TestResult {
    init_tracing();
    let (tx, rx) = mpsc::channel(16);
    let runtime = BoardRuntime::new(runtime_board(), rx);

    tx.send(BoardCommand::Pointer(PointerInput::down(100.0, 140.0)))
        .await?;
    tx.send(BoardCommand::Pointer(PointerInput::move_to(356.0, 140.0)))
        .await?;
    tx.send(BoardCommand::Pointer(PointerInput::up(356.0, 140.0)))
        .await?;
    tx.send(BoardCommand::Shutdown).await?;

    let snapshot = with_timeout(runtime.run()).await?;

    assert_eq!(snapshot.get("A"), Some(&["1".to_string(), "3".into()][..]));
    assert_eq!(
        snapshot.get("B"),
        Some(&["4".to_string(), "2".into(), "5".into()][..])
    );
    Ok(())
}

#[tokio::test]
async fn crud_and_keyboard_commands_are_applied_in_order() -> TestResult {
    init_tracing();
    let (tx, rx) = mpsc::channel(16);
    let runtime = BoardRuntime::new(runtime_board(), rx);

    tx.send(BoardCommand::Create(NewTask {
        id: Some("6".into()),
        ..NewTask::new("Six", "B")
    }))
    .await?;
    tx.send(BoardCommand::Edit {
        id: "6".into(),
        patch: TaskPatch {
            title: Some("Six!".into()),
            ..TaskPatch::default()
        },
    })
    .await?;
    tx.send(BoardCommand::Focus(Some("6".into()))).await?;
    tx.send(BoardCommand::Key(Key::Space)).await?;
    tx.send(BoardCommand::Key(Key::Left)).await?;
    tx.send(BoardCommand::Key(Key::Escape)).await?;
    tx.send(BoardCommand::Delete { id: "1".into() }).await?;
    // Rejected, but must not stop the runtime.
    tx.send(BoardCommand::Delete { id: "missing".into() }).await?;
    drop(tx);

    let snapshot = with_timeout(runtime.run()).await?;

    assert_eq!(snapshot.get("A"), Some(&["2".to_string(), "3".into()][..]));
    assert_eq!(
        snapshot.get("B"),
        Some(&["4".to_string(), "5".into(), "6".into()][..])
    );
    Ok(())
}

#[tokio::test]
async fn direct_drag_events_bypass_sensors() -> TestResult {
    let (tx, rx) = mpsc::channel(16);
    let runtime = BoardRuntime::new(runtime_board(), rx);

    tx.send(BoardCommand::Drag(DragEvent::Start { task: "1".into() }))
        .await?;
    tx.send(BoardCommand::Drag(DragEvent::Over {
        task: "1".into(),
        over: TargetId::task("3"),
    }))
    .await?;
    tx.send(BoardCommand::Drag(DragEvent::End {
        task: "1".into(),
        over: Some(TargetId::task("3")),
    }))
    .await?;
    tx.send(BoardCommand::Shutdown).await?;
    // Commands after shutdown are never applied.
    tx.send(BoardCommand::Delete { id: "2".into() }).await?;

    let snapshot = with_timeout(runtime.run()).await?;

    assert_eq!(
        snapshot.get("A"),
        Some(&["2".to_string(), "3".into(), "1".into()][..])
    );
    Ok(())
}
