// src/engine/event_handlers.rs

//! Event handling logic for the reorder engine.

use tracing::{debug, warn};

use crate::engine::reorder::{apply_over, revert};
use crate::engine::session::{DragSession, EngineState};
use crate::engine::{DragFault, DragOutcome};
use crate::store::ItemStore;
use crate::types::TargetId;

/// Handle a drag start.
///
/// - From Idle, snapshot the task's origin and enter Dragging.
/// - Unknown tasks and starts during another drag are ignored.
pub fn handle_drag_start(state: &mut EngineState, store: &ItemStore, task: &str) -> DragOutcome {
    if let Some(session) = state.session() {
        debug!(
            task = %task,
            active = %session.active_task,
            "drag start while another drag is active; ignoring"
        );
        return DragOutcome::Ignored(DragFault::InvalidTarget);
    }

    let Some((column, index)) = store.position_of(task) else {
        debug!(task = %task, "drag start for unknown task; ignoring");
        return DragOutcome::Ignored(DragFault::InvalidTarget);
    };

    debug!(task = %task, column = %column, index, "drag started");
    *state = EngineState::Dragging(DragSession::new(task.to_string(), column.to_string(), index));
    DragOutcome::Started
}

/// Handle a drag over.
///
/// Re-evaluating the target the session applied last, with no order change
/// in between, is a no-op. Field edits do not count as order changes. That keeps repeated pointer samples over the same
/// card from walking the task back and forth.
pub fn handle_drag_over(
    state: &mut EngineState,
    store: &mut ItemStore,
    task: &str,
    over: &TargetId,
) -> DragOutcome {
    let EngineState::Dragging(session) = state else {
        return DragOutcome::Ignored(DragFault::InvalidTarget);
    };
    if session.active_task != task {
        debug!(task = %task, active = %session.active_task, "drag over for inactive task; ignoring");
        return DragOutcome::Ignored(DragFault::InvalidTarget);
    }
    if session.already_applied(over, store.order_revision()) {
        return DragOutcome::Unchanged;
    }

    match apply_over(store, task, over) {
        Ok(moved) => {
            session.record(over.clone(), store.order_revision());
            if moved {
                DragOutcome::Moved
            } else {
                DragOutcome::Unchanged
            }
        }
        Err(DragFault::StaleTask) => {
            warn!(task = %task, "dragged task vanished from the store; aborting drag");
            *state = EngineState::Idle;
            DragOutcome::Aborted(DragFault::StaleTask)
        }
        Err(fault) => {
            debug!(task = %task, over = %over, ?fault, "drag over ignored");
            DragOutcome::Ignored(fault)
        }
    }
}

/// Handle a drag end.
///
/// - `over == None`: the task returns to its origin.
/// - `over == Some(target)`: the live order is final. If the host never sent
///   an over for `target`, its transition is applied once here.
///
/// A finished drop leaves the engine in Committing; the caller settles it
/// back to Idle once the step has been reported.
pub fn handle_drag_end(
    state: &mut EngineState,
    store: &mut ItemStore,
    task: &str,
    over: Option<&TargetId>,
) -> DragOutcome {
    let session = match std::mem::take(state) {
        EngineState::Dragging(session) if session.active_task == task => session,
        other => {
            *state = other;
            debug!(task = %task, "drag end without a matching session; ignoring");
            return DragOutcome::Ignored(DragFault::InvalidTarget);
        }
    };

    if !store.contains(task) {
        warn!(task = %task, "dropped task vanished from the store; aborting drag");
        return DragOutcome::Aborted(DragFault::StaleTask);
    }

    let outcome = match over {
        None => match revert(store, &session) {
            Ok(_) => DragOutcome::Reverted,
            Err(fault) => return DragOutcome::Aborted(fault),
        },
        Some(target) => {
            if session.last_target() != Some(target) {
                match apply_over(store, task, target) {
                    Ok(_) => {}
                    Err(DragFault::InvalidTarget) => {
                        debug!(task = %task, over = %target, "drop target unknown; keeping live order");
                    }
                    Err(DragFault::StaleTask) => {
                        return DragOutcome::Aborted(DragFault::StaleTask);
                    }
                }
            }
            DragOutcome::Committed
        }
    };

    debug!(task = %task, ?outcome, "drag finished");
    *state = EngineState::Committing(session);
    outcome
}
