// src/engine/reorder.rs

//! Pure reorder transitions over the item store.
//!
//! Each function is O(total tasks) and touches nothing but the store.

use tracing::debug;

use crate::engine::DragFault;
use crate::engine::session::DragSession;
use crate::store::ItemStore;
use crate::types::TargetId;

/// Result of a transition: whether the store changed.
pub type Transition = std::result::Result<bool, DragFault>;

/// Apply the drag-over rules for `active` hovering `over`.
///
/// 1. over the active task itself: no-op;
/// 2. over a task in another column: insert before it in that column;
/// 3. over a task in the same column: array-move to its index;
/// 4. over a column canvas: append to that column unless already there.
pub fn apply_over(store: &mut ItemStore, active: &str, over: &TargetId) -> Transition {
    let Some((active_column, _)) = store.position_of(active) else {
        return Err(DragFault::StaleTask);
    };
    let active_column = active_column.to_string();

    match over {
        TargetId::Task(over_task) if over_task == active => Ok(false),
        TargetId::Task(over_task) => {
            let Some((over_column, over_index)) = store.position_of(over_task) else {
                return Err(DragFault::InvalidTarget);
            };
            let over_column = over_column.to_string();

            if over_column != active_column {
                debug!(task = %active, over = %over_task, column = %over_column, "push into hovered column");
            } else {
                debug!(task = %active, over = %over_task, index = over_index, "array move within column");
            }
            // Cross-column: removing the active task leaves T's index alone,
            // so inserting there lands immediately before T. Same column:
            // remove-then-insert at T's index is the array move.
            Ok(store.place(active, &over_column, over_index))
        }
        TargetId::Column(column) => {
            if !store.has_column(column) {
                return Err(DragFault::InvalidTarget);
            }
            if *column == active_column {
                return Ok(false);
            }
            debug!(task = %active, column = %column, "append to hovered column");
            Ok(store.append_to(active, column))
        }
    }
}

/// Put the session's task back at its pre-drag `(column, index)`.
///
/// The index is clamped when the column has shrunk since the drag began.
pub fn revert(store: &mut ItemStore, session: &DragSession) -> Transition {
    if !store.contains(&session.active_task) {
        return Err(DragFault::StaleTask);
    }
    debug!(
        task = %session.active_task,
        column = %session.origin_column,
        index = session.origin_index,
        "reverting to origin"
    );
    Ok(store.place(
        &session.active_task,
        &session.origin_column,
        session.origin_index,
    ))
}
