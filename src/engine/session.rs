// src/engine/session.rs

//! Ephemeral drag session state.

use crate::types::{ColumnId, TargetId, TaskId};

/// Exists only while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_task: TaskId,
    /// Where the task was when the drag started; the revert destination.
    pub origin_column: ColumnId,
    pub origin_index: usize,
    /// Last drag-over target evaluated, with the store order revision right after.
    last_applied: Option<(TargetId, u64)>,
}

impl DragSession {
    pub fn new(active_task: TaskId, origin_column: ColumnId, origin_index: usize) -> Self {
        Self {
            active_task,
            origin_column,
            origin_index,
            last_applied: None,
        }
    }

    /// True when `over` was the last target evaluated and no column order has
    /// changed since.
    pub fn already_applied(&self, over: &TargetId, revision: u64) -> bool {
        matches!(&self.last_applied, Some((t, r)) if t == over && *r == revision)
    }

    pub fn last_target(&self) -> Option<&TargetId> {
        self.last_applied.as_ref().map(|(t, _)| t)
    }

    pub fn record(&mut self, over: TargetId, revision: u64) {
        self.last_applied = Some((over, revision));
    }
}

/// Engine state machine.
#[derive(Debug, Clone, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Dragging(DragSession),
    Committing(DragSession),
}

impl EngineState {
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            EngineState::Idle => None,
            EngineState::Dragging(s) | EngineState::Committing(s) => Some(s),
        }
    }
}
