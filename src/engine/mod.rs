// src/engine/mod.rs

//! Reorder engine.
//!
//! This module ties together:
//! - the drag session (origin snapshot, idempotence bookkeeping)
//! - the pure reorder transitions applied on every drag-over
//! - the Idle / Dragging / Committing state machine that consumes
//!   [`DragEvent`]s
//! - an async shell that feeds board commands from a channel
//!
//! The pure state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use crate::sensor::{Key, PointerInput};
use crate::store::{NewTask, TaskPatch};
use crate::types::TaskId;

pub use crate::sensor::DragEvent;

/// Observable phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    /// A drop is being finalised. Reported by the step that handled the drop;
    /// the engine is Idle again once that step returns.
    Committing,
}

/// Why an event was not applied. Never fatal, never surfaced as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragFault {
    /// The event names a task or column that is not on the board, or a task
    /// other than the one being dragged.
    InvalidTarget,
    /// The dragged task disappeared from the store mid-drag.
    StaleTask,
}

/// What a single engine step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// A drag session began.
    Started,
    /// The store was reordered.
    Moved,
    /// Valid event, no mutation (self target, repeat, same column canvas).
    Unchanged,
    /// The drop finalised the live order.
    Committed,
    /// The task went back to its origin.
    Reverted,
    /// Event dropped; the session, if any, continues.
    Ignored(DragFault),
    /// The session was torn down.
    Aborted(DragFault),
}

impl DragOutcome {
    pub fn mutated(&self) -> bool {
        matches!(self, DragOutcome::Moved)
    }
}

/// Decision returned by the engine after handling a single [`DragEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStep {
    pub outcome: DragOutcome,
    /// Phase the step finished in. A completed drop reports Committing.
    pub phase: DragPhase,
}

/// Commands flowing into the async shell from a host or a replay script.
#[derive(Debug, Clone)]
pub enum BoardCommand {
    Pointer(PointerInput),
    Tick { at_ms: u64 },
    Key(Key),
    Focus(Option<TaskId>),
    Create(NewTask),
    Edit { id: TaskId, patch: TaskPatch },
    Delete { id: TaskId },
    /// Direct engine call, bypassing the sensors.
    Drag(DragEvent),
    /// Stop the runtime after the commands already received.
    Shutdown,
}

pub mod core;
pub mod event_handlers;
pub mod reorder;
pub mod runtime;
pub mod session;

pub use core::ReorderEngine;
pub use runtime::BoardRuntime;
pub use session::DragSession;
