// src/engine/core.rs

//! Pure reorder engine state machine.
//!
//! This module contains a synchronous, deterministic engine that consumes
//! [`DragEvent`]s and mutates the item store it is handed. It has no
//! channels, no timers and performs no IO; the async shell lives in
//! `engine::runtime`.

use tracing::debug;

use crate::engine::event_handlers::{handle_drag_end, handle_drag_over, handle_drag_start};
use crate::engine::session::{DragSession, EngineState};
use crate::engine::{DragEvent, DragFault, DragOutcome, DragPhase, EngineStep};
use crate::store::ItemStore;

/// Idle -> Dragging -> Committing -> Idle.
///
/// Committing is held for the rest of the `step` that handled the drop, so
/// the returned [`EngineStep`] reports it and the engine is Idle afterwards.
#[derive(Debug, Default)]
pub struct ReorderEngine {
    state: EngineState,
}

impl ReorderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        match self.state {
            EngineState::Idle => DragPhase::Idle,
            EngineState::Dragging(_) => DragPhase::Dragging,
            EngineState::Committing(_) => DragPhase::Committing,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    pub fn active_task(&self) -> Option<&str> {
        self.session().map(|s| s.active_task.as_str())
    }

    /// Handle a single drag event against `store`.
    pub fn step(&mut self, store: &mut ItemStore, event: &DragEvent) -> EngineStep {
        let outcome = match event {
            DragEvent::Start { task } => handle_drag_start(&mut self.state, store, task),
            DragEvent::Over { task, over } => handle_drag_over(&mut self.state, store, task, over),
            DragEvent::End { task, over } => {
                handle_drag_end(&mut self.state, store, task, over.as_ref())
            }
        };

        let phase = self.phase();
        if let EngineState::Committing(session) = &self.state {
            debug!(task = %session.active_task, "drop committed; engine idle");
            self.state = EngineState::Idle;
        }

        EngineStep { outcome, phase }
    }

    /// Tear down the session if it is dragging `task`. Used when the task is
    /// deleted mid-drag; nothing is reverted.
    pub fn abort_for(&mut self, task: &str) -> Option<DragOutcome> {
        if self.active_task() != Some(task) {
            return None;
        }
        debug!(task = %task, "aborting drag for removed task");
        self.state = EngineState::Idle;
        Some(DragOutcome::Aborted(DragFault::StaleTask))
    }
}
