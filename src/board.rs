// src/board.rs

//! Board handle: the one object a host talks to.
//!
//! Owns the item store, the reorder engine, the droppable registry and the
//! sensors for a single board. CRUD collaborators call the `*_task` methods;
//! input is routed through the sensors into the engine.

use tracing::{debug, info};
use uuid::Uuid;

use crate::collision::{DroppableRegistry, Rect};
use crate::config::BoardFile;
use crate::engine::{DragEvent, DragPhase, EngineStep, ReorderEngine};
use crate::errors::{BoardError, Result};
use crate::layout::GridLayout;
use crate::sensor::{Key, KeyBindings, PointerInput, SensorOptions, Sensors};
use crate::store::{BoardSnapshot, Column, ItemStore, NewTask, Task, TaskPatch, Unsubscribe};
use crate::types::{TargetId, TaskId};

/// Tunables for a board instance.
#[derive(Debug, Clone, Default)]
pub struct BoardOptions {
    pub sensor: SensorOptions,
    pub keys: KeyBindings,
    /// When set, droppables are re-measured after every mutation.
    pub layout: Option<GridLayout>,
}

#[derive(Debug)]
pub struct Board {
    store: ItemStore,
    engine: ReorderEngine,
    droppables: DroppableRegistry,
    sensors: Sensors,
    layout: Option<GridLayout>,
}

impl Board {
    /// Build a board with default sensor options and no layout.
    pub fn initialize(tasks: Vec<Task>, columns: Vec<Column>) -> Result<Self> {
        Self::with_options(tasks, columns, BoardOptions::default())
    }

    pub fn with_options(tasks: Vec<Task>, columns: Vec<Column>, options: BoardOptions) -> Result<Self> {
        let store = ItemStore::new(columns, tasks)?;
        let mut board = Self {
            store,
            engine: ReorderEngine::new(),
            droppables: DroppableRegistry::new(),
            sensors: Sensors::new(options.sensor, options.keys),
            layout: options.layout,
        };
        board.relayout();

        info!(
            columns = board.store.columns().count(),
            tasks = board.store.len(),
            "board initialised"
        );
        Ok(board)
    }

    pub fn from_config(cfg: &BoardFile) -> Result<Self> {
        Self::with_options(cfg.tasks(), cfg.columns(), cfg.board_options())
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.store.task(id)
    }

    pub fn tasks_by_column(&self, column: &str) -> Option<Vec<&Task>> {
        self.store.tasks_by_column(column)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.store.snapshot()
    }

    pub fn phase(&self) -> DragPhase {
        self.engine.phase()
    }

    pub fn active_task(&self) -> Option<&str> {
        self.engine.active_task()
    }

    pub fn droppables(&self) -> &DroppableRegistry {
        &self.droppables
    }

    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    /// Listener receives the full snapshot after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn(&BoardSnapshot) + 'static,
    {
        self.store.subscribe(listener)
    }

    // -------------------------------------------------------------------------
    // CRUD collaborator calls
    // -------------------------------------------------------------------------

    /// Append a new task to the end of its column. Returns its id.
    pub fn create_task(&mut self, new: NewTask) -> Result<TaskId> {
        let id = new
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let column = new.column_id.clone();

        self.store.add_task(new.into_task(id.clone()), &column)?;
        debug!(task = %id, column = %column, "task created");
        self.relayout();
        Ok(id)
    }

    pub fn edit_task(&mut self, id: &str, patch: TaskPatch) -> Result<()> {
        self.store.update_task(id, patch)
    }

    /// Remove a task. A drag in flight on it is aborted without reverting.
    pub fn delete_task(&mut self, id: &str) -> Result<Task> {
        if !self.store.contains(id) {
            return Err(BoardError::TaskNotFound(id.to_string()));
        }

        if self.engine.abort_for(id).is_some() {
            info!(task = %id, "task deleted mid-drag; drag aborted");
        }
        self.sensors.release(id);
        self.droppables.unregister(&TargetId::Task(id.to_string()));

        let task = self.store.remove_task(id)?;
        self.relayout();
        Ok(task)
    }

    // -------------------------------------------------------------------------
    // Engine calls
    // -------------------------------------------------------------------------

    pub fn drag_start(&mut self, task: &str) -> EngineStep {
        self.dispatch(DragEvent::Start {
            task: task.to_string(),
        })
    }

    pub fn drag_over(&mut self, task: &str, over: TargetId) -> EngineStep {
        self.dispatch(DragEvent::Over {
            task: task.to_string(),
            over,
        })
    }

    pub fn drag_end(&mut self, task: &str, over: Option<TargetId>) -> EngineStep {
        self.dispatch(DragEvent::End {
            task: task.to_string(),
            over,
        })
    }

    /// Feed one drag event into the engine, re-measuring droppables if a
    /// column order changed.
    pub fn dispatch(&mut self, event: DragEvent) -> EngineStep {
        let before = self.store.order_revision();
        let step = self.engine.step(&mut self.store, &event);
        if self.store.order_revision() != before {
            self.relayout();
        }
        step
    }

    // -------------------------------------------------------------------------
    // Input routing
    // -------------------------------------------------------------------------

    pub fn handle_pointer(&mut self, input: &PointerInput) -> Vec<EngineStep> {
        let events = self.sensors.handle_pointer(input, &self.droppables);
        self.dispatch_all(events)
    }

    /// Advance the sensor clock; completes touch holds.
    pub fn tick(&mut self, at_ms: u64) -> Vec<EngineStep> {
        let events = self.sensors.pointer.tick(at_ms, &self.droppables);
        self.dispatch_all(events)
    }

    pub fn handle_key(&mut self, key: Key) -> Vec<EngineStep> {
        let events = self.sensors.handle_key(key, &self.droppables);
        self.dispatch_all(events)
    }

    /// Tell the keyboard sensor which card has focus.
    pub fn focus(&mut self, task: Option<TaskId>) {
        self.sensors.keyboard.focus(task);
    }

    fn dispatch_all(&mut self, events: Vec<DragEvent>) -> Vec<EngineStep> {
        events.into_iter().map(|e| self.dispatch(e)).collect()
    }

    // -------------------------------------------------------------------------
    // Droppables
    // -------------------------------------------------------------------------

    pub fn register_droppable(&mut self, target: TargetId, rect: Rect) {
        self.droppables.register(target, rect);
    }

    pub fn unregister_droppable(&mut self, target: &TargetId) -> bool {
        self.droppables.unregister(target)
    }

    /// Re-measure droppables with the configured layout, if any.
    pub fn relayout(&mut self) {
        if let Some(layout) = self.layout {
            layout.apply(&self.store.snapshot(), &mut self.droppables);
        }
    }

    pub fn set_layout(&mut self, layout: Option<GridLayout>) {
        self.layout = layout;
        self.relayout();
    }
}
