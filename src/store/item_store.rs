// src/store/item_store.rs

//! Arena of tasks plus one ordered id sequence per column.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::errors::{BoardError, Result};
use crate::store::model::{Column, Task, TaskPatch};
use crate::store::snapshot::BoardSnapshot;
use crate::store::subscribers::{Subscribers, Unsubscribe};
use crate::types::{ColumnId, TaskId};

/// One column and the ordered ids of the tasks it holds.
#[derive(Debug, Clone)]
struct ColumnSlot {
    column: Column,
    order: Vec<TaskId>,
}

/// Sole owner of all `Task` values on a board.
///
/// Invariants:
/// - every task id appears in exactly one column sequence;
/// - `task.column_id` names that column;
/// - columns are fixed at construction and kept in ordinal order.
///
/// Every mutation bumps [`ItemStore::revision`] and notifies subscribers
/// synchronously. Only changes to column order bump
/// [`ItemStore::order_revision`].
#[derive(Debug)]
pub struct ItemStore {
    columns: Vec<ColumnSlot>,
    tasks: HashMap<TaskId, Task>,
    revision: u64,
    order_revision: u64,
    subscribers: Subscribers,
}

impl ItemStore {
    /// Build a store from static columns and an initial task list.
    ///
    /// Tasks land in their column in input order.
    pub fn new(columns: Vec<Column>, tasks: Vec<Task>) -> Result<Self> {
        if columns.is_empty() {
            return Err(BoardError::ConfigError(
                "a board needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.id.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column id '{}'",
                    column.id
                )));
            }
        }

        let mut columns = columns;
        // Stable: equal ordinals keep their input order.
        columns.sort_by_key(|c| c.ordinal);

        let mut store = Self {
            columns: columns
                .into_iter()
                .map(|column| ColumnSlot {
                    column,
                    order: Vec::new(),
                })
                .collect(),
            tasks: HashMap::new(),
            revision: 0,
            order_revision: 0,
            subscribers: Subscribers::default(),
        };

        for task in tasks {
            let column_id = task.column_id.clone();
            store.insert_task(task, &column_id)?;
        }

        debug!(
            columns = store.columns.len(),
            tasks = store.tasks.len(),
            "item store initialised"
        );

        Ok(store)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Columns in ordinal order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().map(|slot| &slot.column)
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.slot(id).map(|slot| &slot.column)
    }

    pub fn has_column(&self, id: &str) -> bool {
        self.slot(id).is_some()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Counter bumped by every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Counter bumped only when a column sequence changes. Field edits leave
    /// it alone.
    pub fn order_revision(&self) -> u64 {
        self.order_revision
    }

    /// Ordered ids of one column.
    pub fn task_ids_in(&self, column: &str) -> Option<&[TaskId]> {
        self.slot(column).map(|slot| slot.order.as_slice())
    }

    /// Order-preserving view of one column's tasks.
    pub fn tasks_by_column(&self, column: &str) -> Option<Vec<&Task>> {
        let slot = self.slot(column)?;
        Some(
            slot.order
                .iter()
                .filter_map(|id| self.tasks.get(id))
                .collect(),
        )
    }

    /// Column and index currently holding `id`.
    pub fn position_of(&self, id: &str) -> Option<(&str, usize)> {
        let (col, idx) = self.locate(id)?;
        Some((self.columns[col].column.id.as_str(), idx))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self
                .columns
                .iter()
                .map(|slot| (slot.column.id.clone(), slot.order.clone()))
                .collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Register a listener called with the full snapshot after every
    /// mutation. Call the returned closure to unsubscribe.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn(&BoardSnapshot) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    // -------------------------------------------------------------------------
    // CRUD mutators
    // -------------------------------------------------------------------------

    /// Append `task` to the end of `column_id`.
    pub fn add_task(&mut self, task: Task, column_id: &str) -> Result<()> {
        self.insert_task(task, column_id)?;
        self.order_revision += 1;
        self.commit();
        Ok(())
    }

    /// Edit task fields; the task keeps its column and position.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<()> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))?;

        task.apply(patch);
        debug!(task = %id, "task fields updated");
        self.commit();
        Ok(())
    }

    /// Remove a task from the arena and from its column.
    pub fn remove_task(&mut self, id: &str) -> Result<Task> {
        let (col, idx) = self
            .locate(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))?;

        self.columns[col].order.remove(idx);
        let task = self
            .tasks
            .remove(id)
            .ok_or_else(|| BoardError::TaskNotFound(id.to_string()))?;

        debug!(task = %id, column = %task.column_id, index = idx, "task removed");
        self.order_revision += 1;
        self.commit();
        Ok(task)
    }

    // -------------------------------------------------------------------------
    // Reorder primitives (engine only)
    // -------------------------------------------------------------------------

    /// Move `id` to `index` of `column_id`: remove it from its sequence, then
    /// insert at `index` clamped to the post-removal length.
    ///
    /// Returns `false` (and does not notify) when the task or column is
    /// unknown or the move would leave the order unchanged.
    pub(crate) fn place(&mut self, id: &str, column_id: &str, index: usize) -> bool {
        let Some((from_col, from_idx)) = self.locate(id) else {
            warn!(task = %id, "place: task not in store");
            return false;
        };
        let Some(to_col) = self.column_index(column_id) else {
            warn!(column = %column_id, "place: unknown column");
            return false;
        };

        if from_col == to_col {
            let last = self.columns[to_col].order.len() - 1;
            if index.min(last) == from_idx {
                return false;
            }
        }

        let moved = self.columns[from_col].order.remove(from_idx);
        let dest = &mut self.columns[to_col].order;
        let at = index.min(dest.len());
        dest.insert(at, moved);

        if from_col != to_col {
            if let Some(task) = self.tasks.get_mut(id) {
                task.column_id = column_id.to_string();
            }
        }

        debug!(
            task = %id,
            from_column = %self.columns[from_col].column.id,
            from_index = from_idx,
            to_column = %column_id,
            to_index = at,
            "task placed"
        );

        self.order_revision += 1;
        self.commit();
        true
    }

    /// Move `id` to the end of `column_id`.
    pub(crate) fn append_to(&mut self, id: &str, column_id: &str) -> bool {
        self.place(id, column_id, usize::MAX)
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn insert_task(&mut self, mut task: Task, column_id: &str) -> Result<()> {
        if self.tasks.contains_key(&task.id) {
            return Err(BoardError::DuplicateTask(task.id));
        }
        let col = self
            .column_index(column_id)
            .ok_or_else(|| BoardError::UnknownColumn(column_id.to_string()))?;

        task.column_id = column_id.to_string();
        self.columns[col].order.push(task.id.clone());
        debug!(task = %task.id, column = %column_id, "task appended");
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    fn slot(&self, column: &str) -> Option<&ColumnSlot> {
        self.columns.iter().find(|slot| slot.column.id == column)
    }

    fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|slot| slot.column.id == column)
    }

    /// Relies on `task.column_id`; scans only that column.
    fn locate(&self, id: &str) -> Option<(usize, usize)> {
        let column_id: &ColumnId = &self.tasks.get(id)?.column_id;
        let col = self.column_index(column_id)?;
        let idx = self.columns[col].order.iter().position(|t| t == id)?;
        Some((col, idx))
    }

    fn commit(&mut self) {
        self.revision += 1;
        let columns = &self.columns;
        self.subscribers.notify(|| BoardSnapshot {
            columns: columns
                .iter()
                .map(|slot| (slot.column.id.clone(), slot.order.clone()))
                .collect(),
        });
    }
}
