// src/store/snapshot.rs

use crate::types::{ColumnId, TaskId};

/// Full `column -> ordered task ids` mapping, columns in ordinal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub columns: Vec<(ColumnId, Vec<TaskId>)>,
}

impl BoardSnapshot {
    /// Ordered task ids of one column.
    pub fn get(&self, column: &str) -> Option<&[TaskId]> {
        self.columns
            .iter()
            .find(|(id, _)| id == column)
            .map(|(_, ids)| ids.as_slice())
    }

    /// Total number of tasks across all columns.
    pub fn total_len(&self) -> usize {
        self.columns.iter().map(|(_, ids)| ids.len()).sum()
    }

    /// Every task id, column by column.
    pub fn all_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns.iter().flat_map(|(_, ids)| ids.iter())
    }
}
