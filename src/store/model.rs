// src/store/model.rs

//! Task and column records.

use crate::types::{ColumnId, Priority, TaskId};

/// A work item on the board.
///
/// `column_id` always names the column whose sequence holds this task; only
/// the store changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: Option<String>,
    pub column_id: ColumnId,
    pub priority: Priority,
    pub assignees: Vec<String>,
    pub comment_count: u32,
    pub attachment_count: u32,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        title: impl Into<String>,
        column_id: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            column_id: column_id.into(),
            priority: Priority::default(),
            assignees: Vec::new(),
            comment_count: 0,
            attachment_count: 0,
        }
    }

    /// Apply every field present in `patch`.
    pub(crate) fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignees) = patch.assignees {
            self.assignees = assignees;
        }
        if let Some(count) = patch.comment_count {
            self.comment_count = count;
        }
        if let Some(count) = patch.attachment_count {
            self.attachment_count = count;
        }
    }
}

/// A static board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Left-to-right position on the board.
    pub ordinal: i32,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>, ordinal: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ordinal,
        }
    }
}

/// Payload of the create dialog.
///
/// When `id` is `None` the board generates one.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub id: Option<TaskId>,
    pub title: String,
    pub description: Option<String>,
    pub column_id: ColumnId,
    pub priority: Option<Priority>,
    pub assignees: Vec<String>,
    pub comment_count: u32,
    pub attachment_count: u32,
}

impl NewTask {
    pub fn new(title: impl Into<String>, column_id: impl Into<ColumnId>) -> Self {
        Self {
            title: title.into(),
            column_id: column_id.into(),
            ..Self::default()
        }
    }

    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            column_id: self.column_id,
            priority: self.priority.unwrap_or_default(),
            assignees: self.assignees,
            comment_count: self.comment_count,
            attachment_count: self.attachment_count,
        }
    }
}

/// Field edits from the edit dialog.
///
/// No column field: only the reorder engine moves tasks between columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub assignees: Option<Vec<String>>,
    pub comment_count: Option<u32>,
    pub attachment_count: Option<u32>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == TaskPatch::default()
    }
}
