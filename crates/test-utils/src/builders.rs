#![allow(dead_code)]

use taskboard::board::{Board, BoardOptions};
use taskboard::collision::Rect;
use taskboard::layout::GridLayout;
use taskboard::sensor::{KeyBindings, SensorOptions};
use taskboard::store::{Column, Task};
use taskboard::types::{Priority, TargetId, TaskId};

/// Builder for `Board` to simplify test setup.
///
/// Columns get ordinals in the order they are added. Without
/// [`BoardBuilder::with_layout`] the board has no droppables until the test
/// registers some.
pub struct BoardBuilder {
    columns: Vec<Column>,
    tasks: Vec<Task>,
    options: BoardOptions,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            tasks: Vec::new(),
            options: BoardOptions::default(),
        }
    }

    pub fn with_column(mut self, id: &str) -> Self {
        let ordinal = self.columns.len() as i32;
        self.columns.push(Column::new(id, id, ordinal));
        self
    }

    /// Add a column and one task per id, titled after the id.
    pub fn with_column_tasks(mut self, id: &str, tasks: &[&str]) -> Self {
        self = self.with_column(id);
        for task in tasks {
            self.tasks.push(Task::new(*task, format!("Task {task}"), id));
        }
        self
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn with_sensor(mut self, sensor: SensorOptions) -> Self {
        self.options.sensor = sensor;
        self
    }

    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.options.keys = keys;
        self
    }

    /// Measure droppables on a grid after every mutation.
    pub fn with_layout(mut self, layout: GridLayout) -> Self {
        self.options.layout = Some(layout);
        self
    }

    pub fn with_default_layout(self) -> Self {
        self.with_layout(GridLayout::default())
    }

    pub fn build(self) -> Board {
        Board::with_options(self.tasks, self.columns, self.options)
            .expect("Failed to build valid board from builder")
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Task`.
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str, column: &str) -> Self {
        Self {
            task: Task::new(id, format!("Task {id}"), column),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = Some(description.to_string());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn assignee(mut self, name: &str) -> Self {
        self.task.assignees.push(name.to_string());
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Board with one column per `(column, tasks)` pair, in order, no layout.
pub fn board_with(columns: &[(&str, &[&str])]) -> Board {
    columns
        .iter()
        .fold(BoardBuilder::new(), |b, (col, tasks)| {
            b.with_column_tasks(col, tasks)
        })
        .build()
}

/// Current order of `column` as owned ids.
pub fn order(board: &Board, column: &str) -> Vec<TaskId> {
    board
        .store()
        .task_ids_in(column)
        .map(<[TaskId]>::to_vec)
        .unwrap_or_default()
}

/// Register a rect for a task card.
pub fn register_task(board: &mut Board, id: &str, rect: Rect) {
    board.register_droppable(TargetId::task(id), rect);
}

/// Register a rect for a column canvas.
pub fn register_column(board: &mut Board, id: &str, rect: Rect) {
    board.register_droppable(TargetId::column(id), rect);
}
