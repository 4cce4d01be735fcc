// src/config/model.rs

use serde::Deserialize;

use crate::board::BoardOptions;
use crate::layout::GridLayout;
use crate::sensor::{KeyBindings, SensorOptions};
use crate::store::{Column, Task};
use crate::types::Priority;

/// Board configuration as read from a TOML file, before validation.
///
/// ```toml
/// [sensor]
/// activation_distance = 8.0
/// touch_delay_ms = 250
///
/// [keyboard]
/// cancel = ["escape"]
///
/// [[column]]
/// id = "todo"
/// title = "To do"
/// ordinal = 0
///
/// [[task]]
/// id = "1"
/// title = "Write docs"
/// column = "todo"
/// priority = "high"
/// ```
///
/// Every section except `[[column]]` is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBoardFile {
    #[serde(default)]
    pub sensor: SensorOptions,

    #[serde(default)]
    pub keyboard: KeyboardSection,

    /// Grid used to measure droppables when no renderer does.
    #[serde(default)]
    pub layout: GridLayout,

    #[serde(default)]
    pub column: Vec<ColumnConfig>,

    /// Initial tasks, in column order.
    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// `[keyboard]` section: key names as accepted by `Key::from_str`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyboardSection {
    #[serde(default = "default_pick_up")]
    pub pick_up: Vec<String>,
    #[serde(default = "default_drop")]
    pub drop: Vec<String>,
    #[serde(default = "default_cancel")]
    pub cancel: Vec<String>,
}

fn default_pick_up() -> Vec<String> {
    vec!["space".to_string(), "enter".to_string()]
}

fn default_drop() -> Vec<String> {
    vec!["space".to_string(), "enter".to_string()]
}

fn default_cancel() -> Vec<String> {
    vec!["escape".to_string()]
}

impl Default for KeyboardSection {
    fn default() -> Self {
        Self {
            pick_up: default_pick_up(),
            drop: default_drop(),
            cancel: default_cancel(),
        }
    }
}

/// `[[column]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub id: String,
    /// Defaults to the id.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ordinal: i32,
}

/// `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: String,
    pub title: String,
    /// Column id this task starts in.
    pub column: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub attachments: u32,
}

impl TaskConfig {
    pub fn to_task(&self) -> Task {
        Task {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            column_id: self.column.clone(),
            priority: self.priority,
            assignees: self.assignees.clone(),
            comment_count: self.comments,
            attachment_count: self.attachments,
        }
    }
}

impl ColumnConfig {
    pub fn to_column(&self) -> Column {
        Column {
            id: self.id.clone(),
            title: self.title.clone().unwrap_or_else(|| self.id.clone()),
            ordinal: self.ordinal,
        }
    }
}

/// Validated board configuration. Build it with `BoardFile::try_from`.
#[derive(Debug, Clone)]
pub struct BoardFile {
    pub sensor: SensorOptions,
    pub keys: KeyBindings,
    pub layout: GridLayout,
    pub column: Vec<ColumnConfig>,
    pub task: Vec<TaskConfig>,
}

impl BoardFile {
    pub(crate) fn new_unchecked(
        raw: RawBoardFile,
        keys: KeyBindings,
    ) -> Self {
        Self {
            sensor: raw.sensor,
            keys,
            layout: raw.layout,
            column: raw.column,
            task: raw.task,
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        self.column.iter().map(ColumnConfig::to_column).collect()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.task.iter().map(TaskConfig::to_task).collect()
    }

    pub fn board_options(&self) -> BoardOptions {
        BoardOptions {
            sensor: self.sensor,
            keys: self.keys.clone(),
            layout: Some(self.layout),
        }
    }
}
