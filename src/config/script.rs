// src/config/script.rs

//! Replay scripts: a recorded sequence of host input fed to the runtime.
//!
//! ```toml
//! [[event]]
//! kind = "pointer_down"
//! x = 20.0
//! y = 60.0
//!
//! [[event]]
//! kind = "pointer_move"
//! x = 280.0
//! y = 60.0
//!
//! [[event]]
//! kind = "key"
//! key = "escape"
//! ```

use serde::Deserialize;

use crate::engine::BoardCommand;
use crate::errors::BoardError;
use crate::sensor::{Key, PointerDevice, PointerInput, PointerKind};
use crate::store::{NewTask, TaskPatch};
use crate::types::{Priority, TaskId};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptFile {
    #[serde(default)]
    pub event: Vec<ScriptEvent>,
}

impl ScriptFile {
    /// Convert every event, failing on the first bad one.
    pub fn commands(&self) -> Result<Vec<BoardCommand>, BoardError> {
        self.event
            .iter()
            .cloned()
            .map(BoardCommand::try_from)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        at_ms: u64,
        #[serde(default)]
        device: PointerDevice,
        /// Card under the pointer; hit-tested when absent.
        #[serde(default)]
        task: Option<TaskId>,
    },
    PointerMove {
        x: f32,
        y: f32,
        #[serde(default)]
        at_ms: u64,
        #[serde(default)]
        device: PointerDevice,
    },
    PointerUp {
        x: f32,
        y: f32,
        #[serde(default)]
        at_ms: u64,
        #[serde(default)]
        device: PointerDevice,
    },
    PointerCancel {
        #[serde(default)]
        at_ms: u64,
    },
    Tick {
        at_ms: u64,
    },
    Focus {
        #[serde(default)]
        task: Option<TaskId>,
    },
    Key {
        key: String,
    },
    Create {
        #[serde(default)]
        id: Option<TaskId>,
        title: String,
        column: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        priority: Option<Priority>,
        #[serde(default)]
        assignees: Vec<String>,
    },
    Edit {
        id: TaskId,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        priority: Option<Priority>,
        #[serde(default)]
        assignees: Option<Vec<String>>,
    },
    Delete {
        id: TaskId,
    },
}

impl TryFrom<ScriptEvent> for BoardCommand {
    type Error = BoardError;

    fn try_from(event: ScriptEvent) -> Result<Self, Self::Error> {
        let command = match event {
            ScriptEvent::PointerDown {
                x,
                y,
                at_ms,
                device,
                task,
            } => {
                let mut input = PointerInput::new(PointerKind::Down, device, x, y, at_ms);
                input.target = task;
                BoardCommand::Pointer(input)
            }
            ScriptEvent::PointerMove {
                x,
                y,
                at_ms,
                device,
            } => BoardCommand::Pointer(PointerInput::new(PointerKind::Move, device, x, y, at_ms)),
            ScriptEvent::PointerUp {
                x,
                y,
                at_ms,
                device,
            } => BoardCommand::Pointer(PointerInput::new(PointerKind::Up, device, x, y, at_ms)),
            ScriptEvent::PointerCancel { at_ms } => BoardCommand::Pointer(PointerInput::new(
                PointerKind::Cancel,
                PointerDevice::Mouse,
                0.0,
                0.0,
                at_ms,
            )),
            ScriptEvent::Tick { at_ms } => BoardCommand::Tick { at_ms },
            ScriptEvent::Focus { task } => BoardCommand::Focus(task),
            ScriptEvent::Key { key } => {
                let key = key
                    .parse::<Key>()
                    .map_err(|e| BoardError::ConfigError(format!("script key event: {e}")))?;
                BoardCommand::Key(key)
            }
            ScriptEvent::Create {
                id,
                title,
                column,
                description,
                priority,
                assignees,
            } => BoardCommand::Create(NewTask {
                id,
                description,
                priority,
                assignees,
                ..NewTask::new(title, column)
            }),
            ScriptEvent::Edit {
                id,
                title,
                description,
                priority,
                assignees,
            } => {
                // An empty string clears the description.
                let description = description.map(|d| if d.is_empty() { None } else { Some(d) });
                BoardCommand::Edit {
                    id,
                    patch: TaskPatch {
                        title,
                        description,
                        priority,
                        assignees,
                        ..TaskPatch::default()
                    },
                }
            }
            ScriptEvent::Delete { id } => BoardCommand::Delete { id },
        };
        Ok(command)
    }
}
