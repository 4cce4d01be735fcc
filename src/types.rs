use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Stable task identifier.
pub type TaskId = String;

/// Static column identifier.
pub type ColumnId = String;

/// Task priority as shown on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "invalid priority: {other} (expected \"low\", \"medium\" or \"high\")"
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

/// Something a dragged card can be released onto.
///
/// Task cards and column canvases live in separate namespaces, so a task and
/// a column may share the same string id without ambiguity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetId {
    /// A task card.
    Task(TaskId),
    /// The empty drop zone of a column.
    Column(ColumnId),
}

impl TargetId {
    pub fn task(id: impl Into<TaskId>) -> Self {
        TargetId::Task(id.into())
    }

    pub fn column(id: impl Into<ColumnId>) -> Self {
        TargetId::Column(id.into())
    }

    pub fn as_task(&self) -> Option<&str> {
        match self {
            TargetId::Task(id) => Some(id),
            TargetId::Column(_) => None,
        }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Task(id) => write!(f, "task:{id}"),
            TargetId::Column(id) => write!(f, "column:{id}"),
        }
    }
}
