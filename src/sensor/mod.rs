// src/sensor/mod.rs

//! Input sensors.
//!
//! Sensors turn raw pointer, touch and keyboard input into the three drag
//! lifecycle events. They read droppable geometry but never touch the item
//! store; the board feeds their output into the reorder engine.

use serde::Deserialize;

use crate::collision::DroppableRegistry;
use crate::types::{TargetId, TaskId};

pub mod keyboard;
pub mod pointer;

pub use keyboard::{Key, KeyBindings, KeyboardSensor};
pub use pointer::{PointerDevice, PointerInput, PointerKind, PointerSensor};

/// Drag lifecycle event emitted by a sensor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { task: TaskId },
    Over { task: TaskId, over: TargetId },
    /// `over == None` means released outside every droppable, or cancelled.
    End { task: TaskId, over: Option<TargetId> },
}

impl DragEvent {
    pub fn task(&self) -> &str {
        match self {
            DragEvent::Start { task }
            | DragEvent::Over { task, .. }
            | DragEvent::End { task, .. } => task,
        }
    }
}

/// Activation thresholds and collision padding (`[sensor]` section).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SensorOptions {
    /// Mouse: minimum travel before a press becomes a drag.
    #[serde(default = "default_activation_distance")]
    pub activation_distance: f32,

    /// Touch: how long a press must be held before it becomes a drag.
    #[serde(default = "default_touch_delay_ms")]
    pub touch_delay_ms: u64,

    /// Touch: how far the finger may wander during the hold.
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance: f32,

    /// How far outside the droppables the pointer may be and still hit one.
    #[serde(default = "default_collision_padding")]
    pub collision_padding: f32,
}

fn default_activation_distance() -> f32 {
    8.0
}

fn default_touch_delay_ms() -> u64 {
    250
}

fn default_touch_tolerance() -> f32 {
    5.0
}

fn default_collision_padding() -> f32 {
    24.0
}

impl Default for SensorOptions {
    fn default() -> Self {
        Self {
            activation_distance: default_activation_distance(),
            touch_delay_ms: default_touch_delay_ms(),
            touch_tolerance: default_touch_tolerance(),
            collision_padding: default_collision_padding(),
        }
    }
}

/// Every sensor a board routes input through.
#[derive(Debug, Clone)]
pub struct Sensors {
    pub pointer: PointerSensor,
    pub keyboard: KeyboardSensor,
}

impl Sensors {
    pub fn new(options: SensorOptions, bindings: KeyBindings) -> Self {
        Self {
            pointer: PointerSensor::new(options),
            keyboard: KeyboardSensor::new(bindings),
        }
    }

    /// Forget any press or drag that involves `task`.
    pub fn release(&mut self, task: &str) {
        self.pointer.release(task);
        self.keyboard.release(task);
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging() || self.keyboard.is_dragging()
    }

    pub fn handle_pointer(
        &mut self,
        input: &PointerInput,
        droppables: &DroppableRegistry,
    ) -> Vec<DragEvent> {
        if self.keyboard.is_dragging() {
            return Vec::new();
        }
        self.pointer.handle(input, droppables)
    }

    pub fn handle_key(&mut self, key: Key, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        if self.pointer.is_dragging() {
            // Escape still cancels a pointer drag.
            if self.keyboard.bindings().is_cancel(key) {
                return self.pointer.cancel();
            }
            return Vec::new();
        }
        self.keyboard.handle(key, droppables)
    }
}
