// src/sensor/pointer.rs

//! Mouse and touch sensor.
//!
//! A press on a task card arms the sensor. Activation rules:
//! - mouse: the pointer travels at least `activation_distance` from the press;
//! - touch: the press is held for `touch_delay_ms` without wandering further
//!   than `touch_tolerance`. Wandering further first abandons the press, so
//!   scroll gestures are left alone.
//!
//! Releasing before activation is a plain click and emits nothing.

use serde::Deserialize;
use tracing::debug;

use crate::collision::{closest_corners, DroppableRegistry, Point, Rect};
use crate::sensor::{DragEvent, SensorOptions};
use crate::types::{TargetId, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerDevice {
    #[default]
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw pointer sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub device: PointerDevice,
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub at_ms: u64,
    /// Card under the pointer on `Down`; hit-tested from the droppables when
    /// `None`.
    pub target: Option<TaskId>,
}

impl PointerInput {
    pub fn new(kind: PointerKind, device: PointerDevice, x: f32, y: f32, at_ms: u64) -> Self {
        Self {
            kind,
            device,
            position: Point::new(x, y),
            at_ms,
            target: None,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, PointerDevice::Mouse, x, y, 0)
    }

    pub fn move_to(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Move, PointerDevice::Mouse, x, y, 0)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, PointerDevice::Mouse, x, y, 0)
    }

    pub fn touch(mut self) -> Self {
        self.device = PointerDevice::Touch;
        self
    }

    pub fn at(mut self, at_ms: u64) -> Self {
        self.at_ms = at_ms;
        self
    }

    pub fn on_task(mut self, task: impl Into<TaskId>) -> Self {
        self.target = Some(task.into());
        self
    }
}

#[derive(Debug, Clone)]
enum PointerState {
    Idle,
    Pressed {
        task: TaskId,
        device: PointerDevice,
        origin: Point,
        pressed_at: u64,
        last: Point,
    },
    Dragging {
        task: TaskId,
        origin: Point,
        start_rect: Rect,
        last: Point,
    },
}

#[derive(Debug, Clone)]
pub struct PointerSensor {
    options: SensorOptions,
    state: PointerState,
}

impl PointerSensor {
    pub fn new(options: SensorOptions) -> Self {
        Self {
            options,
            state: PointerState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self.state, PointerState::Pressed { .. })
    }

    pub fn handle(&mut self, input: &PointerInput, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        match input.kind {
            PointerKind::Down => {
                self.press(input, droppables);
                Vec::new()
            }
            PointerKind::Move => self.motion(input.position, input.at_ms, droppables),
            PointerKind::Up => self.lift(input.position, droppables),
            PointerKind::Cancel => self.cancel(),
        }
    }

    /// Let time pass without movement; completes a touch hold.
    pub fn tick(&mut self, at_ms: u64, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        let PointerState::Pressed {
            device: PointerDevice::Touch,
            pressed_at,
            last,
            ..
        } = self.state
        else {
            return Vec::new();
        };

        if at_ms.saturating_sub(pressed_at) < self.options.touch_delay_ms {
            return Vec::new();
        }

        let mut events = self.activate(droppables);
        events.extend(self.drag_to(last, droppables));
        events
    }

    /// Abort the current drag; the card goes back where it came from.
    pub fn cancel(&mut self) -> Vec<DragEvent> {
        match std::mem::replace(&mut self.state, PointerState::Idle) {
            PointerState::Dragging { task, .. } => {
                debug!(task = %task, "pointer drag cancelled");
                vec![DragEvent::End { task, over: None }]
            }
            _ => Vec::new(),
        }
    }

    /// Drop all state about `task` without emitting anything.
    pub fn release(&mut self, task: &str) {
        let involved = match &self.state {
            PointerState::Idle => false,
            PointerState::Pressed { task: t, .. } | PointerState::Dragging { task: t, .. } => {
                t == task
            }
        };
        if involved {
            self.state = PointerState::Idle;
        }
    }

    fn press(&mut self, input: &PointerInput, droppables: &DroppableRegistry) {
        if !matches!(self.state, PointerState::Idle) {
            return;
        }

        let task = input
            .target
            .clone()
            .or_else(|| droppables.task_at(input.position).map(str::to_string));

        let Some(task) = task else {
            return;
        };

        debug!(task = %task, device = ?input.device, "pointer pressed on card");
        self.state = PointerState::Pressed {
            task,
            device: input.device,
            origin: input.position,
            pressed_at: input.at_ms,
            last: input.position,
        };
    }

    fn motion(&mut self, position: Point, at_ms: u64, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        if self.is_dragging() {
            return self.drag_to(position, droppables);
        }

        let PointerState::Pressed {
            device,
            origin,
            pressed_at,
            last,
            ..
        } = &mut self.state
        else {
            return Vec::new();
        };
        *last = position;
        let (device, origin, pressed_at) = (*device, *origin, *pressed_at);

        let travelled = origin.distance_to(position);
        let activate = match device {
            PointerDevice::Mouse => travelled >= self.options.activation_distance,
            PointerDevice::Touch => {
                let held = at_ms.saturating_sub(pressed_at);
                if held >= self.options.touch_delay_ms {
                    true
                } else if travelled > self.options.touch_tolerance {
                    debug!(travelled, "touch moved before hold completed; treating as scroll");
                    self.state = PointerState::Idle;
                    return Vec::new();
                } else {
                    false
                }
            }
        };

        if !activate {
            return Vec::new();
        }

        let mut events = self.activate(droppables);
        events.extend(self.drag_to(position, droppables));
        events
    }

    fn lift(&mut self, position: Point, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        match std::mem::replace(&mut self.state, PointerState::Idle) {
            PointerState::Dragging {
                task,
                origin,
                start_rect,
                ..
            } => {
                let rect = start_rect.translate(position.x - origin.x, position.y - origin.y);
                let over = closest_corners(rect, position, droppables, self.options.collision_padding);
                debug!(task = %task, over = ?over, "pointer released");
                vec![DragEvent::End { task, over }]
            }
            PointerState::Pressed { task, .. } => {
                debug!(task = %task, "released before activation; click");
                Vec::new()
            }
            PointerState::Idle => Vec::new(),
        }
    }

    /// `Pressed` -> `Dragging`, emitting `Start`.
    fn activate(&mut self, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        let PointerState::Pressed {
            task, origin, last, ..
        } = std::mem::replace(&mut self.state, PointerState::Idle)
        else {
            return Vec::new();
        };

        let start_rect = droppables
            .rect_of(&TargetId::Task(task.clone()))
            .unwrap_or_else(|| Rect::at(origin));

        debug!(task = %task, "pointer drag activated");
        self.state = PointerState::Dragging {
            task: task.clone(),
            origin,
            start_rect,
            last,
        };
        vec![DragEvent::Start { task }]
    }

    /// Move the dragged rect with the pointer and report what it is over.
    fn drag_to(&mut self, position: Point, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        let PointerState::Dragging {
            task,
            origin,
            start_rect,
            last,
        } = &mut self.state
        else {
            return Vec::new();
        };

        *last = position;
        let rect = start_rect.translate(position.x - origin.x, position.y - origin.y);
        match closest_corners(rect, position, droppables, self.options.collision_padding) {
            Some(over) => vec![DragEvent::Over {
                task: task.clone(),
                over,
            }],
            None => Vec::new(),
        }
    }
}
