// src/sensor/keyboard.rs

//! Keyboard sensor for accessible dragging.
//!
//! The host tells the sensor which card has focus. A pick-up key starts a
//! drag on it; arrow keys jump the virtual drag rect to the nearest droppable
//! in that direction; the drop key commits and the cancel key reverts.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::collision::{DroppableRegistry, Point, Rect};
use crate::sensor::DragEvent;
use crate::types::{TargetId, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Char(char),
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_lowercase();
        match lower.as_str() {
            "space" | " " => Ok(Key::Space),
            "enter" | "return" => Ok(Key::Enter),
            "escape" | "esc" => Ok(Key::Escape),
            "tab" => Ok(Key::Tab),
            "up" | "arrowup" => Ok(Key::Up),
            "down" | "arrowdown" => Ok(Key::Down),
            "left" | "arrowleft" => Ok(Key::Left),
            "right" | "arrowright" => Ok(Key::Right),
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Key::Char(c)),
                    _ => Err(format!("unknown key name: {trimmed:?}")),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Space => f.write_str("space"),
            Key::Enter => f.write_str("enter"),
            Key::Escape => f.write_str("escape"),
            Key::Tab => f.write_str("tab"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Which keys pick up, drop and cancel. Arrow keys always move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub pick_up: Vec<Key>,
    pub drop: Vec<Key>,
    pub cancel: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            pick_up: vec![Key::Space, Key::Enter],
            drop: vec![Key::Space, Key::Enter],
            cancel: vec![Key::Escape],
        }
    }
}

impl KeyBindings {
    pub fn is_pick_up(&self, key: Key) -> bool {
        self.pick_up.contains(&key)
    }

    pub fn is_drop(&self, key: Key) -> bool {
        self.drop.contains(&key)
    }

    pub fn is_cancel(&self, key: Key) -> bool {
        self.cancel.contains(&key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether `to` lies strictly on this side of `from`.
    fn admits(self, from: Point, to: Point) -> bool {
        match self {
            Direction::Up => to.y < from.y,
            Direction::Down => to.y > from.y,
            Direction::Left => to.x < from.x,
            Direction::Right => to.x > from.x,
        }
    }
}

#[derive(Debug, Clone)]
enum KeyboardState {
    Idle,
    Dragging {
        task: TaskId,
        rect: Rect,
        over: Option<TargetId>,
    },
}

#[derive(Debug, Clone)]
pub struct KeyboardSensor {
    bindings: KeyBindings,
    focused: Option<TaskId>,
    state: KeyboardState,
}

impl KeyboardSensor {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            focused: None,
            state: KeyboardState::Idle,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn focus(&mut self, task: Option<TaskId>) {
        self.focused = task;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, KeyboardState::Dragging { .. })
    }

    pub fn release(&mut self, task: &str) {
        if self.focused.as_deref() == Some(task) {
            self.focused = None;
        }
        if matches!(&self.state, KeyboardState::Dragging { task: t, .. } if t == task) {
            self.state = KeyboardState::Idle;
        }
    }

    pub fn handle(&mut self, key: Key, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        if self.is_dragging() {
            self.handle_dragging(key, droppables)
        } else {
            self.handle_idle(key, droppables)
        }
    }

    fn handle_idle(&mut self, key: Key, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        if !self.bindings.is_pick_up(key) {
            return Vec::new();
        }
        let Some(task) = self.focused.clone() else {
            return Vec::new();
        };
        let card = TargetId::Task(task.clone());
        let Some(rect) = droppables.rect_of(&card) else {
            debug!(task = %task, "focused card has no droppable rect; cannot pick up");
            return Vec::new();
        };

        debug!(task = %task, "keyboard pick-up");
        self.state = KeyboardState::Dragging {
            task: task.clone(),
            rect,
            over: Some(card),
        };
        vec![DragEvent::Start { task }]
    }

    fn handle_dragging(&mut self, key: Key, droppables: &DroppableRegistry) -> Vec<DragEvent> {
        // Config validation rejects keys bound to both drop and cancel.
        if self.bindings.is_drop(key) {
            return match std::mem::replace(&mut self.state, KeyboardState::Idle) {
                KeyboardState::Dragging { task, over, .. } => {
                    debug!(task = %task, over = ?over, "keyboard drop");
                    vec![DragEvent::End { task, over }]
                }
                KeyboardState::Idle => Vec::new(),
            };
        }

        if self.bindings.is_cancel(key) {
            return match std::mem::replace(&mut self.state, KeyboardState::Idle) {
                KeyboardState::Dragging { task, .. } => {
                    debug!(task = %task, "keyboard drag cancelled");
                    vec![DragEvent::End { task, over: None }]
                }
                KeyboardState::Idle => Vec::new(),
            };
        }

        let Some(direction) = Direction::from_key(key) else {
            return Vec::new();
        };

        let KeyboardState::Dragging { task, rect, over } = &mut self.state else {
            return Vec::new();
        };

        let Some((next, next_rect)) = nearest_in_direction(task, *rect, direction, droppables)
        else {
            return Vec::new();
        };

        *rect = next_rect;
        *over = Some(next.clone());
        vec![DragEvent::Over {
            task: task.clone(),
            over: next,
        }]
    }
}

/// Nearest droppable (by center distance) strictly in `direction` from the
/// current rect, skipping the dragged card itself. Later registrations win
/// ties.
fn nearest_in_direction(
    active: &str,
    from: Rect,
    direction: Direction,
    droppables: &DroppableRegistry,
) -> Option<(TargetId, Rect)> {
    let origin = from.center();
    let mut best: Option<(&TargetId, Rect, f32)> = None;

    for (id, rect) in droppables.iter() {
        if id.as_task() == Some(active) {
            continue;
        }
        let center = rect.center();
        if !direction.admits(origin, center) {
            continue;
        }

        let distance = origin.distance_to(center);
        match best {
            Some((_, _, d)) if distance > d => {}
            _ => best = Some((id, *rect, distance)),
        }
    }

    best.map(|(id, rect, _)| (id.clone(), rect))
}
