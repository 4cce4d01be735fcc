// src/collision/registry.rs

//! Registered droppable rectangles.
//!
//! Order matters: later registrations sit above earlier ones for hit
//! testing and win ties in collision detection.

use crate::collision::geometry::{Point, Rect};
use crate::types::TargetId;

#[derive(Debug, Clone, Default)]
pub struct DroppableRegistry {
    entries: Vec<(TargetId, Rect)>,
}

impl DroppableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or re-measure a target. A re-registered target moves to the
    /// top of the z-order.
    pub fn register(&mut self, target: TargetId, rect: Rect) {
        self.entries.retain(|(id, _)| *id != target);
        self.entries.push((target, rect));
    }

    pub fn unregister(&mut self, target: &TargetId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(id, _)| id != target);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn rect_of(&self, target: &TargetId) -> Option<Rect> {
        self.entries
            .iter()
            .find(|(id, _)| id == target)
            .map(|(_, rect)| *rect)
    }

    /// Topmost task card containing `p`.
    pub fn task_at(&self, p: Point) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .filter(|(_, rect)| rect.contains(p))
            .find_map(|(id, _)| id.as_task())
    }

    /// Entries in registration order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = (&TargetId, &Rect)> {
        self.entries.iter().map(|(id, rect)| (id, rect))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
