// src/collision/closest_corners.rs

//! "Closest corners" collision detection.
//!
//! The score of a candidate is the sum of the Euclidean distances between
//! each corner of the dragged rect and the matching corner of the candidate
//! (top-left to top-left, and so on). Lowest score wins; on an exact tie the
//! most recently registered candidate wins.
//!
//! The pointer gates the whole computation: if it is not inside any target
//! grown by `padding`, the drag is over nothing.

use tracing::trace;

use crate::collision::geometry::{Point, Rect};
use crate::collision::registry::DroppableRegistry;
use crate::types::TargetId;

/// Single pass over the registry, no allocation.
pub fn closest_corners(
    dragged: Rect,
    pointer: Point,
    droppables: &DroppableRegistry,
    padding: f32,
) -> Option<TargetId> {
    let corners = dragged.corners();
    let mut pointer_inside = false;
    let mut best: Option<(&TargetId, f32)> = None;

    for (id, rect) in droppables.iter() {
        if !pointer_inside && rect.inflate(padding).contains(pointer) {
            pointer_inside = true;
        }

        let score = corner_score(&corners, rect);
        match best {
            Some((_, best_score)) if score > best_score => {}
            _ => best = Some((id, score)),
        }
    }

    if !pointer_inside {
        trace!(x = pointer.x, y = pointer.y, "pointer outside every droppable");
        return None;
    }

    best.map(|(id, score)| {
        trace!(droppable = %id, score, "closest corners");
        id.clone()
    })
}

fn corner_score(corners: &[Point; 4], rect: &Rect) -> f32 {
    corners
        .iter()
        .zip(rect.corners().iter())
        .map(|(a, b)| a.distance_to(*b))
        .sum()
}
