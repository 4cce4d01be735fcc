// src/collision/mod.rs

//! Geometry, droppable registration and collision detection.
//!
//! - [`geometry`] has the `Point` / `Rect` primitives.
//! - [`registry`] keeps the droppable rectangles in registration order.
//! - [`closest_corners`] picks the single target a dragged rect is over.

pub mod closest_corners;
pub mod geometry;
pub mod registry;

pub use closest_corners::closest_corners;
pub use geometry::{Point, Rect};
pub use registry::DroppableRegistry;
