// src/store/mod.rs

//! In-memory item store for the board.
//!
//! - [`model`] defines tasks, columns and the CRUD payloads.
//! - [`item_store`] owns every task and the per-column ordering.
//! - [`snapshot`] is the read-only `column -> ordered ids` view handed to
//!   subscribers.
//! - [`subscribers`] is the synchronous listener registry.

pub mod item_store;
pub mod model;
pub mod snapshot;
pub mod subscribers;

pub use item_store::ItemStore;
pub use model::{Column, NewTask, Task, TaskPatch};
pub use snapshot::BoardSnapshot;
pub use subscribers::{Subscribers, Unsubscribe};
