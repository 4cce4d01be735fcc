// src/layout.rs

//! Deterministic grid layout.
//!
//! Stands in for a renderer: measures one canvas per column and one rect
//! per card from a snapshot and registers them as droppables. Canvases are
//! registered before cards, so a card wins a corner tie against the column
//! it sits in.

use serde::Deserialize;

use crate::collision::{DroppableRegistry, Rect};
use crate::store::BoardSnapshot;
use crate::types::TargetId;

/// `[layout]` section. All lengths in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridLayout {
    #[serde(default)]
    pub origin_x: f32,
    #[serde(default)]
    pub origin_y: f32,
    #[serde(default = "default_column_width")]
    pub column_width: f32,
    #[serde(default = "default_column_gap")]
    pub column_gap: f32,
    #[serde(default = "default_header_height")]
    pub header_height: f32,
    #[serde(default = "default_card_height")]
    pub card_height: f32,
    #[serde(default = "default_card_gap")]
    pub card_gap: f32,
    /// Horizontal padding between a column's edge and its cards.
    #[serde(default = "default_card_inset")]
    pub card_inset: f32,
    #[serde(default = "default_canvas_min_height")]
    pub canvas_min_height: f32,
}

fn default_column_width() -> f32 {
    240.0
}

fn default_column_gap() -> f32 {
    16.0
}

fn default_header_height() -> f32 {
    40.0
}

fn default_card_height() -> f32 {
    64.0
}

fn default_card_gap() -> f32 {
    8.0
}

fn default_card_inset() -> f32 {
    8.0
}

fn default_canvas_min_height() -> f32 {
    320.0
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            column_width: default_column_width(),
            column_gap: default_column_gap(),
            header_height: default_header_height(),
            card_height: default_card_height(),
            card_gap: default_card_gap(),
            card_inset: default_card_inset(),
            canvas_min_height: default_canvas_min_height(),
        }
    }
}

impl GridLayout {
    pub fn column_x(&self, column: usize) -> f32 {
        self.origin_x + column as f32 * (self.column_width + self.column_gap)
    }

    /// Every canvas is as tall as the fullest column, plus one free slot.
    pub fn canvas_height(&self, max_rows: usize) -> f32 {
        let rows = (max_rows + 1) as f32;
        let content = self.header_height + rows * (self.card_height + self.card_gap);
        content.max(self.canvas_min_height)
    }

    pub fn canvas_rect(&self, column: usize, height: f32) -> Rect {
        Rect::new(self.column_x(column), self.origin_y, self.column_width, height)
    }

    pub fn card_rect(&self, column: usize, row: usize) -> Rect {
        Rect::new(
            self.column_x(column) + self.card_inset,
            self.origin_y + self.header_height + row as f32 * (self.card_height + self.card_gap),
            (self.column_width - 2.0 * self.card_inset).max(0.0),
            self.card_height,
        )
    }

    /// Replace every registered droppable with this layout of `snapshot`.
    pub fn apply(&self, snapshot: &BoardSnapshot, droppables: &mut DroppableRegistry) {
        droppables.clear();

        let max_rows = snapshot
            .columns
            .iter()
            .map(|(_, ids)| ids.len())
            .max()
            .unwrap_or(0);
        let height = self.canvas_height(max_rows);

        for (col, (column_id, _)) in snapshot.columns.iter().enumerate() {
            droppables.register(TargetId::Column(column_id.clone()), self.canvas_rect(col, height));
        }

        for (col, (_, ids)) in snapshot.columns.iter().enumerate() {
            for (row, id) in ids.iter().enumerate() {
                droppables.register(TargetId::Task(id.clone()), self.card_rect(col, row));
            }
        }
    }
}
