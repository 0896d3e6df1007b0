//! Axis-aligned rectangle geometry
//!
//! Every entity is a point position plus a fixed sprite size; its bounding
//! rectangle is the position snapped down to the pixel grid. Positions stay
//! floating point so sub-pixel speed accumulates across ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding rectangle for an entity at `pos` with sprite `size`,
    /// snapped to the pixel grid
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x.floor(),
            y: pos.y.floor(),
            w: size.x,
            h: size.y,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Rectangle overlap test (shared edges do not count as overlap)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Point containment, used for the play button hit test
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
