//! Fundamental geometric types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in field space.
///
/// `pos` is the top-left corner; x grows rightward and y grows
/// downward, matching screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Right edge (x + width).
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Geometric center.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the top edge, where player shots leave the ship.
    pub fn center_top(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Midpoint of the bottom edge, where enemy shots leave the hull.
    pub fn center_bottom(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Axis-aligned overlap test. Boxes that merely touch along an
    /// edge do not count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}
