//! Axis-aligned bounding boxes and overlap tests
//!
//! Screen coordinates: origin top-left, y grows downward.

use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Center point (text anchors, button labels)
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// True if the boxes overlap with nonzero area. Touching edges do not
    /// count as an overlap.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.min.x + other.size.x
            && other.min.x < self.min.x + self.size.x
            && self.min.y < other.min.y + other.size.y
            && other.min.y < self.min.y + self.size.y
    }

    /// Point-in-box test for click routing. Left/top edges are inclusive,
    /// right/bottom exclusive.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min.x
            && x < self.min.x + self.size.x
            && y >= self.min.y
            && y < self.min.y + self.size.y
    }
}
