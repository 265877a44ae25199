//! Axis-aligned rectangles and the capabilities every entity shares
//!
//! Top-left origin, y grows downward. A rectangle is both the collision and
//! the render footprint of an entity.

use serde::{Deserialize, Serialize};

use crate::half;

/// Integer axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Horizontal midpoint (floored)
    pub fn center_x(&self) -> i32 {
        half(self.left() + self.right())
    }

    /// Vertical midpoint (floored)
    pub fn center_y(&self) -> i32 {
        half(self.top() + self.bottom())
    }

    /// Strict overlap test; touching edges and empty rectangles never overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Anything with a footprint in the world
pub trait Positioned {
    fn rect(&self) -> &Rect;
}

/// Anything that slides with the camera when the world scrolls
pub trait ScrollShiftable {
    /// Move left by `dx` (negative `dx` moves right)
    fn shift(&mut self, dx: i32);
}

/// Immutable coloured rectangle: ladders and world-edge boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub color: [u8; 3],
}

impl Obstacle {
    pub fn new(rect: Rect, color: [u8; 3]) -> Self {
        Self { rect, color }
    }
}

impl Positioned for Obstacle {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl ScrollShiftable for Obstacle {
    fn shift(&mut self, dx: i32) {
        self.rect.translate(-dx, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let mut r = Rect::new(10, 20, 30, 40);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));

        r.set_right(100);
        assert_eq!(r.left(), 70);
        r.set_bottom(0);
        assert_eq!(r.top(), -40);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(9, 9, 10, 10)));
        // Shared edge only
        assert!(!a.overlaps(&Rect::new(10, 0, 10, 10)));
        assert!(!a.overlaps(&Rect::new(0, 10, 10, 10)));
        // Degenerate
        assert!(!a.overlaps(&Rect::new(5, 5, 0, 3)));
    }

    #[test]
    fn test_center_floors_negative() {
        let r = Rect::new(-5, -5, 2, 2);
        assert_eq!(r.center_x(), -4);
        let r = Rect::new(-4, 0, 1, 1);
        // floor(-7 / 2)
        assert_eq!(r.center_x(), -4);
    }

    #[test]
    fn test_obstacle_shift() {
        let mut ladder = Obstacle::new(Rect::new(500, 320, 300, 20), [255, 0, 0]);
        ladder.shift(68);
        assert_eq!(ladder.rect.left(), 432);
        ladder.shift(-8);
        assert_eq!(ladder.rect.left(), 440);
    }
}
