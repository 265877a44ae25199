//! Straight-line bullets

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Positioned, Rect, ScrollShiftable};
use crate::consts::{BULLET_DAMAGE, BULLET_SIZE, BULLET_SPEED};

/// Who fired a bullet, which decides what it can hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    /// Enemies and the boss
    Hostile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Travel direction, not necessarily normalized
    pub direction: Vec2,
    pub speed: f32,
    pub damage: i32,
    pub owner: BulletOwner,
}

impl Projectile {
    /// Spawn a bullet with its top-left corner at `(x, y)`
    pub fn new(x: i32, y: i32, direction: Vec2, owner: BulletOwner) -> Self {
        Self {
            rect: Rect::new(x, y, BULLET_SIZE, BULLET_SIZE),
            direction,
            speed: BULLET_SPEED,
            damage: BULLET_DAMAGE,
            owner,
        }
    }

    /// Displacement for one tick, truncated toward zero on each axis
    pub fn displacement(&self) -> (i32, i32) {
        let len = self.direction.length();
        if len <= f32::EPSILON {
            return (0, 0);
        }
        let step = self.direction * (self.speed / len);
        (step.x as i32, step.y as i32)
    }

    /// Move one tick along the direction
    pub fn advance(&mut self) {
        let (dx, dy) = self.displacement();
        self.rect.translate(dx, dy);
    }

    /// Culling test against the viewport frame (not the scrolled world)
    pub fn is_out_of_bounds(&self, viewport_width: i32, viewport_height: i32) -> bool {
        self.rect.left() < 0
            || self.rect.right() > viewport_width
            || self.rect.top() <= 0
            || self.rect.bottom() >= viewport_height
    }
}

impl Positioned for Projectile {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl ScrollShiftable for Projectile {
    fn shift(&mut self, dx: i32) {
        self.rect.translate(-dx, 0);
    }
}
