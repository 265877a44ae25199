//! Camera scroll over a level wider than the viewport
//!
//! The camera never moves. Instead every entity slides left or right while
//! the player is held at the trigger line. The two boundary markers slide
//! too; once a marker is inside the viewport frame the true world edge is
//! visible and the player may walk up to it.

use serde::{Deserialize, Serialize};

use super::geometry::{Obstacle, Rect, ScrollShiftable};
use crate::consts::{BOUNDARY_COLOR, BOUNDARY_WIDTH, SCROLL_LEFT_MARGIN};
use crate::half;

/// A scroll to apply this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    /// Leftward shift applied to every entity (negative shifts right)
    pub dx: i32,
    /// Where the player's left edge is pinned afterwards
    pub anchor: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub world_width: i32,
    /// Cumulative shift applied so far
    pub scroll_offset: i32,
    pub left_boundary: Obstacle,
    pub right_boundary: Obstacle,
}

impl World {
    pub fn new(viewport_width: i32, viewport_height: i32, world_width: i32) -> Self {
        let marker = |x| {
            Obstacle::new(
                Rect::new(x, 0, BOUNDARY_WIDTH, viewport_height),
                BOUNDARY_COLOR,
            )
        };
        Self {
            viewport_width,
            viewport_height,
            world_width,
            scroll_offset: 0,
            left_boundary: marker(-half(BOUNDARY_WIDTH)),
            right_boundary: marker(world_width - half(BOUNDARY_WIDTH)),
        }
    }

    /// World floor y; every fall ends here unless a ladder catches it
    pub fn floor(&self) -> i32 {
        self.viewport_height
    }

    /// Right scroll trigger line
    pub fn center_line(&self) -> i32 {
        half(self.viewport_width)
    }

    /// Decide whether the player's position triggers a scroll
    pub fn scroll_for(&self, player: &Rect) -> Option<Scroll> {
        let left_marker = self.left_boundary.rect.left() + half(BOUNDARY_WIDTH);
        let right_marker = self.right_boundary.rect.left() + half(BOUNDARY_WIDTH);

        if player.left() > self.center_line() && right_marker > self.viewport_width {
            Some(Scroll {
                dx: player.left() - self.center_line(),
                anchor: self.center_line(),
            })
        } else if player.left() < SCROLL_LEFT_MARGIN && left_marker < 0 {
            Some(Scroll {
                dx: player.left() - SCROLL_LEFT_MARGIN,
                anchor: SCROLL_LEFT_MARGIN,
            })
        } else {
            None
        }
    }

    /// Slide the boundary markers and record the shift
    pub fn shift(&mut self, dx: i32) {
        self.left_boundary.shift(dx);
        self.right_boundary.shift(dx);
        self.scroll_offset += dx;
    }
}
