//! Collectibles dropped by defeated enemies

use serde::{Deserialize, Serialize};

use super::geometry::{Positioned, Rect, ScrollShiftable};
use crate::consts::{COIN_FRAMES, COIN_SIZE, POWER_UP_SIZE};

/// Pickup variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// One point of score, spins through its animation frames
    Coin,
    /// Two extra spread bullets, bobs in place
    PowerUp,
}

impl PickupKind {
    pub fn score_value(self) -> u32 {
        match self {
            PickupKind::Coin => 1,
            PickupKind::PowerUp => 0,
        }
    }

    pub fn bullet_bonus(self) -> u32 {
        match self {
            PickupKind::Coin => 0,
            PickupKind::PowerUp => 2,
        }
    }

    fn size(self) -> i32 {
        match self {
            PickupKind::Coin => COIN_SIZE,
            PickupKind::PowerUp => POWER_UP_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub rect: Rect,
    /// Animation counter
    pub frame: u32,
}

impl Pickup {
    /// Spawn with the top-left corner at `(x, y)`
    pub fn new(kind: PickupKind, x: i32, y: i32) -> Self {
        let size = kind.size();
        Self {
            kind,
            rect: Rect::new(x, y, size, size),
            frame: match kind {
                PickupKind::Coin => 0,
                PickupKind::PowerUp => 1,
            },
        }
    }

    /// Advance the idle animation by one tick
    pub fn animate(&mut self) {
        match self.kind {
            PickupKind::Coin => {
                self.frame = (self.frame + 1) % COIN_FRAMES + 1;
            }
            PickupKind::PowerUp => {
                self.frame = (self.frame + 1) % 2;
                let dy = if self.frame == 0 { -1 } else { 1 };
                self.rect.translate(0, dy);
            }
        }
    }
}

impl Positioned for Pickup {
    fn rect(&self) -> &Rect {
        &self.rect
    }
}

impl ScrollShiftable for Pickup {
    fn shift(&mut self, dx: i32) {
        self.rect.translate(-dx, 0);
    }
}
