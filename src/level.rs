//! Level layout parameters
//!
//! Loaded from JSON by the host (or defaulted) and validated once before the
//! simulation is built. Invalid layouts are fatal: nothing is repaired mid-run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Narrowest viewport that still leaves a valid ladder width range
pub const MIN_VIEWPORT_WIDTH: i32 = 200;

/// Shortest viewport that still fits the tallest actor box (the boss plus its foot band)
pub const MIN_VIEWPORT_HEIGHT: i32 = BOSS_SPRITE.1 + FOOT_OFFSET;

/// Errors raised while loading or validating a level
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("viewport must be positive, got {width}x{height}")]
    NonPositiveViewport { width: i32, height: i32 },
    #[error("viewport width {0} is narrower than the minimum of {min}", min = MIN_VIEWPORT_WIDTH)]
    ViewportTooNarrow(i32),
    #[error("viewport height {0} is shorter than the minimum of {min}", min = MIN_VIEWPORT_HEIGHT)]
    ViewportTooShort(i32),
    #[error("world must span at least one screen")]
    EmptyWorld,
    #[error("enemy count must be positive")]
    NoEnemies,
    #[error("ladder row {0} must lie strictly between 0 and 1")]
    LadderRowOutOfRange(f32),
    #[error("failed to read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Level layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Visible window width
    pub viewport_width: i32,
    /// Visible window height; also the world floor
    pub viewport_height: i32,
    /// Level width measured in viewports
    pub world_screens: u32,
    /// Enemies spawned at level start
    pub enemy_count: u32,
    /// Ladder heights as fractions of the viewport height, one ladder per row per screen
    pub ladder_rows: Vec<f32>,
    /// RNG seed for layout, AI and loot
    pub seed: u64,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            world_screens: WORLD_SCREENS,
            enemy_count: ENEMY_COUNT,
            ladder_rows: vec![0.25, 0.5, 0.75],
            seed: 0,
        }
    }
}

impl LevelConfig {
    /// Parse and validate a JSON level description
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total scrollable width
    pub fn world_width(&self) -> i32 {
        self.viewport_width
            .saturating_mul(self.world_screens.min(i32::MAX as u32) as i32)
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if self.viewport_width <= 0 || self.viewport_height <= 0 {
            return Err(LevelError::NonPositiveViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        if self.viewport_width < MIN_VIEWPORT_WIDTH {
            return Err(LevelError::ViewportTooNarrow(self.viewport_width));
        }
        if self.viewport_height < MIN_VIEWPORT_HEIGHT {
            return Err(LevelError::ViewportTooShort(self.viewport_height));
        }
        if self.world_screens == 0 {
            return Err(LevelError::EmptyWorld);
        }
        if self.enemy_count == 0 {
            return Err(LevelError::NoEnemies);
        }
        if let Some(&row) = self.ladder_rows.iter().find(|r| !(**r > 0.0 && **r < 1.0)) {
            return Err(LevelError::LadderRowOutOfRange(row));
        }
        Ok(())
    }
}
