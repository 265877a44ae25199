//! Ladder Run - a side-scrolling ladder platformer shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, combat, scrolling)
//! - `level`: Data-driven level layout and validation
//!
//! Rendering, input polling, audio and assets belong to the host. The host
//! calls [`sim::tick`] once per fixed step and draws the returned snapshot.

pub mod level;
pub mod sim;

pub use level::{LevelConfig, LevelError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 30;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: i32 = 1280;
    pub const VIEWPORT_HEIGHT: i32 = 640;
    /// Default level width, in viewports
    pub const WORLD_SCREENS: u32 = 5;
    /// Default enemy roster size
    pub const ENEMY_COUNT: u32 = 50;

    /// Upward impulse applied when a jump starts (units/tick)
    pub const V_JUMP: i32 = -40;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: i32 = 5;
    /// Padding band below every grounded sprite, used for ground contact
    pub const FOOT_OFFSET: i32 = 40;

    /// Sprite sizes (width, height) before the foot band is added
    pub const PLAYER_SPRITE: (i32, i32) = (64, 96);
    pub const ENEMY_SPRITE: (i32, i32) = (72, 96);
    pub const BOSS_SPRITE: (i32, i32) = (288, 384);
    pub const BULLET_SIZE: i32 = 12;
    pub const COIN_SIZE: i32 = 64;
    pub const POWER_UP_SIZE: i32 = 46;

    /// Hit points
    pub const PLAYER_HP: i32 = 100;
    pub const ENEMY_HP: i32 = 30;
    pub const BOSS_HP: i32 = 1000;

    /// Horizontal walk speeds (units/tick)
    pub const PLAYER_SPEED: i32 = 8;
    pub const ENEMY_SPEED: i32 = 3;
    pub const BOSS_SPEED: i32 = 3;

    /// Fire cooldown periods (ticks)
    pub const PLAYER_FIRE_PERIOD: u32 = 10;
    pub const ENEMY_FIRE_PERIOD: u32 = 50;
    pub const BOSS_FIRE_PERIOD: u32 = 30;

    /// Spread fire
    pub const PLAYER_SPREAD_START: u32 = 1;
    pub const PLAYER_SPREAD_MAX: u32 = 5;
    pub const PLAYER_SPREAD_ANGLE: f32 = 15.0;
    pub const BOSS_SPREAD: u32 = 3;
    pub const BOSS_SPREAD_ANGLE: f32 = 30.0;

    /// Projectile defaults
    pub const BULLET_SPEED: f32 = 15.0;
    pub const BULLET_DAMAGE: i32 = 10;

    /// Loot table: one PowerUp slot out of this many rolls
    pub const LOOT_ROLLS: u32 = 11;
    /// Coin animation frame count
    pub const COIN_FRAMES: u32 = 8;

    /// Static obstacles
    pub const LADDER_HEIGHT: i32 = 20;
    pub const LADDER_COLOR: [u8; 3] = [255, 0, 0];
    pub const BOUNDARY_WIDTH: i32 = 20;
    pub const BOUNDARY_COLOR: [u8; 3] = [0, 0, 255];

    /// Left-edge scroll trigger margin
    pub const SCROLL_LEFT_MARGIN: i32 = 10;
    /// Boss spawn inset from the right edge of the viewport
    pub const BOSS_SPAWN_INSET: i32 = 100;
}

/// Floor division by two, matching pixel-centre rounding for negative coordinates
#[inline]
pub fn half(value: i32) -> i32 {
    value.div_euclid(2)
}
