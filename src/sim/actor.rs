//! Player, enemies and the boss
//!
//! All three walk, jump, shoot and take damage through [`ActorCore`]. They
//! differ in how they decide what to do each tick and in how they fire.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::geometry::{Positioned, Rect, ScrollShiftable};
use super::projectile::{BulletOwner, Projectile};
use super::random::RandomSource;
use super::tick::TickInput;
use super::world::World;
use crate::consts::*;
use crate::half;

/// Horizontal facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> i32 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }

    /// Unit direction along the facing
    pub fn direction(self) -> Vec2 {
        Vec2::new(self.sign() as f32, 0.0)
    }
}

/// State shared by every grounded, shooting actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorCore {
    /// Sprite box plus the foot band below it
    pub rect: Rect,
    pub facing: Facing,
    pub hp: i32,
    pub body: KinematicBody,
    pub fire_counter: u32,
    pub fire_period: u32,
}

impl ActorCore {
    /// Spawn with the top-left corner at `(x, y)`; the rectangle grows by the foot band
    pub fn new(
        x: i32,
        y: i32,
        sprite: (i32, i32),
        hp: i32,
        fire_period: u32,
        initial_velocity: i32,
        floor: i32,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, sprite.0, sprite.1 + FOOT_OFFSET),
            facing: Facing::Right,
            hp,
            body: KinematicBody::new(floor, FOOT_OFFSET, initial_velocity),
            fire_counter: 0,
            fire_period: fire_period.max(1),
        }
    }

    /// Advance the fire cooldown; true on the tick it expires
    pub fn cooldown_expired(&mut self) -> bool {
        self.fire_counter = (self.fire_counter + 1) % self.fire_period;
        self.fire_counter == 0
    }

    /// Centre of the visible sprite, above the foot band
    pub fn sprite_center(&self) -> (i32, i32) {
        (
            self.rect.center_x(),
            half(self.rect.top() + self.rect.bottom() - self.body.foot_offset),
        )
    }

    /// Centre of the full bounding box, foot band included
    pub fn box_center(&self) -> (i32, i32) {
        (self.rect.center_x(), self.rect.center_y())
    }

    pub fn walk(&mut self, facing: Facing, speed: i32) {
        self.rect.translate(facing.sign() * speed, 0);
        self.facing = facing;
    }

    pub fn land_on(&mut self, surface: &Rect) {
        self.body.land_on(&mut self.rect, surface);
    }

    pub fn hurt(&mut self, damage: i32) {
        self.hp -= damage;
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    fn clamp_left(&mut self) {
        if self.rect.left() < 0 {
            self.rect.set_left(0);
        }
    }
}

/// Directions for a spread volley
///
/// One bullet along the facing, plus `(count + 1) / 2 - 1` symmetric pairs
/// at multiples of `angle_degrees` above and below it.
pub fn spread_directions(facing: Facing, count: u32, angle_degrees: f32) -> Vec<Vec2> {
    let fx = facing.sign() as f32;
    let mut directions = vec![facing.direction()];
    for i in 1..(count + 1) / 2 {
        let rise = fx * (angle_degrees * i as f32).to_radians().tan();
        directions.push(Vec2::new(fx, rise));
        directions.push(Vec2::new(fx, -rise));
    }
    directions
}

fn volley(origin: (i32, i32), directions: Vec<Vec2>, owner: BulletOwner) -> Vec<Projectile> {
    directions
        .into_iter()
        .map(|direction| Projectile::new(origin.0, origin.1, direction, owner))
        .collect()
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub core: ActorCore,
    /// Bullets per volley
    pub spread_count: u32,
    pub spread_angle: f32,
}

impl Player {
    pub fn new(x: i32, y: i32, floor: i32) -> Self {
        Self {
            core: ActorCore::new(
                x,
                y,
                PLAYER_SPRITE,
                PLAYER_HP,
                PLAYER_FIRE_PERIOD,
                V_JUMP,
                floor,
            ),
            spread_count: PLAYER_SPREAD_START,
            spread_angle: PLAYER_SPREAD_ANGLE,
        }
    }

    /// Apply one tick of input and physics
    pub fn update(&mut self, input: &TickInput, world: &World) {
        if input.move_right {
            self.core.walk(Facing::Right, PLAYER_SPEED);
        } else if input.move_left {
            self.core.walk(Facing::Left, PLAYER_SPEED);
        }

        self.core
            .body
            .step(&mut self.core.rect, input.jump, world.floor());

        if self.core.rect.left() < 0 {
            self.core.rect.set_left(0);
        } else if self.core.rect.right() > world.viewport_width {
            self.core.rect.set_right(world.viewport_width);
        }
    }

    /// Autofire: emits a volley each time the cooldown expires
    pub fn fire(&mut self) -> Vec<Projectile> {
        if !self.core.cooldown_expired() {
            return Vec::new();
        }
        let directions = spread_directions(self.core.facing, self.spread_count, self.spread_angle);
        volley(self.core.sprite_center(), directions, BulletOwner::Player)
    }

    /// Widen the spread, capped at [`PLAYER_SPREAD_MAX`]
    pub fn upgrade(&mut self, bonus: u32) {
        self.spread_count = (self.spread_count + bonus).min(PLAYER_SPREAD_MAX);
    }

    /// Hit points may go negative; what that means is up to the host
    pub fn hurt(&mut self, damage: i32) {
        self.core.hurt(damage);
    }
}

impl Positioned for Player {
    fn rect(&self) -> &Rect {
        &self.core.rect
    }
}

impl ScrollShiftable for Player {
    fn shift(&mut self, dx: i32) {
        self.core.rect.translate(-dx, 0);
    }
}

/// What an enemy does this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyIntent {
    MoveRight,
    MoveLeft,
    Jump,
    Idle,
}

/// A wandering enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub core: ActorCore,
    /// Source art faces left; mirrored while facing right
    pub mirrored: bool,
}

impl Enemy {
    pub fn new(x: i32, y: i32, floor: i32) -> Self {
        Self {
            core: ActorCore::new(x, y, ENEMY_SPRITE, ENEMY_HP, ENEMY_FIRE_PERIOD, V_JUMP, floor),
            mirrored: false,
        }
    }

    /// Weighted random choice, with a two-in-five band that reacts to the player
    pub fn decide(&self, player: &Rect, rng: &mut impl RandomSource) -> EnemyIntent {
        let mut choice = rng.roll(5);
        if choice >= 3 {
            let dx = player.left() - self.core.rect.left();
            if dx > 0 {
                choice = 0;
            } else if dx < 0 {
                choice = 1;
            } else if player.top() < self.core.rect.top() {
                choice = 2;
            }
        }
        match choice {
            0 => EnemyIntent::MoveRight,
            1 => EnemyIntent::MoveLeft,
            2 => EnemyIntent::Jump,
            _ => EnemyIntent::Idle,
        }
    }

    pub fn update(&mut self, player: &Rect, rng: &mut impl RandomSource, world: &World) {
        let intent = self.decide(player, rng);
        match intent {
            EnemyIntent::MoveRight => self.core.walk(Facing::Right, ENEMY_SPEED),
            EnemyIntent::MoveLeft => self.core.walk(Facing::Left, ENEMY_SPEED),
            EnemyIntent::Jump | EnemyIntent::Idle => {}
        }
        self.mirrored = self.core.facing == Facing::Right;

        self.core.body.step(
            &mut self.core.rect,
            intent == EnemyIntent::Jump,
            world.floor(),
        );
        // Only the left edge: enemies roam past the viewport since the world scrolls
        self.core.clamp_left();
    }

    /// One-in-three chance of a single shot each time the cooldown expires
    pub fn fire(&mut self, rng: &mut impl RandomSource) -> Option<Projectile> {
        if !self.core.cooldown_expired() || rng.roll(3) != 1 {
            return None;
        }
        let (x, y) = self.core.box_center();
        Some(Projectile::new(
            x,
            y,
            self.core.facing.direction(),
            BulletOwner::Hostile,
        ))
    }
}

impl Positioned for Enemy {
    fn rect(&self) -> &Rect {
        &self.core.rect
    }
}

impl ScrollShiftable for Enemy {
    fn shift(&mut self, dx: i32) {
        self.core.rect.translate(-dx, 0);
    }
}

/// The end-of-level boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub core: ActorCore,
    pub mirrored: bool,
    pub spread_count: u32,
    pub spread_angle: f32,
}

impl Boss {
    pub fn new(x: i32, y: i32, floor: i32) -> Self {
        Self {
            core: ActorCore::new(
                x,
                y,
                BOSS_SPRITE,
                BOSS_HP,
                BOSS_FIRE_PERIOD,
                V_JUMP * 3 / 2,
                floor,
            ),
            mirrored: false,
            spread_count: BOSS_SPREAD,
            spread_angle: BOSS_SPREAD_ANGLE,
        }
    }

    /// Chase the player horizontally, jumping on a one-in-three roll
    pub fn update(&mut self, player: &Rect, rng: &mut impl RandomSource, world: &World) {
        let jump = rng.roll(3) == 1;
        let dx = player.left() - self.core.rect.left();
        if dx > 0 {
            self.core.walk(Facing::Right, BOSS_SPEED);
        } else if dx < 0 {
            self.core.walk(Facing::Left, BOSS_SPEED);
        }
        self.mirrored = self.core.facing == Facing::Right;

        self.core.body.step(&mut self.core.rect, jump, world.floor());
        self.core.clamp_left();
    }

    pub fn fire(&mut self) -> Vec<Projectile> {
        if !self.core.cooldown_expired() {
            return Vec::new();
        }
        let directions = spread_directions(self.core.facing, self.spread_count, self.spread_angle);
        volley(self.core.sprite_center(), directions, BulletOwner::Hostile)
    }
}

impl Positioned for Boss {
    fn rect(&self) -> &Rect {
        &self.core.rect
    }
}

impl ScrollShiftable for Boss {
    fn shift(&mut self, dx: i32) {
        self.core.rect.translate(-dx, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SequenceRandom;

    fn world() -> World {
        World::new(1280, 640, 1280 * 5)
    }

    fn grounded_player(x: i32) -> Player {
        let mut player = Player::new(x, 0, 640);
        player.core.rect.set_bottom(640 + FOOT_OFFSET);
        player.core.body.velocity = 0;
        player
    }

    #[test]
    fn test_spread_counts() {
        assert_eq!(spread_directions(Facing::Right, 1, 15.0).len(), 1);
        assert_eq!(spread_directions(Facing::Right, 2, 15.0).len(), 1);
        assert_eq!(spread_directions(Facing::Right, 3, 15.0).len(), 3);
        // floor((5 + 1) / 2) - 1 = 2 pairs
        assert_eq!(spread_directions(Facing::Right, 5, 15.0).len(), 5);
    }

    #[test]
    fn test_spread_angles() {
        let dirs = spread_directions(Facing::Right, 5, 15.0);
        assert_eq!(dirs[0], Vec2::new(1.0, 0.0));
        let t15 = 15f32.to_radians().tan();
        let t30 = 30f32.to_radians().tan();
        assert!((dirs[1].y - t15).abs() < 1e-5);
        assert!((dirs[2].y + t15).abs() < 1e-5);
        assert!((dirs[3].y - t30).abs() < 1e-5);
        assert!((dirs[4].y + t30).abs() < 1e-5);

        let left = spread_directions(Facing::Left, 3, 30.0);
        assert_eq!(left[0], Vec2::new(-1.0, 0.0));
        assert!(left.iter().all(|d| d.x == -1.0));
        assert!((left[1].y + t30).abs() < 1e-5);
    }

    #[test]
    fn test_player_autofire_cadence() {
        let mut player = grounded_player(100);
        player.upgrade(4);
        let mut volleys = Vec::new();
        for t in 1..=30 {
            let shots = player.fire();
            if !shots.is_empty() {
                volleys.push((t, shots.len()));
            }
        }
        assert_eq!(volleys, vec![(10, 5), (20, 5), (30, 5)]);
    }

    #[test]
    fn test_player_muzzle_excludes_foot_band() {
        let mut player = grounded_player(100);
        player.core.fire_counter = PLAYER_FIRE_PERIOD - 1;
        let shots = player.fire();
        let r = player.core.rect;
        assert_eq!(shots[0].rect.x, (r.left() + r.right()) / 2);
        assert_eq!(shots[0].rect.y, (r.top() + r.bottom() - FOOT_OFFSET) / 2);
    }

    #[test]
    fn test_upgrade_caps() {
        let mut player = grounded_player(0);
        player.upgrade(2);
        assert_eq!(player.spread_count, 3);
        player.upgrade(2);
        player.upgrade(2);
        assert_eq!(player.spread_count, PLAYER_SPREAD_MAX);
        player.upgrade(0);
        assert_eq!(player.spread_count, PLAYER_SPREAD_MAX);
    }

    #[test]
    fn test_player_movement_and_clamp() {
        let w = world();
        let mut player = grounded_player(1200);
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..5 {
            player.update(&right, &w);
        }
        assert_eq!(player.core.rect.right(), 1280);
        assert_eq!(player.core.facing, Facing::Right);

        // Right wins when both are held
        let both = TickInput {
            move_left: true,
            move_right: true,
            jump: false,
        };
        let mut player = grounded_player(500);
        player.update(&both, &w);
        assert_eq!(player.core.rect.left(), 508);

        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        let mut player = grounded_player(4);
        player.update(&left, &w);
        assert_eq!(player.core.rect.left(), 0);
        assert_eq!(player.core.facing, Facing::Left);
    }

    #[test]
    fn test_player_hp_goes_negative() {
        let mut player = grounded_player(0);
        for _ in 0..12 {
            player.hurt(10);
        }
        assert_eq!(player.core.hp, -20);
    }

    #[test]
    fn test_enemy_decisions() {
        let enemy = Enemy::new(500, 0, 640);
        let right_of = Rect::new(900, 0, 10, 10);
        let left_of = Rect::new(100, 0, 10, 10);
        let above = Rect::new(500, -50, 10, 10);
        let level = Rect::new(500, 100, 10, 10);

        assert_eq!(enemy.decide(&left_of, &mut SequenceRandom::constant(0)), EnemyIntent::MoveRight);
        assert_eq!(enemy.decide(&right_of, &mut SequenceRandom::constant(1)), EnemyIntent::MoveLeft);
        assert_eq!(enemy.decide(&right_of, &mut SequenceRandom::constant(2)), EnemyIntent::Jump);
        // Reaction band
        assert_eq!(enemy.decide(&right_of, &mut SequenceRandom::constant(3)), EnemyIntent::MoveRight);
        assert_eq!(enemy.decide(&left_of, &mut SequenceRandom::constant(4)), EnemyIntent::MoveLeft);
        assert_eq!(enemy.decide(&above, &mut SequenceRandom::constant(3)), EnemyIntent::Jump);
        assert_eq!(enemy.decide(&level, &mut SequenceRandom::constant(4)), EnemyIntent::Idle);
    }

    #[test]
    fn test_enemy_mirrors_with_facing() {
        let w = world();
        let mut enemy = Enemy::new(500, 0, 640);
        enemy.update(&Rect::new(900, 0, 1, 1), &mut SequenceRandom::constant(0), &w);
        assert!(enemy.mirrored);
        assert_eq!(enemy.core.rect.left(), 503);
        enemy.update(&Rect::new(900, 0, 1, 1), &mut SequenceRandom::constant(1), &w);
        assert!(!enemy.mirrored);
        assert_eq!(enemy.core.rect.left(), 500);
    }

    #[test]
    fn test_enemy_clamps_left_only() {
        let w = world();
        let mut enemy = Enemy::new(1, 0, 640);
        enemy.update(&Rect::new(900, 0, 1, 1), &mut SequenceRandom::constant(1), &w);
        assert_eq!(enemy.core.rect.left(), 0);

        let mut enemy = Enemy::new(1279, 0, 640);
        enemy.update(&Rect::new(0, 0, 1, 1), &mut SequenceRandom::constant(0), &w);
        assert_eq!(enemy.core.rect.left(), 1282);
    }

    #[test]
    fn test_enemy_fire_odds() {
        let mut enemy = Enemy::new(100, 100, 640);
        enemy.core.fire_counter = ENEMY_FIRE_PERIOD - 1;
        assert!(enemy.fire(&mut SequenceRandom::constant(0)).is_none());

        enemy.core.fire_counter = ENEMY_FIRE_PERIOD - 1;
        let shot = enemy.fire(&mut SequenceRandom::constant(1)).unwrap();
        let (cx, cy) = enemy.core.box_center();
        assert_eq!((shot.rect.x, shot.rect.y), (cx, cy));
        assert_eq!(shot.owner, BulletOwner::Hostile);

        // Cooldown not expired: no roll, no shot
        assert!(enemy.fire(&mut SequenceRandom::constant(1)).is_none());
    }

    #[test]
    fn test_boss_chases_and_fires_spread() {
        let w = world();
        let mut boss = Boss::new(1180, 0, 640);
        boss.update(&Rect::new(100, 0, 1, 1), &mut SequenceRandom::constant(0), &w);
        assert_eq!(boss.core.facing, Facing::Left);
        assert_eq!(boss.core.rect.left(), 1177);

        let mut volleys = 0;
        for _ in 0..BOSS_FIRE_PERIOD {
            let shots = boss.fire();
            if !shots.is_empty() {
                volleys += 1;
                assert_eq!(shots.len(), 3);
                assert!(shots.iter().all(|s| s.direction.x == -1.0));
            }
        }
        assert_eq!(volleys, 1);
    }
}
