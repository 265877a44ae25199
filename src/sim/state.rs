//! Simulation context
//!
//! One owned struct holds the world, every entity, the RNG and the tick
//! counter. It is built once at level start and passed to every operation.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::{Enemy, Player};
use super::geometry::{Obstacle, Rect};
use super::pickup::{Pickup, PickupKind};
use super::projectile::Projectile;
use super::random::RandomSource;
use super::registry::{Entity, EntityId, EntityKind, Registry};
use super::spawn::generate_level;
use super::world::World;
use crate::consts::LADDER_COLOR;
use crate::level::{LevelConfig, LevelError};

/// Boss lifecycle; each transition happens at most once per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Enemies remain
    Pending,
    Active(EntityId),
    Defeated,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyKilled { id: EntityId, drop: PickupKind },
    BossSpawned { id: EntityId },
    /// Terminal: the host decides what winning means
    BossDefeated { id: EntityId, drop: PickupKind },
    PickupCollected { kind: PickupKind },
    PlayerHit { damage: i32 },
    Scrolled { dx: i32 },
}

#[derive(Debug)]
pub struct GameState<R: RandomSource = Pcg32> {
    pub config: LevelConfig,
    pub rng: R,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Coins collected
    pub score: u64,
    pub player: Player,
    pub world: World,
    pub registry: Registry,
    pub boss: BossPhase,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// Generate a level seeded from `config.seed`
    pub fn new(config: &LevelConfig) -> Result<Self, LevelError> {
        Self::with_random(config, Pcg32::seed_from_u64(config.seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Generate a level drawing from the given random source
    pub fn with_random(config: &LevelConfig, rng: R) -> Result<Self, LevelError> {
        let mut state = Self::blank(config, rng)?;
        generate_level(&mut state);
        Ok(state)
    }

    /// World bounds and player only; the host places everything else
    pub fn blank(config: &LevelConfig, rng: R) -> Result<Self, LevelError> {
        config.validate()?;
        let world = World::new(
            config.viewport_width,
            config.viewport_height,
            config.world_width(),
        );
        Ok(Self {
            config: config.clone(),
            rng,
            time_ticks: 0,
            score: 0,
            player: Player::new(0, 0, world.floor()),
            world,
            registry: Registry::new(),
            boss: BossPhase::Pending,
            events: Vec::new(),
        })
    }

    pub fn spawn_enemy(&mut self, x: i32, y: i32) -> EntityId {
        let floor = self.world.floor();
        self.registry.insert(Entity::Enemy(Enemy::new(x, y, floor)))
    }

    pub fn spawn_ladder(&mut self, rect: Rect) -> EntityId {
        self.registry
            .insert(Entity::Ladder(Obstacle::new(rect, LADDER_COLOR)))
    }

    pub fn spawn_pickup(&mut self, kind: PickupKind, x: i32, y: i32) -> EntityId {
        self.registry.insert(Entity::Pickup(Pickup::new(kind, x, y)))
    }

    pub fn spawn_bullet(&mut self, bullet: Projectile) -> EntityId {
        self.registry.insert(Entity::Bullet(bullet))
    }

    pub fn enemy_count(&self) -> usize {
        self.registry.count_of(EntityKind::Enemy)
    }

    pub fn boss_id(&self) -> Option<EntityId> {
        match self.boss {
            BossPhase::Active(id) => Some(id),
            _ => None,
        }
    }

    pub fn boss_defeated(&self) -> bool {
        self.boss == BossPhase::Defeated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Positioned;
    use crate::sim::random::SequenceRandom;

    #[test]
    fn test_new_generates_level() {
        let config = LevelConfig {
            enemy_count: 7,
            ..Default::default()
        };
        let state = GameState::new(&config).unwrap();
        assert_eq!(state.enemy_count(), 7);
        // 5 screens x 3 rows
        assert_eq!(state.registry.count_of(EntityKind::Ladder), 15);
        assert_eq!(state.boss, BossPhase::Pending);
        assert_eq!(state.player.core.rect.left(), 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let config = LevelConfig {
            seed: 99,
            ..Default::default()
        };
        let a = GameState::new(&config).unwrap();
        let b = GameState::new(&config).unwrap();
        assert_eq!(a.registry.len(), b.registry.len());
        for ((ia, ea), (ib, eb)) in a.registry.iter().zip(b.registry.iter()) {
            assert_eq!(ia, ib);
            assert_eq!(ea.kind(), eb.kind());
            assert_eq!(ea.rect(), eb.rect());
        }
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let config = LevelConfig {
            enemy_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::with_random(&config, SequenceRandom::constant(0)),
            Err(LevelError::NoEnemies)
        ));
    }
}
