//! Authoritative store of every removable entity
//!
//! Entities are keyed by a monotonically increasing [`EntityId`] and iterate
//! in id order, so a run is deterministic for a fixed seed. The player is not
//! stored here; it is never removed. Passes that may insert or remove while
//! walking a kind take a snapshot of ids first via [`Registry::ids_of`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::actor::{Boss, Enemy};
use super::geometry::{Obstacle, Positioned, Rect, ScrollShiftable};
use super::pickup::{Pickup, PickupKind};
use super::projectile::{BulletOwner, Projectile};

pub type EntityId = u64;

/// Entity categories, used for queries and as render tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Boss,
    PlayerBullet,
    HostileBullet,
    Coin,
    PowerUp,
    Ladder,
    Boundary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Enemy(Enemy),
    Boss(Boss),
    Bullet(Projectile),
    Pickup(Pickup),
    Ladder(Obstacle),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::Boss(_) => EntityKind::Boss,
            Entity::Bullet(b) => match b.owner {
                BulletOwner::Player => EntityKind::PlayerBullet,
                BulletOwner::Hostile => EntityKind::HostileBullet,
            },
            Entity::Pickup(p) => match p.kind {
                PickupKind::Coin => EntityKind::Coin,
                PickupKind::PowerUp => EntityKind::PowerUp,
            },
            Entity::Ladder(_) => EntityKind::Ladder,
        }
    }
}

impl Positioned for Entity {
    fn rect(&self) -> &Rect {
        match self {
            Entity::Enemy(e) => e.rect(),
            Entity::Boss(b) => b.rect(),
            Entity::Bullet(b) => b.rect(),
            Entity::Pickup(p) => p.rect(),
            Entity::Ladder(l) => l.rect(),
        }
    }
}

impl ScrollShiftable for Entity {
    fn shift(&mut self, dx: i32) {
        match self {
            Entity::Enemy(e) => e.shift(dx),
            Entity::Boss(b) => b.shift(dx),
            Entity::Bullet(b) => b.shift(dx),
            Entity::Pickup(p) => p.shift(dx),
            Entity::Ladder(l) => l.shift(dx),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    entities: BTreeMap<EntityId, Entity>,
    next_id: EntityId,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(&id, e)| (id, e))
    }

    /// Live entities of the given kinds, in id order
    pub fn of_kinds<'a>(
        &'a self,
        kinds: &'a [EntityKind],
    ) -> impl Iterator<Item = (EntityId, &'a Entity)> + 'a {
        self.iter().filter(move |(_, e)| kinds.contains(&e.kind()))
    }

    /// Snapshot of ids of one kind, safe to hold across mutation
    pub fn ids_of(&self, kind: EntityKind) -> Vec<EntityId> {
        self.of_kinds(&[kind]).map(|(id, _)| id).collect()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.iter().filter(|(_, e)| e.kind() == kind).count()
    }

    pub fn rect_of(&self, id: EntityId) -> Option<Rect> {
        self.get(id).map(|e| *e.rect())
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        match self.entities.get_mut(&id) {
            Some(Entity::Enemy(enemy)) => Some(enemy),
            _ => None,
        }
    }

    pub fn boss(&self, id: EntityId) -> Option<&Boss> {
        match self.entities.get(&id) {
            Some(Entity::Boss(boss)) => Some(boss),
            _ => None,
        }
    }

    pub fn boss_mut(&mut self, id: EntityId) -> Option<&mut Boss> {
        match self.entities.get_mut(&id) {
            Some(Entity::Boss(boss)) => Some(boss),
            _ => None,
        }
    }

    pub fn bullet_mut(&mut self, id: EntityId) -> Option<&mut Projectile> {
        match self.entities.get_mut(&id) {
            Some(Entity::Bullet(bullet)) => Some(bullet),
            _ => None,
        }
    }

    pub fn pickup_mut(&mut self, id: EntityId) -> Option<&mut Pickup> {
        match self.entities.get_mut(&id) {
            Some(Entity::Pickup(pickup)) => Some(pickup),
            _ => None,
        }
    }

    /// Slide every stored entity left by `dx`
    pub fn shift_all(&mut self, dx: i32) {
        for entity in self.entities.values_mut() {
            entity.shift(dx);
        }
    }
}
