//! Effects of this tick's collisions
//!
//! Detection runs first and records ids; effects are applied later in the
//! tick. Every effect re-checks that its entities are still live before
//! touching them.

use super::collision::{Strike, overlapping};
use super::geometry::Positioned;
use super::random::RandomSource;
use super::registry::{Entity, EntityId, EntityKind};
use super::spawn::roll_loot;
use super::state::{BossPhase, GameEvent, GameState};

impl<R: RandomSource> GameState<R> {
    /// Damage struck enemies or the boss, killing and dropping loot at zero
    pub fn apply_strikes(&mut self, strikes: &[Strike]) {
        for strike in strikes {
            let dead = match self.registry.get_mut(strike.target) {
                Some(Entity::Enemy(enemy)) => {
                    enemy.core.hurt(strike.damage);
                    enemy.core.is_dead()
                }
                Some(Entity::Boss(boss)) => {
                    boss.core.hurt(strike.damage);
                    boss.core.is_dead()
                }
                Some(other) => {
                    log::warn!("Strike on non-combatant {:?} ignored", other.kind());
                    false
                }
                None => false,
            };
            if dead {
                self.defeat(strike.target);
            }
        }
    }

    /// Remove a dead combatant and drop exactly one pickup at its top-left
    fn defeat(&mut self, id: EntityId) {
        let Some(entity) = self.registry.remove(id) else {
            return;
        };
        let rect = *entity.rect();
        let drop = roll_loot(&mut self.rng);
        self.spawn_pickup(drop, rect.left(), rect.top());

        match entity {
            Entity::Boss(_) => {
                log::info!("Boss defeated at tick {}", self.time_ticks);
                self.boss = BossPhase::Defeated;
                self.events.push(GameEvent::BossDefeated { id, drop });
            }
            _ => {
                log::debug!("Enemy {} killed, dropped {:?}", id, drop);
                self.events.push(GameEvent::EnemyKilled { id, drop });
            }
        }
    }

    /// Each hostile bullet found overlapping the player is consumed and deals its damage
    pub fn apply_player_hits(&mut self, bullets: &[EntityId]) {
        for &id in bullets {
            let Some(Entity::Bullet(bullet)) = self.registry.get(id) else {
                continue;
            };
            let damage = bullet.damage;
            self.registry.remove(id);
            self.player.hurt(damage);
            self.events.push(GameEvent::PlayerHit { damage });
        }
    }

    /// Land the player on the ladders it overlapped
    pub fn land_player(&mut self, ladders: &[EntityId]) {
        for &id in ladders {
            if let Some(surface) = self.registry.rect_of(id) {
                self.player.core.land_on(&surface);
            }
        }
    }

    /// Land each enemy on the first ladder it overlapped
    pub fn land_enemies(&mut self, contacts: &[(EntityId, EntityId)]) {
        for &(enemy_id, ladder_id) in contacts {
            let Some(surface) = self.registry.rect_of(ladder_id) else {
                continue;
            };
            if let Some(enemy) = self.registry.enemy_mut(enemy_id) {
                enemy.core.land_on(&surface);
            }
        }
    }

    /// Consume every pickup under the player
    pub fn collect_pickups(&mut self) {
        let rect = self.player.core.rect;
        let found = overlapping(
            &self.registry,
            &rect,
            &[EntityKind::Coin, EntityKind::PowerUp],
        );
        for id in found {
            let Some(Entity::Pickup(pickup)) = self.registry.remove(id) else {
                continue;
            };
            self.score += pickup.kind.score_value() as u64;
            self.player.upgrade(pickup.kind.bullet_bonus());
            log::debug!("Collected {:?}, score {}", pickup.kind, self.score);
            self.events.push(GameEvent::PickupCollected { kind: pickup.kind });
        }
    }
}
