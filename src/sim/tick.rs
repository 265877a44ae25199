//! Fixed timestep simulation tick
//!
//! One call advances every entity by one step, in a fixed order:
//! volleys, enemy AI, collision detection, player motion, boss, deferred
//! effects, scroll, kills and pickups, then projectile and pickup motion.

use serde::{Deserialize, Serialize};

use super::actor::Boss;
use super::collision::{collect_strikes, ladder_contacts, overlapping};
use super::random::RandomSource;
use super::registry::{Entity, EntityKind};
use super::snapshot::RenderableSnapshot;
use super::state::{BossPhase, GameEvent, GameState};
use crate::consts::BOSS_SPAWN_INSET;

/// Input intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_left: bool,
    /// Wins over `move_left` when both are held
    pub move_right: bool,
    /// Ignored while airborne
    pub jump: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick<R: RandomSource>(state: &mut GameState<R>, input: &TickInput) -> RenderableSnapshot {
    state.time_ticks += 1;
    state.events.clear();

    for bullet in state.player.fire() {
        state.spawn_bullet(bullet);
    }

    let enemy_ids = state.registry.ids_of(EntityKind::Enemy);
    for &id in &enemy_ids {
        let shot = match state.registry.enemy_mut(id) {
            Some(enemy) => enemy.fire(&mut state.rng),
            None => None,
        };
        if let Some(bullet) = shot {
            state.spawn_bullet(bullet);
        }
    }

    // Enemies react to where the player was at the start of the tick
    let player_rect = state.player.core.rect;
    for &id in &enemy_ids {
        if let Some(enemy) = state.registry.enemy_mut(id) {
            enemy.update(&player_rect, &mut state.rng, &state.world);
        }
    }

    // Detection against current positions; effects are applied further down
    let enemy_strikes = collect_strikes(&mut state.registry, &enemy_ids, EntityKind::PlayerBullet);
    let enemy_ladders = ladder_contacts(&state.registry, &enemy_ids);
    let player_ladders = overlapping(&state.registry, &player_rect, &[EntityKind::Ladder]);
    let player_hits = overlapping(&state.registry, &player_rect, &[EntityKind::HostileBullet]);

    state.player.update(input, &state.world);

    update_boss(state);

    state.apply_player_hits(&player_hits);
    state.land_player(&player_ladders);
    state.land_enemies(&enemy_ladders);

    apply_scroll(state);

    state.apply_strikes(&enemy_strikes);
    state.collect_pickups();

    advance_projectiles(state);
    animate_pickups(state);

    state.snapshot()
}

/// Spawn the boss once the roster is empty, then run its AI, volley and hits
fn update_boss<R: RandomSource>(state: &mut GameState<R>) {
    if state.boss == BossPhase::Pending && state.enemy_count() == 0 {
        let x = state.world.viewport_width - BOSS_SPAWN_INSET;
        let boss = Boss::new(x, 0, state.world.floor());
        let id = state.registry.insert(Entity::Boss(boss));
        state.boss = BossPhase::Active(id);
        log::info!("Boss spawned at tick {}", state.time_ticks);
        state.events.push(GameEvent::BossSpawned { id });
    }

    let Some(id) = state.boss_id() else {
        return;
    };

    let player_rect = state.player.core.rect;
    let volley = match state.registry.boss_mut(id) {
        Some(boss) => {
            boss.update(&player_rect, &mut state.rng, &state.world);
            boss.fire()
        }
        None => {
            log::warn!("Active boss {} missing from registry", id);
            return;
        }
    };
    for bullet in volley {
        state.spawn_bullet(bullet);
    }

    let strikes = collect_strikes(&mut state.registry, &[id], EntityKind::PlayerBullet);
    state.apply_strikes(&strikes);
}

/// Slide the world under the player when it crosses a trigger line
fn apply_scroll<R: RandomSource>(state: &mut GameState<R>) {
    let Some(scroll) = state.world.scroll_for(&state.player.core.rect) else {
        return;
    };
    state.registry.shift_all(scroll.dx);
    state.world.shift(scroll.dx);
    state.player.core.rect.set_left(scroll.anchor);
    log::debug!(
        "Scrolled by {} (offset {})",
        scroll.dx,
        state.world.scroll_offset
    );
    state.events.push(GameEvent::Scrolled { dx: scroll.dx });
}

fn advance_projectiles<R: RandomSource>(state: &mut GameState<R>) {
    let (vw, vh) = (state.world.viewport_width, state.world.viewport_height);
    let ids: Vec<_> = state
        .registry
        .of_kinds(&[EntityKind::PlayerBullet, EntityKind::HostileBullet])
        .map(|(id, _)| id)
        .collect();
    for id in ids {
        let culled = match state.registry.bullet_mut(id) {
            Some(bullet) => {
                bullet.advance();
                bullet.is_out_of_bounds(vw, vh)
            }
            None => false,
        };
        if culled {
            state.registry.remove(id);
        }
    }
}

fn animate_pickups<R: RandomSource>(state: &mut GameState<R>) {
    let ids: Vec<_> = state
        .registry
        .of_kinds(&[EntityKind::Coin, EntityKind::PowerUp])
        .map(|(id, _)| id)
        .collect();
    for id in ids {
        if let Some(pickup) = state.registry.pickup_mut(id) {
            pickup.animate();
        }
    }
}
