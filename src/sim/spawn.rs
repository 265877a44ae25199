//! Level population and loot drops

use super::geometry::Rect;
use super::pickup::PickupKind;
use super::random::RandomSource;
use super::registry::EntityKind;
use super::state::GameState;
use crate::consts::{LADDER_HEIGHT, LOOT_ROLLS};
use crate::half;

/// Scatter the enemy roster, then lay out ladder rows screen by screen
pub fn generate_level<R: RandomSource>(state: &mut GameState<R>) {
    let world_width = state.world.world_width;
    let vw = state.world.viewport_width;
    let vh = state.world.viewport_height;

    for _ in 0..state.config.enemy_count {
        let x = state.rng.range_inclusive(0, world_width);
        let y = state.rng.range_inclusive(0, vh);
        state.spawn_enemy(x, y);
    }

    let rows = state.config.ladder_rows.clone();
    let step = vw.max(1) as usize;
    for screen_x in (0..world_width).step_by(step) {
        for &row in &rows {
            let x = state.rng.range_inclusive(screen_x, screen_x + half(vw));
            let width = state.rng.range_inclusive(vw / 4, half(vw) - 50);
            let y = (row * vh as f32) as i32;
            state.spawn_ladder(Rect::new(x, y, width, LADDER_HEIGHT));
        }
    }

    log::info!(
        "Level generated: world={}x{}, enemies={}, ladders={}",
        world_width,
        vh,
        state.enemy_count(),
        state.registry.count_of(EntityKind::Ladder),
    );
}

/// Loot table shared by enemies and the boss: one PowerUp slot in eleven
pub fn roll_loot(rng: &mut impl RandomSource) -> PickupKind {
    if rng.roll(LOOT_ROLLS) == LOOT_ROLLS - 2 {
        PickupKind::PowerUp
    } else {
        PickupKind::Coin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelConfig;
    use crate::sim::geometry::Positioned;
    use crate::sim::random::SequenceRandom;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_loot_table_slot() {
        assert_eq!(roll_loot(&mut SequenceRandom::constant(9)), PickupKind::PowerUp);
        for v in (0..11).filter(|v| *v != 9) {
            assert_eq!(roll_loot(&mut SequenceRandom::constant(v)), PickupKind::Coin);
        }
    }

    #[test]
    fn test_loot_distribution_converges() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let n = 10_000;
        let power_ups = (0..n)
            .filter(|_| roll_loot(&mut rng) == PickupKind::PowerUp)
            .count();
        let fraction = power_ups as f64 / n as f64;
        assert!((fraction - 1.0 / 11.0).abs() < 0.015, "fraction={fraction}");
    }

    #[test]
    fn test_ladders_stay_inside_their_screen_band() {
        let config = LevelConfig {
            seed: 5,
            enemy_count: 3,
            ..Default::default()
        };
        let state = GameState::new(&config).unwrap();
        let vw = config.viewport_width;
        let ladders: Vec<_> = state
            .registry
            .of_kinds(&[EntityKind::Ladder])
            .map(|(_, e)| *e.rect())
            .collect();
        assert_eq!(ladders.len(), 15);
        for (i, rect) in ladders.iter().enumerate() {
            let screen_x = (i / 3) as i32 * vw;
            assert!(rect.left() >= screen_x && rect.left() <= screen_x + vw / 2);
            assert!(rect.w >= vw / 4 && rect.w <= vw / 2 - 50);
            assert_eq!(rect.h, LADDER_HEIGHT);
        }
        let ys: Vec<_> = ladders.iter().take(3).map(|r| r.top()).collect();
        assert_eq!(ys, vec![160, 320, 480]);
    }

    #[test]
    fn test_enemies_within_world() {
        let config = LevelConfig {
            seed: 11,
            enemy_count: 40,
            ..Default::default()
        };
        let state = GameState::new(&config).unwrap();
        for (_, e) in state.registry.of_kinds(&[EntityKind::Enemy]) {
            let rect = e.rect();
            assert!((0..=config.world_width()).contains(&rect.left()));
            assert!((0..=config.viewport_height).contains(&rect.top()));
        }
    }
}
