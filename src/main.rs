//! Ladder Run headless driver
//!
//! Loads a level config (JSON path as the first argument, defaults
//! otherwise), then plays a scripted run at the fixed tick rate without
//! rendering. Set `RUST_LOG=debug` to follow scrolls, kills and pickups.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ladder_run::LevelConfig;
    use ladder_run::consts::SIM_HZ;
    use ladder_run::sim::{EntityKind, GameEvent, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Ladder Run (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match LevelConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load level config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => LevelConfig::default(),
    };

    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid level config: {}", e);
            std::process::exit(1);
        }
    };

    // Two minutes of play: keep walking right, hop every second, double back now and then
    let max_ticks = SIM_HZ as u64 * 120;
    let mut last = state.snapshot();
    for t in 0..max_ticks {
        let input = TickInput {
            move_right: t % 150 < 120,
            move_left: t % 150 >= 120,
            jump: t % SIM_HZ as u64 == 0,
        };
        last = tick(&mut state, &input);

        for event in &last.events {
            match event {
                GameEvent::Scrolled { .. } => {}
                GameEvent::BossSpawned { .. } | GameEvent::BossDefeated { .. } => {
                    log::info!("tick {}: {:?}", last.tick, event);
                }
                _ => log::debug!("tick {}: {:?}", last.tick, event),
            }
        }

        if state.boss_defeated() {
            break;
        }
    }

    log::info!(
        "Finished after {} ticks: score={}, hp={}, enemies left={}, scrolled={}",
        last.tick,
        last.score,
        last.player_hp,
        last.items_of(EntityKind::Enemy).count(),
        last.scroll_offset,
    );

    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is the product on wasm; hosts drive `sim::tick` themselves
}
