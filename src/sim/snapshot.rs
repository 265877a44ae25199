//! Render-state handoff
//!
//! The simulation never draws. After each tick it hands the host everything
//! it needs to draw one frame.

use serde::{Deserialize, Serialize};

use super::geometry::{Positioned, Rect};
use super::random::RandomSource;
use super::registry::{Entity, EntityId, EntityKind};
use super::state::{GameEvent, GameState};

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderItem {
    /// Registry id; `None` for the player and the boundary markers
    pub id: Option<EntityId>,
    pub kind: EntityKind,
    pub rect: Rect,
    /// Animation frame for pickups, 0 otherwise
    pub frame: u32,
    /// Draw the sprite flipped horizontally
    pub mirrored: bool,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderableSnapshot {
    pub tick: u64,
    /// Player first, then boundaries, then registry entities in id order
    pub items: Vec<RenderItem>,
    pub score: u64,
    /// Clamped at zero
    pub player_hp: i32,
    /// Present while the boss is alive, clamped at zero
    pub boss_hp: Option<i32>,
    pub scroll_offset: i32,
    pub events: Vec<GameEvent>,
}

impl RenderableSnapshot {
    pub fn items_of(&self, kind: EntityKind) -> impl Iterator<Item = &RenderItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn snapshot(&self) -> RenderableSnapshot {
        let mut items = Vec::with_capacity(self.registry.len() + 3);
        items.push(RenderItem {
            id: None,
            kind: EntityKind::Player,
            rect: self.player.core.rect,
            frame: 0,
            mirrored: false,
        });
        for boundary in [&self.world.left_boundary, &self.world.right_boundary] {
            items.push(RenderItem {
                id: None,
                kind: EntityKind::Boundary,
                rect: boundary.rect,
                frame: 0,
                mirrored: false,
            });
        }
        for (id, entity) in self.registry.iter() {
            let (frame, mirrored) = match entity {
                Entity::Pickup(p) => (p.frame, false),
                Entity::Enemy(e) => (0, e.mirrored),
                Entity::Boss(b) => (0, b.mirrored),
                Entity::Bullet(_) | Entity::Ladder(_) => (0, false),
            };
            items.push(RenderItem {
                id: Some(id),
                kind: entity.kind(),
                rect: *entity.rect(),
                frame,
                mirrored,
            });
        }

        RenderableSnapshot {
            tick: self.time_ticks,
            items,
            score: self.score,
            player_hp: self.player.core.hp.max(0),
            boss_hp: self
                .boss_id()
                .and_then(|id| self.registry.boss(id))
                .map(|boss| boss.core.hp.max(0)),
            scroll_offset: self.world.scroll_offset,
            events: self.events.clone(),
        }
    }
}
