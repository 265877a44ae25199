//! Overlap detection between entity groups
//!
//! Discrete rectangle tests, once per tick, no sweeping: a fast bullet can
//! tunnel through a thin target between two ticks.

use super::geometry::{Positioned, Rect};
use super::registry::{EntityId, EntityKind, Registry};

/// A target struck by at least one bullet this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    pub target: EntityId,
    /// Damage of the first bullet found
    pub damage: i32,
}

/// Ids of entities of `kinds` overlapping `rect`, in id order
pub fn overlapping(registry: &Registry, rect: &Rect, kinds: &[EntityKind]) -> Vec<EntityId> {
    registry
        .of_kinds(kinds)
        .filter(|(_, e)| rect.overlaps(e.rect()))
        .map(|(id, _)| id)
        .collect()
}

/// First entity of `kinds` overlapping `rect`
pub fn first_overlap(registry: &Registry, rect: &Rect, kinds: &[EntityKind]) -> Option<EntityId> {
    registry
        .of_kinds(kinds)
        .find(|(_, e)| rect.overlaps(e.rect()))
        .map(|(id, _)| id)
}

/// Test each target against live bullets of `bullet_kind`
///
/// Every overlapping bullet is removed immediately, so one bullet never
/// strikes two targets. A target takes only the first bullet's damage, no
/// matter how many overlapped it this tick.
pub fn collect_strikes(
    registry: &mut Registry,
    targets: &[EntityId],
    bullet_kind: EntityKind,
) -> Vec<Strike> {
    let mut strikes = Vec::new();
    for &target in targets {
        let Some(rect) = registry.rect_of(target) else {
            continue;
        };
        let hits = overlapping(registry, &rect, &[bullet_kind]);
        let mut damage = None;
        for bullet_id in hits {
            if let Some(bullet) = registry.bullet_mut(bullet_id) {
                damage.get_or_insert(bullet.damage);
            }
            registry.remove(bullet_id);
        }
        if let Some(damage) = damage {
            strikes.push(Strike { target, damage });
        }
    }
    strikes
}

/// First ladder under each actor, as (actor, ladder) pairs
pub fn ladder_contacts(registry: &Registry, actors: &[EntityId]) -> Vec<(EntityId, EntityId)> {
    actors
        .iter()
        .filter_map(|&actor| {
            let rect = registry.rect_of(actor)?;
            first_overlap(registry, &rect, &[EntityKind::Ladder]).map(|ladder| (actor, ladder))
        })
        .collect()
}
