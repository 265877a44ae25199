//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod actor;
pub mod body;
pub mod collision;
pub mod combat;
pub mod geometry;
pub mod pickup;
pub mod projectile;
pub mod random;
pub mod registry;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use actor::{ActorCore, Boss, Enemy, EnemyIntent, Facing, Player, spread_directions};
pub use body::KinematicBody;
pub use collision::Strike;
pub use geometry::{Obstacle, Positioned, Rect, ScrollShiftable};
pub use pickup::{Pickup, PickupKind};
pub use projectile::{BulletOwner, Projectile};
pub use random::{RandomSource, SequenceRandom};
pub use registry::{Entity, EntityId, EntityKind, Registry};
pub use snapshot::{RenderItem, RenderableSnapshot};
pub use spawn::{generate_level, roll_loot};
pub use state::{BossPhase, GameEvent, GameState};
pub use tick::{TickInput, tick};
pub use world::{Scroll, World};
