//! Buffered spawn requests.
//!
//! Weapons never touch a pool. They write intent; the allocator is the only
//! system that pops from pools.

use bevy::prelude::*;

use super::components::ProjectileKind;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    /// Pool owned by the firing weapon.
    pub pool: Entity,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: f32,
    pub owner: Option<Entity>,
}
