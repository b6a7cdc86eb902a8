//! Projectiles plugin: **message-based producer → consumer** spawning + per-weapon pooling.
//!
//! # Data flow
//! ```text
//!   Update
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: combatant attack (combatant::attack)                        │
//!│      - writes: SpawnProjectileRequest { pool, kind, pos, vel, .. }         │
//!│                                                                            │
//!│  (B) Consumer: allocate_projectiles_from_pool                              │
//!│      - mutates: ProjectilePool.free of the request's pool                  │
//!│      - mutates: ProjectileState, Projectile, Transform, Velocity,          │
//!│                 Visibility, CollisionLayers                                │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate:      expire_projectiles (bullet lifetime, bomb fuse + blast)
//!   FixedPostUpdate:  process_projectile_hits -> BarCommand::damage
//!                     return_to_pool_commit   -> ProjectilePool.free
//! ```
//!
//! Producers never borrow a pool. Pool entities are created and disposed by the
//! combatant loadout systems; a request whose pool has been disposed is dropped.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod lifetime;
pub mod messages;
pub mod pool;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{PoolMember, PooledProjectile, Projectile, ProjectileKind, ProjectileState};
pub use messages::SpawnProjectileRequest;
pub use pool::{dispose_pool, spawn_pool, ProjectilePool};

/// Ordering anchor: attack producers run before this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AllocateProjectiles;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnProjectileRequest>();

        app.add_systems(
            Update,
            allocator::allocate_projectiles_from_pool
                .in_set(AllocateProjectiles)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            lifetime::expire_projectiles.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                collision::process_projectile_hits.after(CollisionEventSystems),
                commit::return_to_pool_commit.after(collision::process_projectile_hits),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}

#[cfg(test)]
mod tests;
