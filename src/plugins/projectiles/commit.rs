//! Return commit: recycle projectiles back into their pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive projectiles must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PoolMember, PooledProjectile, ProjectileState};
use super::pool::{inactive_layers, ProjectilePool};

pub fn return_to_pool_commit(
    mut commands: Commands,
    mut q_pools: Query<&mut ProjectilePool>,
    mut q: Query<(
        Entity,
        &PoolMember,
        &mut ProjectileState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledProjectile>>,
) {
    for (e, member, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn { continue; }

        let Ok(mut pool) = q_pools.get_mut(member.0) else {
            // Orphaned by a removed weapon.
            commands.entity(e).despawn();
            continue;
        };

        *state = ProjectileState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_layers();

        pool.push_free(e);
    }
}
