//! Spawn consumer: activate projectiles from their weapon's pool.
//!
//! # Fail-fast invariants
//! - A pool's free list contains only its own pooled projectile entities.
//! - Therefore, a free entity must match the projectile query.
//!
//! If this is violated, we `expect()` and crash loudly.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, Projectile, ProjectileKind, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{active_layers, ProjectilePool};

fn timer_for(kind: ProjectileKind, tunables: &Tunables) -> Duration {
    match kind {
        ProjectileKind::Bullet => Duration::from_secs_f32(tunables.bullet_lifetime_secs),
        ProjectileKind::Bomb => Duration::from_secs_f32(tunables.bomb_fuse_secs),
    }
}

pub fn allocate_projectiles_from_pool(
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q_pools: Query<&mut ProjectilePool>,
    mut q: Query<(
        &mut ProjectileState,
        &mut Projectile,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
    ), With<PooledProjectile>>,
) {
    for req in reader.read() {
        let Ok(mut pool) = q_pools.get_mut(req.pool) else {
            // Weapon was removed after the request was written.
            debug!("Dropping {:?} request: pool {:?} is gone", req.kind, req.pool);
            continue;
        };

        let Some(e) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("{:?} pool {:?} exhausted", req.kind, req.pool);
            continue;
        };

        let (mut state, mut projectile, mut tf, mut vel, mut vis, mut layers) =
            q.get_mut(e).expect("ProjectilePool contained an entity missing pooled projectile components");

        *state = ProjectileState::Active;
        let timer = timer_for(projectile.kind, &tunables);
        projectile.reset_for_fire(req.damage, req.owner, timer);
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_layers(projectile.kind);
    }
}
