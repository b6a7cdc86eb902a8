//! Timed projectile behaviour: bullet expiry and bomb detonation.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::bars::{BarCommand, HealthBar};

use super::components::{PooledProjectile, Projectile, ProjectileKind, ProjectileState};

/// Tick active projectile timers. Bullets simply return to the pool when they run out;
/// bombs damage every health bar owner within `bomb_radius` first.
pub fn expire_projectiles(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(&mut Projectile, &mut ProjectileState, &Transform), With<PooledProjectile>>,
    q_victims: Query<(Entity, &Transform), (With<HealthBar>, Without<PooledProjectile>)>,
    mut writer: MessageWriter<BarCommand>,
) {
    let radius_sq = tunables.bomb_radius * tunables.bomb_radius;

    for (mut projectile, mut state, tf) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }

        projectile.timer.tick(time.delta());
        if !projectile.timer.is_finished() {
            continue;
        }

        if projectile.kind == ProjectileKind::Bomb {
            let center = tf.translation.truncate();
            let hits = q_victims
                .iter()
                .filter(|(victim, _)| Some(*victim) != projectile.owner)
                .filter(|(_, victim_tf)| victim_tf.translation.truncate().distance_squared(center) <= radius_sq)
                .map(|(victim, _)| BarCommand::damage(victim, projectile.damage));
            writer.write_batch(hits);
        }

        *state = ProjectileState::PendingReturn;
    }
}
