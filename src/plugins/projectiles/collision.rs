use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::plugins::bars::{BarCommand, HealthBar};

use super::components::{PooledProjectile, Projectile, ProjectileKind, ProjectileState};

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget { collider: ev.collider1, body: ev.body1 },
        CollisionTarget { collider: ev.collider2, body: ev.body2 },
    )
}

/// Bullets that touch anything with a health bar (other than their shooter) deal
/// their damage as a `BarCommand` and go back to the pool.
pub fn process_projectile_hits(
    mut started: MessageReader<CollisionStart>,
    mut q_projectiles: Query<(&Projectile, &mut ProjectileState), With<PooledProjectile>>,
    q_damageable: Query<(), With<HealthBar>>,
    mut writer: MessageWriter<BarCommand>,
    // Per-frame dedupe: one hit per bullet.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_projectiles.contains(t1.collider);
        let p2 = q_projectiles.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        if seen.contains(&projectile_side.collider) {
            continue;
        }

        let Ok((projectile, mut state)) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };
        if *state != ProjectileState::Active || projectile.kind != ProjectileKind::Bullet {
            continue;
        }

        let victim = other_side.gameplay_owner();
        if Some(victim) == projectile.owner || !q_damageable.contains(victim) {
            continue;
        }

        seen.insert(projectile_side.collider);
        writer.write(BarCommand::damage(victim, projectile.damage));
        *state = ProjectileState::PendingReturn;
    }
}
