use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

use super::components::{PoolMember, PooledProjectile, Projectile, ProjectileKind, ProjectileState};

/// Fixed-size set of pre-spawned projectiles owned by one weapon.
///
/// Lives on its own entity so a weapon holds just a handle, and disposing the
/// weapon is a despawn of that entity plus its members.
#[derive(Component, Debug)]
pub struct ProjectilePool {
    kind: ProjectileKind,
    free: Vec<Entity>,
    members: Vec<Entity>,
}

impl ProjectilePool {
    #[inline]
    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn members(&self) -> &[Entity] {
        &self.members
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: Entity) {
        debug_assert!(self.members.contains(&e), "pushed a projectile from another pool");
        self.free.push(e);
    }
}

#[inline]
pub fn active_layers(kind: ProjectileKind) -> CollisionLayers {
    match kind {
        ProjectileKind::Bullet => CollisionLayers::new(Layer::Projectile, [Layer::Player, Layer::Target]),
        // Bombs hurt by proximity on detonation, not by contact.
        ProjectileKind::Bomb => inactive_layers(),
    }
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

fn projectile_sprite(kind: ProjectileKind) -> Sprite {
    let (color, size) = match kind {
        ProjectileKind::Bullet => (Color::srgb(1.0, 0.85, 0.3), 8.0),
        ProjectileKind::Bomb => (Color::srgb(0.95, 0.45, 0.1), 16.0),
    };
    Sprite {
        color,
        custom_size: Some(Vec2::splat(size)),
        ..default()
    }
}

/// Pre-spawn `capacity` inactive projectiles and the pool entity that tracks them.
pub fn spawn_pool(commands: &mut Commands, kind: ProjectileKind, capacity: usize) -> Entity {
    let pool = commands
        .spawn((
            Name::new(format!("ProjectilePool({kind:?})")),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let members: Vec<Entity> = (0..capacity)
        .map(|_| {
            let sprite = projectile_sprite(kind);
            let radius = sprite.custom_size.map_or(4.0, |s| s.x * 0.5);
            commands
                .spawn((
                    Name::new(format!("{kind:?}(Pooled)")),
                    PooledProjectile,
                    PoolMember(pool),
                    ProjectileState::Inactive,
                    Projectile::inactive(kind),
                    sprite,
                    Transform::from_xyz(0.0, 0.0, 2.0),
                    Visibility::Hidden,
                    RigidBody::Dynamic,
                    Collider::circle(radius),
                    Sensor,
                    inactive_layers(),
                    LinearVelocity(Vec2::ZERO),
                    // Inactive projectiles won't collide anyway because layers are empty.
                    CollisionEventsEnabled,
                    DespawnOnExit(GameState::InGame),
                ))
                .id()
        })
        .collect();

    commands.entity(pool).insert(ProjectilePool {
        kind,
        free: members.clone(),
        members,
    });

    pool
}

/// Despawn a pool and every projectile it owns, in flight or not.
///
/// Runs as a world command so a pool spawned earlier in the same command queue
/// already has its member list when this is applied. Entities already gone (state
/// exit despawns pools alongside their combatants) are skipped.
pub fn dispose_pool(commands: &mut Commands, pool_e: Entity) {
    commands.queue(move |world: &mut World| {
        let members = world
            .get::<ProjectilePool>(pool_e)
            .map(|pool| pool.members.clone())
            .unwrap_or_default();

        for e in members.into_iter().chain([pool_e]) {
            if let Ok(entity) = world.get_entity_mut(e) {
                entity.despawn();
            }
        }
    });
}
