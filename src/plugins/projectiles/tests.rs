//! Projectiles plugin tests. Deterministic: no physics step runs.
//!
//! Collisions are not produced by running the physics pipeline. Tests inject
//! `CollisionStart` messages directly and run the hit system once.
use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::bars::{BarCommand, BarKind, BarOp, HealthBar, ResourceBar};

use super::*;

// --------------------------------------------------------------------------------------
// Helpers
// --------------------------------------------------------------------------------------

fn projectile_world() -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<Messages<SpawnProjectileRequest>>();
    world.init_resource::<Messages<BarCommand>>();
    world.init_resource::<Messages<CollisionStart>>();
    world
}

fn new_pool(world: &mut World, kind: ProjectileKind, capacity: usize) -> Entity {
    run_system_once(world, move |mut commands: Commands| spawn_pool(&mut commands, kind, capacity))
}

fn bar_commands(world: &mut World) -> Vec<BarCommand> {
    run_system_once(world, |mut reader: MessageReader<BarCommand>| reader.read().copied().collect::<Vec<_>>())
}

fn damageable(world: &mut World, pos: Vec2) -> Entity {
    world
        .spawn((
            HealthBar::new(ResourceBar::new(BarKind::Health, 100.0, Vec2::new(48.0, 6.0)), None),
            Transform::from_translation(pos.extend(1.0)),
        ))
        .id()
}

fn fire(world: &mut World, pool: Entity, kind: ProjectileKind, pos: Vec2, vel: Vec2, owner: Option<Entity>) -> Entity {
    world.write_message(SpawnProjectileRequest { pool, kind, pos, vel, damage: 7.0, owner });
    run_system_once(world, allocator::allocate_projectiles_from_pool);

    let mut q = world.query::<(Entity, &ProjectileState, &Transform)>();
    q.iter(world)
        .find(|(_, state, tf)| **state == ProjectileState::Active && tf.translation.truncate() == pos)
        .map(|(e, _, _)| e)
        .expect("an active projectile at the requested position")
}

/// Advance `Time` by `secs` so the next `expire_projectiles` run sees that delta.
fn set_delta(world: &mut World, secs: f32) {
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(secs));
    world.insert_resource(time);
}

// --------------------------------------------------------------------------------------
// Pooling unit tests (pure ECS)
// --------------------------------------------------------------------------------------

#[test]
fn spawn_pool_creates_inactive_members() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 8);

    let pool = world.get::<ProjectilePool>(pool_e).unwrap();
    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.free_len(), 8);
    assert_eq!(pool.kind(), ProjectileKind::Bullet);

    let mut q = world.query::<(&PoolMember, &ProjectileState, &Visibility, &CollisionLayers)>();
    let mut n = 0;
    for (member, state, vis, layers) in q.iter(&world) {
        n += 1;
        assert_eq!(member.0, pool_e);
        assert_eq!(*state, ProjectileState::Inactive);
        assert_eq!(*vis, Visibility::Hidden);
        assert!(layers.memberships.has_all(Layer::Projectile));
        assert!(!layers.filters.has_all(Layer::Target));
    }
    assert_eq!(n, 8);
}

#[test]
fn allocate_activates_bullet_from_its_pool() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 2);
    let owner = world.spawn_empty().id();

    let e = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::new(10.0, 20.0), Vec2::new(100.0, 0.0), Some(owner));

    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::new(100.0, 0.0));
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Visible);

    let layers = world.get::<CollisionLayers>(e).unwrap();
    assert!(layers.filters.has_all(Layer::Target));
    assert!(layers.filters.has_all(Layer::Player));

    let projectile = world.get::<Projectile>(e).unwrap();
    assert_eq!(projectile.damage, 7.0);
    assert_eq!(projectile.owner, Some(owner));
    assert_eq!(projectile.timer.duration(), Duration::from_secs_f32(3.0));

    assert_eq!(world.get::<ProjectilePool>(pool_e).unwrap().free_len(), 1);
}

#[test]
fn exhausted_or_missing_pool_drops_request() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let ghost_pool = world.spawn_empty().id();

    for pool in [pool_e, pool_e, ghost_pool] {
        world.write_message(SpawnProjectileRequest {
            pool,
            kind: ProjectileKind::Bullet,
            pos: Vec2::ZERO,
            vel: Vec2::X,
            damage: 1.0,
            owner: None,
        });
    }
    run_system_once(&mut world, allocator::allocate_projectiles_from_pool);

    let active = world
        .query::<&ProjectileState>()
        .iter(&world)
        .filter(|s| **s == ProjectileState::Active)
        .count();
    assert_eq!(active, 1);
}

#[test]
fn commit_deactivates_and_recycles() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let e = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::ZERO, Vec2::new(10.0, 0.0), None);

    *world.get_mut::<ProjectileState>(e).unwrap() = ProjectileState::PendingReturn;
    run_system_once(&mut world, commit::return_to_pool_commit);

    assert_eq!(*world.get::<ProjectileState>(e).unwrap(), ProjectileState::Inactive);
    assert_eq!(*world.get::<Visibility>(e).unwrap(), Visibility::Hidden);
    assert_eq!(world.get::<LinearVelocity>(e).unwrap().0, Vec2::ZERO);
    assert!(!world.get::<CollisionLayers>(e).unwrap().filters.has_all(Layer::Target));
    assert_eq!(world.get::<ProjectilePool>(pool_e).unwrap().free_len(), 1);
}

#[test]
fn commit_despawns_orphans() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let e = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::ZERO, Vec2::X, None);

    world.entity_mut(pool_e).despawn();
    *world.get_mut::<ProjectileState>(e).unwrap() = ProjectileState::PendingReturn;
    run_system_once(&mut world, commit::return_to_pool_commit);

    assert!(world.get_entity(e).is_err());
}

#[test]
fn dispose_pool_removes_members_in_flight() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bomb, 3);
    let e = fire(&mut world, pool_e, ProjectileKind::Bomb, Vec2::ONE, Vec2::ZERO, None);

    run_system_once(&mut world, move |mut commands: Commands| dispose_pool(&mut commands, pool_e));

    assert!(world.get_entity(pool_e).is_err());
    assert!(world.get_entity(e).is_err());
    assert_eq!(world.query::<&PooledProjectile>().iter(&world).count(), 0);
}

// --------------------------------------------------------------------------------------
// Collision tests (inject CollisionStart messages)
// --------------------------------------------------------------------------------------

#[test]
fn bullet_hit_damages_target_and_returns() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let shooter = damageable(&mut world, Vec2::ZERO);
    let target = damageable(&mut world, Vec2::new(50.0, 0.0));
    let bullet = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::new(40.0, 0.0), Vec2::X, Some(shooter));

    world.write_message(CollisionStart { collider1: target, collider2: bullet, body1: Some(target), body2: Some(bullet) });
    // A second contact in the same frame must not double count.
    world.write_message(CollisionStart { collider1: bullet, collider2: target, body1: Some(bullet), body2: Some(target) });
    run_system_once(&mut world, collision::process_projectile_hits);

    assert_eq!(*world.get::<ProjectileState>(bullet).unwrap(), ProjectileState::PendingReturn);

    let cmds = bar_commands(&mut world);
    assert_eq!(cmds.len(), 1);
    assert_eq!(cmds[0].target, target);
    assert_eq!(cmds[0].kind, BarKind::Health);
    assert_eq!(cmds[0].op, BarOp::Deplete(7.0));
}

#[test]
fn bullet_ignores_its_owner() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let shooter = damageable(&mut world, Vec2::ZERO);
    let bullet = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::new(18.0, 0.0), Vec2::X, Some(shooter));

    world.write_message(CollisionStart { collider1: bullet, collider2: shooter, body1: None, body2: None });
    run_system_once(&mut world, collision::process_projectile_hits);

    assert_eq!(*world.get::<ProjectileState>(bullet).unwrap(), ProjectileState::Active);
    assert!(bar_commands(&mut world).is_empty());
}

#[test]
fn inactive_projectile_collisions_are_ignored() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let target = damageable(&mut world, Vec2::ZERO);
    let idle = world.get::<ProjectilePool>(pool_e).unwrap().members()[0];

    world.write_message(CollisionStart { collider1: idle, collider2: target, body1: None, body2: None });
    run_system_once(&mut world, collision::process_projectile_hits);

    assert!(bar_commands(&mut world).is_empty());
}

// --------------------------------------------------------------------------------------
// Timers
// --------------------------------------------------------------------------------------

#[test]
fn bullet_expires_after_lifetime() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bullet, 1);
    let bullet = fire(&mut world, pool_e, ProjectileKind::Bullet, Vec2::ZERO, Vec2::X, None);

    set_delta(&mut world, 1.0);
    run_system_once(&mut world, lifetime::expire_projectiles);
    assert_eq!(*world.get::<ProjectileState>(bullet).unwrap(), ProjectileState::Active);

    set_delta(&mut world, 2.5);
    run_system_once(&mut world, lifetime::expire_projectiles);
    assert_eq!(*world.get::<ProjectileState>(bullet).unwrap(), ProjectileState::PendingReturn);
    assert!(bar_commands(&mut world).is_empty());
}

#[test]
fn bomb_detonation_hits_everything_in_radius_but_owner() {
    let mut world = projectile_world();
    let pool_e = new_pool(&mut world, ProjectileKind::Bomb, 1);
    let radius = world.resource::<Tunables>().bomb_radius;

    let owner = damageable(&mut world, Vec2::ZERO);
    let near = damageable(&mut world, Vec2::new(radius - 1.0, 0.0));
    let far = damageable(&mut world, Vec2::new(radius + 1.0, 0.0));
    let bomb = fire(&mut world, pool_e, ProjectileKind::Bomb, Vec2::ZERO, Vec2::ZERO, Some(owner));

    set_delta(&mut world, 5.0);
    run_system_once(&mut world, lifetime::expire_projectiles);

    assert_eq!(*world.get::<ProjectileState>(bomb).unwrap(), ProjectileState::PendingReturn);

    let hit: Vec<Entity> = bar_commands(&mut world).iter().map(|c| c.target).collect();
    assert_eq!(hit, vec![near]);
    assert!(!hit.contains(&far));
}
