use std::time::Duration;

use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    /// Aimed, travels until it hits something or its lifetime runs out.
    Bullet,
    /// Placed at the thrower, damages everything around it when the fuse ends.
    Bomb,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct PooledProjectile;

/// Pool this projectile returns to.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolMember(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub damage: f32,
    pub owner: Option<Entity>,
    /// Bullet lifetime or bomb fuse.
    pub timer: Timer,
}

impl Projectile {
    pub fn inactive(kind: ProjectileKind) -> Self {
        Self {
            kind,
            damage: 0.0,
            owner: None,
            timer: Timer::new(Duration::ZERO, TimerMode::Once),
        }
    }

    #[inline]
    pub fn reset_for_fire(&mut self, damage: f32, owner: Option<Entity>, timer: Duration) {
        self.damage = damage;
        self.owner = owner;
        self.timer = Timer::new(timer, TimerMode::Once);
    }
}
