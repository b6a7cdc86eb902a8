//! Weapons: strategy tags plus the pool each one owns.

use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::projectiles::{dispose_pool, spawn_pool, ProjectileKind, SpawnProjectileRequest};

use super::Combatant;

/// Direction used when the aim point sits on top of the shooter.
pub const DEFAULT_AIM: Vec2 = Vec2::Y;

/// Distance in front of the shooter where bullets appear.
const MUZZLE_OFFSET: f32 = 18.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    /// Fires a bullet toward the aim point.
    Blaster,
    /// Drops a bomb at the wielder's feet; the aim point is ignored.
    Bomb,
}

impl WeaponKind {
    #[inline]
    pub const fn projectile(self) -> ProjectileKind {
        match self {
            WeaponKind::Blaster => ProjectileKind::Bullet,
            WeaponKind::Bomb => ProjectileKind::Bomb,
        }
    }

    /// Build the spawn request for one shot.
    pub fn fire(self, pool: Entity, owner: Entity, origin: Vec2, aim: Vec2, tunables: &Tunables) -> SpawnProjectileRequest {
        match self {
            WeaponKind::Blaster => {
                let dir = (aim - origin).try_normalize().unwrap_or(DEFAULT_AIM);
                SpawnProjectileRequest {
                    pool,
                    kind: ProjectileKind::Bullet,
                    pos: origin + dir * MUZZLE_OFFSET,
                    vel: dir * tunables.bullet_speed,
                    damage: tunables.bullet_damage,
                    owner: Some(owner),
                }
            }
            WeaponKind::Bomb => SpawnProjectileRequest {
                pool,
                kind: ProjectileKind::Bomb,
                pos: origin,
                vel: Vec2::ZERO,
                damage: tunables.bomb_damage,
                owner: Some(owner),
            },
        }
    }
}

/// An installed weapon: what it fires and the pool it fires from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weapon {
    pub kind: WeaponKind,
    pub pool: Entity,
}

impl Weapon {
    /// Spawn a fresh pool for `kind`.
    pub fn create(commands: &mut Commands, kind: WeaponKind, tunables: &Tunables) -> Self {
        let pool = spawn_pool(commands, kind.projectile(), tunables.pool_capacity);
        Self { kind, pool }
    }
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadoutChange {
    Equip { combatant: Entity, kind: WeaponKind },
    Disarm { combatant: Entity },
}

/// Apply equip / disarm requests. Any weapon being replaced has its pool disposed.
pub fn apply_loadout_changes(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<LoadoutChange>,
    mut q: Query<(&mut Combatant, &Name)>,
) {
    for change in reader.read() {
        let (LoadoutChange::Equip { combatant, .. } | LoadoutChange::Disarm { combatant }) = *change;

        let Ok((mut fighter, name)) = q.get_mut(combatant) else {
            debug!("Loadout change for missing combatant {combatant:?}");
            continue;
        };

        let previous = match *change {
            LoadoutChange::Equip { kind, .. } => {
                let weapon = Weapon::create(&mut commands, kind, &tunables);
                info!("{name} equipped {kind:?}");
                fighter.arm(weapon)
            }
            LoadoutChange::Disarm { .. } => {
                let previous = fighter.disarm();
                if previous.is_some() {
                    info!("{name} is now unarmed");
                } else {
                    debug!("{name} was already unarmed");
                }
                previous
            }
        };

        if let Some(old) = previous {
            dispose_pool(&mut commands, old.pool);
        }
    }
}
