//! Combatants: entities with a health bar, an optional mana bar and a weapon slot.
//!
//! The weapon slot is an explicit two-state machine:
//!
//! ```text
//!          arm(weapon)
//!   Unarmed ──────────> Armed(Weapon { kind, pool })
//!      ^                   │
//!      └─────disarm()──────┘
//! ```
//!
//! Attacking while `Unarmed` is an ordinary outcome (`CombatError::Unarmed`), never a panic.
//! The pool belongs to the combatant alone: replacing, dropping or despawning the combatant
//! disposes it.
//! Input reaches a combatant only while it carries `AttackOnPrimaryAction`; removing that
//! component is the unsubscribe.

pub mod attack;
pub mod error;
pub mod spawn;
pub mod weapon;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::input::EmitPrimaryAction;
use crate::plugins::projectiles::{dispose_pool, AllocateProjectiles, SpawnProjectileRequest};

pub use crate::common::tunables::Archetype;
pub use error::CombatError;
pub use spawn::{spawn_combatant, CombatantSpec};
pub use weapon::{LoadoutChange, Weapon, WeaponKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Armament {
    Armed(Weapon),
    Unarmed,
}

#[derive(Component, Debug, Clone)]
pub struct Combatant {
    movement_speed: f32,
    armament: Armament,
}

impl Combatant {
    pub fn new(movement_speed: f32) -> Self {
        Self {
            movement_speed,
            armament: Armament::Unarmed,
        }
    }

    #[inline]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    #[inline]
    pub fn weapon(&self) -> Option<Weapon> {
        match self.armament {
            Armament::Armed(weapon) => Some(weapon),
            Armament::Unarmed => None,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        matches!(self.armament, Armament::Armed(_))
    }

    /// Install `weapon`, returning the one it replaces (whose pool the caller must dispose).
    pub fn arm(&mut self, weapon: Weapon) -> Option<Weapon> {
        let previous = self.weapon();
        self.armament = Armament::Armed(weapon);
        previous
    }

    /// Drop the current weapon, returning it so its pool can be disposed.
    pub fn disarm(&mut self) -> Option<Weapon> {
        let previous = self.weapon();
        self.armament = Armament::Unarmed;
        previous
    }

    /// One attack from `origin` toward `aim`.
    pub fn attack(&self, me: Entity, origin: Vec2, aim: Vec2, tunables: &Tunables) -> Result<SpawnProjectileRequest, CombatError> {
        let weapon = self.weapon().ok_or(CombatError::Unarmed)?;
        Ok(weapon.kind.fire(weapon.pool, me, origin, aim, tunables))
    }
}

/// Subscription to the primary input action.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct AttackOnPrimaryAction;

/// Stop reacting to the primary input action.
pub fn unsubscribe_attack(commands: &mut Commands, combatant: Entity) {
    commands.entity(combatant).remove::<AttackOnPrimaryAction>();
}

/// A combatant leaving the world takes its weapon's pool with it.
///
/// Covers every way out: target destruction, plain despawns and removing the component.
pub fn dispose_weapon_on_remove(remove: On<Remove, Combatant>, q: Query<&Combatant>, mut commands: Commands) {
    let Ok(fighter) = q.get(remove.entity) else {
        return;
    };
    if let Some(weapon) = fighter.weapon() {
        debug!("{:?} removed while armed; disposing pool {:?}", remove.entity, weapon.pool);
        dispose_pool(&mut commands, weapon.pool);
    }
}

impl Archetype {
    pub fn health_capacity(self) -> f32 {
        match self {
            Archetype::Gunner => 100.0,
            Archetype::Bomber => 500.0,
        }
    }

    pub fn movement_speed(self, tunables: &Tunables) -> f32 {
        match self {
            Archetype::Gunner => tunables.player_speed,
            Archetype::Bomber => 64.0,
        }
    }

    pub fn weapon(self) -> WeaponKind {
        match self {
            Archetype::Gunner => WeaponKind::Blaster,
            Archetype::Bomber => WeaponKind::Bomb,
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_message::<LoadoutChange>();
    app.add_observer(dispose_weapon_on_remove);

    app.add_systems(
        Update,
        (
            weapon::apply_loadout_changes,
            attack::attack_on_primary_action
                .after(weapon::apply_loadout_changes)
                .after(EmitPrimaryAction)
                .before(AllocateProjectiles),
        )
            .run_if(in_state(GameState::InGame)),
    );
}
