use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::bars::{spawn_bar_visual, BarKind, HealthBar, ManaBar, RegenCooldown, ResourceBar};

use super::{Archetype, AttackOnPrimaryAction, Combatant, Weapon, WeaponKind};

/// Gap between the top of the body and the health bar.
const BAR_GAP: f32 = 10.0;

/// Everything needed to put a combatant in the world.
#[derive(Debug, Clone)]
pub struct CombatantSpec {
    pub name: String,
    pub position: Vec2,
    /// Asset-free stand-in for a texture.
    pub color: Color,
    pub size: f32,
    pub layer: Layer,
    pub health_capacity: f32,
    pub mana_capacity: Option<f32>,
    pub movement_speed: f32,
    pub weapon: Option<WeaponKind>,
    pub subscribe_input: bool,
}

impl CombatantSpec {
    /// Playable character from a preset. Players carry a default mana bar and listen to input.
    pub fn player(archetype: Archetype, position: Vec2, tunables: &Tunables) -> Self {
        let color = match archetype {
            Archetype::Gunner => Color::srgb(0.2, 0.75, 0.9),
            Archetype::Bomber => Color::srgb(0.55, 0.8, 0.3),
        };

        Self {
            name: format!("Player({archetype:?})"),
            position,
            color,
            size: 26.0,
            layer: Layer::Player,
            health_capacity: archetype.health_capacity(),
            mana_capacity: Some(BarKind::Mana.default_capacity()),
            movement_speed: archetype.movement_speed(tunables),
            weapon: Some(archetype.weapon()),
            subscribe_input: true,
        }
    }

    /// Unarmed, stationary target that only takes hits.
    pub fn target(name: impl Into<String>, position: Vec2, health_capacity: f32) -> Self {
        Self {
            name: name.into(),
            position,
            color: Color::srgb(0.9, 0.25, 0.25),
            size: 32.0,
            layer: Layer::Target,
            health_capacity,
            mana_capacity: None,
            movement_speed: 0.0,
            weapon: None,
            subscribe_input: false,
        }
    }
}

pub fn combatant_layers(layer: Layer) -> CollisionLayers {
    match layer {
        Layer::Player => CollisionLayers::new(Layer::Player, [Layer::Target, Layer::Projectile]),
        Layer::Target => CollisionLayers::new(Layer::Target, [Layer::Player, Layer::Projectile]),
        other => CollisionLayers::new(other, [Layer::Projectile]),
    }
}

/// Spawn a combatant with its bars (as child sprites above it) and, if requested,
/// an equipped weapon and an input subscription.
pub fn spawn_combatant(commands: &mut Commands, tunables: &Tunables, spec: CombatantSpec) -> Entity {
    let bar_size = tunables.bar_size;
    let health_offset = Vec2::new(0.0, spec.size * 0.5 + BAR_GAP);

    let health_visual = spawn_bar_visual(commands, BarKind::Health, bar_size, health_offset);
    let health = HealthBar::new(
        ResourceBar::new(BarKind::Health, spec.health_capacity, bar_size),
        Some(health_visual.fill),
    );

    let mut fighter = Combatant::new(spec.movement_speed);
    if let Some(kind) = spec.weapon {
        fighter.arm(Weapon::create(commands, kind, tunables));
    }

    let e = commands
        .spawn((
            Name::new(spec.name),
            fighter,
            health,
            Sprite {
                color: spec.color,
                custom_size: Some(Vec2::splat(spec.size)),
                ..default()
            },
            Transform::from_translation(spec.position.extend(1.0)),
            RigidBody::Kinematic,
            Collider::circle(spec.size * 0.5),
            combatant_layers(spec.layer),
            LinearVelocity::ZERO,
            DespawnOnExit(GameState::InGame),
        ))
        .add_children(&health_visual.entities())
        .id();

    if let Some(capacity) = spec.mana_capacity {
        let mana_offset = health_offset + Vec2::new(0.0, bar_size.y + 2.0);
        let mana_visual = spawn_bar_visual(commands, BarKind::Mana, bar_size, mana_offset);
        let regen = RegenCooldown::new(tunables.mana_regen_interval(), tunables.mana_regen_step);
        let mana = ManaBar::new(
            ResourceBar::new(BarKind::Mana, capacity, bar_size).with_regen(regen),
            Some(mana_visual.fill),
        );

        commands.entity(e).insert(mana).add_children(&mana_visual.entities());
    }

    if spec.subscribe_input {
        commands.entity(e).insert(AttackOnPrimaryAction);
    }

    e
}
