//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the configured archetype as a combatant
//! - Update: sample WASD, write PlayerInput resource
//! - FixedUpdate: apply velocity to kinematic rigid body at the combatant's own speed
//! - PostUpdate: respawn (reset bars, return to origin) once health is empty

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::bars::{HealthBar, ManaBar};
use crate::plugins::combatant::{spawn_combatant, Combatant, CombatantSpec};

#[derive(Component)]
pub struct Player;

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input.run_if(in_state(GameState::InGame)))
        .add_systems(FixedUpdate, apply_movement.run_if(in_state(GameState::InGame)))
        .add_systems(PostUpdate, respawn_on_empty_health.run_if(in_state(GameState::InGame)));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let spec = CombatantSpec::player(tunables.player_archetype, Vec2::ZERO, &tunables);
    let e = spawn_combatant(&mut commands, &tunables, spec);
    commands.entity(e).insert((Player, TranslationInterpolation));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    input: Res<PlayerInput>,
    player: Option<Single<(&Combatant, &mut LinearVelocity), With<Player>>>,
) {
    let Some(player) = player else {
        return;
    };
    let (fighter, mut vel) = player.into_inner();
    vel.0 = input.move_axis * fighter.movement_speed();
}

fn respawn_on_empty_health(
    mut q_player: Query<(&Name, &mut HealthBar, Option<&mut ManaBar>, &mut Transform), With<Player>>,
) {
    for (name, mut health, mana, mut tf) in &mut q_player {
        if !health.is_empty() {
            continue;
        }

        health.reset();
        if let Some(mut mana) = mana {
            mana.reset();
        }
        tf.translation.x = 0.0;
        tf.translation.y = 0.0;
        info!("{name} was knocked out; respawning at origin");
    }
}
