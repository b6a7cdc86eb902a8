//! Training targets: unarmed combatants that soak up damage.
//!
//! They use the same health bar as players but never listen to input. A target whose
//! bar is empty is marked and then despawned in PostUpdate, after the fixed-step
//! collision work of the frame is done.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::bars::HealthBar;
use crate::plugins::combatant::{spawn_combatant, CombatantSpec};

const TARGET_HEALTH: f32 = 300.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct TrainingTarget;

/// Marker: target should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets);
    app.add_systems(
        PostUpdate,
        (mark_destroyed_targets, despawn_marked_targets.after(mark_destroyed_targets))
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn_targets(mut commands: Commands, tunables: Res<Tunables>) {
    for (i, x) in [-200.0, 0.0, 200.0].into_iter().enumerate() {
        let spec = CombatantSpec::target(format!("Target{i}"), Vec2::new(x, 160.0), TARGET_HEALTH);
        let e = spawn_combatant(&mut commands, &tunables, spec);
        commands.entity(e).insert(TrainingTarget);
    }
}

fn mark_destroyed_targets(
    mut commands: Commands,
    q: Query<(Entity, &Name, &HealthBar), (With<TrainingTarget>, Without<PendingDespawn>, Changed<HealthBar>)>,
) {
    for (e, name, health) in &q {
        if health.is_empty() {
            info!("{name} destroyed");
            commands.entity(e).insert(PendingDespawn);
        }
    }
}

/// Despawn targets marked for removal. Bars are children and go with them.
fn despawn_marked_targets(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
