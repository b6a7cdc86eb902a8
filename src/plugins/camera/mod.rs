//! Camera plugin (render-only).
//!
//! The camera trails the player. The two transform queries exclude each other with
//! `Without<...>` so Bevy can prove they never alias.

use bevy::math::StableInterpolate;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::player::Player;

/// Camera that turns the cursor into a world-space aim point.
#[derive(Component, Debug)]
pub struct MainCamera {
    /// Decay rate of the follow smoothing; higher catches up faster.
    pub follow_rate: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
    app.add_systems(
        PostUpdate,
        trail_player
            .before(TransformSystems::Propagate)
            .run_if(in_state(GameState::InGame)),
    );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { follow_rate: 5.0 },
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn trail_player(
    time: Res<Time>,
    player: Option<Single<&Transform, (With<Player>, Without<MainCamera>)>>,
    camera: Option<Single<(&mut Transform, &MainCamera), Without<Player>>>,
) {
    let (Some(player), Some(camera)) = (player, camera) else {
        return;
    };
    let (mut cam, settings) = camera.into_inner();

    let mut xy = cam.translation.truncate();
    xy.smooth_nudge(&player.translation.truncate(), settings.follow_rate, time.delta_secs());
    cam.translation.x = xy.x;
    cam.translation.y = xy.y;
}
