//! Input plugin: turns the mouse into a world-space aim point and a primary action.
//!
//! Combatants never read devices. They subscribe to `PrimaryAction` messages instead,
//! which also lets tests fire attacks by writing messages directly.
//!
//! ```text
//!   PreUpdate (after input): update_aim_from_cursor  Window cursor -> Aim
//!   Update:                  emit_primary_action     left click + Aim -> PrimaryAction
//! ```

use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::camera::MainCamera;

/// World-space cursor. `None` while the cursor is outside the window or no camera exists.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct Aim {
    pub world_cursor: Option<Vec2>,
}

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct PrimaryAction {
    pub target: Vec2,
}

/// Ordering anchor for systems that produce `PrimaryAction`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmitPrimaryAction;

pub fn plugin(app: &mut App) {
    app.init_resource::<Aim>();
    app.add_message::<PrimaryAction>();

    app.add_systems(
        PreUpdate,
        update_aim_from_cursor
            .after(InputSystems)
            .run_if(in_state(GameState::InGame)),
    );
    app.add_systems(
        Update,
        emit_primary_action
            .in_set(EmitPrimaryAction)
            .run_if(in_state(GameState::InGame)),
    );
}

pub fn update_aim_from_cursor(
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut aim: ResMut<Aim>,
) {
    aim.world_cursor = None;

    let Ok(window) = windows.single() else { return; };
    let Some(cursor) = window.cursor_position() else { return; };
    let Ok((camera, camera_tf)) = q_camera.single() else { return; };

    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(p) => aim.world_cursor = Some(p),
        Err(e) => debug!("viewport_to_world_2d failed: {e:?}"),
    }
}

/// Producer: left click with a known aim point -> `PrimaryAction`.
pub fn emit_primary_action(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    aim: Res<Aim>,
    mut writer: MessageWriter<PrimaryAction>,
) {
    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let Some(target) = aim.world_cursor else {
        debug!("Primary action ignored: cursor position is unknown");
        return;
    };

    writer.write(PrimaryAction { target });
}
