//! App assembly.
//!
//! `configure_full` is what the binary runs. `configure_headless` installs the same
//! gameplay on top of whatever the caller already added (tests use `MinimalPlugins`),
//! leaving out anything that needs a window or a renderer.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

const WINDOW_TITLE: &str = "Arcade Combatants";

pub fn run() -> AppExit {
    App::new().add_plugins(configure_full).run()
}

pub fn configure_full(app: &mut App) {
    let window = Window {
        title: WINDOW_TITLE.into(),
        resolution: WindowResolution::new(1280, 720),
        ..default()
    };
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..default()
    }));

    install_gameplay(app);
    plugins::register_render(app);
    info!("{WINDOW_TITLE} started");
}

/// Gameplay only. The caller provides the runtime plugins.
pub fn configure_headless(app: &mut App) {
    install_gameplay(app);
}

fn install_gameplay(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
