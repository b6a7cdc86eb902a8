//! Status bars: health and mana resource bars with crop-based depletion.
//!
//! ```text
//!   Update
//!     apply_bar_commands   BarCommand messages -> HealthBar / ManaBar
//!     tick_mana_regen      Time::elapsed -> ManaBar (one step per cooldown)
//!   PostUpdate
//!     sync_bar_surfaces    changed bar -> BarSurface crop
//!     apply_bar_crop       changed BarSurface -> Sprite size + offset
//! ```

pub mod components;
pub mod error;
pub mod messages;
pub mod model;
pub mod surface;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{spawn_bar_visual, BarVisual, HealthBar, ManaBar, StatusBar};
pub use error::BarError;
pub use messages::{BarCommand, BarOp};
pub use model::{BarKind, RegenCooldown, ResourceBar};
pub use surface::{BarSurface, CropSurface};

pub fn plugin(app: &mut App) {
    app.add_message::<BarCommand>();

    app.add_systems(
        Update,
        (
            systems::apply_bar_commands,
            systems::tick_mana_regen.after(systems::apply_bar_commands),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        (
            systems::sync_bar_surfaces::<HealthBar>,
            systems::sync_bar_surfaces::<ManaBar>,
            surface::apply_bar_crop
                .after(systems::sync_bar_surfaces::<HealthBar>)
                .after(systems::sync_bar_surfaces::<ManaBar>),
        ),
    );
}
