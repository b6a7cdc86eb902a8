use bevy::prelude::*;

use super::components::{HealthBar, ManaBar, StatusBar};
use super::error::BarError;
use super::messages::{BarCommand, BarOp};
use super::model::{BarKind, ResourceBar};
use super::surface::BarSurface;

fn apply_op(target: Entity, bar: &mut ResourceBar, op: BarOp) {
    let result = match op {
        BarOp::Deplete(amount) => bar.deplete(amount),
        BarOp::Regenerate(amount) => bar.regenerate(amount),
        BarOp::Reset => {
            bar.reset();
            Ok(bar.capacity())
        }
    };

    match result {
        Ok(_) => {}
        Err(err @ BarError::InvalidAmount { .. }) => warn!("{target:?}: {err}"),
        Err(err @ BarError::Empty { .. }) => debug!("{target:?}: {err}"),
    }
}

/// Single writer for externally requested bar changes (damage, costs, heals, resets).
pub fn apply_bar_commands(
    mut reader: MessageReader<BarCommand>,
    mut q_health: Query<&mut HealthBar>,
    mut q_mana: Query<&mut ManaBar>,
) {
    for cmd in reader.read() {
        let bar = match cmd.kind {
            BarKind::Health => q_health.get_mut(cmd.target).ok().map(|h| h.map_unchanged(|h| h.bar_mut())),
            BarKind::Mana => q_mana.get_mut(cmd.target).ok().map(|m| m.map_unchanged(|m| m.bar_mut())),
        };

        let Some(mut bar) = bar else {
            debug!("{:?} has no {:?} bar; dropping {:?}", cmd.target, cmd.kind, cmd.op);
            continue;
        };

        apply_op(cmd.target, &mut bar, cmd.op);
    }
}

/// Timed mana regeneration.
///
/// Change detection is only tripped when a step actually happened, so idle bars
/// don't force a crop sync every frame.
pub fn tick_mana_regen(time: Res<Time>, mut q: Query<&mut ManaBar>) {
    let now = time.elapsed();

    for mut mana in &mut q {
        if mana.bypass_change_detection().tick(now) {
            mana.set_changed();
        }
    }
}

/// Push the crop of changed bars to their visual surface.
pub fn sync_bar_surfaces<T: StatusBar>(
    q_bars: Query<&T, Changed<T>>,
    mut q_surfaces: Query<&mut BarSurface>,
) {
    for status in &q_bars {
        let Some(surface_e) = status.surface() else {
            continue;
        };
        let Ok(mut surface) = q_surfaces.get_mut(surface_e) else {
            debug!("{:?} bar surface {surface_e:?} is gone", T::KIND);
            continue;
        };

        status.bar().apply_crop(&mut *surface);
    }
}
