use bevy::prelude::*;

use crate::common::tunables::Tunables;
use crate::plugins::input::PrimaryAction;
use crate::plugins::projectiles::SpawnProjectileRequest;

use super::{AttackOnPrimaryAction, Combatant};

/// Every subscribed combatant attacks once per primary action.
///
/// Only the request is written here. Whether a projectile actually comes out is up to
/// the allocator and the weapon's pool.
pub fn attack_on_primary_action(
    tunables: Res<Tunables>,
    mut reader: MessageReader<PrimaryAction>,
    q: Query<(Entity, &Combatant, &Transform, &Name), With<AttackOnPrimaryAction>>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    for action in reader.read() {
        for (e, fighter, tf, name) in &q {
            match fighter.attack(e, tf.translation.truncate(), action.target, &tunables) {
                Ok(request) => {
                    writer.write(request);
                }
                Err(err) => debug!("{name}: {err}"),
            }
        }
    }
}
