mod common;

use bevy::prelude::*;
use arcade_combatants::plugins::bars::ManaBar;
use arcade_combatants::plugins::combatant::LoadoutChange;
use arcade_combatants::plugins::input::PrimaryAction;
use arcade_combatants::plugins::projectiles::{PooledProjectile, Projectile, ProjectileState};

fn active_projectiles(app: &mut App) -> Vec<Projectile> {
    app.world_mut()
        .query_filtered::<(&Projectile, &ProjectileState), With<PooledProjectile>>()
        .iter(app.world())
        .filter(|(_, state)| **state == ProjectileState::Active)
        .map(|(p, _)| p.clone())
        .collect()
}

#[test]
fn primary_action_fires_from_the_player_pool() {
    let mut app = common::app_in_game();
    let player = common::player(&mut app);

    app.world_mut().write_message(PrimaryAction { target: Vec2::new(300.0, 0.0) });
    app.update();

    let active = active_projectiles(&mut app);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].owner, Some(player));

    // Firing draws nothing but a pooled projectile.
    assert!(app.world().get::<ManaBar>(player).unwrap().is_full());
}

#[test]
fn disarmed_player_cannot_attack() {
    let mut app = common::app_in_game();
    let player = common::player(&mut app);

    app.world_mut().write_message(LoadoutChange::Disarm { combatant: player });
    app.update();

    // The old pool and its members are gone.
    let pooled = app
        .world_mut()
        .query::<&PooledProjectile>()
        .iter(app.world())
        .count();
    assert_eq!(pooled, 0);

    app.world_mut().write_message(PrimaryAction { target: Vec2::new(300.0, 0.0) });
    app.update();

    assert!(active_projectiles(&mut app).is_empty());
    assert!(app.world().get::<ManaBar>(player).unwrap().is_full());
}
