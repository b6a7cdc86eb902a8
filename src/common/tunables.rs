//! Tunable gameplay constants.

use std::time::Duration;

use bevy::prelude::*;

/// Preset loadouts for playable characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Archetype {
    /// Light, fast, shoots where the cursor points.
    #[default]
    Gunner,
    /// Heavy, slow, drops bombs around itself.
    Bomber,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub player_speed: f32,
    pub player_archetype: Archetype,

    pub bullet_speed: f32,
    pub bullet_damage: f32,
    pub bullet_lifetime_secs: f32,

    pub bomb_damage: f32,
    pub bomb_radius: f32,
    pub bomb_fuse_secs: f32,

    /// Projectiles pre-spawned per equipped weapon.
    pub pool_capacity: usize,

    /// Full size of a status bar fill, in pixels.
    pub bar_size: Vec2,
    pub mana_regen_interval_ms: u64,
    pub mana_regen_step: f32,
}

impl Tunables {
    #[inline]
    pub fn mana_regen_interval(&self) -> Duration {
        Duration::from_millis(self.mana_regen_interval_ms)
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            player_speed: 420.0,
            player_archetype: Archetype::Gunner,
            bullet_speed: 900.0,
            bullet_damage: 10.0,
            bullet_lifetime_secs: 3.0,
            bomb_damage: 150.0,
            bomb_radius: 96.0,
            bomb_fuse_secs: 1.2,
            pool_capacity: 64,
            bar_size: Vec2::new(48.0, 6.0),
            mana_regen_interval_ms: 1000,
            mana_regen_step: 1.0,
        }
    }
}
