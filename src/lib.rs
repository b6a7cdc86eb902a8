//! Arcade combatants: resource bars, armed fighters and pooled projectiles on Bevy + Avian.
//!
//! The binary only calls [`game::run`]. Everything else is public so the headless
//! integration tests in `tests/` can drive the same plugins.

pub mod common;
pub mod game;
pub mod plugins;
