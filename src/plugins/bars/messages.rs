//! Buffered bar mutations.
//!
//! Damage, costs and heals from anywhere in the game are written as messages and
//! applied by a single system, so only one place mutates bars outside of regen.

use bevy::prelude::*;

use super::model::BarKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarOp {
    Deplete(f32),
    Regenerate(f32),
    Reset,
}

#[derive(Message, Clone, Copy, Debug)]
pub struct BarCommand {
    pub target: Entity,
    pub kind: BarKind,
    pub op: BarOp,
}

impl BarCommand {
    pub fn damage(target: Entity, amount: f32) -> Self {
        Self { target, kind: BarKind::Health, op: BarOp::Deplete(amount) }
    }

    pub fn heal(target: Entity, amount: f32) -> Self {
        Self { target, kind: BarKind::Health, op: BarOp::Regenerate(amount) }
    }

    pub fn reset(target: Entity, kind: BarKind) -> Self {
        Self { target, kind, op: BarOp::Reset }
    }
}
