use bevy::prelude::*;

use super::model::{BarKind, ResourceBar};
use super::surface::{BarBacking, BarSurface};

/// Shared access for systems that treat health and mana bars alike.
pub trait StatusBar: Component {
    const KIND: BarKind;

    fn bar(&self) -> &ResourceBar;

    fn bar_mut(&mut self) -> &mut ResourceBar;

    fn surface(&self) -> Option<Entity>;
}

#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct HealthBar {
    #[deref]
    bar: ResourceBar,
    surface: Option<Entity>,
}

impl HealthBar {
    pub fn new(bar: ResourceBar, surface: Option<Entity>) -> Self {
        Self { bar, surface }
    }
}

impl StatusBar for HealthBar {
    const KIND: BarKind = BarKind::Health;

    fn bar(&self) -> &ResourceBar {
        &self.bar
    }

    fn bar_mut(&mut self) -> &mut ResourceBar {
        &mut self.bar
    }

    fn surface(&self) -> Option<Entity> {
        self.surface
    }
}

#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct ManaBar {
    #[deref]
    bar: ResourceBar,
    surface: Option<Entity>,
}

impl ManaBar {
    pub fn new(bar: ResourceBar, surface: Option<Entity>) -> Self {
        Self { bar, surface }
    }
}

impl StatusBar for ManaBar {
    const KIND: BarKind = BarKind::Mana;

    fn bar(&self) -> &ResourceBar {
        &self.bar
    }

    fn bar_mut(&mut self) -> &mut ResourceBar {
        &mut self.bar
    }

    fn surface(&self) -> Option<Entity> {
        self.surface
    }
}

/// Entities making up one on-screen bar. Both are meant to be parented to the owner.
#[derive(Debug, Clone, Copy)]
pub struct BarVisual {
    pub backing: Entity,
    pub fill: Entity,
}

impl BarVisual {
    #[inline]
    pub fn entities(&self) -> [Entity; 2] {
        [self.backing, self.fill]
    }
}

fn fill_color(kind: BarKind) -> Color {
    match kind {
        BarKind::Health => Color::srgb(0.85, 0.2, 0.2),
        BarKind::Mana => Color::srgb(0.25, 0.45, 0.95),
    }
}

/// Spawn backing + fill sprites for a bar, centred on `offset` in the owner's local space.
///
/// Asset-free: plain colour sprites stand in for the bar textures.
pub fn spawn_bar_visual(commands: &mut Commands, kind: BarKind, frame: Vec2, offset: Vec2) -> BarVisual {
    let backing = commands
        .spawn((
            Name::new(format!("{kind:?}BarBacking")),
            BarBacking,
            Sprite {
                color: Color::srgb(0.1, 0.1, 0.12),
                custom_size: Some(frame),
                ..default()
            },
            Transform::from_translation(offset.extend(5.0)),
        ))
        .id();

    let fill = commands
        .spawn((
            Name::new(format!("{kind:?}BarFill")),
            BarSurface::new(frame, offset.x),
            Sprite {
                color: fill_color(kind),
                custom_size: Some(frame),
                ..default()
            },
            Transform::from_translation(offset.extend(5.1)),
        ))
        .id();

    BarVisual { backing, fill }
}
