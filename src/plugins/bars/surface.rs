//! Visual side of a status bar.
//!
//! The model never touches sprites directly. It sees the fill through `CropSurface`,
//! the only capability it needs: the full frame size and "show this region".

use bevy::prelude::*;

pub trait CropSurface {
    fn frame_size(&self) -> Vec2;

    fn set_crop(&mut self, x: f32, y: f32, width: f32, height: f32);
}

/// Cropped fill image of a status bar.
///
/// `rest_x` is the local x of the fill when uncropped; cropping keeps the left
/// edge pinned there so the bar shrinks toward the left.
#[derive(Component, Debug, Clone)]
pub struct BarSurface {
    frame: Vec2,
    crop: Rect,
    rest_x: f32,
}

impl BarSurface {
    pub fn new(frame: Vec2, rest_x: f32) -> Self {
        Self {
            frame,
            crop: Rect::from_corners(Vec2::ZERO, frame),
            rest_x,
        }
    }

    #[inline]
    pub fn crop(&self) -> Rect {
        self.crop
    }

    /// Local x of the fill's centre for the current crop.
    #[inline]
    pub fn fill_center_x(&self) -> f32 {
        self.rest_x - self.frame.x * 0.5 + self.crop.min.x + self.crop.width() * 0.5
    }
}

impl CropSurface for BarSurface {
    fn frame_size(&self) -> Vec2 {
        self.frame
    }

    fn set_crop(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let width = width.clamp(0.0, self.frame.x);
        let height = height.clamp(0.0, self.frame.y);
        self.crop = Rect::new(x, y, x + width, y + height);
    }
}

/// Backing image drawn behind the fill ("empty bar").
#[derive(Component, Debug, Clone, Copy)]
pub struct BarBacking;

/// Resize and re-centre fill sprites whose crop changed.
pub fn apply_bar_crop(
    mut q: Query<(&BarSurface, &mut Sprite, &mut Transform), Changed<BarSurface>>,
) {
    for (surface, mut sprite, mut tf) in &mut q {
        let crop = surface.crop();
        sprite.custom_size = Some(crop.size());
        tf.translation.x = surface.fill_center_x();
    }
}
