//! Resource bar model: a depletable quantity plus the width of its visible fill.
//!
//! The bar keeps `display_width == frame.x * current / capacity` as long as every
//! mutation goes through the methods below. Depletion scales the *current* width by
//! the removed share of the *current* value; regeneration grows it by the added share
//! of the *capacity*. Both land on the same proportional width.

use std::time::Duration;

use bevy::prelude::*;

use super::error::BarError;
use super::surface::CropSurface;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarKind {
    Health,
    Mana,
}

impl BarKind {
    pub const fn default_capacity(self) -> f32 {
        match self {
            BarKind::Health => 500.0,
            BarKind::Mana => 1000.0,
        }
    }
}

/// Next-eligible timestamp for timed regeneration.
///
/// Edge-triggered: one step per eligible `ready` call, however much time passed.
#[derive(Clone, Debug, PartialEq)]
pub struct RegenCooldown {
    next_eligible: Duration,
    interval: Duration,
    step: f32,
}

impl RegenCooldown {
    pub fn new(interval: Duration, step: f32) -> Self {
        Self {
            next_eligible: Duration::ZERO,
            interval,
            step,
        }
    }

    #[inline]
    pub fn next_eligible(&self) -> Duration {
        self.next_eligible
    }

    #[inline]
    fn ready(&self, now: Duration) -> bool {
        self.next_eligible < now
    }

    #[inline]
    fn schedule_after(&mut self, now: Duration) {
        self.next_eligible = now + self.interval;
    }
}

impl Default for RegenCooldown {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceBar {
    kind: BarKind,
    capacity: f32,
    current: f32,
    frame: Vec2,
    display_width: f32,
    regen: Option<RegenCooldown>,
}

impl ResourceBar {
    /// Full bar. Mana bars get the default one-per-second regeneration.
    pub fn new(kind: BarKind, capacity: f32, frame: Vec2) -> Self {
        let regen = match kind {
            BarKind::Health => None,
            BarKind::Mana => Some(RegenCooldown::default()),
        };

        Self {
            kind,
            capacity,
            current: capacity,
            frame,
            display_width: frame.x,
            regen,
        }
    }

    pub fn with_default_capacity(kind: BarKind, frame: Vec2) -> Self {
        Self::new(kind, kind.default_capacity(), frame)
    }

    /// Size the bar after the surface it will be cropping.
    pub fn for_surface(kind: BarKind, capacity: f32, surface: &impl CropSurface) -> Self {
        Self::new(kind, capacity, surface.frame_size())
    }

    /// Replace the regeneration cadence. Ignored for health bars.
    pub fn with_regen(mut self, regen: RegenCooldown) -> Self {
        if self.kind == BarKind::Mana {
            self.regen = Some(regen);
        }
        self
    }

    #[inline]
    pub fn kind(&self) -> BarKind {
        self.kind
    }

    #[inline]
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn display_width(&self) -> f32 {
        self.display_width
    }

    #[inline]
    pub fn regen(&self) -> Option<&RegenCooldown> {
        self.regen.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.current >= self.capacity
    }

    #[inline]
    pub fn fraction(&self) -> f32 {
        if self.capacity > 0.0 {
            self.current / self.capacity
        } else {
            0.0
        }
    }

    /// Remove up to `amount`, returning how much was actually removed.
    pub fn deplete(&mut self, amount: f32) -> Result<f32, BarError> {
        check_amount(amount)?;
        if self.is_empty() {
            return Err(BarError::Empty { kind: self.kind });
        }

        let amount = amount.min(self.current);
        let ratio = amount / self.current;

        self.display_width = (self.display_width - self.display_width * ratio).max(0.0);
        self.current = (self.current - amount).clamp(0.0, self.capacity);

        Ok(amount)
    }

    /// Add up to `amount`, returning how much was actually added. A full bar is left untouched.
    pub fn regenerate(&mut self, amount: f32) -> Result<f32, BarError> {
        check_amount(amount)?;
        if self.is_full() {
            return Ok(0.0);
        }

        let amount = amount.min(self.capacity - self.current);
        let rate = amount / self.capacity;

        self.display_width = (self.display_width + self.frame.x * rate).min(self.frame.x);
        self.current = (self.current + amount).clamp(0.0, self.capacity);

        Ok(amount)
    }

    pub fn reset(&mut self) {
        self.current = self.capacity;
        self.display_width = self.frame.x;
    }

    /// Timed regeneration step. Returns whether the bar regenerated.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.is_full() {
            return false;
        }
        let Some(regen) = self.regen.as_mut() else {
            return false;
        };
        if !regen.ready(now) {
            return false;
        }

        regen.schedule_after(now);
        let step = regen.step;
        matches!(self.regenerate(step), Ok(applied) if applied > 0.0)
    }

    /// Visible region of the fill, in surface-local pixels.
    #[inline]
    pub fn crop_region(&self) -> Rect {
        Rect::new(0.0, 0.0, self.display_width, self.frame.y)
    }

    pub fn apply_crop(&self, surface: &mut impl CropSurface) {
        let region = self.crop_region();
        surface.set_crop(region.min.x, region.min.y, region.width(), region.height());
    }
}

#[inline]
fn check_amount(amount: f32) -> Result<(), BarError> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(BarError::InvalidAmount { amount })
    }
}
