//! Falling fruit entity
//!
//! Spawn ballistics and the per-tick update that integrates motion, applies
//! gravity, and decides the fruit's fate against the tick's tracked points.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// A visual variant: asset key plus bounding extent in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FruitVariant {
    pub asset: &'static str,
    pub width: f32,
    pub height: f32,
}

/// The fixed catalog the spawner picks from, uniformly. Extents are the
/// scaled sprite sizes of the asset set; only the bounding extent matters to
/// the simulation, the asset key is for the rendering layer.
pub const CATALOG: [FruitVariant; 8] = [
    FruitVariant { asset: "Orange.png", width: 190.0, height: 190.0 },
    FruitVariant { asset: "Strawberry.png", width: 152.0, height: 160.0 },
    FruitVariant { asset: "Lemon.png", width: 152.0, height: 160.0 },
    FruitVariant { asset: "Grapes.png", width: 205.0, height: 205.0 },
    FruitVariant { asset: "Apple.png", width: 190.0, height: 190.0 },
    FruitVariant { asset: "Banana.png", width: 190.0, height: 190.0 },
    FruitVariant { asset: "Watermelon.png", width: 220.0, height: 190.0 },
    FruitVariant { asset: "Pineapple.png", width: 222.0, height: 257.0 },
];

/// Outcome of a fruit's per-tick update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Still live
    Airborne,
    /// A tracked point entered the bounding rect
    Sliced,
    /// Fell past the bottom expiry line
    Fell,
}

/// A live falling fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    /// Catalog index of the visual variant
    pub variant: usize,
    /// Top-left corner of the bounding rect (pixels)
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Bottom bound used to decide expiry
    pub screen_h: f32,
}

impl Fruit {
    /// Spawn a fruit below the bottom edge with a randomized arc.
    ///
    /// Draw order from the RNG is fixed (variant, x, angle jitter, x speed,
    /// y speed) so a seeded RNG reproduces identical fruit.
    pub fn spawn(rng: &mut impl Rng, screen_w: f32, screen_h: f32) -> Self {
        let variant = rng.random_range(0..CATALOG.len());
        // Clamp so the range stays valid when the variant is wider than the screen
        let max_x = (screen_w - CATALOG[variant].width).max(0.0) as i32;
        let x = rng.random_range(0..=max_x) as f32;
        let jitter = rng.random_range(-LAUNCH_ANGLE_JITTER_DEG..=LAUNCH_ANGLE_JITTER_DEG);
        let x_speed = rng.random_range(LAUNCH_SPEED_X) as f32;
        let y_speed = rng.random_range(LAUNCH_SPEED_Y) as f32;

        Self {
            variant,
            pos: Vec2::new(x, screen_h + SPAWN_DEPTH),
            vel: launch_velocity(x, screen_w, jitter, x_speed, y_speed),
            screen_h,
        }
    }

    pub fn kind(&self) -> &'static FruitVariant {
        &CATALOG[self.variant]
    }

    /// Bounding rectangle at the current position
    pub fn bounds(&self) -> Rect {
        let kind = self.kind();
        Rect::new(self.pos.x, self.pos.y, kind.width, kind.height)
    }

    /// Advance one tick and report what became of the fruit.
    ///
    /// Euler step with constant gravity, no delta-time scaling. Expiry is
    /// checked before collision so each fruit is retired exactly once, by a
    /// single cause; the collision test short-circuits on the first point
    /// inside the bounds.
    pub fn update(&mut self, points: &[Vec2]) -> Fate {
        self.pos += self.vel;
        self.vel.y += GRAVITY_PER_TICK;

        if self.pos.y > self.screen_h + EXPIRY_MARGIN {
            Fate::Fell
        } else {
            let bounds = self.bounds();
            if points.iter().any(|p| bounds.contains(*p)) {
                Fate::Sliced
            } else {
                Fate::Airborne
            }
        }
    }
}

/// Launch velocity for a fruit spawned at `spawn_x`.
///
/// The angle ramps from 40° at the left edge to 140° at the right, so fruit
/// launched from the left arcs rightward and vice versa, fanning spawns
/// across the screen. sin stays positive over the whole ramp, which combined
/// with the negative y multiplier always launches upward.
pub fn launch_velocity(
    spawn_x: f32,
    screen_w: f32,
    jitter_deg: i32,
    x_speed: f32,
    y_speed: f32,
) -> Vec2 {
    let angle_deg = (spawn_x / screen_w) * LAUNCH_ANGLE_SPAN_DEG
        + LAUNCH_ANGLE_BASE_DEG
        + jitter_deg as f32;
    let angle = angle_deg.to_radians();
    Vec2::new(angle.cos() * x_speed, angle.sin() * y_speed)
}
