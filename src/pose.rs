//! Pose landmark input contract
//!
//! The external pose estimator produces four body points per frame - left
//! and right index finger, left and right foot index - normalized to [0,1]²
//! with an unconstrained relative depth. A point the estimator could not
//! find this frame carries the (0,0,0) sentinel.
//!
//! All pixel-space conversion happens here. The simulation's collision
//! contract is pixels, and the camera image is displayed mirrored, so x is
//! flipped during conversion.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A single pose landmark in normalized image coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Relative depth; unused by collision but part of the estimator contract
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The (0,0,0) placeholder the estimator emits when this point was not
    /// detected this frame
    pub fn is_sentinel(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Convert to screen pixels, mirroring x to match the flipped camera image
    pub fn to_pixels(&self, screen_w: f32, screen_h: f32) -> Vec2 {
        Vec2::new((1.0 - self.x) * screen_w, self.y * screen_h)
    }
}

/// One frame of tracked body points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    pub left_hand: Landmark,
    pub right_hand: Landmark,
    pub left_foot: Landmark,
    pub right_foot: Landmark,
}

impl PoseFrame {
    /// Frame with every landmark set to the undetected sentinel
    pub fn undetected() -> Self {
        Self::default()
    }

    fn landmarks(&self) -> [Landmark; 4] {
        [self.left_hand, self.right_hand, self.left_foot, self.right_foot]
    }

    /// Pixel-space points eligible for collision testing. Sentinel landmarks
    /// are dropped here so an undetected limb can never slice fruit at the
    /// screen origin.
    pub fn collidable_points(&self, screen_w: f32, screen_h: f32) -> Vec<Vec2> {
        self.landmarks()
            .into_iter()
            .filter(|lm| !lm.is_sentinel())
            .map(|lm| lm.to_pixels(screen_w, screen_h))
            .collect()
    }

    /// Pixel position of the hand that drives the start gate, if detected
    pub fn cursor(&self, screen_w: f32, screen_h: f32) -> Option<Vec2> {
        (!self.right_hand.is_sentinel()).then(|| self.right_hand.to_pixels(screen_w, screen_h))
    }
}
