//! Motion Slice - a webcam fruit-slicing arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, ballistics, collision, game state)
//! - `pose`: Landmark input contract for the external pose estimator
//!
//! The crate performs no camera capture, pose inference, or rendering. The
//! host frame loop feeds one [`pose::PoseFrame`] per captured frame into
//! [`sim::tick`] and draws the exposed fruit entities over the video.

pub mod pose;
pub mod sim;

pub use pose::{Landmark, PoseFrame};
pub use sim::{GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Host frame loop cap (ticks per second). The simulation carries no
    /// delta-time scaling: fruit speeds are tuned for this cadence.
    pub const TICK_RATE_HZ: u32 = 100;

    /// Gravity added to vertical speed each tick (pixels/tick², screen y
    /// grows downward)
    pub const GRAVITY_PER_TICK: f32 = 1.5;
    /// Fruit spawns this far below the bottom edge (pixels)
    pub const SPAWN_DEPTH: f32 = 50.0;
    /// Fruit is retired once this far below the bottom edge (pixels)
    pub const EXPIRY_MARGIN: f32 = 60.0;

    /// Seconds between fruit spawns while the game is active
    pub const SPAWN_INTERVAL_SECS: f64 = 2.0;
    /// Seconds a hand must hover over the start region to activate it
    pub const HOLD_DURATION_SECS: f64 = 2.0;

    /// Launch angle at the left screen edge (degrees)
    pub const LAUNCH_ANGLE_BASE_DEG: f32 = 40.0;
    /// Additional launch angle across the full screen width (degrees)
    pub const LAUNCH_ANGLE_SPAN_DEG: f32 = 100.0;
    /// Uniform jitter applied to the launch angle (± degrees)
    pub const LAUNCH_ANGLE_JITTER_DEG: i32 = 15;

    /// Horizontal launch speed magnitude range (pixels/tick)
    pub const LAUNCH_SPEED_X: std::ops::RangeInclusive<i32> = 40..=45;
    /// Vertical launch speed range (negative = upward)
    pub const LAUNCH_SPEED_Y: std::ops::RangeInclusive<i32> = -55..=-50;
}
