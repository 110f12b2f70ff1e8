//! Deterministic simulation module
//!
//! All gameplay logic lives here. The module is pure with respect to the
//! outside world:
//! - Externally paced ticks, no internal clock
//! - Seeded RNG only
//! - Pixel-space inputs only; no capture, inference, or rendering

pub mod fruit;
pub mod gate;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;

pub use fruit::{CATALOG, Fate, Fruit, FruitVariant, launch_velocity};
pub use gate::{GateState, HoverGate};
pub use rect::Rect;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
