//! Game state and lifecycle events

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::fruit::Fruit;
use super::gate::HoverGate;
use super::spawner::Spawner;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to hold a hand over the start region
    Lobby,
    /// Fruit is spawning and sliceable
    Playing,
}

/// Things that happened during a tick, drained by the host for HUD/audio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The start gate was held long enough
    GameStarted,
    FruitSpawned { variant: usize },
    FruitSliced { variant: usize },
    /// Fruit fell off the bottom unsliced
    FruitMissed { variant: usize },
}

/// Complete session state. Built for one screen geometry; reconstruct on
/// resize.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawn randomness; injectable via the seed
    pub rng: Pcg32,
    /// Screen geometry in pixels
    pub screen_w: f32,
    pub screen_h: f32,
    pub phase: GamePhase,
    pub gate: HoverGate,
    pub spawner: Spawner,
    /// Live fruit, swept in place each tick
    pub fruits: Vec<Fruit>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Running tallies for the host HUD
    pub sliced: u64,
    pub missed: u64,
    /// Events recorded by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, screen_w: f32, screen_h: f32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            screen_w,
            screen_h,
            phase: GamePhase::Lobby,
            gate: HoverGate::centered(screen_w, screen_h),
            spawner: Spawner::default(),
            fruits: Vec::new(),
            time_ticks: 0,
            sliced: 0,
            missed: 0,
            events: Vec::new(),
        }
    }

    /// Take the events recorded by the most recent tick
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
