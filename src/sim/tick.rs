//! Per-frame simulation tick
//!
//! The host frame loop calls [`tick`] once per captured frame with that
//! frame's pose and wall clock. Order within a tick: start gate, spawner,
//! fruit update and sweep. Each fruit's fate depends only on its own state
//! and this tick's point set, so sweep order is immaterial.

use super::fruit::Fate;
use super::state::{GameEvent, GamePhase, GameState};
use crate::pose::PoseFrame;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// This frame's tracked body points (sentinels where undetected)
    pub pose: PoseFrame,
    /// Host wall clock in seconds
    pub now: f64,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    state.events.clear();

    let (w, h) = (state.screen_w, state.screen_h);

    if state.phase == GamePhase::Lobby {
        state.gate.update(input.now, input.pose.cursor(w, h));
        if state.gate.is_active() {
            state.phase = GamePhase::Playing;
            state.events.push(GameEvent::GameStarted);
            log::info!("start gate held for the full duration; game on");
        }
    }

    let active = state.phase == GamePhase::Playing;
    if let Some(fruit) = state.spawner.poll(input.now, active, &mut state.rng, w, h) {
        log::debug!("spawned {} at x={:.0}", fruit.kind().asset, fruit.pos.x);
        state.events.push(GameEvent::FruitSpawned { variant: fruit.variant });
        state.fruits.push(fruit);
    }

    // Update every live fruit against this tick's points, then sweep the
    // retired ones. Undetected landmarks never reach the collision test.
    let points = input.pose.collidable_points(w, h);
    let events = &mut state.events;
    let sliced = &mut state.sliced;
    let missed = &mut state.missed;
    state.fruits.retain_mut(|fruit| match fruit.update(&points) {
        Fate::Airborne => true,
        Fate::Sliced => {
            *sliced += 1;
            events.push(GameEvent::FruitSliced { variant: fruit.variant });
            false
        }
        Fate::Fell => {
            *missed += 1;
            events.push(GameEvent::FruitMissed { variant: fruit.variant });
            false
        }
    });
}
