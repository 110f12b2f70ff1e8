//! Hover-hold start gate
//!
//! A rectangular target region activates once the tracked hand stays inside
//! it continuously for the hold duration. Leaving the region or losing
//! detection resets the hold; activation is terminal for the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::HOLD_DURATION_SECS;

/// Debounce state of the gate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GateState {
    Idle,
    /// Hand entered the region at this timestamp and has stayed inside since
    Holding { since: f64 },
    Activated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverGate {
    /// Target region in screen pixels
    pub region: Rect,
    /// Seconds the hand must stay inside before activation
    pub hold_secs: f64,
    pub state: GateState,
}

impl HoverGate {
    pub fn new(region: Rect, hold_secs: f64) -> Self {
        Self { region, hold_secs, state: GateState::Idle }
    }

    /// Gate over the default start-button geometry: centered horizontally,
    /// top edge at mid-screen, a quarter of the screen wide, a sixth tall.
    pub fn centered(screen_w: f32, screen_h: f32) -> Self {
        let region = Rect::new(
            screen_w / 2.0 - screen_w / 8.0,
            screen_h / 2.0,
            screen_w / 4.0,
            screen_h / 6.0,
        );
        Self::new(region, HOLD_DURATION_SECS)
    }

    /// Feed the gate one tick of input: the hand position in pixels, or
    /// `None` when the hand was not detected this tick.
    pub fn update(&mut self, now: f64, cursor: Option<Vec2>) {
        if self.state == GateState::Activated {
            return;
        }
        let inside = cursor.is_some_and(|p| self.region.contains(p));
        self.state = match (self.state, inside) {
            (_, false) => GateState::Idle,
            (GateState::Idle, true) => GateState::Holding { since: now },
            (GateState::Holding { since }, true) if now - since >= self.hold_secs => {
                GateState::Activated
            }
            (state, true) => state,
        };
    }

    /// Polled by the host each tick; gates the spawner
    pub fn is_active(&self) -> bool {
        self.state == GateState::Activated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> HoverGate {
        HoverGate::new(Rect::new(100.0, 100.0, 200.0, 100.0), 2.0)
    }

    const INSIDE: Vec2 = Vec2::new(150.0, 150.0);
    const OUTSIDE: Vec2 = Vec2::new(50.0, 50.0);

    #[test]
    fn test_hold_to_activate() {
        let mut gate = gate();
        gate.update(0.0, Some(INSIDE));
        assert_eq!(gate.state, GateState::Holding { since: 0.0 });
        gate.update(1.0, Some(INSIDE));
        assert!(!gate.is_active());
        gate.update(2.0, Some(INSIDE));
        assert!(gate.is_active());
    }

    #[test]
    fn test_exit_resets_hold() {
        let mut gate = gate();
        gate.update(0.0, Some(INSIDE));
        gate.update(1.9, Some(INSIDE));
        gate.update(1.95, Some(OUTSIDE));
        assert_eq!(gate.state, GateState::Idle);
        // The timer restarts from re-entry, not from the first entry
        gate.update(2.0, Some(INSIDE));
        gate.update(3.9, Some(INSIDE));
        assert!(!gate.is_active());
        gate.update(4.0, Some(INSIDE));
        assert!(gate.is_active());
    }

    #[test]
    fn test_lost_detection_resets_hold() {
        let mut gate = gate();
        gate.update(0.0, Some(INSIDE));
        gate.update(1.0, None);
        assert_eq!(gate.state, GateState::Idle);
    }

    #[test]
    fn test_activation_is_terminal() {
        let mut gate = gate();
        gate.update(0.0, Some(INSIDE));
        gate.update(2.0, Some(INSIDE));
        assert!(gate.is_active());
        gate.update(3.0, None);
        gate.update(4.0, Some(OUTSIDE));
        assert!(gate.is_active());
    }

    #[test]
    fn test_centered_region_matches_button_geometry() {
        let gate = HoverGate::centered(1920.0, 1080.0);
        assert_eq!(gate.region, Rect::new(720.0, 540.0, 480.0, 180.0));
        assert_eq!(gate.hold_secs, HOLD_DURATION_SECS);
    }
}
