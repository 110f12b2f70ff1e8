//! Timed fruit spawner
//!
//! Spawning is paced by wall-clock time, not ticks: the host passes its
//! clock in so tests can drive time explicitly. While the game is active one
//! fruit is injected each time the interval elapses; the live set is
//! unbounded by design.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fruit::Fruit;
use crate::consts::SPAWN_INTERVAL_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds between spawns
    pub interval: f64,
    /// Timestamp of the most recent spawn (seconds, host clock)
    pub last_spawn: f64,
}

impl Default for Spawner {
    fn default() -> Self {
        Self::with_interval(SPAWN_INTERVAL_SECS)
    }
}

impl Spawner {
    pub fn with_interval(interval: f64) -> Self {
        Self { interval, last_spawn: 0.0 }
    }

    /// Spawn one fruit if the game is active and the interval has elapsed
    /// since the last spawn. Never spawns more than one per call.
    pub fn poll(
        &mut self,
        now: f64,
        active: bool,
        rng: &mut impl Rng,
        screen_w: f32,
        screen_h: f32,
    ) -> Option<Fruit> {
        if !active || now - self.last_spawn <= self.interval {
            return None;
        }
        self.last_spawn = now;
        Some(Fruit::spawn(rng, screen_w, screen_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const W: f32 = 1920.0;
    const H: f32 = 1080.0;

    #[test]
    fn test_spawns_only_after_interval() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::with_interval(2.0);
        spawner.last_spawn = 100.0;

        assert!(spawner.poll(101.9, true, &mut rng, W, H).is_none());
        assert!(spawner.poll(102.1, true, &mut rng, W, H).is_some());
        assert_eq!(spawner.last_spawn, 102.1);
        // Interval restarts from the spawn timestamp
        assert!(spawner.poll(102.2, true, &mut rng, W, H).is_none());
    }

    #[test]
    fn test_exact_interval_does_not_spawn() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::with_interval(2.0);
        assert!(spawner.poll(2.0, true, &mut rng, W, H).is_none());
        assert!(spawner.poll(2.5, true, &mut rng, W, H).is_some());
    }

    #[test]
    fn test_inactive_never_spawns() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::with_interval(2.0);
        assert!(spawner.poll(1000.0, false, &mut rng, W, H).is_none());
        // Timestamp untouched while inactive
        assert_eq!(spawner.last_spawn, 0.0);
    }

    #[test]
    fn test_one_spawn_per_poll() {
        // A long stall still yields a single fruit, not a burst
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::with_interval(2.0);
        assert!(spawner.poll(60.0, true, &mut rng, W, H).is_some());
        assert!(spawner.poll(60.01, true, &mut rng, W, H).is_none());
    }
}
