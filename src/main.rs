//! Motion Slice entry point
//!
//! Headless scripted session: drives the core with synthetic pose frames in
//! place of a camera and pose model, which doubles as a smoke test and as a
//! reference for wiring a real capture/display shell around the simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use motion_slice::consts::TICK_RATE_HZ;
use motion_slice::pose::{Landmark, PoseFrame};
use motion_slice::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let (screen_w, screen_h) = (1280.0_f32, 720.0_f32);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut state = GameState::new(seed, screen_w, screen_h);
    log::info!("session seed {seed}, screen {screen_w}x{screen_h}");

    let dt = 1.0 / TICK_RATE_HZ as f64;
    let mut now = 0.0;

    // Hold a hand over the start region until the gate opens
    let gate_center = state.gate.region.center();
    let hover = PoseFrame {
        right_hand: Landmark::new(1.0 - gate_center.x / screen_w, gate_center.y / screen_h, 0.0),
        ..PoseFrame::undetected()
    };
    while state.phase == GamePhase::Lobby {
        tick(&mut state, &TickInput { pose: hover, now });
        now += dt;
    }
    log::info!("game started after {:.2}s", now);

    // Sweep both hands across the screen for ten seconds of play
    let play_ticks = 10 * TICK_RATE_HZ;
    for i in 0..play_ticks {
        let t = i as f32 / play_ticks as f32;
        let pose = PoseFrame {
            right_hand: Landmark::new(t, 0.6, 0.0),
            left_hand: Landmark::new(1.0 - t * 0.9, 0.75, 0.0),
            ..PoseFrame::undetected()
        };
        tick(&mut state, &TickInput { pose, now });
        for event in state.drain_events() {
            log::debug!("{event:?}");
        }
        now += dt;
    }

    let summary = serde_json::json!({
        "seed": state.seed,
        "ticks": state.time_ticks,
        "sliced": state.sliced,
        "missed": state.missed,
        "live": state.fruits.len(),
    });
    println!("{summary}");
}
