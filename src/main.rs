//! Tree Roller entry point
//!
//! Runs a headless demo session: the autopilot plays, every frame goes through
//! the recording renderer, and the run restarts after each game over.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use tree_roller::audio::LogAudio;
use tree_roller::platform::headless::{FrameRecorder, LogScoreDisplay};
use tree_roller::sim::Viewport;
use tree_roller::{Game, Settings};

/// Frames to simulate (about five minutes at 60 Hz)
const DEMO_FRAMES: u32 = 18_000;

fn main() {
    env_logger::init();
    log::info!("Tree Roller (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(clock_seed);

    let viewport = Viewport::new(1280.0, 720.0);
    let mut game = Game::new(seed, &settings, viewport);
    game.set_autopilot(true);

    let mut renderer = FrameRecorder::new();
    let mut audio = LogAudio;
    let mut display = LogScoreDisplay::default();

    for _ in 0..DEMO_FRAMES {
        let running = game.frame(viewport, &mut renderer, &mut audio, &mut display);
        if !running {
            game.on_restart_requested();
        }
    }

    let best = game.state().best;
    println!(
        "Played {} runs over {} frames, session best {}",
        best.runs, renderer.frames, best.best
    );
}

/// Seed from the wall clock when none is configured
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
