//! Hurdle Run entry point
//!
//! Initializes logging, picks the session seed, and drives the game loop.

use std::time::{SystemTime, UNIX_EPOCH};

use hurdle_run::Settings;
use hurdle_run::platform::{self, headless::Headless};
use hurdle_run::sim::GameState;

/// Demo session length: one minute at 60 Hz
const DEMO_FRAMES: u64 = 3600;

fn main() {
    env_logger::init();

    let seed = session_seed();
    log::info!("Hurdle Run starting (seed {seed})");

    let settings = Settings::load();
    log::debug!(
        "volumes: music {:.2}, sfx {:.2}",
        settings.music_gain(),
        settings.sfx_gain()
    );

    // No native windowing backend is wired up; run the scripted autopilot
    // demo so the binary exercises a full session end to end.
    let mut state = GameState::new(seed);
    let mut demo = Headless::demo("Demo", DEMO_FRAMES);
    platform::run(&mut demo, &mut state, &settings);

    log::info!(
        "demo finished after {} frames: score {}, best {}",
        demo.frames_presented(),
        state.score,
        state.best_score
    );
}

/// Seed from `HURDLE_SEED` when set, otherwise from the wall clock
fn session_seed() -> u64 {
    match std::env::var("HURDLE_SEED") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("ignoring unparsable HURDLE_SEED {raw:?}");
            fallback_seed()
        }),
        Err(_) => fallback_seed(),
    }
}

fn fallback_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xC0FFEE)
}
