//! Platform abstraction layer
//!
//! The simulation talks to the outside world through the [`Platform`]
//! trait: an event pump, a render sink, an audio sink, and frame pacing.
//! [`run`] is the main loop driver; it owns the per-frame order of
//! operations and nothing else.

pub mod headless;

use crate::Settings;
use crate::audio::{self, AudioCmd};
use crate::sim::state::{GameEvent, GamePhase, GameState};
use crate::sim::tick::{InputEvent, tick};
use crate::ui::{self, Frame};

/// Presentation-layer capability object. Implementations live outside the
/// core; the core never blocks on any of these calls.
pub trait Platform {
    /// Drain the input queue for this frame
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Accept a frame of draw commands, no query-back
    fn present(&mut self, frame: &Frame);
    /// Accept fire-and-forget audio commands
    fn submit_audio(&mut self, cmds: &[AudioCmd]);
    /// Sleep out the remainder of the frame budget
    fn pace(&mut self);
}

/// Drive the session until a quit request. One simulation step per frame:
/// drain input, tick, relay transition audio, present, pace.
pub fn run(platform: &mut impl Platform, state: &mut GameState, settings: &Settings) {
    log::info!("entering main loop");
    loop {
        let events = platform.poll_events();
        tick(state, &events);

        let mut audio_cmds = Vec::new();
        for event in state.drain_events() {
            match event {
                GameEvent::SessionStarted => {
                    log::info!("session started: player {:?}", state.player_name);
                }
                GameEvent::RunEnded { score, best } => {
                    log::info!("run ended: score {score}, best {best}");
                }
                GameEvent::SessionRetried => log::info!("retrying"),
                GameEvent::TitleOpened => {}
            }
            audio_cmds.extend(audio::commands_for(event));
        }
        if !audio_cmds.is_empty() && !settings.muted() {
            platform.submit_audio(&audio_cmds);
        }

        // Quit ends the loop immediately - nothing to drain or flush
        if state.phase == GamePhase::Terminated {
            log::info!("quit requested, leaving main loop");
            break;
        }

        platform.present(&ui::compose_frame(state, settings));
        platform.pace();
    }
}
