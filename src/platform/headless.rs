//! Headless platform: scripted input, recorded output
//!
//! Backs the native binary's demo mode and the loop-driver tests. Input
//! comes from a per-frame script; presented frames and audio commands are
//! counted/recorded instead of hitting a real surface. The optional
//! autopilot watches the presented frames and jumps over incoming hurdles,
//! the way a player watching the screen would.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::audio::AudioCmd;
use crate::consts::FRAME_RATE;
use crate::sim::tick::InputEvent;
use crate::ui::{DrawCmd, Frame, Sprite};

/// Autopilot jump trigger: hurdle x range that is about one jump's flight
/// away from the runner, so the runner is back down after it passes.
const JUMP_WINDOW: (f32, f32) = (130.0, 170.0);

pub struct Headless {
    /// One event batch per frame, consumed front to back
    script: VecDeque<Vec<InputEvent>>,
    /// Watch presented frames and queue jumps over incoming hurdles
    autopilot: bool,
    jump_queued: bool,
    /// Inject a quit after this many presented frames
    frame_budget: Option<u64>,
    frames: u64,
    audio_log: Vec<AudioCmd>,
    /// Hold the 60 Hz frame budget in `pace` (off for tests and the demo)
    paced: bool,
    last_frame: Option<Instant>,
}

impl Headless {
    /// Platform fed by an explicit per-frame script
    pub fn scripted(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: batches.into(),
            autopilot: false,
            jump_queued: false,
            frame_budget: None,
            frames: 0,
            audio_log: Vec::new(),
            paced: false,
            last_frame: None,
        }
    }

    /// Demo session: type the name, confirm, then let the autopilot play
    /// until the frame budget runs out.
    pub fn demo(name: &str, frame_budget: u64) -> Self {
        let mut opening: Vec<InputEvent> = name.chars().map(InputEvent::TextInput).collect();
        opening.push(InputEvent::Confirm);
        let mut platform = Self::scripted(vec![opening]);
        platform.autopilot = true;
        platform.frame_budget = Some(frame_budget);
        platform
    }

    /// Enable real frame pacing
    pub fn with_pacing(mut self) -> Self {
        self.paced = true;
        self
    }

    pub fn audio_log(&self) -> &[AudioCmd] {
        &self.audio_log
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl super::Platform for Headless {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        if self.frame_budget.is_some_and(|budget| self.frames >= budget) {
            return vec![InputEvent::Quit];
        }
        let mut events = self.script.pop_front().unwrap_or_default();
        if self.jump_queued {
            self.jump_queued = false;
            events.push(InputEvent::Jump);
        }
        events
    }

    fn present(&mut self, frame: &Frame) {
        self.frames += 1;
        if self.autopilot {
            let looming = frame.cmds.iter().any(|cmd| {
                matches!(cmd, DrawCmd::Sprite { sprite: Sprite::Hurdle, x, .. }
                    if (JUMP_WINDOW.0..JUMP_WINDOW.1).contains(x))
            });
            if looming {
                self.jump_queued = true;
            }
        }
    }

    fn submit_audio(&mut self, cmds: &[AudioCmd]) {
        self.audio_log.extend_from_slice(cmds);
    }

    fn pace(&mut self) {
        if self.paced {
            let budget = Duration::from_micros(1_000_000 / FRAME_RATE as u64);
            if let Some(last) = self.last_frame {
                let elapsed = last.elapsed();
                if elapsed < budget {
                    std::thread::sleep(budget - elapsed);
                }
            }
            self.last_frame = Some(Instant::now());
        }
    }
}
