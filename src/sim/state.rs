//! Game state and core simulation types
//!
//! The whole session lives in `GameState`; per-frame updates mutate it in
//! place and record `GameEvent`s for the shell to drain.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, collecting the player name
    Title,
    /// Active gameplay
    Playing,
    /// Run ended, retry/quit choice on screen
    GameOver,
    /// Quit requested - the loop driver exits
    Terminated,
}

/// Phase-transition notifications, drained once per frame by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Session constructed, title screen is up
    TitleOpened,
    /// Name confirmed, gameplay started
    SessionStarted,
    /// A hurdle hit the runner
    RunEnded { score: u32, best: u32 },
    /// Retry chosen from the game-over screen
    SessionRetried,
}

/// The player: fixed x, vertical kinematics only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runner {
    pub y: f32,
    pub vel_y: f32,
    pub airborne: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// New runner standing on the ground line
    pub fn new() -> Self {
        Self {
            y: GROUND_LINE - RUNNER_HEIGHT,
            vel_y: 0.0,
            airborne: false,
        }
    }

    /// Apply the jump impulse. No-op while airborne, so there is no
    /// mid-air double jump.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vel_y = JUMP_SPEED;
            self.airborne = true;
        }
    }

    /// One frame of vertical integration: position first, then gravity
    /// (semi-implicit Euler). Landing clamps to the ground line, zeroes
    /// velocity and clears `airborne`.
    pub fn advance(&mut self) {
        self.y += self.vel_y;
        self.vel_y += GRAVITY;
        if self.y >= GROUND_LINE - RUNNER_HEIGHT {
            self.y = GROUND_LINE - RUNNER_HEIGHT;
            self.vel_y = 0.0;
            self.airborne = false;
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(RUNNER_X, self.y, RUNNER_WIDTH, RUNNER_HEIGHT)
    }
}

/// One hurdle. Speed is fixed at spawn time and never changes afterward,
/// even when the difficulty tier rises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hurdle {
    pub x: f32,
    pub speed: f32,
}

impl Hurdle {
    pub fn new(x: f32, speed: f32) -> Self {
        Self { x, speed }
    }

    /// Hurdles sit on the ground line
    pub const fn y() -> f32 {
        GROUND_LINE - HURDLE_HEIGHT
    }

    /// One frame of leftward travel
    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// Fully off the left edge, with one hurdle-width of margin
    pub fn is_offscreen(&self) -> bool {
        self.x < -HURDLE_WIDTH
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, Self::y(), HURDLE_WIDTH, HURDLE_HEIGHT)
    }
}

/// Complete session state (deterministic given seed + input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub runner: Runner,
    /// Live hurdles in spawn order (left-to-right by construction)
    pub hurdles: Vec<Hurdle>,
    pub score: u32,
    /// Best score seen this process; survives retries
    pub best_score: u32,
    /// Entered on the title screen, kept for the process lifetime
    pub player_name: String,
    /// Rightmost spawned x - where the generator places the next hurdle
    pub spawn_cursor: i32,
    /// Simulation frame counter
    pub time_ticks: u64,
    /// Pending transition notifications
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            runner: Runner::new(),
            hurdles: Vec::new(),
            score: 0,
            best_score: 0,
            player_name: String::new(),
            spawn_cursor: CANVAS_WIDTH as i32,
            time_ticks: 0,
            events: vec![GameEvent::TitleOpened],
        }
    }

    /// Hand pending events to the shell, clearing the queue
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Leave the title screen if the entered name is non-blank
    pub(crate) fn try_start(&mut self) {
        if self.player_name.trim().is_empty() {
            return;
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::SessionStarted);
    }

    /// Freeze the world and show the game-over screen
    pub(crate) fn end_run(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::RunEnded {
            score: self.score,
            best: self.best_score,
        });
    }

    /// Start a fresh run. Best score and player name survive.
    pub(crate) fn retry(&mut self) {
        self.runner = Runner::new();
        self.hurdles.clear();
        self.score = 0;
        self.spawn_cursor = CANVAS_WIDTH as i32;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::SessionRetried);
    }
}
