//! Hurdle Run - a jump-over-the-hurdles arcade runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, session state)
//! - `ui`: Frame composition (draw command lists for the presentation layer)
//! - `audio`: Audio command vocabulary and event-to-clip mapping
//! - `platform`: Presentation-layer boundary and the main loop driver
//! - `settings`: Player preferences

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::sim::collision::Aabb;

    /// Logical canvas dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 1000.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Fixed vertical coordinate of the playable floor
    pub const GROUND_LINE: f32 = CANVAS_HEIGHT - 80.0;

    /// Target frame rate - one simulation step per rendered frame
    pub const FRAME_RATE: u32 = 60;

    /// Downward acceleration applied each frame (pixels/frame^2)
    pub const GRAVITY: f32 = 0.6;
    /// Vertical impulse on jump (negative = up, pixels/frame)
    pub const JUMP_SPEED: f32 = -12.0;

    /// Runner bounding box - x never changes
    pub const RUNNER_X: f32 = 50.0;
    pub const RUNNER_WIDTH: f32 = 50.0;
    pub const RUNNER_HEIGHT: f32 = 80.0;

    /// Hurdle bounding box - y never changes
    pub const HURDLE_WIDTH: f32 = 50.0;
    pub const HURDLE_HEIGHT: f32 = 50.0;

    /// Leftward hurdle speed at tier 0 (pixels/frame)
    pub const BASE_SPEED: f32 = 5.0;
    /// Speed added per difficulty tier
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Score bucket size that advances the difficulty tier
    pub const SCORE_PER_TIER: u32 = 1000;
    /// Widest spawn gap, at tier 0
    pub const GAP_START: i32 = 300;
    /// Gap shrink per tier
    pub const GAP_DECAY: i32 = 20;
    /// Gap never shrinks below this
    pub const MIN_GAP: i32 = 100;
    /// Most hurdles the generator emits per evaluation
    pub const MAX_BATCH: u32 = 2;

    /// Score credited per hurdle that scrolls off the left edge
    pub const HURDLE_SCORE: u32 = 100;

    /// Click targets, shared by input routing and frame composition
    pub const START_BUTTON: Aabb = Aabb::new(440.0, 353.0, 120.0, 40.0);
    pub const RETRY_BUTTON: Aabb = Aabb::new(450.0, 290.0, 100.0, 40.0);
    pub const QUIT_BUTTON: Aabb = Aabb::new(450.0, 350.0, 100.0, 40.0);

    /// Name entry box on the title screen
    pub const NAME_BOX: Aabb = Aabb::new(350.0, 303.0, 300.0, 30.0);
}
