//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One simulation step per rendered frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawn::{Difficulty, difficulty, spawn_hurdles};
pub use state::{GameEvent, GamePhase, GameState, Hurdle, Runner};
pub use tick::{InputEvent, tick};
