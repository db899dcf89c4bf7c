//! Per-frame session state machine
//!
//! The platform drains its input queue once per frame and hands the batch to
//! [`tick`], which routes events by phase and then runs the simulation step.

use super::spawn::spawn_hurdles;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Discrete input events delivered by the platform, one batch per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close or equivalent - terminates from any phase
    Quit,
    /// Jump request (space bar)
    Jump,
    /// Printable character for the name box
    TextInput(char),
    Backspace,
    /// Name submission (return key)
    Confirm,
    /// Pointer click in canvas coordinates
    Click(f32, f32),
}

/// Advance the session by one frame: apply the input batch, then run the
/// simulation step for the current phase.
pub fn tick(state: &mut GameState, events: &[InputEvent]) {
    for &event in events {
        route_event(state, event);
        if state.phase == GamePhase::Terminated {
            return;
        }
    }

    if state.phase == GamePhase::Playing {
        step_playing(state);
    }
    state.time_ticks += 1;
}

/// Apply a single input event. Degenerate inputs (blank name, clicks
/// outside any button, jumps outside gameplay) are no-ops.
fn route_event(state: &mut GameState, event: InputEvent) {
    if event == InputEvent::Quit {
        state.phase = GamePhase::Terminated;
        return;
    }

    match state.phase {
        GamePhase::Title => match event {
            InputEvent::TextInput(c) if !c.is_control() => state.player_name.push(c),
            InputEvent::Backspace => {
                state.player_name.pop();
            }
            InputEvent::Confirm => state.try_start(),
            InputEvent::Click(x, y) if START_BUTTON.contains(x, y) => state.try_start(),
            _ => {}
        },
        GamePhase::Playing => {
            if event == InputEvent::Jump {
                state.runner.jump();
            }
        }
        GamePhase::GameOver => {
            if let InputEvent::Click(x, y) = event {
                if RETRY_BUTTON.contains(x, y) {
                    state.retry();
                } else if QUIT_BUTTON.contains(x, y) {
                    state.phase = GamePhase::Terminated;
                }
            }
        }
        GamePhase::Terminated => {}
    }
}

/// One gameplay frame: runner kinematics, one generator evaluation, hurdle
/// travel, cull + score, collision check.
fn step_playing(state: &mut GameState) {
    state.runner.advance();

    let (fresh, cursor) = spawn_hurdles(state.spawn_cursor, state.score, &mut state.rng);
    state.spawn_cursor = cursor;
    state.hurdles.extend(fresh);

    for hurdle in &mut state.hurdles {
        hurdle.advance();
    }

    // Two-phase cull: count while compacting once, then credit the score.
    // Removal is the only path that scores a hurdle, so each one pays out
    // exactly once.
    let mut cleared = 0u32;
    state.hurdles.retain(|hurdle| {
        if hurdle.is_offscreen() {
            cleared += 1;
            false
        } else {
            true
        }
    });
    state.score += cleared * HURDLE_SCORE;

    // At most one transition per frame, however many hurdles overlap
    let runner_box = state.runner.aabb();
    if state
        .hurdles
        .iter()
        .any(|hurdle| hurdle.aabb().intersects(&runner_box))
    {
        state.end_run();
    }
}
