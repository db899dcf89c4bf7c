//! Frame composition
//!
//! Turns a `GameState` into an ordered list of draw commands for the
//! presentation layer. Pure data - no surface handles, no query-back.

use crate::Settings;
use crate::consts::*;
use crate::sim::collision::Aabb;
use crate::sim::state::{GamePhase, GameState};

pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];
pub const BLACK: Color = [0, 0, 0];
pub const GREEN: Color = [0, 255, 0];
pub const RED: Color = [255, 0, 0];

/// Font sizes, in pixels
const BANNER_PX: u32 = 144;
const SCORE_PX: u32 = 72;
const SMALL_PX: u32 = 36;
const INPUT_PX: u32 = 24;

/// Full-canvas background image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Title,
    Track,
    GameOver,
}

/// Game sprite image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Runner,
    Hurdle,
}

/// One draw request. Commands are applied in order, back to front.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Backdrop(Backdrop),
    /// Sprite at its top-left corner
    Sprite { sprite: Sprite, x: f32, y: f32 },
    Rect { rect: Aabb, color: Color },
    /// Text centered on (x, y)
    Text {
        text: String,
        x: f32,
        y: f32,
        px: u32,
        color: Color,
    },
}

/// One frame of draw commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

impl Frame {
    fn backdrop(&mut self, backdrop: Backdrop) {
        self.cmds.push(DrawCmd::Backdrop(backdrop));
    }

    fn sprite(&mut self, sprite: Sprite, x: f32, y: f32) {
        self.cmds.push(DrawCmd::Sprite { sprite, x, y });
    }

    fn rect(&mut self, rect: Aabb, color: Color) {
        self.cmds.push(DrawCmd::Rect { rect, color });
    }

    fn text(&mut self, text: impl Into<String>, x: f32, y: f32, px: u32, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
            px,
            color,
        });
    }

    /// A labeled button: filled rect with centered text
    fn button(&mut self, rect: Aabb, fill: Color, label: &str, label_color: Color) {
        self.rect(rect, fill);
        let center = rect.center();
        self.text(label, center.x, center.y, SMALL_PX, label_color);
    }
}

/// Compose the frame for the current phase
pub fn compose_frame(state: &GameState, settings: &Settings) -> Frame {
    match state.phase {
        GamePhase::Title => title_frame(state),
        GamePhase::Playing => {
            let mut frame = Frame::default();
            frame.backdrop(Backdrop::Track);
            push_world(state, &mut frame);
            push_hud(state, settings, &mut frame);
            frame
        }
        GamePhase::GameOver => game_over_frame(state, settings),
        GamePhase::Terminated => Frame::default(),
    }
}

fn title_frame(state: &GameState) -> Frame {
    let mut frame = Frame::default();
    frame.backdrop(Backdrop::Title);
    let mid = CANVAS_WIDTH / 2.0;

    frame.text("HURDLE GAME", mid, CANVAS_HEIGHT / 6.0, BANNER_PX, WHITE);
    frame.text("Instructions:", mid, 133.0, SMALL_PX, WHITE);
    frame.text("Press SPACE BAR to jump over hurdles.", mid, 173.0, SMALL_PX, WHITE);
    frame.text("Avoid collision with hurdles to continue.", mid, 213.0, SMALL_PX, WHITE);

    frame.text("Enter Your Name:", mid, 273.0, SMALL_PX, WHITE);
    frame.rect(NAME_BOX, WHITE);
    let box_center = NAME_BOX.center();
    frame.text(state.player_name.clone(), box_center.x, box_center.y, INPUT_PX, BLACK);

    frame.button(START_BUTTON, GREEN, "START", BLACK);
    frame
}

fn game_over_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut frame = Frame::default();
    frame.backdrop(Backdrop::GameOver);
    // The world stays on screen in its last-known positions
    push_world(state, &mut frame);
    push_hud(state, settings, &mut frame);

    let mid = CANVAS_WIDTH / 2.0;
    frame.text("Game Over!", mid, 183.0, BANNER_PX, WHITE);
    frame.text(
        format!("Highest Score: {}", state.best_score),
        mid,
        253.0,
        SMALL_PX,
        WHITE,
    );
    frame.button(RETRY_BUTTON, GREEN, "Retry", BLACK);
    frame.button(QUIT_BUTTON, RED, "Quit", WHITE);
    frame
}

/// Hurdles then the runner, so the runner draws on top
fn push_world(state: &GameState, frame: &mut Frame) {
    use crate::sim::state::Hurdle;
    for hurdle in &state.hurdles {
        frame.sprite(Sprite::Hurdle, hurdle.x, Hurdle::y());
    }
    frame.sprite(Sprite::Runner, RUNNER_X, state.runner.y);
}

fn push_hud(state: &GameState, settings: &Settings, frame: &mut Frame) {
    if !settings.show_hud {
        return;
    }
    let mid = CANVAS_WIDTH / 2.0;
    frame.text(format!("Score: {}", state.score), mid, 40.0, SCORE_PX, WHITE);
    frame.text(
        format!("Player: {}", state.player_name),
        mid,
        80.0,
        SMALL_PX,
        WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Hurdle;

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_title_frame_layout() {
        let mut state = GameState::new(1);
        state.player_name = "ada".to_string();
        let frame = compose_frame(&state, &Settings::default());

        assert_eq!(frame.cmds[0], DrawCmd::Backdrop(Backdrop::Title));
        assert!(texts(&frame).contains(&"START"));
        assert!(texts(&frame).contains(&"ada"));
        // Name box and start button are both drawn
        assert!(frame.cmds.iter().any(
            |cmd| matches!(cmd, DrawCmd::Rect { rect, .. } if *rect == NAME_BOX)
        ));
        assert!(frame.cmds.iter().any(
            |cmd| matches!(cmd, DrawCmd::Rect { rect, .. } if *rect == START_BUTTON)
        ));
    }

    #[test]
    fn test_playing_frame_draws_world_and_hud() {
        let mut state = GameState::new(1);
        state.player_name = "ada".to_string();
        state.phase = GamePhase::Playing;
        state.hurdles.push(Hurdle::new(400.0, 5.0));
        state.hurdles.push(Hurdle::new(700.0, 5.0));
        state.score = 200;

        let frame = compose_frame(&state, &Settings::default());
        let hurdles = frame
            .cmds
            .iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Sprite { sprite: Sprite::Hurdle, .. }))
            .count();
        assert_eq!(hurdles, 2);
        assert!(frame.cmds.iter().any(|cmd| matches!(
            cmd,
            DrawCmd::Sprite { sprite: Sprite::Runner, x, .. } if *x == RUNNER_X
        )));
        assert!(texts(&frame).contains(&"Score: 200"));
        assert!(texts(&frame).contains(&"Player: ada"));
    }

    #[test]
    fn test_hud_toggle() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::Playing;
        let settings = Settings {
            show_hud: false,
            ..Settings::default()
        };
        let frame = compose_frame(&state, &settings);
        assert!(texts(&frame).is_empty());
    }

    #[test]
    fn test_game_over_frame_layout() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        state.best_score = 1200;
        state.hurdles.push(Hurdle::new(60.0, 5.0));

        let frame = compose_frame(&state, &Settings::default());
        assert_eq!(frame.cmds[0], DrawCmd::Backdrop(Backdrop::GameOver));
        // Frozen world still renders under the overlay
        assert!(frame.cmds.iter().any(
            |cmd| matches!(cmd, DrawCmd::Sprite { sprite: Sprite::Hurdle, .. })
        ));
        let texts = texts(&frame);
        assert!(texts.contains(&"Game Over!"));
        assert!(texts.contains(&"Highest Score: 1200"));
        assert!(texts.contains(&"Retry"));
        assert!(texts.contains(&"Quit"));
    }
}
