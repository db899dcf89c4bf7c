//! Audio command vocabulary
//!
//! The core never plays sound itself; it maps phase transitions to
//! fire-and-forget commands for the platform's audio sink.

use crate::sim::state::GameEvent;

/// Audio clips the presentation layer is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Title-screen music
    Theme,
    /// Looped gameplay track
    Backing,
    /// Game-over sting
    GameOverSting,
}

/// Fire-and-forget audio request. The core never waits on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCmd {
    Play { clip: Clip, looped: bool },
    Stop(Clip),
}

/// Audio commands for a phase transition. The game-over sting fires once,
/// on the transition, not every frame spent on the game-over screen.
pub fn commands_for(event: GameEvent) -> Vec<AudioCmd> {
    match event {
        GameEvent::TitleOpened => vec![AudioCmd::Play {
            clip: Clip::Theme,
            looped: false,
        }],
        GameEvent::SessionStarted => vec![
            AudioCmd::Stop(Clip::Theme),
            AudioCmd::Play {
                clip: Clip::Backing,
                looped: true,
            },
        ],
        GameEvent::RunEnded { .. } => vec![
            AudioCmd::Stop(Clip::Backing),
            AudioCmd::Play {
                clip: Clip::GameOverSting,
                looped: false,
            },
        ],
        GameEvent::SessionRetried => vec![
            AudioCmd::Stop(Clip::GameOverSting),
            AudioCmd::Play {
                clip: Clip::Backing,
                looped: true,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_start_swaps_theme_for_backing() {
        let cmds = commands_for(GameEvent::SessionStarted);
        assert_eq!(cmds[0], AudioCmd::Stop(Clip::Theme));
        assert_eq!(
            cmds[1],
            AudioCmd::Play {
                clip: Clip::Backing,
                looped: true
            }
        );
    }

    #[test]
    fn test_run_end_plays_sting_once() {
        let cmds = commands_for(GameEvent::RunEnded { score: 500, best: 500 });
        assert_eq!(cmds[0], AudioCmd::Stop(Clip::Backing));
        assert_eq!(
            cmds[1],
            AudioCmd::Play {
                clip: Clip::GameOverSting,
                looped: false
            }
        );
    }

    #[test]
    fn test_retry_restores_backing_track() {
        let cmds = commands_for(GameEvent::SessionRetried);
        assert!(cmds.contains(&AudioCmd::Stop(Clip::GameOverSting)));
        assert!(cmds.contains(&AudioCmd::Play {
            clip: Clip::Backing,
            looped: true
        }));
    }
}
