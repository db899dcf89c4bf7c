//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the binary. A missing or
//! unreadable file falls back to defaults; save failures are logged and
//! never fatal.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Master volume (0.0 - 1.0); zero mutes all audio commands
    pub master_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Score and player-name overlay during play
    pub show_hud: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            music_volume: 0.7,
            sfx_volume: 1.0,
            show_hud: true,
        }
    }
}

impl Settings {
    const FILE_NAME: &'static str = "hurdle_run_settings.json";

    /// True when every audio command should be dropped
    pub fn muted(&self) -> bool {
        self.master_volume <= 0.0
    }

    /// Effective music gain for the platform's audio sink
    pub fn music_gain(&self) -> f32 {
        (self.master_volume * self.music_volume).clamp(0.0, 1.0)
    }

    /// Effective sound-effect gain
    pub fn sfx_gain(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::info!("using default settings ({err})");
                Self::default()
            }
        }
    }

    /// Save to the default location
    pub fn save(&self) {
        self.save_to(Path::new(Self::FILE_NAME));
    }

    pub fn save_to(&self, path: &Path) {
        match self.write(path) {
            Ok(()) => log::info!("settings saved to {}", path.display()),
            Err(err) => log::warn!("failed to save settings: {err}"),
        }
    }

    fn read(path: &Path) -> io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(io::Error::other)
    }

    fn write(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)
    }
}
