//! Game configuration
//!
//! Every value has a default matching the stock rules, so an absent or
//! partial config file still produces a playable game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "SPACE_INVADERS_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "space_invaders.toml";

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world: WorldConfig,
    pub rules: RulesConfig,
    pub display: DisplayConfig,
}

/// World geometry.  The origin is the screen centre, y grows upward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub player_x: f32,
    pub player_y: f32,
    /// Decorative tire tracks scattered over the ground at startup.
    pub tire_tracks: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_x: 0.0,
            player_y: -260.0,
            tire_tracks: 10,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// North bullets below this altitude skip enemy checks.
    pub enemy_floor: f32,
    /// South bullets above this altitude skip player checks.
    pub player_ceiling: f32,
    /// An enemy fires when a roll in `0..=enemy_fire_odds` comes up 0.
    pub enemy_fire_odds: u32,
    pub shoot_cooldown_ms: u64,
    pub enemy_spacing: f32,
    pub enemy_top: f32,
    pub enemy_row_gap: f32,
    pub enemy_rows: u32,
    pub spawn_bonus: i64,
    pub spawn_pause_frames: u32,
    pub game_over_frames: u32,
    pub countdown_from: u32,
    pub countdown_frames: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            enemy_floor: 60.0,
            player_ceiling: -200.0,
            enemy_fire_odds: 40,
            shoot_cooldown_ms: 1000,
            enemy_spacing: 50.0,
            enemy_top: 300.0,
            enemy_row_gap: 100.0,
            enemy_rows: 2,
            spawn_bonus: 10,
            spawn_pause_frames: 16,
            game_over_frames: 45,
            countdown_from: 3,
            countdown_frames: 12,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_ms: u64,
    pub log_file: String,
    pub asset_root: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_ms: 50,
            log_file: "space_invaders.log".to_string(),
            asset_root: "assets".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game loop cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.world.width) || !is_positive(self.world.height) {
            return Err(ConfigError::Invalid(format!(
                "world must have a positive size, got {}x{}",
                self.world.width, self.world.height
            )));
        }
        if !is_positive(self.rules.enemy_spacing) {
            return Err(ConfigError::Invalid(format!(
                "enemy_spacing must be positive, got {}",
                self.rules.enemy_spacing
            )));
        }
        if self.display.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Load from a `.toml` file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if path.extension().and_then(|e| e.to_str()) != Some("toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load from `$SPACE_INVADERS_CONFIG`, else `space_invaders.toml` if it
    /// exists, else defaults.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load_from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from_file(local);
        }
        Ok(Self::default())
    }
}

/// False for zero, negatives and NaN.
fn is_positive(value: f32) -> bool {
    value > 0.0
}
