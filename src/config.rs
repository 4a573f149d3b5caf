//! Startup configuration loaded from an optional JSON file.
//!
//! Every field has a default, so a missing file or a partial file both work.
//! The tuning panel edits the live copy at runtime; the file is only read once
//! at startup.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default config file name, looked up relative to the working directory
pub const CONFIG_FILE: &str = "grapple.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial window width in pixels
    pub window_width: u32,
    /// Initial window height in pixels
    pub window_height: u32,
    /// Per-tick smoothing rate for the hook
    pub hook_smoothing: f32,
    /// Per-tick smoothing rate for the player
    pub player_smoothing: f32,
    /// Use the time-delta-corrected update instead of the reference
    /// fixed-fraction-per-tick behavior
    pub frame_rate_independent: bool,
    /// Play the grapple fire blip
    pub audio: bool,
    /// Start a puffin_http server for profiling
    pub profiling: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: WINDOW_DEFAULT_WIDTH,
            window_height: WINDOW_DEFAULT_HEIGHT,
            hook_smoothing: HOOK_SMOOTHING,
            player_smoothing: PLAYER_SMOOTHING,
            frame_rate_independent: false,
            audio: true,
            profiling: false,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}
