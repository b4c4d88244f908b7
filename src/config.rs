//! Playfield and tuning configuration
//!
//! Defaults match the constants in [`crate::consts`]; a JSON file can override
//! them for the headless demo or for tests that need a different playfield.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::*;

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Playfield width; entities past this are culled
    pub width: f32,
    /// Playfield height; entities below this are culled
    pub height: f32,
    /// Platforms per generated layout
    pub max_platforms: usize,
    /// Droplets spawned per frame while the emit input is held
    pub drops_per_frame: usize,
    /// Total candidate draws allowed per layout before giving up
    pub max_layout_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            max_platforms: MAX_PLATFORMS,
            drops_per_frame: DROPS_PER_FRAME,
            max_layout_attempts: 1000,
        }
    }
}

impl SimConfig {
    /// Load config from a JSON file
    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json).map_err(std::io::Error::other)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to a JSON file
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
